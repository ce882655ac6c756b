//! `SeaORM` Entity for the fee_structures table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::FeeType;

/// A fee a school charges at a class level. Amounts are kobo.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "fee_structures")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Charging school.
    pub school_id: Uuid,
    /// Class level this fee applies to (e.g. "JSS 1").
    pub level: String,
    /// Type of fee; unique together with school and level.
    pub fee_type: FeeType,
    /// Optional fees only bill when selected on an invoice.
    pub is_optional: bool,
    /// Amount in kobo.
    pub amount_kobo: i64,
    /// Additional details about the fee.
    pub description: String,
    /// Row creation time.
    pub created_at: DateTimeUtc,
    /// Last update time.
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schools::Entity",
        from = "Column::SchoolId",
        to = "super::schools::Column::Id"
    )]
    Schools,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schools.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
