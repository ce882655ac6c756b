//! `SeaORM` Entity for the suspension_closures table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::SuspensionKind;

/// A suspension or closure order against a school.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "suspension_closures")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// School the order applies to.
    pub school_id: Uuid,
    /// Part of a statewide order.
    pub is_statewide: bool,
    /// Suspension or closure.
    pub kind: SuspensionKind,
    /// Stated reason for the order.
    pub reason: String,
    /// First day the order takes effect.
    pub suspended_from: Date,
    /// Last day of the order; null for open-ended orders.
    pub suspended_to: Option<Date>,
    /// Open-ended order with no planned end.
    pub is_indefinite: bool,
    /// The order has been lifted.
    pub is_dropped: bool,
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
