//! `SeaORM` Entity for the accreditation_statuses table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::AccreditationState;

/// An accreditation record for a school.
///
/// A fresh accreditation number is issued on every transition to
/// accredited; older records keep theirs.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "accreditation_statuses")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// School under review.
    pub school_id: Uuid,
    /// Ministry accreditation number, set when accredited.
    pub accreditation_number: Option<String>,
    /// Current state.
    pub state: AccreditationState,
    /// First day the accreditation is valid.
    pub valid_from: Option<Date>,
    /// Last day the accreditation is valid.
    pub valid_to: Option<Date>,
    /// Row creation time.
    pub created_at: DateTimeUtc,
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
