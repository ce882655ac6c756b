//! `SeaORM` Entity for the laboratories inventory table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::LabType;

/// Laboratory inventory, one row per school and lab type.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "laboratories")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning school; unique together with the lab type.
    pub school_id: Uuid,
    /// Type of laboratory.
    pub lab_type: LabType,
    /// Equipment notes.
    pub equipment_notes: String,
    /// Availability notes.
    pub availability_notes: String,
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
