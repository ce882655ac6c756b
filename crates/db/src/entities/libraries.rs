//! `SeaORM` Entity for the libraries inventory table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Library inventory, one row per school.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "libraries")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning school; unique.
    pub school_id: Uuid,
    /// Number of books held.
    pub book_count: i32,
    /// Whether digital access is available.
    pub digital_access: bool,
    /// Study space capacity, if known.
    pub study_space_capacity: Option<i32>,
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
