//! `SeaORM` Entity for the school_subjects offerings table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A subject a school offers, selected from the ministry repository.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "school_subjects")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Offering school; unique together with the subject.
    pub school_id: Uuid,
    /// Subject from the central repository.
    pub subject_id: Uuid,
    /// Whether the offering is currently active.
    pub is_active: bool,
    /// Whether the subject is compulsory at this school.
    pub is_compulsory: bool,
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
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subjects,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schools.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subjects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
