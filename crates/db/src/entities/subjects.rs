//! `SeaORM` Entity for the ministry-wide subjects table.
//!
//! Schools never create subjects directly; they select offerings from this
//! central repository.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{Program, SubjectCategory};

/// A subject in the ministry's central repository.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Subject name (e.g. "Mathematics").
    pub subject_name: String,
    /// Curriculum category.
    pub category: SubjectCategory,
    /// Program level the subject is taught at.
    pub program: Program,
    /// Additional details.
    pub description: String,
    /// Row creation time.
    pub created_at: DateTimeUtc,
    /// Last update time.
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::school_subjects::Entity")]
    SchoolSubjects,
}

impl Related<super::school_subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolSubjects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
