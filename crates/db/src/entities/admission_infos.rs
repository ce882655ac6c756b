//! `SeaORM` Entity for the admission_infos table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Admission details for a student, one per student.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "admission_infos")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Admitted student; unique.
    pub student_id: Uuid,
    /// Admitting school.
    pub school_id: Uuid,
    /// Unique Luhn-checked admission number.
    pub admission_number: String,
    /// Date of admission.
    pub admission_date: Date,
    /// Level the student was admitted into (e.g. "Primary 1", "JSS 2").
    pub level: String,
    /// Row creation time.
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Students,
    #[sea_orm(
        belongs_to = "super::schools::Entity",
        from = "Column::SchoolId",
        to = "super::schools::Column::Id"
    )]
    Schools,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
