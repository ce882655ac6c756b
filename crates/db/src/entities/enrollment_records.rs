//! `SeaORM` Entity for the enrollment_records table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::EnrollmentMode;

/// A student's enrollment for one academic session.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "enrollment_records")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Enrolled student.
    pub student_id: Uuid,
    /// School the student is enrolled in.
    pub school_id: Uuid,
    /// Session the enrollment is for; unique together with the student.
    pub academic_session_id: Uuid,
    /// Level the student is enrolled into (e.g. "JSS 2").
    pub level: String,
    /// Stream, if the level is streamed (e.g. "Science").
    pub stream: Option<String>,
    /// How the student entered the school.
    pub mode: EnrollmentMode,
    /// Date of enrollment.
    pub enrollment_date: Date,
    /// Whether this enrollment is currently active.
    pub is_active: bool,
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
    #[sea_orm(
        belongs_to = "super::academic_sessions::Entity",
        from = "Column::AcademicSessionId",
        to = "super::academic_sessions::Column::Id"
    )]
    AcademicSessions,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::academic_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademicSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
