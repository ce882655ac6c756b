//! `SeaORM` Entity for the academic_sessions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{Program, SessionScope, SessionStatus};

/// An academic session scoped to a class of schools or to one school.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "academic_sessions")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Which schools the session governs.
    pub scope: SessionScope,
    /// Program the session applies to.
    pub program: Program,
    /// Owning school; present iff scope is individual.
    pub school_id: Option<Uuid>,
    /// Display name, e.g. "2026/2027".
    pub session_name: String,
    /// Lifecycle status.
    pub status: SessionStatus,
    /// First day of the session.
    pub start_date: Date,
    /// Last day of the session.
    pub end_date: Date,
    /// Row creation time; the resolver's tie-break.
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
    #[sea_orm(has_many = "super::terms::Entity")]
    Terms,
    #[sea_orm(has_many = "super::enrollment_records::Entity")]
    EnrollmentRecords,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schools.def()
    }
}

impl Related<super::terms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Terms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
