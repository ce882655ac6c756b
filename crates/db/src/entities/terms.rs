//! `SeaORM` Entity for the terms table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A term (1-3) within an academic session.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "terms")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning session.
    pub academic_session_id: Uuid,
    /// Term number: 1, 2, or 3; unique per session.
    pub term_number: i16,
    /// First day of the term.
    pub start_date: Date,
    /// Last day of the term.
    pub end_date: Date,
    /// Row creation time.
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::academic_sessions::Entity",
        from = "Column::AcademicSessionId",
        to = "super::academic_sessions::Column::Id"
    )]
    AcademicSessions,
}

impl Related<super::academic_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademicSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
