//! `SeaORM` Entity for the schools table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{Program, SchoolType};

/// A registered school.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "schools")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// School name, unique state-wide.
    pub name: String,
    /// Short form of the name.
    pub abbreviation: Option<String>,
    /// School motto.
    pub motto: Option<String>,
    /// Date the school was established.
    pub established_date: Option<Date>,
    /// Ownership type.
    pub school_type: SchoolType,
    /// Program coverage.
    pub program: Program,
    /// Whether the school runs vocational departments.
    pub is_vocational: bool,
    /// Immutable ministry registration number.
    pub registration_number: String,
    /// Stored path of the uploaded logo, if any.
    pub logo_path: Option<String>,
    /// Local government area.
    pub lga: String,
    /// City, if stated.
    pub city: Option<String>,
    /// Ward within the LGA.
    pub ward: String,
    /// Street address.
    pub street_address: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: Option<String>,
    /// School website.
    pub website: Option<String>,
    /// Row creation time.
    pub created_at: DateTimeUtc,
    /// Last update time.
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::academic_sessions::Entity")]
    AcademicSessions,
    #[sea_orm(has_many = "super::students::Entity")]
    Students,
    #[sea_orm(has_many = "super::suspension_closures::Entity")]
    SuspensionClosures,
    #[sea_orm(has_many = "super::accreditation_statuses::Entity")]
    AccreditationStatuses,
    #[sea_orm(has_many = "super::school_subjects::Entity")]
    SchoolSubjects,
    #[sea_orm(has_many = "super::fee_structures::Entity")]
    FeeStructures,
    #[sea_orm(has_many = "super::invoices::Entity")]
    Invoices,
    #[sea_orm(has_many = "super::school_expenses::Entity")]
    SchoolExpenses,
}

impl Related<super::academic_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademicSessions.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::suspension_closures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SuspensionClosures.def()
    }
}

impl Related<super::accreditation_statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccreditationStatuses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
