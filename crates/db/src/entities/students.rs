//! `SeaORM` Entity for the students table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::Gender;

/// A registered student.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Middle name, may be empty.
    pub middle_name: String,
    /// Immutable 11-digit registration number.
    pub reg_num: String,
    /// Date of birth.
    pub date_of_birth: Date,
    /// Gender.
    pub gender: Gender,
    /// Country of birth.
    pub country_of_birth: String,
    /// State of origin.
    pub state_of_origin: String,
    /// Place (LGA) of birth.
    pub place_of_birth: String,
    /// Home address.
    pub address: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone_number: Option<String>,
    /// Stored path of the passport photograph, if any.
    pub passport_photo_path: Option<String>,
    /// School the student is registered to; kept when the school goes.
    pub school_id: Option<Uuid>,
    /// Whether the student is currently active.
    pub is_active: bool,
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
    #[sea_orm(has_many = "super::enrollment_records::Entity")]
    EnrollmentRecords,
    #[sea_orm(has_many = "super::invoices::Entity")]
    Invoices,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schools.def()
    }
}

impl Related<super::enrollment_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnrollmentRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Full name in "last first middle" order.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.last_name, self.first_name, self.middle_name)
            .trim_end()
            .to_string()
    }
}
