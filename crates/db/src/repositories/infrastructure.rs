//! Infrastructure repository: classroom, library, and laboratory
//! inventories.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{classrooms, enums::LabType, laboratories, libraries, schools};

/// Error types for infrastructure operations.
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// School not found.
    #[error("School not found: {0}")]
    SchoolNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// A school's full infrastructure inventory.
#[derive(Debug, Clone)]
pub struct Inventory {
    /// Classroom inventory, if recorded.
    pub classrooms: Option<classrooms::Model>,
    /// Library inventory, if recorded.
    pub library: Option<libraries::Model>,
    /// Laboratories, one row per lab type.
    pub laboratories: Vec<laboratories::Model>,
}

/// Infrastructure repository.
#[derive(Debug, Clone)]
pub struct InfrastructureRepository {
    db: DatabaseConnection,
}

impl InfrastructureRepository {
    /// Creates a new infrastructure repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a school's classroom inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the school is missing or on database failure.
    pub async fn upsert_classrooms(
        &self,
        school_id: Uuid,
        number_of_classrooms: i32,
        availability_notes: &str,
    ) -> Result<classrooms::Model, InfrastructureError> {
        self.require_school(school_id).await?;

        let existing = classrooms::Entity::find()
            .filter(classrooms::Column::SchoolId.eq(school_id))
            .one(&self.db)
            .await?;

        let now = Utc::now();
        if let Some(existing) = existing {
            let mut row: classrooms::ActiveModel = existing.into();
            row.number_of_classrooms = Set(number_of_classrooms);
            row.availability_notes = Set(availability_notes.to_string());
            row.updated_at = Set(now);
            return Ok(row.update(&self.db).await?);
        }

        let row = classrooms::ActiveModel {
            id: Set(Uuid::new_v4()),
            school_id: Set(school_id),
            number_of_classrooms: Set(number_of_classrooms),
            availability_notes: Set(availability_notes.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        Ok(row.insert(&self.db).await?)
    }

    /// Creates or updates a school's library inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the school is missing or on database failure.
    pub async fn upsert_library(
        &self,
        school_id: Uuid,
        book_count: i32,
        digital_access: bool,
        study_space_capacity: Option<i32>,
        availability_notes: &str,
    ) -> Result<libraries::Model, InfrastructureError> {
        self.require_school(school_id).await?;

        let existing = libraries::Entity::find()
            .filter(libraries::Column::SchoolId.eq(school_id))
            .one(&self.db)
            .await?;

        let now = Utc::now();
        if let Some(existing) = existing {
            let mut row: libraries::ActiveModel = existing.into();
            row.book_count = Set(book_count);
            row.digital_access = Set(digital_access);
            row.study_space_capacity = Set(study_space_capacity);
            row.availability_notes = Set(availability_notes.to_string());
            row.updated_at = Set(now);
            return Ok(row.update(&self.db).await?);
        }

        let row = libraries::ActiveModel {
            id: Set(Uuid::new_v4()),
            school_id: Set(school_id),
            book_count: Set(book_count),
            digital_access: Set(digital_access),
            study_space_capacity: Set(study_space_capacity),
            availability_notes: Set(availability_notes.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        Ok(row.insert(&self.db).await?)
    }

    /// Creates or updates one of a school's laboratories.
    ///
    /// # Errors
    ///
    /// Returns an error if the school is missing or on database failure.
    pub async fn upsert_laboratory(
        &self,
        school_id: Uuid,
        lab_type: LabType,
        equipment_notes: &str,
        availability_notes: &str,
    ) -> Result<laboratories::Model, InfrastructureError> {
        self.require_school(school_id).await?;

        let existing = laboratories::Entity::find()
            .filter(laboratories::Column::SchoolId.eq(school_id))
            .filter(laboratories::Column::LabType.eq(lab_type))
            .one(&self.db)
            .await?;

        let now = Utc::now();
        if let Some(existing) = existing {
            let mut row: laboratories::ActiveModel = existing.into();
            row.equipment_notes = Set(equipment_notes.to_string());
            row.availability_notes = Set(availability_notes.to_string());
            row.updated_at = Set(now);
            return Ok(row.update(&self.db).await?);
        }

        let row = laboratories::ActiveModel {
            id: Set(Uuid::new_v4()),
            school_id: Set(school_id),
            lab_type: Set(lab_type),
            equipment_notes: Set(equipment_notes.to_string()),
            availability_notes: Set(availability_notes.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        Ok(row.insert(&self.db).await?)
    }

    /// Loads a school's full infrastructure inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the school is missing or a query fails.
    pub async fn inventory(&self, school_id: Uuid) -> Result<Inventory, InfrastructureError> {
        self.require_school(school_id).await?;

        let classrooms = classrooms::Entity::find()
            .filter(classrooms::Column::SchoolId.eq(school_id))
            .one(&self.db)
            .await?;
        let library = libraries::Entity::find()
            .filter(libraries::Column::SchoolId.eq(school_id))
            .one(&self.db)
            .await?;
        let laboratories = laboratories::Entity::find()
            .filter(laboratories::Column::SchoolId.eq(school_id))
            .order_by_asc(laboratories::Column::LabType)
            .all(&self.db)
            .await?;

        Ok(Inventory {
            classrooms,
            library,
            laboratories,
        })
    }

    async fn require_school(&self, school_id: Uuid) -> Result<(), InfrastructureError> {
        schools::Entity::find_by_id(school_id)
            .one(&self.db)
            .await?
            .ok_or(InfrastructureError::SchoolNotFound(school_id))?;
        Ok(())
    }
}
