//! Subject repository: the ministry-wide catalogue and per-school
//! offerings.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use crate::entities::{
    enums::{Program, SubjectCategory},
    school_subjects, schools, subjects,
};

/// Error types for subject operations.
#[derive(Debug, thiserror::Error)]
pub enum SubjectError {
    /// Subject not found in the ministry catalogue.
    #[error("Subject not found: {0}")]
    NotFound(Uuid),

    /// School not found.
    #[error("School not found: {0}")]
    SchoolNotFound(Uuid),

    /// The catalogue already holds this subject at this program level.
    #[error("Subject {0:?} already exists for this program level")]
    DuplicateSubject(String),

    /// The school already offers this subject.
    #[error("School already offers this subject")]
    AlreadyOffered,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for adding a subject to the ministry catalogue.
#[derive(Debug, Clone)]
pub struct CreateSubjectInput {
    /// Subject name.
    pub subject_name: String,
    /// Curriculum category.
    pub category: SubjectCategory,
    /// Program level the subject is taught at.
    pub program: Program,
    /// Additional details.
    pub description: String,
}

/// Subject repository for the catalogue and school offerings.
#[derive(Debug, Clone)]
pub struct SubjectRepository {
    db: DatabaseConnection,
}

impl SubjectRepository {
    /// Creates a new subject repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a subject to the ministry catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if the (name, program) pair is taken or on
    /// database failure.
    pub async fn create(&self, input: CreateSubjectInput) -> Result<subjects::Model, SubjectError> {
        let now = Utc::now();
        let subject = subjects::ActiveModel {
            id: Set(Uuid::new_v4()),
            subject_name: Set(input.subject_name.clone()),
            category: Set(input.category),
            program: Set(input.program),
            description: Set(input.description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match subject.insert(&self.db).await {
            Ok(subject) => Ok(subject),
            Err(e) => Err(match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    SubjectError::DuplicateSubject(input.subject_name)
                }
                _ => SubjectError::Database(e),
            }),
        }
    }

    /// Finds a subject by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<subjects::Model>, DbErr> {
        subjects::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists the catalogue, optionally narrowed to one program level.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, program: Option<Program>) -> Result<Vec<subjects::Model>, DbErr> {
        let mut query = subjects::Entity::find().order_by_asc(subjects::Column::SubjectName);
        if let Some(program) = program {
            query = query.filter(subjects::Column::Program.eq(program));
        }
        query.all(&self.db).await
    }

    /// Removes a subject from the catalogue; offerings cascade.
    ///
    /// # Errors
    ///
    /// Returns an error if the subject does not exist or the delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<(), SubjectError> {
        let result = subjects::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(SubjectError::NotFound(id));
        }
        Ok(())
    }

    /// Records that a school offers a catalogue subject.
    ///
    /// # Errors
    ///
    /// Returns an error if the school or subject is missing, the offering
    /// already exists, or on database failure.
    pub async fn offer(
        &self,
        school_id: Uuid,
        subject_id: Uuid,
        is_compulsory: bool,
    ) -> Result<school_subjects::Model, SubjectError> {
        schools::Entity::find_by_id(school_id)
            .one(&self.db)
            .await?
            .ok_or(SubjectError::SchoolNotFound(school_id))?;
        self.find_by_id(subject_id)
            .await?
            .ok_or(SubjectError::NotFound(subject_id))?;

        let offering = school_subjects::ActiveModel {
            id: Set(Uuid::new_v4()),
            school_id: Set(school_id),
            subject_id: Set(subject_id),
            is_active: Set(true),
            is_compulsory: Set(is_compulsory),
            created_at: Set(Utc::now()),
        };

        match offering.insert(&self.db).await {
            Ok(offering) => Ok(offering),
            Err(e) => Err(match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => SubjectError::AlreadyOffered,
                _ => SubjectError::Database(e),
            }),
        }
    }

    /// Lists a school's offerings joined with their catalogue subjects.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn offerings(
        &self,
        school_id: Uuid,
    ) -> Result<Vec<(school_subjects::Model, subjects::Model)>, DbErr> {
        school_subjects::Entity::find()
            .filter(school_subjects::Column::SchoolId.eq(school_id))
            .find_also_related(subjects::Entity)
            .all(&self.db)
            .await
            .map(|rows| {
                rows.into_iter()
                    .filter_map(|(offering, subject)| subject.map(|s| (offering, s)))
                    .collect()
            })
    }

    /// Activates or deactivates an offering.
    ///
    /// # Errors
    ///
    /// Returns an error if the offering is missing or the update fails.
    pub async fn set_offering_active(
        &self,
        offering_id: Uuid,
        is_active: bool,
    ) -> Result<school_subjects::Model, SubjectError> {
        let offering = school_subjects::Entity::find_by_id(offering_id)
            .one(&self.db)
            .await?
            .ok_or(SubjectError::NotFound(offering_id))?;

        let mut offering: school_subjects::ActiveModel = offering.into();
        offering.is_active = Set(is_active);
        Ok(offering.update(&self.db).await?)
    }
}
