//! School repository for database operations.
//!
//! School creation assigns the registration number from the atomic
//! per-type counter inside the create transaction, so concurrent creates
//! of the same school type can never hand out the same sequence.

use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use samses_core::identity;
use samses_shared::types::{PageRequest, PageResponse};

use crate::entities::{
    enums::{Program, SchoolType},
    registration_sequences, schools,
};

/// Error types for school operations.
#[derive(Debug, thiserror::Error)]
pub enum SchoolError {
    /// A school with this name is already registered.
    #[error("A school named {0:?} is already registered")]
    NameTaken(String),

    /// School not found.
    #[error("School not found: {0}")]
    NotFound(Uuid),

    /// The registration counter row for a school type is missing.
    ///
    /// The initial migration seeds one row per type; hitting this means the
    /// counter table was tampered with and is a deployment fault, not a
    /// user error.
    #[error("Registration sequence missing for school type {0}")]
    SequenceMissing(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for registering a school.
#[derive(Debug, Clone)]
pub struct CreateSchoolInput {
    /// School name, unique state-wide.
    pub name: String,
    /// Short form of the name.
    pub abbreviation: Option<String>,
    /// School motto.
    pub motto: Option<String>,
    /// Date the school was established.
    pub established_date: Option<NaiveDate>,
    /// Ownership type.
    pub school_type: SchoolType,
    /// Program coverage.
    pub program: Program,
    /// Whether the school runs vocational departments.
    pub is_vocational: bool,
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
}

/// Input for updating a school's editable fields.
///
/// The registration number is immutable and deliberately absent here.
#[derive(Debug, Clone)]
pub struct UpdateSchoolInput {
    /// School name.
    pub name: String,
    /// Short form of the name.
    pub abbreviation: Option<String>,
    /// School motto.
    pub motto: Option<String>,
    /// Date the school was established.
    pub established_date: Option<NaiveDate>,
    /// Whether the school runs vocational departments.
    pub is_vocational: bool,
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
}

/// Result of a school update.
#[derive(Debug, Clone)]
pub struct SchoolUpdate {
    /// The updated school.
    pub school: schools::Model,
    /// Logo path that was replaced, for best-effort file cleanup.
    pub replaced_logo_path: Option<String>,
}

/// School repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SchoolRepository {
    db: DatabaseConnection,
}

impl SchoolRepository {
    /// Creates a new school repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a school and assigns its registration number.
    ///
    /// The per-type counter is incremented with a single UPDATE inside the
    /// transaction; the row lock serializes concurrent creates of the same
    /// type. The unique index on `registration_number` remains as a
    /// backstop and a violation there surfaces as a database error.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken, the counter row is missing,
    /// or a database operation fails.
    pub async fn create(&self, input: CreateSchoolInput) -> Result<schools::Model, SchoolError> {
        let type_key = samses_core::calendar::SchoolType::from(input.school_type).as_str();

        let txn = self.db.begin().await?;

        let updated = registration_sequences::Entity::update_many()
            .col_expr(
                registration_sequences::Column::LastValue,
                Expr::col(registration_sequences::Column::LastValue).add(1),
            )
            .filter(registration_sequences::Column::SchoolType.eq(type_key))
            .exec(&txn)
            .await?;
        if updated.rows_affected == 0 {
            return Err(SchoolError::SequenceMissing(type_key.to_string()));
        }

        let counter = registration_sequences::Entity::find_by_id(type_key.to_string())
            .one(&txn)
            .await?
            .ok_or_else(|| SchoolError::SequenceMissing(type_key.to_string()))?;
        let registration_number = identity::format_school_registration(
            input.school_type.into(),
            counter.last_value.unsigned_abs(),
        );

        let now = Utc::now();
        let school = schools::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name.clone()),
            abbreviation: Set(input.abbreviation),
            motto: Set(input.motto),
            established_date: Set(input.established_date),
            school_type: Set(input.school_type),
            program: Set(input.program),
            is_vocational: Set(input.is_vocational),
            registration_number: Set(registration_number),
            logo_path: Set(input.logo_path),
            lga: Set(input.lga),
            city: Set(input.city),
            ward: Set(input.ward),
            street_address: Set(input.street_address),
            phone: Set(input.phone),
            email: Set(input.email),
            website: Set(input.website),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let school = match school.insert(&txn).await {
            Ok(school) => school,
            Err(e) => {
                // The only other unique column is the registration number
                // itself; a clash there means the counter was tampered
                // with and must surface, not be retried.
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
                    && self.name_exists(&input.name).await?
                {
                    return Err(SchoolError::NameTaken(input.name));
                }
                return Err(SchoolError::Database(e));
            }
        };

        txn.commit().await?;
        debug!(
            school_id = %school.id,
            registration_number = %school.registration_number,
            "Assigned registration number"
        );
        Ok(school)
    }

    async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = schools::Entity::find()
            .filter(schools::Column::Name.eq(name))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    /// Finds a school by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<schools::Model>, DbErr> {
        schools::Entity::find_by_id(id).one(&self.db).await
    }

    /// Finds a school by its registration number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_registration_number(
        &self,
        registration_number: &str,
    ) -> Result<Option<schools::Model>, DbErr> {
        schools::Entity::find()
            .filter(schools::Column::RegistrationNumber.eq(registration_number))
            .one(&self.db)
            .await
    }

    /// Lists schools ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        page: &PageRequest,
    ) -> Result<PageResponse<schools::Model>, DbErr> {
        let total = schools::Entity::find().count(&self.db).await?;
        let data = schools::Entity::find()
            .order_by_asc(schools::Column::Name)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok(PageResponse::new(data, page.page, page.per_page, total))
    }

    /// Updates a school's editable fields, leaving the registration number
    /// untouched.
    ///
    /// Returns the replaced logo path (if the logo changed) so the caller
    /// can remove the superseded file best-effort.
    ///
    /// # Errors
    ///
    /// Returns an error if the school does not exist, the new name is
    /// taken, or a database operation fails.
    pub async fn update(&self, id: Uuid, input: UpdateSchoolInput) -> Result<SchoolUpdate, SchoolError> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or(SchoolError::NotFound(id))?;

        let replaced_logo_path = match (&existing.logo_path, &input.logo_path) {
            (Some(old), new) if new.as_deref() != Some(old.as_str()) => Some(old.clone()),
            _ => None,
        };

        let mut school: schools::ActiveModel = existing.into();
        school.name = Set(input.name.clone());
        school.abbreviation = Set(input.abbreviation);
        school.motto = Set(input.motto);
        school.established_date = Set(input.established_date);
        school.is_vocational = Set(input.is_vocational);
        school.logo_path = Set(input.logo_path);
        school.lga = Set(input.lga);
        school.city = Set(input.city);
        school.ward = Set(input.ward);
        school.street_address = Set(input.street_address);
        school.phone = Set(input.phone);
        school.email = Set(input.email);
        school.website = Set(input.website);
        school.updated_at = Set(Utc::now());

        let school = match school.update(&self.db).await {
            Ok(school) => school,
            Err(e) => {
                return Err(match e.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => SchoolError::NameTaken(input.name),
                    _ => SchoolError::Database(e),
                });
            }
        };

        Ok(SchoolUpdate {
            school,
            replaced_logo_path,
        })
    }

    /// Deletes a school; dependents cascade at the database level.
    ///
    /// # Errors
    ///
    /// Returns an error if the school does not exist or the delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<(), SchoolError> {
        let result = schools::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(SchoolError::NotFound(id));
        }
        Ok(())
    }
}
