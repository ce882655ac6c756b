//! Grading repository: scales, boundaries, and score lookup.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use samses_core::grading::{grade_for_score, validate_band, GradeBand, GradingError as BandError};

use crate::entities::{grade_boundaries, grading_scales};

/// Error types for grading operations.
#[derive(Debug, thiserror::Error)]
pub enum GradingError {
    /// Grading scale not found.
    #[error("Grading scale not found: {0}")]
    ScaleNotFound(Uuid),

    /// A scale with this name already exists.
    #[error("A grading scale named {0:?} already exists")]
    DuplicateScale(String),

    /// A field-scoped boundary validation rule failed.
    #[error(transparent)]
    Validation(#[from] BandError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Grading repository for scales and boundaries.
#[derive(Debug, Clone)]
pub struct GradingRepository {
    db: DatabaseConnection,
}

impl GradingRepository {
    /// Creates a new grading repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a grading scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken or on database failure.
    pub async fn create_scale(
        &self,
        scale_name: &str,
        description: &str,
    ) -> Result<grading_scales::Model, GradingError> {
        let now = Utc::now();
        let scale = grading_scales::ActiveModel {
            id: Set(Uuid::new_v4()),
            scale_name: Set(scale_name.to_string()),
            description: Set(description.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match scale.insert(&self.db).await {
            Ok(scale) => Ok(scale),
            Err(e) => Err(match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    GradingError::DuplicateScale(scale_name.to_string())
                }
                _ => GradingError::Database(e),
            }),
        }
    }

    /// Lists all grading scales.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_scales(&self) -> Result<Vec<grading_scales::Model>, DbErr> {
        grading_scales::Entity::find()
            .order_by_asc(grading_scales::Column::ScaleName)
            .all(&self.db)
            .await
    }

    /// Adds a boundary to a scale after validating it against the
    /// existing boundaries.
    ///
    /// # Errors
    ///
    /// Returns a field-scoped validation error for inverted or
    /// out-of-range bounds, duplicate grades, and overlapping ranges.
    pub async fn add_boundary(
        &self,
        scale_id: Uuid,
        grade: &str,
        lower_bound: u16,
        upper_bound: u16,
    ) -> Result<grade_boundaries::Model, GradingError> {
        grading_scales::Entity::find_by_id(scale_id)
            .one(&self.db)
            .await?
            .ok_or(GradingError::ScaleNotFound(scale_id))?;

        let existing = self.boundaries(scale_id).await?;
        let bands: Vec<GradeBand> = existing.iter().map(to_band).collect();
        let band = GradeBand {
            grade: grade.to_string(),
            lower_bound,
            upper_bound,
        };
        validate_band(&band, &bands)?;

        let boundary = grade_boundaries::ActiveModel {
            id: Set(Uuid::new_v4()),
            grading_scale_id: Set(scale_id),
            grade: Set(grade.to_string()),
            lower_bound: Set(to_i16(lower_bound)),
            upper_bound: Set(to_i16(upper_bound)),
            created_at: Set(Utc::now()),
        };

        match boundary.insert(&self.db).await {
            Ok(boundary) => Ok(boundary),
            Err(e) => Err(match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    GradingError::Validation(BandError::DuplicateGrade {
                        grade: grade.to_string(),
                    })
                }
                _ => GradingError::Database(e),
            }),
        }
    }

    /// Lists a scale's boundaries ordered by grade.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn boundaries(&self, scale_id: Uuid) -> Result<Vec<grade_boundaries::Model>, DbErr> {
        grade_boundaries::Entity::find()
            .filter(grade_boundaries::Column::GradingScaleId.eq(scale_id))
            .order_by_asc(grade_boundaries::Column::Grade)
            .all(&self.db)
            .await
    }

    /// Looks up the grade label for a score on a scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is missing or the query fails.
    pub async fn grade_for(
        &self,
        scale_id: Uuid,
        score: u16,
    ) -> Result<Option<String>, GradingError> {
        grading_scales::Entity::find_by_id(scale_id)
            .one(&self.db)
            .await?
            .ok_or(GradingError::ScaleNotFound(scale_id))?;

        let rows = self.boundaries(scale_id).await?;
        let bands: Vec<GradeBand> = rows.iter().map(to_band).collect();
        Ok(grade_for_score(&bands, score).map(|b| b.grade.clone()))
    }
}

fn to_band(row: &grade_boundaries::Model) -> GradeBand {
    GradeBand {
        grade: row.grade.clone(),
        lower_bound: row.lower_bound.unsigned_abs(),
        upper_bound: row.upper_bound.unsigned_abs(),
    }
}

/// Bounds are validated to 0-100 before storage, well within i16.
#[allow(clippy::cast_possible_wrap)]
const fn to_i16(value: u16) -> i16 {
    value as i16
}
