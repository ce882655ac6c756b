//! Oversight repository: accreditation records, suspensions, and the
//! derived school status string.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use samses_core::calendar::SuspensionWindow;
use samses_core::identity;

use crate::entities::{
    accreditation_statuses,
    enums::{AccreditationState, SuspensionKind},
    schools, suspension_closures,
};
use crate::repositories::MAX_ID_ATTEMPTS;

/// Error types for oversight operations.
#[derive(Debug, thiserror::Error)]
pub enum OversightError {
    /// School not found.
    #[error("School not found: {0}")]
    SchoolNotFound(Uuid),

    /// Suspension or closure record not found.
    #[error("Suspension record not found: {0}")]
    SuspensionNotFound(Uuid),

    /// Could not find an unused identifier within the retry budget.
    #[error("Could not allocate a unique accreditation number after repeated attempts")]
    IdentifierExhausted,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for recording an accreditation decision.
#[derive(Debug, Clone)]
pub struct RecordAccreditationInput {
    /// School under review.
    pub school_id: Uuid,
    /// Decided state.
    pub state: AccreditationState,
    /// First day the accreditation is valid.
    pub valid_from: Option<NaiveDate>,
    /// Last day the accreditation is valid.
    pub valid_to: Option<NaiveDate>,
}

/// Input for recording a suspension or closure order.
#[derive(Debug, Clone)]
pub struct CreateSuspensionInput {
    /// School the order applies to.
    pub school_id: Uuid,
    /// Part of a statewide order.
    pub is_statewide: bool,
    /// Suspension or closure.
    pub kind: SuspensionKind,
    /// Stated reason for the order.
    pub reason: String,
    /// First day the order takes effect.
    pub suspended_from: NaiveDate,
    /// Last day of the order; ignored for indefinite orders.
    pub suspended_to: Option<NaiveDate>,
    /// Open-ended order with no planned end.
    pub is_indefinite: bool,
}

/// An accreditation record together with its expiry flag.
#[derive(Debug, Clone)]
pub struct CurrentAccreditation {
    /// The most recent accreditation record.
    pub record: accreditation_statuses::Model,
    /// True when `valid_to` lies in the past.
    pub expired: bool,
}

/// Oversight repository for accreditation and suspension records.
#[derive(Debug, Clone)]
pub struct OversightRepository {
    db: DatabaseConnection,
}

impl OversightRepository {
    /// Creates a new oversight repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an accreditation decision for a school.
    ///
    /// Every transition to accredited issues a fresh accreditation number;
    /// the awaiting state clears the validity window.
    ///
    /// # Errors
    ///
    /// Returns an error if the school is missing or on database failure.
    pub async fn record_accreditation(
        &self,
        input: RecordAccreditationInput,
    ) -> Result<accreditation_statuses::Model, OversightError> {
        let school = schools::Entity::find_by_id(input.school_id)
            .one(&self.db)
            .await?
            .ok_or(OversightError::SchoolNotFound(input.school_id))?;

        let (valid_from, valid_to) = if input.state == AccreditationState::Awaiting {
            (None, None)
        } else {
            (input.valid_from, input.valid_to)
        };

        if input.state == AccreditationState::Accredited {
            return self.insert_accredited(&school, valid_from, valid_to).await;
        }

        let record = accreditation_statuses::ActiveModel {
            id: Set(Uuid::new_v4()),
            school_id: Set(input.school_id),
            accreditation_number: Set(None),
            state: Set(input.state),
            valid_from: Set(valid_from),
            valid_to: Set(valid_to),
            created_at: Set(Utc::now()),
        };
        Ok(record.insert(&self.db).await?)
    }

    /// The most recent accreditation record for a school.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn latest_accreditation(
        &self,
        school_id: Uuid,
    ) -> Result<Option<accreditation_statuses::Model>, DbErr> {
        accreditation_statuses::Entity::find()
            .filter(accreditation_statuses::Column::SchoolId.eq(school_id))
            .order_by_desc(accreditation_statuses::Column::CreatedAt)
            .one(&self.db)
            .await
    }

    /// The current accreditation with its expiry flag, if a record exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn current_accreditation(
        &self,
        school_id: Uuid,
        today: NaiveDate,
    ) -> Result<Option<CurrentAccreditation>, DbErr> {
        let record = self.latest_accreditation(school_id).await?;
        Ok(record.map(|record| {
            let expired = record.valid_to.is_some_and(|valid_to| valid_to < today);
            CurrentAccreditation { record, expired }
        }))
    }

    /// Records a suspension or closure order.
    ///
    /// Indefinite orders are normalized to carry no end date before they
    /// are persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the school is missing or on database failure.
    pub async fn create_suspension(
        &self,
        input: CreateSuspensionInput,
    ) -> Result<suspension_closures::Model, OversightError> {
        schools::Entity::find_by_id(input.school_id)
            .one(&self.db)
            .await?
            .ok_or(OversightError::SchoolNotFound(input.school_id))?;

        let window = SuspensionWindow {
            suspended_from: input.suspended_from,
            suspended_to: input.suspended_to,
            is_indefinite: input.is_indefinite,
            is_dropped: false,
        }
        .normalized();

        let now = Utc::now();
        let record = suspension_closures::ActiveModel {
            id: Set(Uuid::new_v4()),
            school_id: Set(input.school_id),
            is_statewide: Set(input.is_statewide),
            kind: Set(input.kind),
            reason: Set(input.reason),
            suspended_from: Set(window.suspended_from),
            suspended_to: Set(window.suspended_to),
            is_indefinite: Set(window.is_indefinite),
            is_dropped: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };
        Ok(record.insert(&self.db).await?)
    }

    /// Lifts a suspension or closure order.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is missing or the update fails.
    pub async fn drop_suspension(
        &self,
        id: Uuid,
    ) -> Result<suspension_closures::Model, OversightError> {
        let record = suspension_closures::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(OversightError::SuspensionNotFound(id))?;

        let mut record: suspension_closures::ActiveModel = record.into();
        record.is_dropped = Set(true);
        record.updated_at = Set(Utc::now());
        Ok(record.update(&self.db).await?)
    }

    /// The most recent undropped suspension or closure for a school.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn latest_active_suspension(
        &self,
        school_id: Uuid,
    ) -> Result<Option<suspension_closures::Model>, DbErr> {
        suspension_closures::Entity::find()
            .filter(suspension_closures::Column::SchoolId.eq(school_id))
            .filter(suspension_closures::Column::IsDropped.eq(false))
            .order_by_desc(suspension_closures::Column::CreatedAt)
            .one(&self.db)
            .await
    }

    /// Lists every suspension or closure order for a school.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_suspensions(
        &self,
        school_id: Uuid,
    ) -> Result<Vec<suspension_closures::Model>, DbErr> {
        suspension_closures::Entity::find()
            .filter(suspension_closures::Column::SchoolId.eq(school_id))
            .order_by_desc(suspension_closures::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Derives the display status of a school from its latest
    /// accreditation and latest undropped suspension.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn school_status(&self, school_id: Uuid) -> Result<String, DbErr> {
        let accreditation = self.latest_accreditation(school_id).await?;
        let suspension = self.latest_active_suspension(school_id).await?;

        Ok(derive_status(
            accreditation.map(|a| a.state),
            suspension.map(|s| s.kind),
        ))
    }

    async fn insert_accredited(
        &self,
        school: &schools::Model,
        valid_from: Option<NaiveDate>,
        valid_to: Option<NaiveDate>,
    ) -> Result<accreditation_statuses::Model, OversightError> {
        let today = Utc::now().date_naive();

        for _ in 0..MAX_ID_ATTEMPTS {
            let number = identity::accreditation_number(today, school.school_type.into());
            let record = accreditation_statuses::ActiveModel {
                id: Set(Uuid::new_v4()),
                school_id: Set(school.id),
                accreditation_number: Set(Some(number.clone())),
                state: Set(AccreditationState::Accredited),
                valid_from: Set(valid_from),
                valid_to: Set(valid_to),
                created_at: Set(Utc::now()),
            };

            match record.insert(&self.db).await {
                Ok(record) => return Ok(record),
                Err(e) => match e.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        let clash = accreditation_statuses::Entity::find()
                            .filter(
                                accreditation_statuses::Column::AccreditationNumber
                                    .eq(number.clone()),
                            )
                            .count(&self.db)
                            .await?;
                        if clash > 0 {
                            continue;
                        }
                        return Err(OversightError::Database(e));
                    }
                    _ => return Err(OversightError::Database(e)),
                },
            }
        }

        Err(OversightError::IdentifierExhausted)
    }
}

/// Status-string policy, ported faithfully from the ministry's rules:
/// accredited and unsuspended reads "Active"; awaiting accreditation
/// surfaces a pending suspension alongside it; otherwise the
/// accreditation state wins over the suspension kind, and a school with
/// neither reads "-".
fn derive_status(
    accreditation: Option<AccreditationState>,
    suspension: Option<SuspensionKind>,
) -> String {
    match (accreditation, suspension) {
        (Some(AccreditationState::Accredited), None) => "Active".to_string(),
        (Some(AccreditationState::Awaiting), Some(kind)) => {
            format!("{} & awaiting accreditation", kind.label())
        }
        (Some(AccreditationState::Awaiting), None) => "awaiting accreditation".to_string(),
        (Some(state), _) => state_label(state).to_string(),
        (None, Some(kind)) => kind.label().to_string(),
        (None, None) => "-".to_string(),
    }
}

const fn state_label(state: AccreditationState) -> &'static str {
    match state {
        AccreditationState::Awaiting => "awaiting accreditation",
        AccreditationState::Accredited => "accredited",
        AccreditationState::NotAccredited => "not accredited",
        AccreditationState::Cancelled => "accreditation cancelled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accredited_without_suspension_is_active() {
        assert_eq!(derive_status(Some(AccreditationState::Accredited), None), "Active");
    }

    #[test]
    fn test_awaiting_with_suspension_combines_both() {
        assert_eq!(
            derive_status(Some(AccreditationState::Awaiting), Some(SuspensionKind::Closure)),
            "Closure & awaiting accreditation"
        );
    }

    #[test]
    fn test_accredited_with_suspension_reads_accredited() {
        assert_eq!(
            derive_status(Some(AccreditationState::Accredited), Some(SuspensionKind::Suspension)),
            "accredited"
        );
    }

    #[test]
    fn test_suspension_only() {
        assert_eq!(derive_status(None, Some(SuspensionKind::Suspension)), "Suspension");
    }

    #[test]
    fn test_no_records_is_dash() {
        assert_eq!(derive_status(None, None), "-");
    }
}
