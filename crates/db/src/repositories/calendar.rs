//! Academic calendar repository: sessions, terms, and session resolution.

use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use tracing::info;
use uuid::Uuid;

use samses_core::calendar::{
    self, resolve_session, validate_scope_link, validate_session_span, validate_term,
    CandidateSession, DateSpan, SchoolProfile, TermNumber, TermWindow,
};

use crate::entities::{
    academic_sessions,
    enums::{Program, SchoolType, SessionScope, SessionStatus},
    schools, terms,
};

/// Error types for calendar operations.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// Academic session not found.
    #[error("Academic session not found: {0}")]
    SessionNotFound(Uuid),

    /// School not found.
    #[error("School not found: {0}")]
    SchoolNotFound(Uuid),

    /// A session with the same identity already exists.
    #[error("A session named {0:?} already exists for this scope and program")]
    DuplicateSession(String),

    /// A field-scoped validation rule failed.
    #[error(transparent)]
    Validation(#[from] calendar::CalendarError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating an academic session.
#[derive(Debug, Clone)]
pub struct CreateSessionInput {
    /// Which schools the session governs.
    pub scope: SessionScope,
    /// Program the session applies to.
    pub program: Program,
    /// Owning school; required iff scope is individual.
    pub school_id: Option<Uuid>,
    /// Display name, e.g. "2026/2027".
    pub session_name: String,
    /// Lifecycle status.
    pub status: SessionStatus,
    /// First day of the session.
    pub start_date: NaiveDate,
    /// Last day of the session.
    pub end_date: NaiveDate,
}

/// Input for adding a term to a session.
#[derive(Debug, Clone)]
pub struct CreateTermInput {
    /// Owning session.
    pub academic_session_id: Uuid,
    /// Term number: 1, 2, or 3.
    pub term_number: i16,
    /// First day of the term.
    pub start_date: NaiveDate,
    /// Last day of the term.
    pub end_date: NaiveDate,
}

/// The session and term currently governing a school.
#[derive(Debug, Clone)]
pub struct CurrentCalendar {
    /// The resolved session.
    pub session: academic_sessions::Model,
    /// The term containing today, if any.
    pub term: Option<terms::Model>,
}

/// Academic calendar repository.
#[derive(Debug, Clone)]
pub struct CalendarRepository {
    db: DatabaseConnection,
}

impl CalendarRepository {
    /// Creates a new calendar repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an academic session.
    ///
    /// # Errors
    ///
    /// Returns an error if the date range is inverted, the scope/school
    /// link invariant is violated, the referenced school is missing, the
    /// session identity is taken, or a database operation fails.
    pub async fn create_session(
        &self,
        input: CreateSessionInput,
    ) -> Result<academic_sessions::Model, CalendarError> {
        validate_session_span(input.start_date, input.end_date)?;
        validate_scope_link(input.scope.into(), input.school_id)?;

        if let Some(school_id) = input.school_id {
            schools::Entity::find_by_id(school_id)
                .one(&self.db)
                .await?
                .ok_or(CalendarError::SchoolNotFound(school_id))?;
        }

        let duplicate = academic_sessions::Entity::find()
            .filter(academic_sessions::Column::SessionName.eq(input.session_name.clone()))
            .filter(academic_sessions::Column::Scope.eq(input.scope))
            .filter(academic_sessions::Column::Program.eq(input.program))
            .filter(match input.school_id {
                Some(school_id) => academic_sessions::Column::SchoolId.eq(school_id),
                None => academic_sessions::Column::SchoolId.is_null(),
            })
            .one(&self.db)
            .await?;
        if duplicate.is_some() {
            return Err(CalendarError::DuplicateSession(input.session_name));
        }

        let now = Utc::now();
        let session = academic_sessions::ActiveModel {
            id: Set(Uuid::new_v4()),
            scope: Set(input.scope),
            program: Set(input.program),
            school_id: Set(input.school_id),
            session_name: Set(input.session_name.clone()),
            status: Set(input.status),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match session.insert(&self.db).await {
            Ok(session) => Ok(session),
            Err(e) => Err(match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    CalendarError::DuplicateSession(input.session_name)
                }
                _ => CalendarError::Database(e),
            }),
        }
    }

    /// Finds a session by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_session(&self, id: Uuid) -> Result<Option<academic_sessions::Model>, DbErr> {
        academic_sessions::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists sessions ordered by start date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_sessions(&self) -> Result<Vec<academic_sessions::Model>, DbErr> {
        academic_sessions::Entity::find()
            .order_by_asc(academic_sessions::Column::StartDate)
            .order_by_asc(academic_sessions::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Sets a session's lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or the update fails.
    pub async fn update_session_status(
        &self,
        id: Uuid,
        status: SessionStatus,
    ) -> Result<academic_sessions::Model, CalendarError> {
        let session = self
            .find_session(id)
            .await?
            .ok_or(CalendarError::SessionNotFound(id))?;

        let mut session: academic_sessions::ActiveModel = session.into();
        session.status = Set(status);
        session.updated_at = Set(Utc::now());
        Ok(session.update(&self.db).await?)
    }

    /// Marks one ongoing session completed.
    ///
    /// Returns `false` without touching the row when the session is not
    /// ongoing.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or the update fails.
    pub async fn complete_session(&self, id: Uuid) -> Result<bool, CalendarError> {
        let session = self
            .find_session(id)
            .await?
            .ok_or(CalendarError::SessionNotFound(id))?;

        if session.status != SessionStatus::Ongoing {
            return Ok(false);
        }

        let mut session: academic_sessions::ActiveModel = session.into();
        session.status = Set(SessionStatus::Completed);
        session.updated_at = Set(Utc::now());
        session.update(&self.db).await?;
        Ok(true)
    }

    /// Marks every ongoing session completed in one atomic UPDATE and
    /// returns the number of rows transitioned.
    ///
    /// Idempotent: a second call affects zero rows and still succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub async fn complete_all_ongoing(&self) -> Result<u64, DbErr> {
        let result = academic_sessions::Entity::update_many()
            .col_expr(
                academic_sessions::Column::Status,
                Expr::value(SessionStatus::Completed),
            )
            .col_expr(academic_sessions::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(academic_sessions::Column::Status.eq(SessionStatus::Ongoing))
            .exec(&self.db)
            .await?;

        info!(rows_affected = result.rows_affected, "Ongoing sessions marked completed");
        Ok(result.rows_affected)
    }

    /// Resolves the session currently governing a school.
    ///
    /// One query narrows the candidates to ongoing sessions that are
    /// either linked to the school or scoped to its type (or to all
    /// schools); the pure policy in `samses-core` does the ranking.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails. Absence of a
    /// governing session is `Ok(None)`, not an error.
    pub async fn resolve_for_school(
        &self,
        school: &schools::Model,
    ) -> Result<Option<academic_sessions::Model>, DbErr> {
        let type_scope = scope_for_type(school.school_type);

        let rows = academic_sessions::Entity::find()
            .filter(academic_sessions::Column::Status.eq(SessionStatus::Ongoing))
            .filter(
                Condition::any()
                    .add(academic_sessions::Column::SchoolId.eq(school.id))
                    .add(
                        academic_sessions::Column::Scope
                            .is_in([type_scope, SessionScope::All]),
                    ),
            )
            .all(&self.db)
            .await?;

        let profile = SchoolProfile {
            id: school.id,
            school_type: school.school_type.into(),
            program: school.program.into(),
        };
        let candidates: Vec<CandidateSession> = rows.iter().map(to_candidate).collect();
        let chosen = resolve_session(&profile, &candidates).map(|s| s.id);

        Ok(chosen.and_then(|id| rows.into_iter().find(|r| r.id == id)))
    }

    /// Resolves the governing session plus the term containing `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn current_calendar(
        &self,
        school: &schools::Model,
        today: NaiveDate,
    ) -> Result<Option<CurrentCalendar>, DbErr> {
        let Some(session) = self.resolve_for_school(school).await? else {
            return Ok(None);
        };

        let term_rows = self.list_terms(session.id).await?;
        let windows: Vec<TermWindow> = term_rows.iter().filter_map(to_window).collect();
        let term = calendar::current_term(&windows, today)
            .map(|w| w.number.number())
            .and_then(|n| term_rows.into_iter().find(|t| t.term_number == i16::from(n)));

        Ok(Some(CurrentCalendar { session, term }))
    }

    /// Adds a term to a session after validating the term-window rules.
    ///
    /// # Errors
    ///
    /// Returns a field-scoped validation error when the term number is
    /// invalid or taken, the dates fall outside the session, the range
    /// overlaps a sibling, or the terms end up out of order.
    pub async fn create_term(&self, input: CreateTermInput) -> Result<terms::Model, CalendarError> {
        let session = self
            .find_session(input.academic_session_id)
            .await?
            .ok_or(CalendarError::SessionNotFound(input.academic_session_id))?;

        let number = TermNumber::try_from(input.term_number).map_err(CalendarError::Validation)?;
        let window = TermWindow {
            number,
            start_date: input.start_date,
            end_date: input.end_date,
        };
        let session_span = DateSpan {
            start: session.start_date,
            end: session.end_date,
        };

        let siblings_rows = self.list_terms(session.id).await?;
        let siblings: Vec<TermWindow> = siblings_rows.iter().filter_map(to_window).collect();
        validate_term(&session_span, &window, &siblings)?;

        let term = terms::ActiveModel {
            id: Set(Uuid::new_v4()),
            academic_session_id: Set(session.id),
            term_number: Set(input.term_number),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            created_at: Set(Utc::now()),
        };

        match term.insert(&self.db).await {
            Ok(term) => Ok(term),
            Err(e) => Err(match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    CalendarError::Validation(calendar::CalendarError::DuplicateTermNumber)
                }
                _ => CalendarError::Database(e),
            }),
        }
    }

    /// Lists a session's terms ordered by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_terms(&self, session_id: Uuid) -> Result<Vec<terms::Model>, DbErr> {
        terms::Entity::find()
            .filter(terms::Column::AcademicSessionId.eq(session_id))
            .order_by_asc(terms::Column::TermNumber)
            .all(&self.db)
            .await
    }
}

/// The group scope that covers a school type.
const fn scope_for_type(school_type: SchoolType) -> SessionScope {
    match school_type {
        SchoolType::Public => SessionScope::Public,
        SchoolType::Private => SessionScope::Private,
        SchoolType::Community => SessionScope::Community,
    }
}

fn to_candidate(row: &academic_sessions::Model) -> CandidateSession {
    CandidateSession {
        id: row.id,
        scope: row.scope.into(),
        program: row.program.into(),
        school_id: row.school_id,
        status: row.status.into(),
        session_name: row.session_name.clone(),
        start_date: row.start_date,
        end_date: row.end_date,
        created_at: row.created_at,
    }
}

/// Converts a term row into a policy window; rows with out-of-range
/// numbers (impossible through the repository) are skipped.
fn to_window(row: &terms::Model) -> Option<TermWindow> {
    TermNumber::try_from(row.term_number).ok().map(|number| TermWindow {
        number,
        start_date: row.start_date,
        end_date: row.end_date,
    })
}
