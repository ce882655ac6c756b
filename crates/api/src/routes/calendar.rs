//! Academic session and term routes, including the batch
//! session-completion action.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{header::REFERER, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    routing::{get, patch, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use samses_db::entities::enums::{Program, SessionScope, SessionStatus};
use samses_db::repositories::calendar::{
    CalendarError, CalendarRepository, CreateSessionInput, CreateTermInput,
};

use crate::routes::{error_response, field_error, internal_error};
use crate::AppState;

/// Creates the calendar routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/academic-sessions", get(list_sessions).post(create_session))
        .route("/academic-sessions/complete-ongoing", post(complete_all_ongoing))
        .route("/academic-sessions/{session_id}/complete", post(complete_session))
        .route("/academic-sessions/{session_id}/status", patch(update_status))
        .route(
            "/academic-sessions/{session_id}/terms",
            get(list_terms).post(create_term),
        )
}

/// Request body for creating an academic session.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Which schools the session governs.
    pub scope: SessionScope,
    /// Program the session applies to.
    pub program: Program,
    /// Owning school; required iff scope is individual.
    pub school_id: Option<Uuid>,
    /// Display name, e.g. "2026/2027".
    pub session_name: String,
    /// Lifecycle status; defaults to upcoming.
    pub status: Option<SessionStatus>,
    /// Start date (YYYY-MM-DD).
    pub start_date: NaiveDate,
    /// End date (YYYY-MM-DD).
    pub end_date: NaiveDate,
}

/// Request body for updating a session's status.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// New status: "upcoming", "ongoing", or "completed".
    pub status: SessionStatus,
}

/// Request body for adding a term.
#[derive(Debug, Deserialize)]
pub struct CreateTermRequest {
    /// Term number: 1, 2, or 3.
    pub term_number: i16,
    /// Start date (YYYY-MM-DD).
    pub start_date: NaiveDate,
    /// End date (YYYY-MM-DD).
    pub end_date: NaiveDate,
}

/// GET `/academic-sessions` - List sessions ordered by start date.
async fn list_sessions(State(state): State<AppState>) -> impl IntoResponse {
    let repo = CalendarRepository::new((*state.db).clone());

    match repo.list_sessions().await {
        Ok(sessions) => (StatusCode::OK, Json(json!({ "academic_sessions": sessions }))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list academic sessions");
            internal_error()
        }
    }
}

/// POST `/academic-sessions` - Create an academic session.
async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionRequest>,
) -> impl IntoResponse {
    let repo = CalendarRepository::new((*state.db).clone());
    let input = CreateSessionInput {
        scope: payload.scope,
        program: payload.program,
        school_id: payload.school_id,
        session_name: payload.session_name,
        status: payload.status.unwrap_or(SessionStatus::Upcoming),
        start_date: payload.start_date,
        end_date: payload.end_date,
    };

    match repo.create_session(input).await {
        Ok(session) => {
            info!(session_id = %session.id, "Academic session created");
            (StatusCode::CREATED, Json(json!(session))).into_response()
        }
        Err(e) => calendar_error_response(&e),
    }
}

/// POST `/academic-sessions/complete-ongoing` - Mark every ongoing session
/// completed in one atomic statement, then redirect back to the referring
/// page (or the session list when there is none).
///
/// Idempotent: invoking it with nothing ongoing changes zero rows and
/// still redirects with success.
async fn complete_all_ongoing(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let repo = CalendarRepository::new((*state.db).clone());

    match repo.complete_all_ongoing().await {
        Ok(rows_affected) => {
            info!(rows_affected, "All ongoing academic sessions marked completed");
            let target = headers
                .get(REFERER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("/api/v1/academic-sessions");
            Redirect::to(target).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to complete ongoing sessions");
            internal_error()
        }
    }
}

/// POST `/academic-sessions/{session_id}/complete` - Complete one ongoing
/// session.
async fn complete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = CalendarRepository::new((*state.db).clone());

    match repo.complete_session(session_id).await {
        Ok(true) => {
            info!(session_id = %session_id, "Academic session completed");
            (StatusCode::OK, Json(json!({ "completed": true }))).into_response()
        }
        Ok(false) => error_response(
            StatusCode::CONFLICT,
            "not_ongoing",
            "Only ongoing sessions can be completed",
        ),
        Err(CalendarError::SessionNotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "Academic session not found")
        }
        Err(e) => {
            error!(error = %e, "Failed to complete session");
            internal_error()
        }
    }
}

/// PATCH `/academic-sessions/{session_id}/status` - Set a session's
/// lifecycle status.
async fn update_status(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> impl IntoResponse {
    let repo = CalendarRepository::new((*state.db).clone());

    match repo.update_session_status(session_id, payload.status).await {
        Ok(session) => (StatusCode::OK, Json(json!(session))).into_response(),
        Err(CalendarError::SessionNotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "Academic session not found")
        }
        Err(e) => {
            error!(error = %e, "Failed to update session status");
            internal_error()
        }
    }
}

/// GET `/academic-sessions/{session_id}/terms` - List a session's terms.
async fn list_terms(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = CalendarRepository::new((*state.db).clone());

    match repo.find_session(session_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return error_response(StatusCode::NOT_FOUND, "not_found", "Academic session not found");
        }
        Err(e) => {
            error!(error = %e, "Database error loading session");
            return internal_error();
        }
    }

    match repo.list_terms(session_id).await {
        Ok(terms) => (StatusCode::OK, Json(json!({ "terms": terms }))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list terms");
            internal_error()
        }
    }
}

/// POST `/academic-sessions/{session_id}/terms` - Add a term after
/// validating the term-window rules.
async fn create_term(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<CreateTermRequest>,
) -> impl IntoResponse {
    let repo = CalendarRepository::new((*state.db).clone());
    let input = CreateTermInput {
        academic_session_id: session_id,
        term_number: payload.term_number,
        start_date: payload.start_date,
        end_date: payload.end_date,
    };

    match repo.create_term(input).await {
        Ok(term) => {
            info!(session_id = %session_id, term_number = term.term_number, "Term created");
            (StatusCode::CREATED, Json(json!(term))).into_response()
        }
        Err(e) => calendar_error_response(&e),
    }
}

/// Maps calendar repository errors onto field-scoped JSON responses.
fn calendar_error_response(e: &CalendarError) -> axum::response::Response {
    match e {
        CalendarError::Validation(v) => field_error(v.field(), &v.to_string()),
        CalendarError::SessionNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "Academic session not found")
        }
        CalendarError::SchoolNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "School not found")
        }
        CalendarError::DuplicateSession(name) => error_response(
            StatusCode::CONFLICT,
            "duplicate_session",
            &format!("A session named {name:?} already exists for this scope and program"),
        ),
        CalendarError::Database(db) => {
            error!(error = %db, "Calendar database error");
            internal_error()
        }
    }
}
