//! Accreditation and suspension oversight routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use samses_db::entities::enums::{AccreditationState, SuspensionKind};
use samses_db::repositories::oversight::{
    CreateSuspensionInput, OversightError, OversightRepository, RecordAccreditationInput,
};

use crate::routes::{error_response, internal_error};
use crate::AppState;

/// Creates the oversight routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/schools/{school_id}/accreditations",
            get(current_accreditation).post(record_accreditation),
        )
        .route(
            "/schools/{school_id}/suspensions",
            get(list_suspensions).post(create_suspension),
        )
        .route("/suspensions/{suspension_id}/drop", post(drop_suspension))
}

/// Request body for recording an accreditation decision.
#[derive(Debug, Deserialize)]
pub struct RecordAccreditationRequest {
    /// Decided state.
    pub state: AccreditationState,
    /// First day the accreditation is valid (YYYY-MM-DD).
    pub valid_from: Option<NaiveDate>,
    /// Last day the accreditation is valid (YYYY-MM-DD).
    pub valid_to: Option<NaiveDate>,
}

/// Request body for recording a suspension or closure order.
#[derive(Debug, Deserialize)]
pub struct CreateSuspensionRequest {
    /// Part of a statewide order.
    #[serde(default)]
    pub is_statewide: bool,
    /// Suspension or closure.
    pub kind: SuspensionKind,
    /// Stated reason for the order.
    pub reason: String,
    /// First day the order takes effect (YYYY-MM-DD).
    pub suspended_from: NaiveDate,
    /// Last day of the order; ignored for indefinite orders.
    pub suspended_to: Option<NaiveDate>,
    /// Open-ended order with no planned end.
    #[serde(default)]
    pub is_indefinite: bool,
}

/// GET `/schools/{school_id}/accreditations` - The school's current
/// accreditation with its expiry flag.
async fn current_accreditation(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = OversightRepository::new((*state.db).clone());

    match repo
        .current_accreditation(school_id, Utc::now().date_naive())
        .await
    {
        Ok(Some(current)) => (
            StatusCode::OK,
            Json(json!({ "accreditation": current.record, "expired": current.expired })),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "not_found", "No accreditation record"),
        Err(e) => {
            error!(error = %e, "Database error loading accreditation");
            internal_error()
        }
    }
}

/// POST `/schools/{school_id}/accreditations` - Record an accreditation
/// decision; a transition to accredited issues a fresh number.
async fn record_accreditation(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Json(payload): Json<RecordAccreditationRequest>,
) -> impl IntoResponse {
    let repo = OversightRepository::new((*state.db).clone());
    let input = RecordAccreditationInput {
        school_id,
        state: payload.state,
        valid_from: payload.valid_from,
        valid_to: payload.valid_to,
    };

    match repo.record_accreditation(input).await {
        Ok(record) => {
            info!(
                school_id = %school_id,
                accreditation_number = record.accreditation_number.as_deref().unwrap_or("-"),
                "Accreditation recorded"
            );
            (StatusCode::CREATED, Json(json!(record))).into_response()
        }
        Err(e) => oversight_error_response(&e),
    }
}

/// GET `/schools/{school_id}/suspensions` - Every suspension or closure
/// order for the school.
async fn list_suspensions(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = OversightRepository::new((*state.db).clone());

    match repo.list_suspensions(school_id).await {
        Ok(suspensions) => {
            (StatusCode::OK, Json(json!({ "suspensions": suspensions }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list suspensions");
            internal_error()
        }
    }
}

/// POST `/schools/{school_id}/suspensions` - Record a suspension or
/// closure order; indefinite orders are stored with no end date.
async fn create_suspension(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Json(payload): Json<CreateSuspensionRequest>,
) -> impl IntoResponse {
    let repo = OversightRepository::new((*state.db).clone());
    let input = CreateSuspensionInput {
        school_id,
        is_statewide: payload.is_statewide,
        kind: payload.kind,
        reason: payload.reason,
        suspended_from: payload.suspended_from,
        suspended_to: payload.suspended_to,
        is_indefinite: payload.is_indefinite,
    };

    match repo.create_suspension(input).await {
        Ok(record) => {
            info!(school_id = %school_id, "Suspension recorded");
            (StatusCode::CREATED, Json(json!(record))).into_response()
        }
        Err(e) => oversight_error_response(&e),
    }
}

/// POST `/suspensions/{suspension_id}/drop` - Lift an order.
async fn drop_suspension(
    State(state): State<AppState>,
    Path(suspension_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = OversightRepository::new((*state.db).clone());

    match repo.drop_suspension(suspension_id).await {
        Ok(record) => (StatusCode::OK, Json(json!(record))).into_response(),
        Err(e) => oversight_error_response(&e),
    }
}

/// Maps oversight repository errors onto JSON responses.
fn oversight_error_response(e: &OversightError) -> axum::response::Response {
    match e {
        OversightError::SchoolNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "School not found")
        }
        OversightError::SuspensionNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "Suspension record not found")
        }
        OversightError::IdentifierExhausted => {
            error!("Accreditation number retry budget exhausted");
            internal_error()
        }
        OversightError::Database(db) => {
            error!(error = %db, "Oversight database error");
            internal_error()
        }
    }
}
