//! Grading scale and boundary routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use samses_db::repositories::grading::{GradingError, GradingRepository};

use crate::routes::{error_response, field_error, internal_error};
use crate::AppState;

/// Creates the grading routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/grading-scales", get(list_scales).post(create_scale))
        .route(
            "/grading-scales/{scale_id}/boundaries",
            get(list_boundaries).post(add_boundary),
        )
        .route("/grading-scales/{scale_id}/grade", get(grade_for_score))
}

/// Request body for creating a grading scale.
#[derive(Debug, Deserialize)]
pub struct CreateScaleRequest {
    /// Scale name.
    pub scale_name: String,
    /// Scale description.
    #[serde(default)]
    pub description: String,
}

/// Request body for adding a grade boundary.
#[derive(Debug, Deserialize)]
pub struct AddBoundaryRequest {
    /// Grade label (e.g. "A").
    pub grade: String,
    /// Minimum score for the grade.
    pub lower_bound: u16,
    /// Maximum score for the grade.
    pub upper_bound: u16,
}

/// Query parameters for the score lookup.
#[derive(Debug, Deserialize)]
pub struct GradeQuery {
    /// Score to grade.
    pub score: u16,
}

/// GET `/grading-scales` - List grading scales.
async fn list_scales(State(state): State<AppState>) -> impl IntoResponse {
    let repo = GradingRepository::new((*state.db).clone());

    match repo.list_scales().await {
        Ok(scales) => (StatusCode::OK, Json(json!({ "grading_scales": scales }))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list grading scales");
            internal_error()
        }
    }
}

/// POST `/grading-scales` - Create a grading scale.
async fn create_scale(
    State(state): State<AppState>,
    Json(payload): Json<CreateScaleRequest>,
) -> impl IntoResponse {
    let repo = GradingRepository::new((*state.db).clone());

    match repo.create_scale(&payload.scale_name, &payload.description).await {
        Ok(scale) => {
            info!(scale_id = %scale.id, "Grading scale created");
            (StatusCode::CREATED, Json(json!(scale))).into_response()
        }
        Err(e) => grading_error_response(&e),
    }
}

/// GET `/grading-scales/{scale_id}/boundaries` - A scale's boundaries.
async fn list_boundaries(
    State(state): State<AppState>,
    Path(scale_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = GradingRepository::new((*state.db).clone());

    match repo.boundaries(scale_id).await {
        Ok(boundaries) => {
            (StatusCode::OK, Json(json!({ "boundaries": boundaries }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list boundaries");
            internal_error()
        }
    }
}

/// POST `/grading-scales/{scale_id}/boundaries` - Add a boundary.
async fn add_boundary(
    State(state): State<AppState>,
    Path(scale_id): Path<Uuid>,
    Json(payload): Json<AddBoundaryRequest>,
) -> impl IntoResponse {
    let repo = GradingRepository::new((*state.db).clone());

    match repo
        .add_boundary(scale_id, &payload.grade, payload.lower_bound, payload.upper_bound)
        .await
    {
        Ok(boundary) => {
            info!(scale_id = %scale_id, grade = %boundary.grade, "Grade boundary added");
            (StatusCode::CREATED, Json(json!(boundary))).into_response()
        }
        Err(e) => grading_error_response(&e),
    }
}

/// GET `/grading-scales/{scale_id}/grade?score=N` - Grade label for a
/// score.
async fn grade_for_score(
    State(state): State<AppState>,
    Path(scale_id): Path<Uuid>,
    Query(query): Query<GradeQuery>,
) -> impl IntoResponse {
    let repo = GradingRepository::new((*state.db).clone());

    match repo.grade_for(scale_id, query.score).await {
        Ok(grade) => (
            StatusCode::OK,
            Json(json!({ "score": query.score, "grade": grade })),
        )
            .into_response(),
        Err(e) => grading_error_response(&e),
    }
}

/// Maps grading repository errors onto JSON responses.
fn grading_error_response(e: &GradingError) -> axum::response::Response {
    match e {
        GradingError::Validation(v) => field_error(v.field(), &v.to_string()),
        GradingError::ScaleNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "Grading scale not found")
        }
        GradingError::DuplicateScale(name) => error_response(
            StatusCode::CONFLICT,
            "duplicate_scale",
            &format!("A grading scale named {name:?} already exists"),
        ),
        GradingError::Database(db) => {
            error!(error = %db, "Grading database error");
            internal_error()
        }
    }
}
