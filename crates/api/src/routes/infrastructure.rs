//! Infrastructure inventory routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use samses_db::entities::enums::LabType;
use samses_db::repositories::infrastructure::{InfrastructureError, InfrastructureRepository};

use crate::routes::{error_response, internal_error};
use crate::AppState;

/// Creates the infrastructure routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/schools/{school_id}/infrastructure", get(inventory))
        .route("/schools/{school_id}/infrastructure/classrooms", put(upsert_classrooms))
        .route("/schools/{school_id}/infrastructure/library", put(upsert_library))
        .route("/schools/{school_id}/infrastructure/laboratories", put(upsert_laboratory))
}

/// Request body for the classroom inventory.
#[derive(Debug, Deserialize)]
pub struct ClassroomsRequest {
    /// Number of classrooms available.
    pub number_of_classrooms: i32,
    /// Availability notes.
    #[serde(default)]
    pub availability_notes: String,
}

/// Request body for the library inventory.
#[derive(Debug, Deserialize)]
pub struct LibraryRequest {
    /// Number of books held.
    pub book_count: i32,
    /// Whether digital access is available.
    #[serde(default)]
    pub digital_access: bool,
    /// Study space capacity, if known.
    pub study_space_capacity: Option<i32>,
    /// Availability notes.
    #[serde(default)]
    pub availability_notes: String,
}

/// Request body for a laboratory inventory row.
#[derive(Debug, Deserialize)]
pub struct LaboratoryRequest {
    /// Type of laboratory.
    pub lab_type: LabType,
    /// Equipment notes.
    #[serde(default)]
    pub equipment_notes: String,
    /// Availability notes.
    #[serde(default)]
    pub availability_notes: String,
}

/// GET `/schools/{school_id}/infrastructure` - The school's inventory.
async fn inventory(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = InfrastructureRepository::new((*state.db).clone());

    match repo.inventory(school_id).await {
        Ok(inventory) => (
            StatusCode::OK,
            Json(json!({
                "classrooms": inventory.classrooms,
                "library": inventory.library,
                "laboratories": inventory.laboratories
            })),
        )
            .into_response(),
        Err(e) => infrastructure_error_response(&e),
    }
}

/// PUT `/schools/{school_id}/infrastructure/classrooms` - Create or
/// update the classroom inventory.
async fn upsert_classrooms(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Json(payload): Json<ClassroomsRequest>,
) -> impl IntoResponse {
    let repo = InfrastructureRepository::new((*state.db).clone());

    match repo
        .upsert_classrooms(school_id, payload.number_of_classrooms, &payload.availability_notes)
        .await
    {
        Ok(row) => (StatusCode::OK, Json(json!(row))).into_response(),
        Err(e) => infrastructure_error_response(&e),
    }
}

/// PUT `/schools/{school_id}/infrastructure/library` - Create or update
/// the library inventory.
async fn upsert_library(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Json(payload): Json<LibraryRequest>,
) -> impl IntoResponse {
    let repo = InfrastructureRepository::new((*state.db).clone());

    match repo
        .upsert_library(
            school_id,
            payload.book_count,
            payload.digital_access,
            payload.study_space_capacity,
            &payload.availability_notes,
        )
        .await
    {
        Ok(row) => (StatusCode::OK, Json(json!(row))).into_response(),
        Err(e) => infrastructure_error_response(&e),
    }
}

/// PUT `/schools/{school_id}/infrastructure/laboratories` - Create or
/// update one laboratory row.
async fn upsert_laboratory(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Json(payload): Json<LaboratoryRequest>,
) -> impl IntoResponse {
    let repo = InfrastructureRepository::new((*state.db).clone());

    match repo
        .upsert_laboratory(
            school_id,
            payload.lab_type,
            &payload.equipment_notes,
            &payload.availability_notes,
        )
        .await
    {
        Ok(row) => (StatusCode::OK, Json(json!(row))).into_response(),
        Err(e) => infrastructure_error_response(&e),
    }
}

/// Maps infrastructure repository errors onto JSON responses.
fn infrastructure_error_response(e: &InfrastructureError) -> axum::response::Response {
    match e {
        InfrastructureError::SchoolNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "School not found")
        }
        InfrastructureError::Database(db) => {
            error!(error = %db, "Infrastructure database error");
            internal_error()
        }
    }
}
