//! School management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

use samses_db::entities::enums::{Program, SchoolType};
use samses_db::repositories::school::{
    CreateSchoolInput, SchoolError, SchoolRepository, UpdateSchoolInput,
};
use samses_db::{CalendarRepository, OversightRepository};
use samses_shared::types::PageRequest;

use crate::routes::{error_response, field_error, internal_error, payload_errors};
use crate::AppState;

/// Creates the school routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/schools", get(list_schools).post(create_school))
        .route(
            "/schools/{school_id}",
            get(school_detail).put(update_school).delete(delete_school),
        )
}

/// Request body for registering a school.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSchoolRequest {
    /// School name.
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: String,
    /// Short form of the name.
    pub abbreviation: Option<String>,
    /// School motto.
    pub motto: Option<String>,
    /// Date the school was established (YYYY-MM-DD).
    pub established_date: Option<NaiveDate>,
    /// Ownership type.
    pub school_type: SchoolType,
    /// Program coverage.
    pub program: Program,
    /// Whether the school runs vocational departments.
    #[serde(default)]
    pub is_vocational: bool,
    /// Stored path of the uploaded logo, if any.
    pub logo_path: Option<String>,
    /// Local government area.
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub lga: String,
    /// City, if stated.
    pub city: Option<String>,
    /// Ward within the LGA.
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub ward: String,
    /// Street address.
    #[validate(length(min = 1, message = "is required"))]
    pub street_address: String,
    /// Contact phone number.
    #[validate(length(min = 7, max = 15, message = "must be 7-15 characters"))]
    pub phone: String,
    /// Contact email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    /// School website.
    pub website: Option<String>,
}

/// Request body for updating a school. The registration number is
/// immutable and not accepted here.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSchoolRequest {
    /// School name.
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: String,
    /// Short form of the name.
    pub abbreviation: Option<String>,
    /// School motto.
    pub motto: Option<String>,
    /// Date the school was established (YYYY-MM-DD).
    pub established_date: Option<NaiveDate>,
    /// Whether the school runs vocational departments.
    #[serde(default)]
    pub is_vocational: bool,
    /// Stored path of the uploaded logo, if any.
    pub logo_path: Option<String>,
    /// Local government area.
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub lga: String,
    /// City, if stated.
    pub city: Option<String>,
    /// Ward within the LGA.
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub ward: String,
    /// Street address.
    #[validate(length(min = 1, message = "is required"))]
    pub street_address: String,
    /// Contact phone number.
    #[validate(length(min = 7, max = 15, message = "must be 7-15 characters"))]
    pub phone: String,
    /// Contact email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    /// School website.
    pub website: Option<String>,
}

/// GET `/schools` - List schools, paginated and ordered by name.
async fn list_schools(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> impl IntoResponse {
    let repo = SchoolRepository::new((*state.db).clone());

    match repo.list(&page).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list schools");
            internal_error()
        }
    }
}

/// POST `/schools` - Register a school and assign its registration number.
async fn create_school(
    State(state): State<AppState>,
    Json(payload): Json<CreateSchoolRequest>,
) -> impl IntoResponse {
    if let Err(errors) = payload.validate() {
        return payload_errors(&errors);
    }

    let repo = SchoolRepository::new((*state.db).clone());
    let input = CreateSchoolInput {
        name: payload.name,
        abbreviation: payload.abbreviation,
        motto: payload.motto,
        established_date: payload.established_date,
        school_type: payload.school_type,
        program: payload.program,
        is_vocational: payload.is_vocational,
        logo_path: payload.logo_path,
        lga: payload.lga,
        city: payload.city,
        ward: payload.ward,
        street_address: payload.street_address,
        phone: payload.phone,
        email: payload.email,
        website: payload.website,
    };

    match repo.create(input).await {
        Ok(school) => {
            info!(
                school_id = %school.id,
                registration_number = %school.registration_number,
                "School registered"
            );
            (StatusCode::CREATED, Json(json!(school))).into_response()
        }
        Err(SchoolError::NameTaken(name)) => error_response(
            StatusCode::CONFLICT,
            "name_taken",
            &format!("A school named {name:?} is already registered"),
        ),
        Err(e) => {
            error!(error = %e, "Failed to register school");
            internal_error()
        }
    }
}

/// GET `/schools/{school_id}` - School detail with its derived status and
/// the session/term currently governing it.
async fn school_detail(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = SchoolRepository::new((*state.db).clone());

    let school = match repo.find_by_id(school_id).await {
        Ok(Some(school)) => school,
        Ok(None) => {
            return error_response(StatusCode::NOT_FOUND, "not_found", "School not found");
        }
        Err(e) => {
            error!(error = %e, "Database error loading school");
            return internal_error();
        }
    };

    let calendar = CalendarRepository::new((*state.db).clone());
    let current = match calendar
        .current_calendar(&school, Utc::now().date_naive())
        .await
    {
        Ok(current) => current,
        Err(e) => {
            error!(error = %e, "Database error resolving session");
            return internal_error();
        }
    };

    let oversight = OversightRepository::new((*state.db).clone());
    let status = match oversight.school_status(school_id).await {
        Ok(status) => status,
        Err(e) => {
            error!(error = %e, "Database error deriving school status");
            return internal_error();
        }
    };

    // Absent session resolves to null: callers disable enrollment actions.
    let (session, term) = current.map_or((None, None), |c| (Some(c.session), c.term));

    (
        StatusCode::OK,
        Json(json!({
            "school": school,
            "status": status,
            "current_session": session,
            "current_term": term
        })),
    )
        .into_response()
}

/// PUT `/schools/{school_id}` - Update a school's editable fields.
async fn update_school(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Json(payload): Json<UpdateSchoolRequest>,
) -> impl IntoResponse {
    if let Err(errors) = payload.validate() {
        return payload_errors(&errors);
    }

    let repo = SchoolRepository::new((*state.db).clone());
    let input = UpdateSchoolInput {
        name: payload.name,
        abbreviation: payload.abbreviation,
        motto: payload.motto,
        established_date: payload.established_date,
        is_vocational: payload.is_vocational,
        logo_path: payload.logo_path,
        lga: payload.lga,
        city: payload.city,
        ward: payload.ward,
        street_address: payload.street_address,
        phone: payload.phone,
        email: payload.email,
        website: payload.website,
    };

    match repo.update(school_id, input).await {
        Ok(update) => {
            // Best-effort cleanup of the superseded logo file; failure is
            // logged and never aborts the save.
            if let Some(old_path) = update.replaced_logo_path {
                if let Err(e) = tokio::fs::remove_file(&old_path).await {
                    warn!(path = %old_path, error = %e, "Failed to remove old logo file");
                }
            }
            (StatusCode::OK, Json(json!(update.school))).into_response()
        }
        Err(SchoolError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "School not found")
        }
        Err(SchoolError::NameTaken(_)) => field_error("name", "is already registered"),
        Err(e) => {
            error!(error = %e, "Failed to update school");
            internal_error()
        }
    }
}

/// DELETE `/schools/{school_id}` - Delete a school and its dependents.
async fn delete_school(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = SchoolRepository::new((*state.db).clone());

    match repo.delete(school_id).await {
        Ok(()) => {
            info!(school_id = %school_id, "School deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(SchoolError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "School not found")
        }
        Err(e) => {
            error!(error = %e, "Failed to delete school");
            internal_error()
        }
    }
}
