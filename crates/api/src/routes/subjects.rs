//! Ministry subject catalogue and school offering routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use samses_db::entities::enums::{Program, SubjectCategory};
use samses_db::repositories::subject::{CreateSubjectInput, SubjectError, SubjectRepository};

use crate::routes::{error_response, internal_error};
use crate::AppState;

/// Creates the subject routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/subjects", get(list_subjects).post(create_subject))
        .route("/subjects/{subject_id}", delete(delete_subject))
        .route(
            "/schools/{school_id}/subjects",
            get(list_offerings).post(offer_subject),
        )
        .route("/school-subjects/{offering_id}", patch(set_offering_active))
}

/// Query parameters for listing the catalogue.
#[derive(Debug, Deserialize)]
pub struct ListSubjectsQuery {
    /// Narrow the list to one program level.
    pub program: Option<Program>,
}

/// Request body for adding a catalogue subject.
#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    /// Subject name.
    pub subject_name: String,
    /// Curriculum category.
    pub category: SubjectCategory,
    /// Program level the subject is taught at.
    pub program: Program,
    /// Additional details.
    #[serde(default)]
    pub description: String,
}

/// Request body for recording a school offering.
#[derive(Debug, Deserialize)]
pub struct OfferSubjectRequest {
    /// Subject from the central repository.
    pub subject_id: Uuid,
    /// Whether the subject is compulsory at this school.
    #[serde(default = "default_true")]
    pub is_compulsory: bool,
}

/// Request body for toggling an offering.
#[derive(Debug, Deserialize)]
pub struct SetOfferingActiveRequest {
    /// Whether the offering is active.
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// GET `/subjects` - List the ministry catalogue.
async fn list_subjects(
    State(state): State<AppState>,
    Query(query): Query<ListSubjectsQuery>,
) -> impl IntoResponse {
    let repo = SubjectRepository::new((*state.db).clone());

    match repo.list(query.program).await {
        Ok(subjects) => (StatusCode::OK, Json(json!({ "subjects": subjects }))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list subjects");
            internal_error()
        }
    }
}

/// POST `/subjects` - Add a subject to the catalogue.
async fn create_subject(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubjectRequest>,
) -> impl IntoResponse {
    let repo = SubjectRepository::new((*state.db).clone());
    let input = CreateSubjectInput {
        subject_name: payload.subject_name,
        category: payload.category,
        program: payload.program,
        description: payload.description,
    };

    match repo.create(input).await {
        Ok(subject) => {
            info!(subject_id = %subject.id, "Catalogue subject created");
            (StatusCode::CREATED, Json(json!(subject))).into_response()
        }
        Err(e) => subject_error_response(&e),
    }
}

/// DELETE `/subjects/{subject_id}` - Remove a catalogue subject.
async fn delete_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = SubjectRepository::new((*state.db).clone());

    match repo.delete(subject_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => subject_error_response(&e),
    }
}

/// GET `/schools/{school_id}/subjects` - A school's offerings with their
/// catalogue subjects.
async fn list_offerings(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = SubjectRepository::new((*state.db).clone());

    match repo.offerings(school_id).await {
        Ok(rows) => {
            let offerings: Vec<_> = rows
                .into_iter()
                .map(|(offering, subject)| json!({ "offering": offering, "subject": subject }))
                .collect();
            (StatusCode::OK, Json(json!({ "offerings": offerings }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list offerings");
            internal_error()
        }
    }
}

/// POST `/schools/{school_id}/subjects` - Record that a school offers a
/// catalogue subject.
async fn offer_subject(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Json(payload): Json<OfferSubjectRequest>,
) -> impl IntoResponse {
    let repo = SubjectRepository::new((*state.db).clone());

    match repo.offer(school_id, payload.subject_id, payload.is_compulsory).await {
        Ok(offering) => {
            info!(school_id = %school_id, subject_id = %payload.subject_id, "Subject offered");
            (StatusCode::CREATED, Json(json!(offering))).into_response()
        }
        Err(e) => subject_error_response(&e),
    }
}

/// PATCH `/school-subjects/{offering_id}` - Activate or deactivate an
/// offering.
async fn set_offering_active(
    State(state): State<AppState>,
    Path(offering_id): Path<Uuid>,
    Json(payload): Json<SetOfferingActiveRequest>,
) -> impl IntoResponse {
    let repo = SubjectRepository::new((*state.db).clone());

    match repo.set_offering_active(offering_id, payload.is_active).await {
        Ok(offering) => (StatusCode::OK, Json(json!(offering))).into_response(),
        Err(e) => subject_error_response(&e),
    }
}

/// Maps subject repository errors onto JSON responses.
fn subject_error_response(e: &SubjectError) -> axum::response::Response {
    match e {
        SubjectError::NotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "Subject not found")
        }
        SubjectError::SchoolNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "School not found")
        }
        SubjectError::DuplicateSubject(name) => error_response(
            StatusCode::CONFLICT,
            "duplicate_subject",
            &format!("Subject {name:?} already exists for this program level"),
        ),
        SubjectError::AlreadyOffered => error_response(
            StatusCode::CONFLICT,
            "already_offered",
            "School already offers this subject",
        ),
        SubjectError::Database(db) => {
            error!(error = %db, "Subject database error");
            internal_error()
        }
    }
}
