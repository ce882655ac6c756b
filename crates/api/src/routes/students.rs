//! Student registration, admission, and enrollment routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use samses_db::entities::enums::{EnrollmentMode, Gender};
use samses_db::repositories::student::{
    CreateAdmissionInput, CreateEnrollmentInput, CreateStudentInput, StudentError,
    StudentRepository,
};
use samses_shared::types::PageRequest;

use crate::routes::{error_response, field_error, internal_error};
use crate::AppState;

/// Creates the student routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route("/students/{student_id}", get(student_detail))
        .route("/students/{student_id}/admission", get(get_admission).post(create_admission))
        .route(
            "/students/{student_id}/enrollments",
            get(list_enrollments).post(create_enrollment),
        )
}

/// Request body for registering a student.
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Middle name.
    #[serde(default)]
    pub middle_name: String,
    /// Date of birth (YYYY-MM-DD).
    pub date_of_birth: NaiveDate,
    /// Gender: "M" or "F".
    pub gender: Gender,
    /// Country of birth.
    pub country_of_birth: String,
    /// State of origin.
    pub state_of_origin: String,
    /// Place (LGA) of birth.
    pub place_of_birth: String,
    /// Home address.
    pub address: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone_number: Option<String>,
    /// Stored path of the passport photograph, if any.
    pub passport_photo_path: Option<String>,
    /// School the student registers to.
    pub school_id: Option<Uuid>,
}

/// Request body for recording admission info.
#[derive(Debug, Deserialize)]
pub struct CreateAdmissionRequest {
    /// Admitting school.
    pub school_id: Uuid,
    /// Date of admission (YYYY-MM-DD).
    pub admission_date: NaiveDate,
    /// Level the student was admitted into.
    pub level: String,
}

/// Request body for enrolling a student into a session.
#[derive(Debug, Deserialize)]
pub struct CreateEnrollmentRequest {
    /// School the student is enrolled in.
    pub school_id: Uuid,
    /// Session the enrollment is for.
    pub academic_session_id: Uuid,
    /// Level the student is enrolled into.
    pub level: String,
    /// Stream, if the level is streamed.
    pub stream: Option<String>,
    /// How the student entered the school.
    pub mode: EnrollmentMode,
    /// Date of enrollment (YYYY-MM-DD).
    pub enrollment_date: NaiveDate,
}

/// GET `/students` - List students, paginated.
async fn list_students(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> impl IntoResponse {
    let repo = StudentRepository::new((*state.db).clone());

    match repo.list(&page).await {
        Ok(response) => (StatusCode::OK, Json(json!(response))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list students");
            internal_error()
        }
    }
}

/// POST `/students` - Register a student and assign the registration
/// number.
async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> impl IntoResponse {
    let repo = StudentRepository::new((*state.db).clone());
    let input = CreateStudentInput {
        first_name: payload.first_name,
        last_name: payload.last_name,
        middle_name: payload.middle_name,
        date_of_birth: payload.date_of_birth,
        gender: payload.gender,
        country_of_birth: payload.country_of_birth,
        state_of_origin: payload.state_of_origin,
        place_of_birth: payload.place_of_birth,
        address: payload.address,
        email: payload.email,
        phone_number: payload.phone_number,
        passport_photo_path: payload.passport_photo_path,
        school_id: payload.school_id,
    };

    match repo.create(input).await {
        Ok(student) => {
            info!(student_id = %student.id, reg_num = %student.reg_num, "Student registered");
            (StatusCode::CREATED, Json(json!(student))).into_response()
        }
        Err(e) => student_error_response(&e),
    }
}

/// GET `/students/{student_id}` - Student detail.
async fn student_detail(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = StudentRepository::new((*state.db).clone());

    match repo.find_by_id(student_id).await {
        Ok(Some(student)) => (StatusCode::OK, Json(json!(student))).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "not_found", "Student not found"),
        Err(e) => {
            error!(error = %e, "Database error loading student");
            internal_error()
        }
    }
}

/// GET `/students/{student_id}/admission` - The student's admission info.
async fn get_admission(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = StudentRepository::new((*state.db).clone());

    match repo.find_admission(student_id).await {
        Ok(Some(admission)) => (StatusCode::OK, Json(json!(admission))).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "not_found", "No admission record"),
        Err(e) => {
            error!(error = %e, "Database error loading admission info");
            internal_error()
        }
    }
}

/// POST `/students/{student_id}/admission` - Record admission info and
/// assign the admission number.
async fn create_admission(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Json(payload): Json<CreateAdmissionRequest>,
) -> impl IntoResponse {
    let repo = StudentRepository::new((*state.db).clone());
    let input = CreateAdmissionInput {
        student_id,
        school_id: payload.school_id,
        admission_date: payload.admission_date,
        level: payload.level,
    };

    match repo.create_admission(input).await {
        Ok(admission) => {
            info!(
                student_id = %student_id,
                admission_number = %admission.admission_number,
                "Admission recorded"
            );
            (StatusCode::CREATED, Json(json!(admission))).into_response()
        }
        Err(e) => student_error_response(&e),
    }
}

/// GET `/students/{student_id}/enrollments` - The student's enrollment
/// records.
async fn list_enrollments(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = StudentRepository::new((*state.db).clone());

    match repo.list_enrollments(student_id).await {
        Ok(enrollments) => {
            (StatusCode::OK, Json(json!({ "enrollments": enrollments }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list enrollments");
            internal_error()
        }
    }
}

/// POST `/students/{student_id}/enrollments` - Enroll the student for an
/// academic session.
async fn create_enrollment(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Json(payload): Json<CreateEnrollmentRequest>,
) -> impl IntoResponse {
    let repo = StudentRepository::new((*state.db).clone());
    let input = CreateEnrollmentInput {
        student_id,
        school_id: payload.school_id,
        academic_session_id: payload.academic_session_id,
        level: payload.level,
        stream: payload.stream,
        mode: payload.mode,
        enrollment_date: payload.enrollment_date,
    };

    match repo.create_enrollment(input).await {
        Ok(enrollment) => {
            info!(student_id = %student_id, "Enrollment recorded");
            (StatusCode::CREATED, Json(json!(enrollment))).into_response()
        }
        Err(e) => student_error_response(&e),
    }
}

/// Maps student repository errors onto JSON responses.
fn student_error_response(e: &StudentError) -> axum::response::Response {
    match e {
        StudentError::Validation(v) => field_error(v.field(), &v.to_string()),
        StudentError::NotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "Student not found")
        }
        StudentError::DuplicateStudent => error_response(
            StatusCode::CONFLICT,
            "duplicate_student",
            "A student with the same name, date of birth, and origin already exists",
        ),
        StudentError::AlreadyAdmitted(_) => error_response(
            StatusCode::CONFLICT,
            "already_admitted",
            "Student already has an admission record",
        ),
        StudentError::AlreadyEnrolled(_) => error_response(
            StatusCode::CONFLICT,
            "already_enrolled",
            "Student is already enrolled for this academic session",
        ),
        StudentError::IdentifierExhausted(family) => {
            error!(family, "Identifier retry budget exhausted");
            internal_error()
        }
        StudentError::Database(db) => {
            error!(error = %db, "Student database error");
            internal_error()
        }
    }
}
