//! API route definitions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::json;
use validator::ValidationErrors;

use samses_shared::AppError;

use crate::AppState;

pub mod calendar;
pub mod finance;
pub mod grading;
pub mod health;
pub mod infrastructure;
pub mod oversight;
pub mod schools;
pub mod students;
pub mod subjects;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(schools::routes())
        .merge(calendar::routes())
        .merge(students::routes())
        .merge(subjects::routes())
        .merge(grading::routes())
        .merge(finance::routes())
        .merge(oversight::routes())
        .merge(infrastructure::routes())
}

/// Standard JSON error body.
pub(crate) fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message
        })),
    )
        .into_response()
}

/// Renders a shared [`AppError`] with its canonical status and code.
pub(crate) fn app_error(error: &AppError) -> Response {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if let AppError::Validation { field, message } = error {
        return (
            status,
            Json(json!({
                "error": "validation_error",
                "field": field,
                "message": message
            })),
        )
            .into_response();
    }

    error_response(status, error.error_code(), &error.to_string())
}

/// 500 body for unexpected failures; details stay in the logs.
pub(crate) fn internal_error() -> Response {
    app_error(&AppError::Internal("An error occurred".to_string()))
}

/// 400 body scoped to a single offending field.
pub(crate) fn field_error(field: &str, message: &str) -> Response {
    app_error(&AppError::validation(field, message))
}

/// Maps `validator` payload errors onto the field-scoped 400 body.
pub(crate) fn payload_errors(errors: &ValidationErrors) -> Response {
    let detail: Vec<_> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map_or_else(|| "is invalid".to_string(), ToString::to_string);
            json!({ "field": field, "message": message })
        })
        .collect();

    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "validation_error",
            "fields": detail
        })),
    )
        .into_response()
}
