//! Finance routes: fee structures, invoices, payments, and expenses.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use samses_db::entities::enums::{FeeType, PaymentMethod};
use samses_db::repositories::finance::{
    CreateFeeInput, CreateInvoiceInput, CreatePaymentInput, FinanceError, FinanceRepository,
};
use samses_shared::types::Money;

use crate::routes::{error_response, field_error, internal_error};
use crate::AppState;

/// Creates the finance routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/schools/{school_id}/fees", get(list_fees).post(create_fee))
        .route("/invoices", post(create_invoice))
        .route("/invoices/{invoice_id}", get(invoice_detail))
        .route("/invoices/{invoice_id}/recalculate", post(recalculate_invoice))
        .route("/invoices/{invoice_id}/payments", get(list_payments).post(record_payment))
        .route(
            "/schools/{school_id}/expense-categories",
            post(create_category),
        )
        .route(
            "/schools/{school_id}/expenses",
            get(list_expenses).post(create_expense),
        )
}

/// Query parameters for listing fees.
#[derive(Debug, Deserialize)]
pub struct ListFeesQuery {
    /// Narrow to one class level.
    pub level: Option<String>,
}

/// Request body for configuring a fee. Amounts are kobo.
#[derive(Debug, Deserialize)]
pub struct CreateFeeRequest {
    /// Class level this fee applies to.
    pub level: String,
    /// Type of fee.
    pub fee_type: FeeType,
    /// Optional fees only bill when selected on an invoice.
    #[serde(default)]
    pub is_optional: bool,
    /// Amount in kobo.
    pub amount_kobo: i64,
    /// Additional details about the fee.
    #[serde(default)]
    pub description: String,
}

/// Request body for generating an invoice.
#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    /// Billing school.
    pub school_id: Uuid,
    /// Billed student.
    pub student_id: Uuid,
    /// Level the invoice bills fees for.
    pub level: String,
    /// Date payment is due (YYYY-MM-DD).
    pub due_date: NaiveDate,
    /// Optional fees selected by the parent or guardian.
    #[serde(default)]
    pub selected_optional_fees: Vec<Uuid>,
}

/// Request body for recording a payment. Amounts are kobo.
#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    /// Amount paid in kobo.
    pub amount_kobo: i64,
    /// Payment method.
    pub method: PaymentMethod,
}

/// Request body for creating an expense category.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    /// Category name.
    pub name: String,
    /// Category description.
    #[serde(default)]
    pub description: String,
}

/// Request body for recording an expense. Amounts are kobo.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    /// Expense category.
    pub category_id: Uuid,
    /// Details of the expense.
    pub description: String,
    /// Amount spent in kobo.
    pub amount_kobo: i64,
    /// Date the expense was incurred (YYYY-MM-DD).
    pub date_incurred: NaiveDate,
}

/// GET `/schools/{school_id}/fees` - The school's fee structure.
async fn list_fees(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Query(query): Query<ListFeesQuery>,
) -> impl IntoResponse {
    let repo = FinanceRepository::new((*state.db).clone());

    match repo.list_fees(school_id, query.level.as_deref()).await {
        Ok(fees) => (StatusCode::OK, Json(json!({ "fees": fees }))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list fees");
            internal_error()
        }
    }
}

/// POST `/schools/{school_id}/fees` - Configure a fee.
async fn create_fee(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Json(payload): Json<CreateFeeRequest>,
) -> impl IntoResponse {
    let repo = FinanceRepository::new((*state.db).clone());
    let input = CreateFeeInput {
        school_id,
        level: payload.level,
        fee_type: payload.fee_type,
        is_optional: payload.is_optional,
        amount: Money::from_kobo(payload.amount_kobo),
        description: payload.description,
    };

    match repo.create_fee(input).await {
        Ok(fee) => {
            info!(school_id = %school_id, fee_id = %fee.id, "Fee configured");
            (StatusCode::CREATED, Json(json!(fee))).into_response()
        }
        Err(e) => finance_error_response(&e),
    }
}

/// POST `/invoices` - Generate an invoice from the school's fee lines.
async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<CreateInvoiceRequest>,
) -> impl IntoResponse {
    let repo = FinanceRepository::new((*state.db).clone());
    let input = CreateInvoiceInput {
        school_id: payload.school_id,
        student_id: payload.student_id,
        level: payload.level,
        due_date: payload.due_date,
        selected_optional_fees: payload.selected_optional_fees,
    };

    match repo.create_invoice(input).await {
        Ok(invoice) => {
            info!(invoice_id = %invoice.invoice_id, "Invoice generated");
            (StatusCode::CREATED, Json(json!(invoice))).into_response()
        }
        Err(e) => finance_error_response(&e),
    }
}

/// GET `/invoices/{invoice_id}` - Invoice detail with the amount paid so
/// far.
async fn invoice_detail(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> impl IntoResponse {
    let repo = FinanceRepository::new((*state.db).clone());

    let invoice = match repo.find_invoice(&invoice_id).await {
        Ok(Some(invoice)) => invoice,
        Ok(None) => {
            return error_response(StatusCode::NOT_FOUND, "not_found", "Invoice not found");
        }
        Err(e) => {
            error!(error = %e, "Database error loading invoice");
            return internal_error();
        }
    };

    match repo.total_paid(&invoice_id).await {
        Ok(paid) => (
            StatusCode::OK,
            Json(json!({ "invoice": invoice, "total_paid_kobo": paid.kobo() })),
        )
            .into_response(),
        Err(e) => finance_error_response(&e),
    }
}

/// POST `/invoices/{invoice_id}/recalculate` - Recompute the total from
/// constituent fee lines and re-derive the status.
async fn recalculate_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> impl IntoResponse {
    let repo = FinanceRepository::new((*state.db).clone());

    match repo.recalculate_invoice(&invoice_id).await {
        Ok(invoice) => (StatusCode::OK, Json(json!(invoice))).into_response(),
        Err(e) => finance_error_response(&e),
    }
}

/// GET `/invoices/{invoice_id}/payments` - Payments against an invoice.
async fn list_payments(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> impl IntoResponse {
    let repo = FinanceRepository::new((*state.db).clone());

    match repo.list_payments(&invoice_id).await {
        Ok(payments) => (StatusCode::OK, Json(json!({ "payments": payments }))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list payments");
            internal_error()
        }
    }
}

/// POST `/invoices/{invoice_id}/payments` - Record a payment; the invoice
/// status is re-derived from the running paid total.
async fn record_payment(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
    Json(payload): Json<CreatePaymentRequest>,
) -> impl IntoResponse {
    let repo = FinanceRepository::new((*state.db).clone());
    let input = CreatePaymentInput {
        invoice_id,
        amount: Money::from_kobo(payload.amount_kobo),
        method: payload.method,
    };

    match repo.record_payment(input).await {
        Ok(outcome) => {
            info!(
                receipt = %outcome.payment.receipt_number,
                invoice_id = %outcome.invoice.invoice_id,
                "Payment recorded"
            );
            (
                StatusCode::CREATED,
                Json(json!({ "payment": outcome.payment, "invoice": outcome.invoice })),
            )
                .into_response()
        }
        Err(e) => finance_error_response(&e),
    }
}

/// POST `/schools/{school_id}/expense-categories` - Create an expense
/// category.
async fn create_category(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Json(payload): Json<CreateCategoryRequest>,
) -> impl IntoResponse {
    let repo = FinanceRepository::new((*state.db).clone());

    match repo
        .create_category(school_id, &payload.name, &payload.description)
        .await
    {
        Ok(category) => (StatusCode::CREATED, Json(json!(category))).into_response(),
        Err(e) => finance_error_response(&e),
    }
}

/// GET `/schools/{school_id}/expenses` - The school's recorded expenses.
async fn list_expenses(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = FinanceRepository::new((*state.db).clone());

    match repo.list_expenses(school_id).await {
        Ok(expenses) => (StatusCode::OK, Json(json!({ "expenses": expenses }))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list expenses");
            internal_error()
        }
    }
}

/// POST `/schools/{school_id}/expenses` - Record an expense and assign
/// its receipt number.
async fn create_expense(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    Json(payload): Json<CreateExpenseRequest>,
) -> impl IntoResponse {
    let repo = FinanceRepository::new((*state.db).clone());

    match repo
        .create_expense(
            school_id,
            payload.category_id,
            &payload.description,
            Money::from_kobo(payload.amount_kobo),
            payload.date_incurred,
        )
        .await
    {
        Ok(expense) => {
            info!(receipt = %expense.receipt_number, "Expense recorded");
            (StatusCode::CREATED, Json(json!(expense))).into_response()
        }
        Err(e) => finance_error_response(&e),
    }
}

/// Maps finance repository errors onto JSON responses.
fn finance_error_response(e: &FinanceError) -> axum::response::Response {
    match e {
        FinanceError::Validation(v) => field_error(v.field(), &v.to_string()),
        FinanceError::SchoolNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "School not found")
        }
        FinanceError::StudentNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "Student not found")
        }
        FinanceError::InvoiceNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "Invoice not found")
        }
        FinanceError::CategoryNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "not_found", "Expense category not found")
        }
        FinanceError::InvalidFeeSelection(_) => error_response(
            StatusCode::BAD_REQUEST,
            "invalid_fee_selection",
            "A selected fee is not an optional fee of this school and level",
        ),
        FinanceError::DuplicateFee => error_response(
            StatusCode::CONFLICT,
            "duplicate_fee",
            "This fee type is already configured for the level",
        ),
        FinanceError::DuplicateCategory(name) => error_response(
            StatusCode::CONFLICT,
            "duplicate_category",
            &format!("An expense category named {name:?} already exists"),
        ),
        FinanceError::IdentifierExhausted(family) => {
            error!(family, "Identifier retry budget exhausted");
            internal_error()
        }
        FinanceError::Database(db) => {
            error!(error = %db, "Finance database error");
            internal_error()
        }
    }
}
