//! Finance repository: fee structures, invoices, payments, and expenses.
//!
//! Invoice ids and receipt numbers are random-suffix identifiers with
//! bounded collision retry; invoice totals and settlement status are
//! derived by the pure finance rules in `samses-core`.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use samses_core::finance::{
    invoice_total, settlement_status, validate_fee_amount, validate_payment_amount, FeeLine,
    FinanceError as FinanceRuleError,
};
use samses_core::identity;
use samses_shared::types::Money;

use crate::entities::{
    enums::{FeeType, PaymentMethod},
    expense_categories, fee_structures, invoice_optional_fees, invoices, payments,
    school_expenses, schools, students,
};
use crate::repositories::MAX_ID_ATTEMPTS;

/// Error types for finance operations.
#[derive(Debug, thiserror::Error)]
pub enum FinanceError {
    /// School not found.
    #[error("School not found: {0}")]
    SchoolNotFound(Uuid),

    /// Student not found.
    #[error("Student not found: {0}")]
    StudentNotFound(Uuid),

    /// Invoice not found.
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(String),

    /// Expense category not found.
    #[error("Expense category not found: {0}")]
    CategoryNotFound(Uuid),

    /// A selected optional fee does not exist or is not optional.
    #[error("Fee line {0} is not an optional fee of this school and level")]
    InvalidFeeSelection(Uuid),

    /// The (school, level, fee type) triple is taken.
    #[error("This fee type is already configured for the level")]
    DuplicateFee,

    /// The (school, name) category pair is taken.
    #[error("An expense category named {0:?} already exists for this school")]
    DuplicateCategory(String),

    /// A field-scoped finance rule failed.
    #[error(transparent)]
    Validation(#[from] FinanceRuleError),

    /// Could not find an unused identifier within the retry budget.
    #[error("Could not allocate a unique {0} after repeated attempts")]
    IdentifierExhausted(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for configuring a fee.
#[derive(Debug, Clone)]
pub struct CreateFeeInput {
    /// Charging school.
    pub school_id: Uuid,
    /// Class level this fee applies to.
    pub level: String,
    /// Type of fee.
    pub fee_type: FeeType,
    /// Optional fees only bill when selected on an invoice.
    pub is_optional: bool,
    /// Amount in kobo.
    pub amount: Money,
    /// Additional details about the fee.
    pub description: String,
}

/// Input for generating an invoice.
#[derive(Debug, Clone)]
pub struct CreateInvoiceInput {
    /// Billing school.
    pub school_id: Uuid,
    /// Billed student.
    pub student_id: Uuid,
    /// Level the invoice bills fees for.
    pub level: String,
    /// Date payment is due.
    pub due_date: NaiveDate,
    /// Optional fees the parent or guardian selected.
    pub selected_optional_fees: Vec<Uuid>,
}

/// Input for recording a payment.
#[derive(Debug, Clone)]
pub struct CreatePaymentInput {
    /// Invoice the payment settles.
    pub invoice_id: String,
    /// Amount paid in kobo.
    pub amount: Money,
    /// Payment method.
    pub method: PaymentMethod,
}

/// A recorded payment with the invoice it updated.
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    /// The stored payment.
    pub payment: payments::Model,
    /// The invoice after its status was re-derived.
    pub invoice: invoices::Model,
}

/// Finance repository for fees, invoices, payments, and expenses.
#[derive(Debug, Clone)]
pub struct FinanceRepository {
    db: DatabaseConnection,
}

impl FinanceRepository {
    /// Creates a new finance repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Configures a fee for a school and level.
    ///
    /// # Errors
    ///
    /// Returns an error for negative amounts, a missing school, a
    /// duplicate (level, fee type) pair, or database failure.
    pub async fn create_fee(
        &self,
        input: CreateFeeInput,
    ) -> Result<fee_structures::Model, FinanceError> {
        validate_fee_amount(input.amount)?;
        schools::Entity::find_by_id(input.school_id)
            .one(&self.db)
            .await?
            .ok_or(FinanceError::SchoolNotFound(input.school_id))?;

        let now = Utc::now();
        let fee = fee_structures::ActiveModel {
            id: Set(Uuid::new_v4()),
            school_id: Set(input.school_id),
            level: Set(input.level),
            fee_type: Set(input.fee_type),
            is_optional: Set(input.is_optional),
            amount_kobo: Set(input.amount.kobo()),
            description: Set(input.description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match fee.insert(&self.db).await {
            Ok(fee) => Ok(fee),
            Err(e) => Err(match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => FinanceError::DuplicateFee,
                _ => FinanceError::Database(e),
            }),
        }
    }

    /// Lists the fees configured for a school, optionally for one level.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_fees(
        &self,
        school_id: Uuid,
        level: Option<&str>,
    ) -> Result<Vec<fee_structures::Model>, DbErr> {
        let mut query = fee_structures::Entity::find()
            .filter(fee_structures::Column::SchoolId.eq(school_id))
            .order_by_asc(fee_structures::Column::Level);
        if let Some(level) = level {
            query = query.filter(fee_structures::Column::Level.eq(level));
        }
        query.all(&self.db).await
    }

    /// Generates an invoice for a student: every non-optional fee of the
    /// school and level plus the selected optional fees.
    ///
    /// # Errors
    ///
    /// Returns an error if the school or student is missing, a selection
    /// is not an optional fee of the school and level, the total
    /// overflows, or a database operation fails.
    pub async fn create_invoice(
        &self,
        input: CreateInvoiceInput,
    ) -> Result<invoices::Model, FinanceError> {
        schools::Entity::find_by_id(input.school_id)
            .one(&self.db)
            .await?
            .ok_or(FinanceError::SchoolNotFound(input.school_id))?;
        students::Entity::find_by_id(input.student_id)
            .one(&self.db)
            .await?
            .ok_or(FinanceError::StudentNotFound(input.student_id))?;

        let fees = self.list_fees(input.school_id, Some(&input.level)).await?;
        for selection in &input.selected_optional_fees {
            let valid = fees.iter().any(|f| f.id == *selection && f.is_optional);
            if !valid {
                return Err(FinanceError::InvalidFeeSelection(*selection));
            }
        }

        let lines: Vec<FeeLine> = fees
            .iter()
            .map(|f| FeeLine {
                amount: Money::from_kobo(f.amount_kobo),
                is_optional: f.is_optional,
                selected: input.selected_optional_fees.contains(&f.id),
            })
            .collect();
        let total = invoice_total(&lines)?;

        let today = Utc::now().date_naive();
        let status = settlement_status(total, Money::ZERO, input.due_date, today);

        let txn = self.db.begin().await?;

        let mut stored = None;
        for _ in 0..MAX_ID_ATTEMPTS {
            let invoice_id = identity::invoice_id(today);
            let now = Utc::now();
            let invoice = invoices::ActiveModel {
                invoice_id: Set(invoice_id.clone()),
                school_id: Set(input.school_id),
                student_id: Set(input.student_id),
                level: Set(input.level.clone()),
                invoice_date: Set(today),
                due_date: Set(input.due_date),
                total_kobo: Set(total.kobo()),
                status: Set(status.into()),
                created_at: Set(now),
                updated_at: Set(now),
            };

            match invoice.insert(&txn).await {
                Ok(invoice) => {
                    stored = Some(invoice);
                    break;
                }
                Err(e) => match e.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {}
                    _ => return Err(FinanceError::Database(e)),
                },
            }
        }
        let Some(invoice) = stored else {
            return Err(FinanceError::IdentifierExhausted("invoice id"));
        };

        for selection in &input.selected_optional_fees {
            let link = invoice_optional_fees::ActiveModel {
                invoice_id: Set(invoice.invoice_id.clone()),
                fee_structure_id: Set(*selection),
            };
            link.insert(&txn).await?;
        }

        txn.commit().await?;
        Ok(invoice)
    }

    /// Finds an invoice by its generated id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_invoice(&self, invoice_id: &str) -> Result<Option<invoices::Model>, DbErr> {
        invoices::Entity::find_by_id(invoice_id.to_string())
            .one(&self.db)
            .await
    }

    /// Recomputes an invoice's total from its constituent fee lines and
    /// re-derives the settlement status.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice is missing, the total overflows,
    /// or a database operation fails.
    pub async fn recalculate_invoice(
        &self,
        invoice_id: &str,
    ) -> Result<invoices::Model, FinanceError> {
        let invoice = self
            .find_invoice(invoice_id)
            .await?
            .ok_or_else(|| FinanceError::InvoiceNotFound(invoice_id.to_string()))?;

        let selections: Vec<Uuid> = invoice_optional_fees::Entity::find()
            .filter(invoice_optional_fees::Column::InvoiceId.eq(invoice_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|s| s.fee_structure_id)
            .collect();

        let fees = self
            .list_fees(invoice.school_id, Some(invoice.level.as_str()))
            .await?;
        let lines: Vec<FeeLine> = fees
            .iter()
            .map(|f| FeeLine {
                amount: Money::from_kobo(f.amount_kobo),
                is_optional: f.is_optional,
                selected: selections.contains(&f.id),
            })
            .collect();
        let total = invoice_total(&lines)?;
        let paid = self.total_paid(invoice_id).await?;
        let status = settlement_status(total, paid, invoice.due_date, Utc::now().date_naive());

        let mut invoice: invoices::ActiveModel = invoice.into();
        invoice.total_kobo = Set(total.kobo());
        invoice.status = Set(status.into());
        invoice.updated_at = Set(Utc::now());
        Ok(invoice.update(&self.db).await?)
    }

    /// Records a payment against an invoice, assigns its receipt number,
    /// and re-derives the invoice status from the running paid total.
    ///
    /// # Errors
    ///
    /// Returns an error for non-positive amounts, a missing invoice, or
    /// database failure.
    pub async fn record_payment(
        &self,
        input: CreatePaymentInput,
    ) -> Result<PaymentOutcome, FinanceError> {
        validate_payment_amount(input.amount)?;

        let txn = self.db.begin().await?;

        let invoice = invoices::Entity::find_by_id(input.invoice_id.clone())
            .one(&txn)
            .await?
            .ok_or_else(|| FinanceError::InvoiceNotFound(input.invoice_id.clone()))?;

        let mut stored = None;
        for _ in 0..MAX_ID_ATTEMPTS {
            let receipt_number = identity::payment_receipt();
            let payment = payments::ActiveModel {
                id: Set(Uuid::new_v4()),
                invoice_id: Set(invoice.invoice_id.clone()),
                amount_kobo: Set(input.amount.kobo()),
                method: Set(input.method),
                payment_date: Set(Utc::now().date_naive()),
                receipt_number: Set(receipt_number),
                created_at: Set(Utc::now()),
            };

            match payment.insert(&txn).await {
                Ok(payment) => {
                    stored = Some(payment);
                    break;
                }
                Err(e) => match e.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {}
                    _ => return Err(FinanceError::Database(e)),
                },
            }
        }
        let Some(payment) = stored else {
            return Err(FinanceError::IdentifierExhausted("payment receipt"));
        };

        let rows = payments::Entity::find()
            .filter(payments::Column::InvoiceId.eq(invoice.invoice_id.clone()))
            .all(&txn)
            .await?;
        let paid = Money::checked_sum(rows.iter().map(|p| Money::from_kobo(p.amount_kobo)))
            .ok_or(FinanceError::Validation(FinanceRuleError::AmountOverflow))?;

        let status = settlement_status(
            Money::from_kobo(invoice.total_kobo),
            paid,
            invoice.due_date,
            Utc::now().date_naive(),
        );

        let mut invoice: invoices::ActiveModel = invoice.into();
        invoice.status = Set(status.into());
        invoice.updated_at = Set(Utc::now());
        let invoice = invoice.update(&txn).await?;

        txn.commit().await?;
        Ok(PaymentOutcome { payment, invoice })
    }

    /// Total paid against an invoice so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn total_paid(&self, invoice_id: &str) -> Result<Money, FinanceError> {
        let rows = payments::Entity::find()
            .filter(payments::Column::InvoiceId.eq(invoice_id))
            .all(&self.db)
            .await?;
        Money::checked_sum(rows.iter().map(|p| Money::from_kobo(p.amount_kobo)))
            .ok_or(FinanceError::Validation(FinanceRuleError::AmountOverflow))
    }

    /// Creates an expense category for a school.
    ///
    /// # Errors
    ///
    /// Returns an error if the school is missing, the name is taken for
    /// the school, or on database failure.
    pub async fn create_category(
        &self,
        school_id: Uuid,
        name: &str,
        description: &str,
    ) -> Result<expense_categories::Model, FinanceError> {
        schools::Entity::find_by_id(school_id)
            .one(&self.db)
            .await?
            .ok_or(FinanceError::SchoolNotFound(school_id))?;

        let category = expense_categories::ActiveModel {
            id: Set(Uuid::new_v4()),
            school_id: Set(school_id),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            created_at: Set(Utc::now()),
        };

        match category.insert(&self.db).await {
            Ok(category) => Ok(category),
            Err(e) => Err(match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    FinanceError::DuplicateCategory(name.to_string())
                }
                _ => FinanceError::Database(e),
            }),
        }
    }

    /// Records a school expense and assigns its receipt number.
    ///
    /// # Errors
    ///
    /// Returns an error for non-positive amounts, a missing category, or
    /// database failure.
    pub async fn create_expense(
        &self,
        school_id: Uuid,
        category_id: Uuid,
        description: &str,
        amount: Money,
        date_incurred: NaiveDate,
    ) -> Result<school_expenses::Model, FinanceError> {
        validate_payment_amount(amount)?;

        let category = expense_categories::Entity::find_by_id(category_id)
            .one(&self.db)
            .await?
            .ok_or(FinanceError::CategoryNotFound(category_id))?;
        if category.school_id != school_id {
            return Err(FinanceError::CategoryNotFound(category_id));
        }

        for _ in 0..MAX_ID_ATTEMPTS {
            let receipt_number = identity::expense_receipt();
            let expense = school_expenses::ActiveModel {
                id: Set(Uuid::new_v4()),
                school_id: Set(school_id),
                category_id: Set(category_id),
                description: Set(description.to_string()),
                amount_kobo: Set(amount.kobo()),
                date_incurred: Set(date_incurred),
                receipt_number: Set(receipt_number),
                created_at: Set(Utc::now()),
            };

            match expense.insert(&self.db).await {
                Ok(expense) => return Ok(expense),
                Err(e) => match e.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {}
                    _ => return Err(FinanceError::Database(e)),
                },
            }
        }

        Err(FinanceError::IdentifierExhausted("expense receipt"))
    }

    /// Lists a school's expenses, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_expenses(
        &self,
        school_id: Uuid,
    ) -> Result<Vec<school_expenses::Model>, DbErr> {
        school_expenses::Entity::find()
            .filter(school_expenses::Column::SchoolId.eq(school_id))
            .order_by_desc(school_expenses::Column::DateIncurred)
            .all(&self.db)
            .await
    }

    /// Lists the payments recorded against an invoice.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_payments(&self, invoice_id: &str) -> Result<Vec<payments::Model>, DbErr> {
        payments::Entity::find()
            .filter(payments::Column::InvoiceId.eq(invoice_id))
            .order_by_asc(payments::Column::CreatedAt)
            .all(&self.db)
            .await
    }
}
