//! Invoice totals and settlement status derivation.

use chrono::NaiveDate;
use samses_shared::types::Money;
use serde::{Deserialize, Serialize};

use super::error::FinanceError;

/// Settlement status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// No payment received yet.
    Pending,
    /// Paid in part.
    Partial,
    /// Fully settled.
    Paid,
    /// Unsettled past the due date.
    Overdue,
}

impl InvoiceStatus {
    /// Canonical string form, as stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Partial => "partial",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }
}

/// One fee line contributing to an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeLine {
    /// Amount in kobo.
    pub amount: Money,
    /// Optional fees only count when selected.
    pub is_optional: bool,
    /// Whether the parent or guardian selected this optional fee.
    pub selected: bool,
}

impl FeeLine {
    /// True if the line contributes to the invoice total.
    #[must_use]
    pub const fn applies(self) -> bool {
        !self.is_optional || self.selected
    }
}

/// Validates a fee amount (zero allowed, negatives rejected).
pub fn validate_fee_amount(amount: Money) -> Result<(), FinanceError> {
    if amount.is_negative() {
        return Err(FinanceError::NegativeAmount { field: "amount" });
    }
    Ok(())
}

/// Validates a payment amount (must be strictly positive).
pub fn validate_payment_amount(amount: Money) -> Result<(), FinanceError> {
    if amount.is_negative() || amount.is_zero() {
        return Err(FinanceError::MustBePositive { field: "amount" });
    }
    Ok(())
}

/// Computes an invoice total: every non-optional line plus the selected
/// optional lines.
pub fn invoice_total(lines: &[FeeLine]) -> Result<Money, FinanceError> {
    Money::checked_sum(lines.iter().filter(|l| l.applies()).map(|l| l.amount))
        .ok_or(FinanceError::AmountOverflow)
}

/// Derives the settlement status from the amount paid so far.
///
/// Payments covering the total settle the invoice; anything positive short
/// of it is partial. Unsettled invoices past their due date read overdue.
#[must_use]
pub fn settlement_status(
    total: Money,
    paid: Money,
    due_date: NaiveDate,
    today: NaiveDate,
) -> InvoiceStatus {
    let status = if paid >= total {
        InvoiceStatus::Paid
    } else if paid > Money::ZERO {
        InvoiceStatus::Partial
    } else {
        InvoiceStatus::Pending
    };

    if status != InvoiceStatus::Paid && today > due_date {
        return InvoiceStatus::Overdue;
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn line(naira: i64, optional: bool, selected: bool) -> FeeLine {
        FeeLine {
            amount: Money::from_naira(naira),
            is_optional: optional,
            selected,
        }
    }

    #[test]
    fn test_total_includes_selected_optional_fees() {
        let lines = [
            line(30_000, false, false), // tuition
            line(5_000, false, false),  // exam
            line(8_000, true, true),    // extra lessons, selected
            line(12_000, true, false),  // field trip, not selected
        ];
        assert_eq!(invoice_total(&lines), Ok(Money::from_naira(43_000)));
    }

    #[test]
    fn test_total_of_no_lines_is_zero() {
        assert_eq!(invoice_total(&[]), Ok(Money::ZERO));
    }

    #[test]
    fn test_total_overflow_is_reported() {
        let lines = [
            FeeLine { amount: Money::from_kobo(i64::MAX), is_optional: false, selected: false },
            FeeLine { amount: Money::from_kobo(1), is_optional: false, selected: false },
        ];
        assert_eq!(invoice_total(&lines), Err(FinanceError::AmountOverflow));
    }

    #[test]
    fn test_settlement_progression() {
        let total = Money::from_naira(40_000);
        let due = d(2026, 10, 1);
        let today = d(2026, 9, 15);

        assert_eq!(settlement_status(total, Money::ZERO, due, today), InvoiceStatus::Pending);
        assert_eq!(
            settlement_status(total, Money::from_naira(10_000), due, today),
            InvoiceStatus::Partial
        );
        assert_eq!(
            settlement_status(total, Money::from_naira(40_000), due, today),
            InvoiceStatus::Paid
        );
        assert_eq!(
            settlement_status(total, Money::from_naira(55_000), due, today),
            InvoiceStatus::Paid
        );
    }

    #[test]
    fn test_unsettled_past_due_date_is_overdue() {
        let total = Money::from_naira(40_000);
        let due = d(2026, 10, 1);
        let late = d(2026, 10, 2);

        assert_eq!(settlement_status(total, Money::ZERO, due, late), InvoiceStatus::Overdue);
        assert_eq!(
            settlement_status(total, Money::from_naira(10_000), due, late),
            InvoiceStatus::Overdue
        );
        assert_eq!(
            settlement_status(total, total, due, late),
            InvoiceStatus::Paid
        );
    }

    #[test]
    fn test_amount_validators() {
        assert_eq!(validate_fee_amount(Money::ZERO), Ok(()));
        assert_eq!(
            validate_fee_amount(Money::from_kobo(-1)),
            Err(FinanceError::NegativeAmount { field: "amount" })
        );
        assert_eq!(validate_payment_amount(Money::from_kobo(1)), Ok(()));
        assert_eq!(
            validate_payment_amount(Money::ZERO),
            Err(FinanceError::MustBePositive { field: "amount" })
        );
    }
}
