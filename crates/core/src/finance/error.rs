//! Error types for finance calculations.

use thiserror::Error;

/// Field-scoped validation errors for finance records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinanceError {
    /// Summing fee lines overflowed the kobo range.
    #[error("invoice total overflows the supported amount range")]
    AmountOverflow,

    /// Fee amounts must not be negative.
    #[error("{field} must not be negative")]
    NegativeAmount {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Payment amounts must be positive.
    #[error("{field} must be positive")]
    MustBePositive {
        /// Name of the offending field.
        field: &'static str,
    },
}

impl FinanceError {
    /// The form field this error is scoped to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::AmountOverflow => "total_amount",
            Self::NegativeAmount { field } | Self::MustBePositive { field } => field,
        }
    }
}
