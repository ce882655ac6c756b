//! Finance rules: invoice totals and settlement status.

pub mod error;
pub mod invoice;

pub use error::FinanceError;
pub use invoice::{invoice_total, settlement_status, validate_fee_amount, validate_payment_amount, FeeLine, InvoiceStatus};
