//! Identifier generation.
//!
//! Human-legible codes for the six entity families the ministry issues
//! numbers for: school registration numbers, student registration and
//! admission numbers, accreditation numbers, invoice ids, and payment and
//! expense receipts.
//!
//! Everything here is a pure candidate generator; uniqueness checks and
//! collision retries live with the repositories that persist the codes.

pub mod codes;
pub mod luhn;

#[cfg(test)]
mod luhn_props;

pub use codes::{
    accreditation_number, admission_candidate, expense_receipt, format_school_registration,
    invoice_id, payment_receipt, registration_sequence_of, student_reg_candidate,
};
pub use luhn::{append_check_digit, luhn_check_digit, verify};
