//! Code formats for the ministry's identifier families.
//!
//! Random material comes from UUIDv4, truncated the same way for every
//! family: decimal digits from the 128-bit integer, hex characters from the
//! simple representation.

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use super::luhn;
use crate::calendar::SchoolType;

/// Formats a school registration number: the school-type code followed by
/// the zero-padded sequence value.
///
/// Sequences below 1000 render as three digits (`"1001"`, `"2042"`); larger
/// values simply grow the suffix.
#[must_use]
pub fn format_school_registration(school_type: SchoolType, sequence: u64) -> String {
    format!("{}{:03}", school_type.type_code(), sequence)
}

/// Extracts the numeric sequence from a school registration number.
///
/// Returns `None` for codes that do not carry a numeric suffix.
#[must_use]
pub fn registration_sequence_of(registration_number: &str) -> Option<u64> {
    registration_number.get(1..)?.parse().ok()
}

/// A candidate 11-digit student registration number.
///
/// Callers must uniqueness-check the value and retry on collision.
#[must_use]
pub fn student_reg_candidate() -> String {
    random_digits(11)
}

/// A candidate admission number: 10 random digits plus the Luhn check
/// digit, 11 digits total.
///
/// Callers must uniqueness-check the value and retry on collision.
#[must_use]
pub fn admission_candidate() -> String {
    let base = random_digits(10);
    match luhn::append_check_digit(&base) {
        Some(code) => code,
        // base is always ASCII digits, so the check digit always exists
        None => base,
    }
}

/// An accreditation number: `ACCR{YY}{type_code}-{7 random digits}`.
///
/// A fresh number is issued on every transition to accredited; the value is
/// deliberately not stable across re-accreditations.
#[must_use]
pub fn accreditation_number(today: NaiveDate, school_type: SchoolType) -> String {
    let yy = today.year().rem_euclid(100);
    format!(
        "ACCR{yy:02}{}-{}",
        school_type.type_code(),
        random_digits(7)
    )
}

/// An invoice id: `INV-{YYYYMMDD}-{6 random digits}`.
#[must_use]
pub fn invoice_id(today: NaiveDate) -> String {
    format!("INV-{}-{}", today.format("%Y%m%d"), random_digits(6))
}

/// A payment receipt number: `REC-` plus 16 uppercase hex characters.
#[must_use]
pub fn payment_receipt() -> String {
    format!("REC-{}", random_hex(16))
}

/// An expense receipt number: `EXP-` plus 12 uppercase hex characters.
#[must_use]
pub fn expense_receipt() -> String {
    format!("EXP-{}", random_hex(12))
}

/// The first `len` decimal digits of a random 128-bit integer.
fn random_digits(len: usize) -> String {
    loop {
        let digits = Uuid::new_v4().as_u128().to_string();
        if digits.len() >= len {
            return digits[..len].to_string();
        }
    }
}

/// The first `len` hex characters of a random UUID, uppercased.
fn random_hex(len: usize) -> String {
    Uuid::new_v4().simple().to_string()[..len].to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_school_registration_format() {
        assert_eq!(format_school_registration(SchoolType::Public, 1), "1001");
        assert_eq!(format_school_registration(SchoolType::Private, 42), "2042");
        assert_eq!(format_school_registration(SchoolType::Community, 999), "3999");
        assert_eq!(format_school_registration(SchoolType::Community, 1000), "31000");
    }

    #[test]
    fn test_registration_sequence_round_trip() {
        let code = format_school_registration(SchoolType::Private, 17);
        assert_eq!(registration_sequence_of(&code), Some(17));
        assert_eq!(registration_sequence_of(""), None);
        assert_eq!(registration_sequence_of("2abc"), None);
    }

    #[test]
    fn test_student_reg_candidate_is_eleven_digits() {
        let code = student_reg_candidate();
        assert_eq!(code.len(), 11);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_admission_candidate_carries_luhn_digit() {
        let code = admission_candidate();
        assert_eq!(code.len(), 11);
        assert!(luhn::verify(&code));
    }

    #[test]
    fn test_accreditation_number_format() {
        let code = accreditation_number(d(2026, 3, 14), SchoolType::Private);
        assert!(code.starts_with("ACCR262-"));
        let suffix = code.split('-').nth(1).unwrap();
        assert_eq!(suffix.len(), 7);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_invoice_id_format() {
        let code = invoice_id(d(2024, 1, 1));
        assert!(code.starts_with("INV-20240101-"));
        assert_eq!(code.len(), "INV-20240101-".len() + 6);
    }

    #[test]
    fn test_receipt_formats() {
        let rec = payment_receipt();
        assert!(rec.starts_with("REC-"));
        assert_eq!(rec.len(), 4 + 16);
        assert!(rec[4..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_lowercase()));

        let exp = expense_receipt();
        assert!(exp.starts_with("EXP-"));
        assert_eq!(exp.len(), 4 + 12);
    }

    #[test]
    fn test_candidates_vary_between_calls() {
        // Not a uniqueness proof, but two identical draws in a row would
        // point at a broken randomness source.
        assert_ne!(student_reg_candidate(), student_reg_candidate());
        assert_ne!(payment_receipt(), payment_receipt());
    }
}
