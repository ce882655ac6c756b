//! Validators for student fields.

use chrono::{Datelike, NaiveDate};

use super::error::EnrollmentError;

/// Minimum age, in years, a student must have reached at registration.
pub const MIN_AGE_YEARS: u32 = 4;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 25;

/// Validates a required person-name field: 2-25 characters of alphabets,
/// spaces, and hyphens.
pub fn validate_person_name(field: &'static str, value: &str) -> Result<(), EnrollmentError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(EnrollmentError::Required { field });
    }
    if value.chars().count() < NAME_MIN {
        return Err(EnrollmentError::TooShort { field, min: NAME_MIN });
    }
    check_name_charset(field, value)?;
    if value.chars().count() > NAME_MAX {
        return Err(EnrollmentError::TooLong { field, max: NAME_MAX });
    }

    Ok(())
}

/// Validates an optional name field (e.g. middle name): empty is fine, a
/// present value obeys the charset and length rules.
pub fn validate_optional_name(field: &'static str, value: &str) -> Result<(), EnrollmentError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    check_name_charset(field, value)?;
    if value.chars().count() > NAME_MAX {
        return Err(EnrollmentError::TooLong { field, max: NAME_MAX });
    }
    Ok(())
}

fn check_name_charset(field: &'static str, value: &str) -> Result<(), EnrollmentError> {
    if value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '-')
    {
        Ok(())
    } else {
        Err(EnrollmentError::InvalidCharacters { field })
    }
}

/// Validates a Nigerian phone number: an optional `+234` or `0` prefix,
/// then a 10-digit subscriber number starting with 7, 8, or 9.
pub fn validate_phone_number(value: &str) -> Result<(), EnrollmentError> {
    let rest = value
        .strip_prefix("+234")
        .or_else(|| value.strip_prefix('0'))
        .unwrap_or(value);

    let mut chars = rest.chars();
    let leading_ok = chars.next().is_some_and(|c| matches!(c, '7'..='9'));
    let tail: Vec<char> = chars.collect();

    if leading_ok && tail.len() == 9 && tail.iter().all(char::is_ascii_digit) {
        Ok(())
    } else {
        Err(EnrollmentError::InvalidPhoneNumber)
    }
}

/// A student's age in whole years on `today`.
#[must_use]
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Rejects dates of birth less than [`MIN_AGE_YEARS`] before `today`.
pub fn validate_date_of_birth(
    date_of_birth: NaiveDate,
    today: NaiveDate,
) -> Result<(), EnrollmentError> {
    #[allow(clippy::cast_possible_wrap)]
    if age_on(date_of_birth, today) < MIN_AGE_YEARS as i32 {
        return Err(EnrollmentError::TooYoung { min_years: MIN_AGE_YEARS });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[rstest]
    #[case("Amina")]
    #[case("Abdul-Rahman")]
    #[case("Mary Jane")]
    fn test_valid_names(#[case] name: &str) {
        assert_eq!(validate_person_name("first_name", name), Ok(()));
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(
            validate_person_name("first_name", ""),
            Err(EnrollmentError::Required { field: "first_name" })
        );
        assert_eq!(
            validate_person_name("first_name", "A"),
            Err(EnrollmentError::TooShort { field: "first_name", min: 2 })
        );
        assert_eq!(
            validate_person_name("last_name", "O'Neil"),
            Err(EnrollmentError::InvalidCharacters { field: "last_name" })
        );
        assert_eq!(
            validate_person_name("last_name", &"a".repeat(30)),
            Err(EnrollmentError::TooLong { field: "last_name", max: 25 })
        );
    }

    #[test]
    fn test_optional_name_allows_empty() {
        assert_eq!(validate_optional_name("middle_name", ""), Ok(()));
        assert_eq!(validate_optional_name("middle_name", "Bello"), Ok(()));
        assert_eq!(
            validate_optional_name("middle_name", "B3llo"),
            Err(EnrollmentError::InvalidCharacters { field: "middle_name" })
        );
    }

    #[rstest]
    #[case("+2348012345678")]
    #[case("08012345678")]
    #[case("7012345678")]
    #[case("09098765432")]
    fn test_valid_phone_numbers(#[case] value: &str) {
        assert_eq!(validate_phone_number(value), Ok(()));
    }

    #[rstest]
    #[case("12345")]
    #[case("+2346012345678")]
    #[case("080123456789999")]
    #[case("080123a5678")]
    fn test_invalid_phone_numbers(#[case] value: &str) {
        assert_eq!(validate_phone_number(value), Err(EnrollmentError::InvalidPhoneNumber));
    }

    #[test]
    fn test_age_on() {
        assert_eq!(age_on(d(2020, 6, 15), d(2026, 6, 15)), 6);
        assert_eq!(age_on(d(2020, 6, 15), d(2026, 6, 14)), 5);
    }

    #[test]
    fn test_minimum_age_enforced() {
        let today = d(2026, 9, 1);
        assert_eq!(validate_date_of_birth(d(2022, 9, 1), today), Ok(()));
        assert_eq!(
            validate_date_of_birth(d(2022, 9, 2), today),
            Err(EnrollmentError::TooYoung { min_years: 4 })
        );
    }
}
