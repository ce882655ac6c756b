//! Error types for enrollment validation.

use thiserror::Error;

/// Field-scoped validation errors for student records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrollmentError {
    /// A required field was empty.
    #[error("{field} is required")]
    Required {
        /// Name of the empty field.
        field: &'static str,
    },

    /// The value is shorter than the allowed minimum.
    #[error("{field} must be at least {min} characters")]
    TooShort {
        /// Name of the offending field.
        field: &'static str,
        /// Minimum length.
        min: usize,
    },

    /// The value is longer than the allowed maximum.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum length.
        max: usize,
    },

    /// Name fields accept alphabets, spaces, and hyphens only.
    #[error("{field} can only contain alphabets, spaces, and hyphens")]
    InvalidCharacters {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Phone numbers must match the Nigerian format.
    #[error("please use a valid Nigeria phone number")]
    InvalidPhoneNumber,

    /// Students below the minimum age cannot be registered.
    #[error("student must be at least {min_years} years old")]
    TooYoung {
        /// The minimum age in years.
        min_years: u32,
    },
}

impl EnrollmentError {
    /// The form field this error is scoped to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::InvalidCharacters { field } => field,
            Self::InvalidPhoneNumber => "phone_number",
            Self::TooYoung { .. } => "date_of_birth",
        }
    }
}
