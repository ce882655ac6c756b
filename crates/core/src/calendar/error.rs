//! Error types for calendar validation.

use thiserror::Error;

/// Validation errors for sessions, terms, and suspension windows.
///
/// Every variant is scoped to the field that violated its constraint so the
/// API layer can surface it against the offending form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// A required date was not supplied.
    #[error("{field} is required")]
    MissingDate {
        /// Name of the missing field.
        field: &'static str,
    },

    /// End date must be strictly after start date.
    #[error("end date must be after the start date")]
    InvalidDateRange,

    /// Term numbers are restricted to 1, 2, and 3.
    #[error("term number must be 1 (first), 2 (second), or 3 (third)")]
    InvalidTermNumber,

    /// The term starts before its academic session.
    #[error("the term's start date cannot be before the start date of the academic session")]
    TermStartsBeforeSession,

    /// The term ends after its academic session.
    #[error("the term's end date cannot be after the end date of the academic session")]
    TermEndsAfterSession,

    /// A sibling term already carries this number.
    #[error("a term with this number already exists for the academic session")]
    DuplicateTermNumber,

    /// The term's date range overlaps a sibling term.
    #[error("the date range overlaps term {other} of the same academic session")]
    OverlappingTerms {
        /// Number of the overlapped sibling.
        other: u8,
    },

    /// Later terms must start strictly after earlier terms end.
    #[error("term {number} must start after term {previous} ends")]
    OutOfOrderTerms {
        /// The term being validated.
        number: u8,
        /// The earlier term it must follow.
        previous: u8,
    },

    /// Individual-scoped sessions must reference a school.
    #[error("an individual-scoped session must reference exactly one school")]
    IndividualScopeRequiresSchool,

    /// Group-scoped sessions must not reference a school.
    #[error("only individual-scoped sessions may reference a school")]
    SchoolForbiddenForScope,
}

impl CalendarError {
    /// The form field this error is scoped to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingDate { field } => field,
            Self::InvalidDateRange | Self::TermEndsAfterSession => "end_date",
            Self::TermStartsBeforeSession | Self::OverlappingTerms { .. } | Self::OutOfOrderTerms { .. } => {
                "start_date"
            }
            Self::InvalidTermNumber | Self::DuplicateTermNumber => "term_number",
            Self::IndividualScopeRequiresSchool | Self::SchoolForbiddenForScope => "school",
        }
    }
}
