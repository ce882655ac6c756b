//! Error types for grading configuration.

use thiserror::Error;

/// Field-scoped validation errors for grade boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradingError {
    /// The grade label was empty.
    #[error("grade label is required")]
    MissingGrade,

    /// Lower bound must not exceed the upper bound.
    #[error("lower bound must not exceed the upper bound")]
    InvalidBounds,

    /// Bounds must stay within the 0-100 score range.
    #[error("grade bounds must lie within 0-100")]
    OutOfRange,

    /// The scale already defines this grade label.
    #[error("grade {grade} is already defined for this scale")]
    DuplicateGrade {
        /// The repeated label.
        grade: String,
    },

    /// The score range collides with another boundary of the scale.
    #[error("score range overlaps the {other} boundary of this scale")]
    OverlappingBands {
        /// The label of the boundary collided with.
        other: String,
    },
}

impl GradingError {
    /// The form field this error is scoped to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingGrade | Self::DuplicateGrade { .. } => "grade",
            Self::InvalidBounds | Self::OutOfRange | Self::OverlappingBands { .. } => "lower_bound",
        }
    }
}
