//! Grade boundaries within a grading scale.

use serde::{Deserialize, Serialize};

use super::error::GradingError;

/// Highest score a boundary may reach.
pub const MAX_SCORE: u16 = 100;

/// One grade boundary: a label and its inclusive score range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeBand {
    /// Grade label (e.g. "A", "B").
    pub grade: String,
    /// Minimum score for this grade.
    pub lower_bound: u16,
    /// Maximum score for this grade.
    pub upper_bound: u16,
}

/// Validates a new boundary against the existing boundaries of its scale.
pub fn validate_band(band: &GradeBand, existing: &[GradeBand]) -> Result<(), GradingError> {
    if band.grade.trim().is_empty() {
        return Err(GradingError::MissingGrade);
    }
    if band.lower_bound > band.upper_bound {
        return Err(GradingError::InvalidBounds);
    }
    if band.upper_bound > MAX_SCORE {
        return Err(GradingError::OutOfRange);
    }

    for other in existing {
        if other.grade.eq_ignore_ascii_case(&band.grade) {
            return Err(GradingError::DuplicateGrade {
                grade: band.grade.clone(),
            });
        }
    }

    for other in existing {
        if band.lower_bound <= other.upper_bound && band.upper_bound >= other.lower_bound {
            return Err(GradingError::OverlappingBands {
                other: other.grade.clone(),
            });
        }
    }

    Ok(())
}

/// Returns the boundary whose range contains `score`, if any.
#[must_use]
pub fn grade_for_score(bands: &[GradeBand], score: u16) -> Option<&GradeBand> {
    bands
        .iter()
        .find(|b| b.lower_bound <= score && score <= b.upper_bound)
}
