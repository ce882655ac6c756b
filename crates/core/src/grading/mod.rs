//! Grading scales: boundary validation and score lookup.

pub mod error;
pub mod scale;

pub use error::GradingError;
pub use scale::{grade_for_score, validate_band, GradeBand};
