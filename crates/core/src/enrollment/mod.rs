//! Student enrollment rules: field validation and age limits.

pub mod error;
pub mod validation;

pub use error::EnrollmentError;
pub use validation::{
    age_on, validate_date_of_birth, validate_optional_name, validate_person_name,
    validate_phone_number, MIN_AGE_YEARS,
};
