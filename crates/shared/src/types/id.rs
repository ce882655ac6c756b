//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `StudentId` where a
//! `SchoolId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(SchoolId, "Unique identifier for a school.");
typed_id!(AcademicSessionId, "Unique identifier for an academic session.");
typed_id!(TermId, "Unique identifier for a term within a session.");
typed_id!(StudentId, "Unique identifier for a student.");
typed_id!(EnrollmentId, "Unique identifier for an enrollment record.");
typed_id!(SubjectId, "Unique identifier for a ministry subject entry.");
typed_id!(GradingScaleId, "Unique identifier for a grading scale.");
typed_id!(AccreditationId, "Unique identifier for an accreditation record.");
typed_id!(SuspensionId, "Unique identifier for a suspension or closure record.");
typed_id!(FeeStructureId, "Unique identifier for a fee structure line.");
typed_id!(PaymentId, "Unique identifier for a payment.");
typed_id!(ExpenseId, "Unique identifier for a school expense.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_ids_are_unique() {
        let a = SchoolId::new();
        let b = SchoolId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_round_trips_through_display() {
        let id = StudentId::new();
        let parsed = StudentId::from_str(&id.to_string()).expect("valid uuid string");
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_from_uuid_preserves_value() {
        let raw = Uuid::new_v4();
        let id = AcademicSessionId::from_uuid(raw);
        assert_eq!(id.into_inner(), raw);
    }

    #[test]
    fn test_serde_transparent() {
        let id = SchoolId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", id.0));
    }
}
