//! `SeaORM` entity definitions.
//!
//! Enum columns are string-backed so the schema works unchanged on both
//! Postgres and SQLite (the latter carries the integration tests).

pub mod enums;

pub mod academic_sessions;
pub mod accreditation_statuses;
pub mod admission_infos;
pub mod classrooms;
pub mod enrollment_records;
pub mod expense_categories;
pub mod fee_structures;
pub mod grade_boundaries;
pub mod grading_scales;
pub mod invoice_optional_fees;
pub mod invoices;
pub mod laboratories;
pub mod libraries;
pub mod payments;
pub mod registration_sequences;
pub mod school_expenses;
pub mod school_subjects;
pub mod schools;
pub mod students;
pub mod subjects;
pub mod suspension_closures;
pub mod terms;
