//! Repository abstractions for data access.
//!
//! Each repository owns the query logic and transaction boundaries for one
//! domain area and exposes a typed error enum naming the constraint that
//! failed.

pub mod calendar;
pub mod finance;
pub mod grading;
pub mod infrastructure;
pub mod oversight;
pub mod school;
pub mod student;
pub mod subject;

pub use calendar::CalendarRepository;
pub use finance::FinanceRepository;
pub use grading::GradingRepository;
pub use infrastructure::InfrastructureRepository;
pub use oversight::OversightRepository;
pub use school::SchoolRepository;
pub use student::StudentRepository;
pub use subject::SubjectRepository;

/// Attempts made to find an unused random identifier before giving up.
pub(crate) const MAX_ID_ATTEMPTS: usize = 5;
