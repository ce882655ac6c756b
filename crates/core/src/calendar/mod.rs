//! Academic calendar policy.
//!
//! This module implements the calendar rules of the ministry:
//! - Session scoping (which schools a session governs)
//! - Session resolution (which session currently governs a school)
//! - Term windows (ordering, containment, non-overlap)
//! - Suspension and closure windows

pub mod error;
pub mod resolver;
pub mod suspension;
pub mod term;
pub mod types;

#[cfg(test)]
mod resolver_props;
#[cfg(test)]
mod term_props;

pub use error::CalendarError;
pub use resolver::{current_term, resolve_session};
pub use suspension::SuspensionWindow;
pub use term::{validate_scope_link, validate_session_span, validate_term, DateSpan, TermNumber, TermWindow};
pub use types::{CandidateSession, Program, SchoolProfile, SchoolType, SessionScope, SessionStatus};
