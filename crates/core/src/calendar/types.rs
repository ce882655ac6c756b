//! Academic calendar domain types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of school ownership recognized by the ministry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchoolType {
    /// State-run school.
    Public,
    /// Privately owned school.
    Private,
    /// Community-run school.
    Community,
}

impl SchoolType {
    /// Canonical string form, as stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Community => "community",
        }
    }

    /// Single-digit code used as the registration number prefix.
    #[must_use]
    pub const fn type_code(self) -> char {
        match self {
            Self::Public => '1',
            Self::Private => '2',
            Self::Community => '3',
        }
    }
}

impl std::fmt::Display for SchoolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SchoolType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "community" => Ok(Self::Community),
            _ => Err(format!("Unknown school type: {s}")),
        }
    }
}

/// Program levels a school (or session) covers.
///
/// Compound values combine two adjacent levels and are decomposed during
/// session resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Program {
    /// Primary school only.
    #[serde(rename = "primary")]
    Primary,
    /// Junior secondary school only.
    #[serde(rename = "jss")]
    Jss,
    /// Senior secondary school only.
    #[serde(rename = "sss")]
    Sss,
    /// Primary plus junior secondary.
    #[serde(rename = "primary+jss")]
    PrimaryJss,
    /// Junior plus senior secondary.
    #[serde(rename = "jss+sss")]
    JssSss,
    /// Every program level.
    #[serde(rename = "all")]
    All,
}

impl Program {
    /// Canonical string form, as stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Jss => "jss",
            Self::Sss => "sss",
            Self::PrimaryJss => "primary+jss",
            Self::JssSss => "jss+sss",
            Self::All => "all",
        }
    }

    /// True if the value combines more than one program level.
    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::PrimaryJss | Self::JssSss)
    }

    /// The single-level components of a compound program.
    ///
    /// Non-compound values decompose to themselves.
    #[must_use]
    pub const fn components(self) -> &'static [Self] {
        match self {
            Self::Primary => &[Self::Primary],
            Self::Jss => &[Self::Jss],
            Self::Sss => &[Self::Sss],
            Self::PrimaryJss => &[Self::Primary, Self::Jss],
            Self::JssSss => &[Self::Jss, Self::Sss],
            Self::All => &[Self::All],
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Program {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "jss" => Ok(Self::Jss),
            "sss" => Ok(Self::Sss),
            "primary+jss" => Ok(Self::PrimaryJss),
            "jss+sss" => Ok(Self::JssSss),
            "all" => Ok(Self::All),
            _ => Err(format!("Unknown program: {s}")),
        }
    }
}

/// Which class of schools an academic session governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionScope {
    /// Every school in the state.
    All,
    /// Public schools.
    Public,
    /// Private schools.
    Private,
    /// Community schools.
    Community,
    /// Exactly one school, referenced explicitly.
    Individual,
}

impl SessionScope {
    /// Canonical string form, as stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Public => "public",
            Self::Private => "private",
            Self::Community => "community",
            Self::Individual => "individual",
        }
    }

    /// True for the group scopes that cover the given school type.
    ///
    /// `Individual` never matches here; it is resolved through the explicit
    /// school link instead.
    #[must_use]
    pub const fn covers_type(self, school_type: SchoolType) -> bool {
        matches!(
            (self, school_type),
            (Self::All, _)
                | (Self::Public, SchoolType::Public)
                | (Self::Private, SchoolType::Private)
                | (Self::Community, SchoolType::Community)
        )
    }
}

impl std::fmt::Display for SessionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SessionScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "community" => Ok(Self::Community),
            "individual" => Ok(Self::Individual),
            _ => Err(format!("Unknown session scope: {s}")),
        }
    }
}

/// Lifecycle status of an academic session.
///
/// Transitions run upcoming → ongoing → completed, driven by
/// administrative action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Session has been announced but not started.
    Upcoming,
    /// Session currently running.
    Ongoing,
    /// Session has ended.
    Completed,
}

impl SessionStatus {
    /// Canonical string form, as stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }
}

/// The attributes of a school that participate in session resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchoolProfile {
    /// School identifier.
    pub id: Uuid,
    /// Ownership type.
    pub school_type: SchoolType,
    /// Program coverage.
    pub program: Program,
}

/// A session under consideration by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSession {
    /// Session identifier.
    pub id: Uuid,
    /// Scope of schools governed.
    pub scope: SessionScope,
    /// Program the session applies to.
    pub program: Program,
    /// Owning school, present iff scope is `Individual`.
    pub school_id: Option<Uuid>,
    /// Lifecycle status.
    pub status: SessionStatus,
    /// Display name, e.g. "2026/2027".
    pub session_name: String,
    /// First day of the session.
    pub start_date: NaiveDate,
    /// Last day of the session.
    pub end_date: NaiveDate,
    /// Row creation time, used as the deterministic tie-break.
    pub created_at: DateTime<Utc>,
}

impl CandidateSession {
    /// True if `today` falls within the session's date range.
    #[must_use]
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.start_date <= today && today <= self.end_date
    }

    /// True if the session has not started yet.
    #[must_use]
    pub fn on_coming(&self, today: NaiveDate) -> bool {
        today < self.start_date
    }

    /// Session length in days.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_program_components() {
        assert_eq!(Program::PrimaryJss.components(), &[Program::Primary, Program::Jss]);
        assert_eq!(Program::JssSss.components(), &[Program::Jss, Program::Sss]);
        assert_eq!(Program::Sss.components(), &[Program::Sss]);
        assert!(Program::PrimaryJss.is_compound());
        assert!(!Program::All.is_compound());
    }

    #[test]
    fn test_program_round_trips_as_str() {
        for p in [
            Program::Primary,
            Program::Jss,
            Program::Sss,
            Program::PrimaryJss,
            Program::JssSss,
            Program::All,
        ] {
            assert_eq!(Program::from_str(p.as_str()), Ok(p));
        }
    }

    #[test]
    fn test_scope_covers_type() {
        assert!(SessionScope::All.covers_type(SchoolType::Private));
        assert!(SessionScope::Public.covers_type(SchoolType::Public));
        assert!(!SessionScope::Public.covers_type(SchoolType::Private));
        assert!(!SessionScope::Individual.covers_type(SchoolType::Public));
    }

    #[test]
    fn test_type_codes() {
        assert_eq!(SchoolType::Public.type_code(), '1');
        assert_eq!(SchoolType::Private.type_code(), '2');
        assert_eq!(SchoolType::Community.type_code(), '3');
    }

    #[test]
    fn test_session_date_helpers() {
        let session = CandidateSession {
            id: Uuid::new_v4(),
            scope: SessionScope::All,
            program: Program::All,
            school_id: None,
            status: SessionStatus::Ongoing,
            session_name: "2026/2027".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2027, 7, 15).unwrap(),
            created_at: Utc::now(),
        };

        assert!(session.is_active(NaiveDate::from_ymd_opt(2026, 12, 1).unwrap()));
        assert!(!session.is_active(NaiveDate::from_ymd_opt(2027, 8, 1).unwrap()));
        assert!(session.on_coming(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()));
        assert_eq!(session.duration_days(), 317);
    }
}
