//! Session resolution policy.
//!
//! Given a school and the sessions that could govern it, decide which one
//! actually does. The repository layer narrows the candidate set with a
//! single query; the ranking here is pure and deterministic.

use chrono::NaiveDate;

use super::term::TermWindow;
use super::types::{CandidateSession, SchoolProfile, SessionScope, SessionStatus};

/// Resolves the academic session that currently governs `school`.
///
/// Priority order, first match wins:
/// 1. an individual-scoped session explicitly linked to this school with an
///    exact program match;
/// 2. a session scoped to the school's type or to `all`, with an exact
///    program match;
/// 3. for compound school programs, a type-or-all session whose program is
///    one of the components.
///
/// Only `ongoing` sessions participate. When several sessions survive the
/// same step, the earliest-created row wins (id as the final tie-break), so
/// repeated calls with unchanged data return the same session. Returns
/// `None` when nothing matches; absence is not an error.
#[must_use]
pub fn resolve_session<'a>(
    school: &SchoolProfile,
    candidates: &'a [CandidateSession],
) -> Option<&'a CandidateSession> {
    let ongoing = || {
        candidates
            .iter()
            .filter(|s| s.status == SessionStatus::Ongoing)
    };

    let individual = ongoing().filter(|s| {
        s.scope == SessionScope::Individual
            && s.school_id == Some(school.id)
            && s.program == school.program
    });
    if let Some(found) = pick_earliest(individual) {
        return Some(found);
    }

    let group_exact = ongoing()
        .filter(|s| s.scope.covers_type(school.school_type) && s.program == school.program);
    if let Some(found) = pick_earliest(group_exact) {
        return Some(found);
    }

    if school.program.is_compound() {
        let components = school.program.components();
        let group_component = ongoing().filter(|s| {
            s.scope.covers_type(school.school_type) && components.contains(&s.program)
        });
        if let Some(found) = pick_earliest(group_component) {
            return Some(found);
        }
    }

    None
}

/// Deterministic tie-break: earliest created, then smallest id.
fn pick_earliest<'a, I>(sessions: I) -> Option<&'a CandidateSession>
where
    I: Iterator<Item = &'a CandidateSession>,
{
    sessions.min_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
}

/// Returns the term whose date range contains `today`, if any.
#[must_use]
pub fn current_term<'a>(terms: &'a [TermWindow], today: NaiveDate) -> Option<&'a TermWindow> {
    terms.iter().find(|t| t.span().contains(today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::types::{Program, SchoolType};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn school(school_type: SchoolType, program: Program) -> SchoolProfile {
        SchoolProfile {
            id: Uuid::new_v4(),
            school_type,
            program,
        }
    }

    fn session(
        scope: SessionScope,
        program: Program,
        school_id: Option<Uuid>,
        created_secs: i64,
    ) -> CandidateSession {
        CandidateSession {
            id: Uuid::new_v4(),
            scope,
            program,
            school_id,
            status: SessionStatus::Ongoing,
            session_name: "2026/2027".to_string(),
            start_date: d(2026, 9, 1),
            end_date: d(2027, 7, 15),
            created_at: Utc.timestamp_opt(1_770_000_000 + created_secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_group_session_matches_public_primary_school() {
        let school = school(SchoolType::Public, Program::Primary);
        let candidates = vec![session(SessionScope::Public, Program::Primary, None, 0)];

        let resolved = resolve_session(&school, &candidates);
        assert_eq!(resolved, Some(&candidates[0]));
    }

    #[test]
    fn test_compound_program_decomposes_to_component_match() {
        let school = school(SchoolType::Private, Program::JssSss);
        let candidates = vec![session(SessionScope::All, Program::Jss, None, 0)];

        let resolved = resolve_session(&school, &candidates);
        assert_eq!(resolved, Some(&candidates[0]));
    }

    #[test]
    fn test_individual_session_wins_over_group_session() {
        let school = school(SchoolType::Public, Program::Jss);
        let candidates = vec![
            session(SessionScope::Public, Program::Jss, None, 0),
            session(SessionScope::Individual, Program::Jss, Some(school.id), 100),
        ];

        let resolved = resolve_session(&school, &candidates);
        assert_eq!(resolved, Some(&candidates[1]));
    }

    #[test]
    fn test_exact_program_wins_over_component_match() {
        let school = school(SchoolType::Community, Program::PrimaryJss);
        let candidates = vec![
            session(SessionScope::All, Program::Primary, None, 0),
            session(SessionScope::Community, Program::PrimaryJss, None, 100),
        ];

        let resolved = resolve_session(&school, &candidates);
        assert_eq!(resolved, Some(&candidates[1]));
    }

    #[test]
    fn test_other_schools_individual_session_is_ignored() {
        let school = school(SchoolType::Public, Program::Primary);
        let candidates = vec![session(
            SessionScope::Individual,
            Program::Primary,
            Some(Uuid::new_v4()),
            0,
        )];

        assert_eq!(resolve_session(&school, &candidates), None);
    }

    #[test]
    fn test_completed_sessions_are_ignored() {
        let school = school(SchoolType::Public, Program::Primary);
        let mut completed = session(SessionScope::Public, Program::Primary, None, 0);
        completed.status = SessionStatus::Completed;

        assert_eq!(resolve_session(&school, &[completed]), None);
    }

    #[test]
    fn test_wrong_type_scope_is_ignored() {
        let school = school(SchoolType::Private, Program::Sss);
        let candidates = vec![session(SessionScope::Public, Program::Sss, None, 0)];

        assert_eq!(resolve_session(&school, &candidates), None);
    }

    #[test]
    fn test_tie_break_is_earliest_created() {
        let school = school(SchoolType::Public, Program::Primary);
        let candidates = vec![
            session(SessionScope::Public, Program::Primary, None, 500),
            session(SessionScope::All, Program::Primary, None, 20),
            session(SessionScope::Public, Program::Primary, None, 300),
        ];

        let resolved = resolve_session(&school, &candidates);
        assert_eq!(resolved, Some(&candidates[1]));
    }

    #[test]
    fn test_current_term_lookup() {
        use crate::calendar::term::TermNumber;

        let terms = vec![
            TermWindow {
                number: TermNumber::First,
                start_date: d(2026, 9, 7),
                end_date: d(2026, 12, 18),
            },
            TermWindow {
                number: TermNumber::Second,
                start_date: d(2027, 1, 5),
                end_date: d(2027, 4, 2),
            },
        ];

        let found = current_term(&terms, d(2027, 2, 14));
        assert_eq!(found.map(|t| t.number), Some(TermNumber::Second));
        assert_eq!(current_term(&terms, d(2026, 12, 25)), None);
    }
}
