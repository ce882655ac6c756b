//! Property-based tests for session resolution.

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use uuid::Uuid;

use super::resolver::resolve_session;
use super::types::{CandidateSession, Program, SchoolProfile, SchoolType, SessionScope, SessionStatus};

const SCOPES: [SessionScope; 5] = [
    SessionScope::All,
    SessionScope::Public,
    SessionScope::Private,
    SessionScope::Community,
    SessionScope::Individual,
];

const PROGRAMS: [Program; 6] = [
    Program::Primary,
    Program::Jss,
    Program::Sss,
    Program::PrimaryJss,
    Program::JssSss,
    Program::All,
];

const STATUSES: [SessionStatus; 3] = [
    SessionStatus::Upcoming,
    SessionStatus::Ongoing,
    SessionStatus::Completed,
];

fn school_type_strategy() -> impl Strategy<Value = SchoolType> {
    prop_oneof![
        Just(SchoolType::Public),
        Just(SchoolType::Private),
        Just(SchoolType::Community),
    ]
}

fn program_strategy() -> impl Strategy<Value = Program> {
    proptest::sample::select(&PROGRAMS[..])
}

/// Encoded candidate: (scope index, program index, status index, owned-by-school, created offset).
type CandidateSeed = (u8, u8, u8, bool, i64);

fn candidate_seeds() -> impl Strategy<Value = Vec<CandidateSeed>> {
    proptest::collection::vec((0u8..5, 0u8..6, 0u8..3, any::<bool>(), 0i64..1_000_000), 0..12)
}

fn build_candidates(school_id: Uuid, seeds: Vec<CandidateSeed>) -> Vec<CandidateSession> {
    seeds
        .into_iter()
        .map(|(scope_ix, program_ix, status_ix, owned, created_secs)| {
            let scope = SCOPES[scope_ix as usize];
            CandidateSession {
                id: Uuid::new_v4(),
                scope,
                program: PROGRAMS[program_ix as usize],
                school_id: (scope == SessionScope::Individual)
                    .then(|| if owned { school_id } else { Uuid::new_v4() }),
                status: STATUSES[status_ix as usize],
                session_name: "2026/2027".to_string(),
                start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2027, 7, 15).unwrap(),
                created_at: Utc.timestamp_opt(1_770_000_000 + created_secs, 0).unwrap(),
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Resolution is deterministic: repeated calls over unchanged data
    /// return the same session.
    #[test]
    fn prop_resolution_is_deterministic(
        school_type in school_type_strategy(),
        program in program_strategy(),
        seeds in candidate_seeds(),
    ) {
        let school = SchoolProfile { id: Uuid::new_v4(), school_type, program };
        let candidates = build_candidates(school.id, seeds);

        let first = resolve_session(&school, &candidates).map(|s| s.id);
        let second = resolve_session(&school, &candidates).map(|s| s.id);
        prop_assert_eq!(first, second);
    }

    /// Whatever the resolver returns is ongoing and actually governs the
    /// school: individual sessions belong to it, group sessions cover its
    /// type, and the program is the school's own or one of its components.
    #[test]
    fn prop_resolved_session_governs_school(
        school_type in school_type_strategy(),
        program in program_strategy(),
        seeds in candidate_seeds(),
    ) {
        let school = SchoolProfile { id: Uuid::new_v4(), school_type, program };
        let candidates = build_candidates(school.id, seeds);

        if let Some(found) = resolve_session(&school, &candidates) {
            prop_assert_eq!(found.status, SessionStatus::Ongoing);
            match found.scope {
                SessionScope::Individual => prop_assert_eq!(found.school_id, Some(school.id)),
                scope => prop_assert!(scope.covers_type(school.school_type)),
            }
            prop_assert!(
                found.program == school.program
                    || school.program.components().contains(&found.program)
            );
        }
    }

    /// Shuffling the candidate order never changes the outcome; the
    /// tie-break depends on creation time and id only.
    #[test]
    fn prop_resolution_ignores_candidate_order(
        school_type in school_type_strategy(),
        program in program_strategy(),
        seeds in candidate_seeds(),
    ) {
        let school = SchoolProfile { id: Uuid::new_v4(), school_type, program };
        let candidates = build_candidates(school.id, seeds);
        let mut reversed = candidates.clone();
        reversed.reverse();

        let forward = resolve_session(&school, &candidates).map(|s| s.id);
        let backward = resolve_session(&school, &reversed).map(|s| s.id);
        prop_assert_eq!(forward, backward);
    }
}
