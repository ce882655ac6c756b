//! Integration tests for session resolution, term validation, and the
//! batch completion action.

mod common;

use chrono::{Days, NaiveDate, Utc};
use samses_core::calendar::CalendarError as RuleError;
use samses_db::entities::enums::{Program, SchoolType, SessionScope, SessionStatus};
use samses_db::repositories::calendar::{
    CalendarError, CalendarRepository, CreateSessionInput, CreateTermInput,
};
use samses_db::repositories::school::{CreateSchoolInput, SchoolRepository};
use uuid::Uuid;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn school_input(name: &str, school_type: SchoolType, program: Program) -> CreateSchoolInput {
    CreateSchoolInput {
        name: name.to_string(),
        abbreviation: None,
        motto: None,
        established_date: None,
        school_type,
        program,
        is_vocational: false,
        logo_path: None,
        lga: "Gombe".to_string(),
        city: None,
        ward: "Nasarawo".to_string(),
        street_address: "Off Biu Road".to_string(),
        phone: "08012345678".to_string(),
        email: None,
        website: None,
    }
}

fn session_input(
    scope: SessionScope,
    program: Program,
    school_id: Option<Uuid>,
    name: &str,
) -> CreateSessionInput {
    CreateSessionInput {
        scope,
        program,
        school_id,
        session_name: name.to_string(),
        status: SessionStatus::Ongoing,
        start_date: d(2026, 9, 1),
        end_date: d(2027, 7, 15),
    }
}

#[tokio::test]
async fn test_group_session_resolves_for_matching_school() {
    let (db, _guard) = common::setup_db().await;
    let schools = SchoolRepository::new(db.clone());
    let calendar = CalendarRepository::new(db);

    let school = schools
        .create(school_input("School A", SchoolType::Public, Program::Primary))
        .await
        .unwrap();
    let session = calendar
        .create_session(session_input(SessionScope::Public, Program::Primary, None, "2026/2027"))
        .await
        .unwrap();

    let resolved = calendar.resolve_for_school(&school).await.unwrap();
    assert_eq!(resolved.map(|s| s.id), Some(session.id));
}

#[tokio::test]
async fn test_compound_program_decomposes_when_no_exact_match() {
    let (db, _guard) = common::setup_db().await;
    let schools = SchoolRepository::new(db.clone());
    let calendar = CalendarRepository::new(db);

    let school = schools
        .create(school_input("School B", SchoolType::Private, Program::JssSss))
        .await
        .unwrap();
    let session = calendar
        .create_session(session_input(SessionScope::All, Program::Jss, None, "2026/2027"))
        .await
        .unwrap();

    let resolved = calendar.resolve_for_school(&school).await.unwrap();
    assert_eq!(resolved.map(|s| s.id), Some(session.id));
}

#[tokio::test]
async fn test_individual_session_wins_and_resolution_is_stable() {
    let (db, _guard) = common::setup_db().await;
    let schools = SchoolRepository::new(db.clone());
    let calendar = CalendarRepository::new(db);

    let school = schools
        .create(school_input("School C", SchoolType::Public, Program::Jss))
        .await
        .unwrap();
    calendar
        .create_session(session_input(SessionScope::Public, Program::Jss, None, "group"))
        .await
        .unwrap();
    let individual = calendar
        .create_session(session_input(
            SessionScope::Individual,
            Program::Jss,
            Some(school.id),
            "individual",
        ))
        .await
        .unwrap();

    let first = calendar.resolve_for_school(&school).await.unwrap().map(|s| s.id);
    let second = calendar.resolve_for_school(&school).await.unwrap().map(|s| s.id);

    assert_eq!(first, Some(individual.id));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_no_ongoing_session_resolves_to_none() {
    let (db, _guard) = common::setup_db().await;
    let schools = SchoolRepository::new(db.clone());
    let calendar = CalendarRepository::new(db);

    let school = schools
        .create(school_input("School D", SchoolType::Community, Program::Sss))
        .await
        .unwrap();
    let mut input = session_input(SessionScope::Community, Program::Sss, None, "2025/2026");
    input.status = SessionStatus::Completed;
    calendar.create_session(input).await.unwrap();

    assert!(calendar.resolve_for_school(&school).await.unwrap().is_none());
}

#[tokio::test]
async fn test_individual_scope_requires_school_link() {
    let (db, _guard) = common::setup_db().await;
    let calendar = CalendarRepository::new(db);

    let err = calendar
        .create_session(session_input(SessionScope::Individual, Program::Primary, None, "x"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CalendarError::Validation(RuleError::IndividualScopeRequiresSchool)
    ));
}

#[tokio::test]
async fn test_group_scope_rejects_school_link() {
    let (db, _guard) = common::setup_db().await;
    let schools = SchoolRepository::new(db.clone());
    let calendar = CalendarRepository::new(db);

    let school = schools
        .create(school_input("School E", SchoolType::Public, Program::Primary))
        .await
        .unwrap();
    let err = calendar
        .create_session(session_input(SessionScope::Public, Program::Primary, Some(school.id), "x"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CalendarError::Validation(RuleError::SchoolForbiddenForScope)
    ));
}

#[tokio::test]
async fn test_complete_all_ongoing_is_idempotent() {
    let (db, _guard) = common::setup_db().await;
    let calendar = CalendarRepository::new(db);

    calendar
        .create_session(session_input(SessionScope::All, Program::All, None, "2025/2026"))
        .await
        .unwrap();
    calendar
        .create_session(session_input(SessionScope::Public, Program::Primary, None, "2026/2027"))
        .await
        .unwrap();
    let mut upcoming = session_input(SessionScope::Private, Program::Jss, None, "2027/2028");
    upcoming.status = SessionStatus::Upcoming;
    let upcoming = calendar.create_session(upcoming).await.unwrap();

    let first = calendar.complete_all_ongoing().await.unwrap();
    assert_eq!(first, 2);

    // Second invocation changes zero rows and still succeeds.
    let second = calendar.complete_all_ongoing().await.unwrap();
    assert_eq!(second, 0);

    for session in calendar.list_sessions().await.unwrap() {
        if session.id == upcoming.id {
            assert_eq!(session.status, SessionStatus::Upcoming);
        } else {
            assert_eq!(session.status, SessionStatus::Completed);
        }
    }
}

#[tokio::test]
async fn test_term_windows_are_validated_against_session_and_siblings() {
    let (db, _guard) = common::setup_db().await;
    let calendar = CalendarRepository::new(db);

    let session = calendar
        .create_session(session_input(SessionScope::All, Program::All, None, "2026/2027"))
        .await
        .unwrap();

    calendar
        .create_term(CreateTermInput {
            academic_session_id: session.id,
            term_number: 1,
            start_date: d(2026, 9, 7),
            end_date: d(2026, 12, 18),
        })
        .await
        .unwrap();

    // Overlapping the first term is rejected with a field-scoped error.
    let overlap = calendar
        .create_term(CreateTermInput {
            academic_session_id: session.id,
            term_number: 2,
            start_date: d(2026, 12, 10),
            end_date: d(2027, 4, 1),
        })
        .await
        .unwrap_err();
    match overlap {
        CalendarError::Validation(rule) => {
            assert_eq!(rule, RuleError::OverlappingTerms { other: 1 });
            assert_eq!(rule.field(), "start_date");
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    // Reaching past the session end is rejected.
    let past_end = calendar
        .create_term(CreateTermInput {
            academic_session_id: session.id,
            term_number: 2,
            start_date: d(2027, 1, 4),
            end_date: d(2027, 8, 1),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        past_end,
        CalendarError::Validation(RuleError::TermEndsAfterSession)
    ));

    // A valid second and third term complete the calendar.
    calendar
        .create_term(CreateTermInput {
            academic_session_id: session.id,
            term_number: 2,
            start_date: d(2027, 1, 4),
            end_date: d(2027, 4, 1),
        })
        .await
        .unwrap();
    calendar
        .create_term(CreateTermInput {
            academic_session_id: session.id,
            term_number: 3,
            start_date: d(2027, 4, 19),
            end_date: d(2027, 7, 10),
        })
        .await
        .unwrap();

    // Term numbers are unique per session.
    let duplicate = calendar
        .create_term(CreateTermInput {
            academic_session_id: session.id,
            term_number: 3,
            start_date: d(2027, 7, 11),
            end_date: d(2027, 7, 14),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        duplicate,
        CalendarError::Validation(RuleError::DuplicateTermNumber)
    ));

    assert_eq!(calendar.list_terms(session.id).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_current_calendar_returns_todays_term() {
    let (db, _guard) = common::setup_db().await;
    let schools = SchoolRepository::new(db.clone());
    let calendar = CalendarRepository::new(db);

    let school = schools
        .create(school_input("School F", SchoolType::Public, Program::Primary))
        .await
        .unwrap();

    let today = Utc::now().date_naive();
    let session = calendar
        .create_session(CreateSessionInput {
            scope: SessionScope::Public,
            program: Program::Primary,
            school_id: None,
            session_name: "current".to_string(),
            status: SessionStatus::Ongoing,
            start_date: today.checked_sub_days(Days::new(60)).unwrap(),
            end_date: today.checked_add_days(Days::new(200)).unwrap(),
        })
        .await
        .unwrap();
    calendar
        .create_term(CreateTermInput {
            academic_session_id: session.id,
            term_number: 1,
            start_date: today.checked_sub_days(Days::new(10)).unwrap(),
            end_date: today.checked_add_days(Days::new(10)).unwrap(),
        })
        .await
        .unwrap();

    let current = calendar.current_calendar(&school, today).await.unwrap().unwrap();
    assert_eq!(current.session.id, session.id);
    assert_eq!(current.term.map(|t| t.term_number), Some(1));
}
