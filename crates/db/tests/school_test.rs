//! Integration tests for the school repository.

mod common;

use samses_db::entities::enums::{Program, SchoolType, SessionScope, SessionStatus};
use samses_db::repositories::calendar::{CalendarRepository, CreateSessionInput};
use samses_db::repositories::school::{
    CreateSchoolInput, SchoolError, SchoolRepository, UpdateSchoolInput,
};
use samses_core::identity::registration_sequence_of;

fn school_input(name: &str, school_type: SchoolType) -> CreateSchoolInput {
    CreateSchoolInput {
        name: name.to_string(),
        abbreviation: None,
        motto: None,
        established_date: None,
        school_type,
        program: Program::Primary,
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

#[tokio::test]
async fn test_registration_numbers_are_sequential_per_type() {
    let (db, _guard) = common::setup_db().await;
    let repo = SchoolRepository::new(db);

    let a = repo.create(school_input("School A", SchoolType::Public)).await.unwrap();
    let b = repo.create(school_input("School B", SchoolType::Public)).await.unwrap();
    let c = repo.create(school_input("School C", SchoolType::Public)).await.unwrap();
    let d = repo.create(school_input("School D", SchoolType::Private)).await.unwrap();

    assert_eq!(a.registration_number, "1001");
    assert_eq!(b.registration_number, "1002");
    assert_eq!(c.registration_number, "1003");
    // Each type counts independently, prefixed with its own code.
    assert_eq!(d.registration_number, "2001");

    let suffixes: Vec<u64> = [&a, &b, &c]
        .iter()
        .map(|s| registration_sequence_of(&s.registration_number).unwrap())
        .collect();
    assert!(suffixes.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_registration_number_is_immutable_across_updates() {
    let (db, _guard) = common::setup_db().await;
    let repo = SchoolRepository::new(db);

    let school = repo.create(school_input("Immutable", SchoolType::Community)).await.unwrap();
    let original = school.registration_number.clone();

    let update = repo
        .update(
            school.id,
            UpdateSchoolInput {
                name: "Renamed School".to_string(),
                abbreviation: Some("RS".to_string()),
                motto: None,
                established_date: None,
                is_vocational: true,
                logo_path: None,
                lga: "Akko".to_string(),
                city: None,
                ward: "Central".to_string(),
                street_address: "New Address".to_string(),
                phone: "08098765432".to_string(),
                email: None,
                website: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(update.school.registration_number, original);
    assert_eq!(update.school.name, "Renamed School");
}

#[tokio::test]
async fn test_duplicate_school_name_is_rejected() {
    let (db, _guard) = common::setup_db().await;
    let repo = SchoolRepository::new(db);

    repo.create(school_input("Unique Name", SchoolType::Public)).await.unwrap();
    let err = repo
        .create(school_input("Unique Name", SchoolType::Private))
        .await
        .unwrap_err();

    assert!(matches!(err, SchoolError::NameTaken(_)));
}

#[tokio::test]
async fn test_update_reports_replaced_logo_path() {
    let (db, _guard) = common::setup_db().await;
    let repo = SchoolRepository::new(db);

    let mut input = school_input("Logo School", SchoolType::Public);
    input.logo_path = Some("/uploads/logos/old.png".to_string());
    let school = repo.create(input).await.unwrap();

    let update = repo
        .update(
            school.id,
            UpdateSchoolInput {
                name: "Logo School".to_string(),
                abbreviation: None,
                motto: None,
                established_date: None,
                is_vocational: false,
                logo_path: Some("/uploads/logos/new.png".to_string()),
                lga: "Gombe".to_string(),
                city: None,
                ward: "Nasarawo".to_string(),
                street_address: "Off Biu Road".to_string(),
                phone: "08012345678".to_string(),
                email: None,
                website: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(update.replaced_logo_path.as_deref(), Some("/uploads/logos/old.png"));
}

#[tokio::test]
async fn test_delete_cascades_dependent_sessions() {
    let (db, _guard) = common::setup_db().await;
    let schools = SchoolRepository::new(db.clone());
    let calendar = CalendarRepository::new(db);

    let school = schools.create(school_input("Doomed", SchoolType::Public)).await.unwrap();
    let session = calendar
        .create_session(CreateSessionInput {
            scope: SessionScope::Individual,
            program: Program::Primary,
            school_id: Some(school.id),
            session_name: "2026/2027".to_string(),
            status: SessionStatus::Ongoing,
            start_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2027, 7, 15).unwrap(),
        })
        .await
        .unwrap();

    schools.delete(school.id).await.unwrap();

    assert!(calendar.find_session(session.id).await.unwrap().is_none());
}
