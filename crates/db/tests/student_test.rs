//! Integration tests for student registration, admission, and enrollment.

mod common;

use chrono::{Days, NaiveDate, Utc};
use samses_core::enrollment::EnrollmentError;
use samses_core::identity::luhn;
use samses_db::entities::enums::{EnrollmentMode, Gender, Program, SchoolType, SessionScope, SessionStatus};
use samses_db::repositories::calendar::{CalendarRepository, CreateSessionInput};
use samses_db::repositories::school::{CreateSchoolInput, SchoolRepository};
use samses_db::repositories::student::{
    CreateAdmissionInput, CreateEnrollmentInput, CreateStudentInput, StudentError,
    StudentRepository,
};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn student_input(first: &str, last: &str) -> CreateStudentInput {
    CreateStudentInput {
        first_name: first.to_string(),
        last_name: last.to_string(),
        middle_name: String::new(),
        date_of_birth: d(2015, 3, 12),
        gender: Gender::Female,
        country_of_birth: "Nigeria".to_string(),
        state_of_origin: "Gombe".to_string(),
        place_of_birth: "Akko".to_string(),
        address: None,
        email: None,
        phone_number: Some("08012345678".to_string()),
        passport_photo_path: None,
        school_id: None,
    }
}

async fn seed_school(db: &DatabaseConnection) -> Uuid {
    let schools = SchoolRepository::new(db.clone());
    schools
        .create(CreateSchoolInput {
            name: format!("Test School {}", Uuid::new_v4()),
            abbreviation: None,
            motto: None,
            established_date: None,
            school_type: SchoolType::Public,
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
        })
        .await
        .expect("Failed to seed school")
        .id
}

#[tokio::test]
async fn test_student_gets_eleven_digit_registration_number() {
    let (db, _guard) = common::setup_db().await;
    let repo = StudentRepository::new(db);

    let student = repo.create(student_input("Amina", "Bello")).await.unwrap();

    assert_eq!(student.reg_num.len(), 11);
    assert!(student.reg_num.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_registration_numbers_are_unique_across_students() {
    let (db, _guard) = common::setup_db().await;
    let repo = StudentRepository::new(db);

    let mut seen = std::collections::HashSet::new();
    for i in 0..20 {
        let student = repo
            .create(student_input(&format!("First{}", name_suffix(i)), "Sani"))
            .await
            .unwrap();
        assert!(seen.insert(student.reg_num), "duplicate registration number issued");
    }
}

/// Names must be alphabetic, so spell the counter out.
fn name_suffix(i: u32) -> String {
    let letters = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];
    format!(
        "{}{}",
        letters[(i / 10) as usize % 10],
        letters[(i % 10) as usize]
    )
}

#[tokio::test]
async fn test_duplicate_identity_tuple_is_rejected() {
    let (db, _guard) = common::setup_db().await;
    let repo = StudentRepository::new(db);

    repo.create(student_input("Musa", "Adamu")).await.unwrap();
    let err = repo.create(student_input("Musa", "Adamu")).await.unwrap_err();

    assert!(matches!(err, StudentError::DuplicateStudent));
}

#[tokio::test]
async fn test_same_name_different_origin_is_allowed() {
    let (db, _guard) = common::setup_db().await;
    let repo = StudentRepository::new(db);

    repo.create(student_input("Musa", "Adamu")).await.unwrap();
    let mut other = student_input("Musa", "Adamu");
    other.state_of_origin = "Bauchi".to_string();
    repo.create(other).await.unwrap();
}

#[tokio::test]
async fn test_minimum_age_is_enforced() {
    let (db, _guard) = common::setup_db().await;
    let repo = StudentRepository::new(db);

    let mut input = student_input("Hassan", "Umar");
    input.date_of_birth = Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(365 * 2))
        .unwrap();
    let err = repo.create(input).await.unwrap_err();

    match err {
        StudentError::Validation(rule) => {
            assert_eq!(rule, EnrollmentError::TooYoung { min_years: 4 });
            assert_eq!(rule.field(), "date_of_birth");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_phone_number_is_rejected() {
    let (db, _guard) = common::setup_db().await;
    let repo = StudentRepository::new(db);

    let mut input = student_input("Zainab", "Yusuf");
    input.phone_number = Some("12345".to_string());
    let err = repo.create(input).await.unwrap_err();

    assert!(matches!(
        err,
        StudentError::Validation(EnrollmentError::InvalidPhoneNumber)
    ));
}

#[tokio::test]
async fn test_admission_number_carries_a_valid_check_digit() {
    let (db, _guard) = common::setup_db().await;
    let school_id = seed_school(&db).await;
    let repo = StudentRepository::new(db);

    let student = repo.create(student_input("Fatima", "Garba")).await.unwrap();
    let admission = repo
        .create_admission(CreateAdmissionInput {
            student_id: student.id,
            school_id,
            admission_date: d(2026, 9, 7),
            level: "Primary 1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(admission.admission_number.len(), 11);
    assert!(luhn::verify(&admission.admission_number));
}

#[tokio::test]
async fn test_second_admission_is_rejected() {
    let (db, _guard) = common::setup_db().await;
    let school_id = seed_school(&db).await;
    let repo = StudentRepository::new(db);

    let student = repo.create(student_input("Ibrahim", "Waziri")).await.unwrap();
    let input = CreateAdmissionInput {
        student_id: student.id,
        school_id,
        admission_date: d(2026, 9, 7),
        level: "Primary 1".to_string(),
    };

    repo.create_admission(input.clone()).await.unwrap();
    let err = repo.create_admission(input).await.unwrap_err();

    assert!(matches!(err, StudentError::AlreadyAdmitted(_)));
}

#[tokio::test]
async fn test_one_enrollment_per_student_per_session() {
    let (db, _guard) = common::setup_db().await;
    let school_id = seed_school(&db).await;
    let calendar = CalendarRepository::new(db.clone());
    let repo = StudentRepository::new(db);

    let session = calendar
        .create_session(CreateSessionInput {
            scope: SessionScope::Public,
            program: Program::Primary,
            school_id: None,
            session_name: "2026/2027".to_string(),
            status: SessionStatus::Ongoing,
            start_date: d(2026, 9, 1),
            end_date: d(2027, 7, 15),
        })
        .await
        .unwrap();

    let student = repo.create(student_input("Maryam", "Shehu")).await.unwrap();
    let input = CreateEnrollmentInput {
        student_id: student.id,
        school_id,
        academic_session_id: session.id,
        level: "Primary 1".to_string(),
        stream: None,
        mode: EnrollmentMode::Fresh,
        enrollment_date: d(2026, 9, 7),
    };

    repo.create_enrollment(input.clone()).await.unwrap();
    let err = repo.create_enrollment(input).await.unwrap_err();

    assert!(matches!(err, StudentError::AlreadyEnrolled(_)));
    assert_eq!(repo.list_enrollments(student.id).await.unwrap().len(), 1);
}
