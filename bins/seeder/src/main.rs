//! Database seeder for SAMSES development and testing.
//!
//! Seeds the ministry subject catalogue, a demo school with an ongoing
//! session and three terms, a standard grading scale, and a basic fee
//! structure.
//!
//! Usage: cargo run --bin seeder

use chrono::NaiveDate;
use samses_db::entities::enums::{
    FeeType, Program, SchoolType, SessionScope, SessionStatus, SubjectCategory,
};
use samses_db::repositories::calendar::{CreateSessionInput, CreateTermInput};
use samses_db::repositories::finance::CreateFeeInput;
use samses_db::repositories::school::CreateSchoolInput;
use samses_db::repositories::subject::CreateSubjectInput;
use samses_db::{CalendarRepository, FinanceRepository, GradingRepository, SchoolRepository, SubjectRepository};
use samses_shared::types::Money;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = samses_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding subject catalogue...");
    let subjects = SubjectRepository::new(db.clone());
    for (name, category, program) in [
        ("Mathematics", SubjectCategory::Core, Program::Primary),
        ("Mathematics", SubjectCategory::Core, Program::Jss),
        ("English Language", SubjectCategory::Core, Program::Primary),
        ("English Language", SubjectCategory::Core, Program::Jss),
        ("Basic Science", SubjectCategory::Core, Program::Jss),
        ("Islamic Studies", SubjectCategory::Religious, Program::Primary),
        ("Christian Religious Studies", SubjectCategory::Religious, Program::Primary),
        ("Hausa", SubjectCategory::LocalLanguage, Program::Primary),
    ] {
        let result = subjects
            .create(CreateSubjectInput {
                subject_name: name.to_string(),
                category,
                program,
                description: String::new(),
            })
            .await;
        if let Err(e) = result {
            println!("  skipped {name}: {e}");
        }
    }

    println!("Seeding demo school...");
    let schools = SchoolRepository::new(db.clone());
    let school = schools
        .create(CreateSchoolInput {
            name: "Government Primary School Nasarawo".to_string(),
            abbreviation: Some("GPS Nasarawo".to_string()),
            motto: Some("Knowledge and Discipline".to_string()),
            established_date: Some(date(1978, 1, 16)),
            school_type: SchoolType::Public,
            program: Program::PrimaryJss,
            is_vocational: false,
            logo_path: None,
            lga: "Gombe".to_string(),
            city: Some("Gombe".to_string()),
            ward: "Nasarawo".to_string(),
            street_address: "Off Biu Road, Nasarawo".to_string(),
            phone: "08012345678".to_string(),
            email: Some("gps.nasarawo@education.gov.ng".to_string()),
            website: None,
        })
        .await
        .expect("Failed to seed demo school");
    println!("  registration number: {}", school.registration_number);

    println!("Seeding academic session and terms...");
    let calendar = CalendarRepository::new(db.clone());
    let session = calendar
        .create_session(CreateSessionInput {
            scope: SessionScope::Public,
            program: Program::PrimaryJss,
            school_id: None,
            session_name: "2026/2027".to_string(),
            status: SessionStatus::Ongoing,
            start_date: date(2026, 9, 7),
            end_date: date(2027, 7, 16),
        })
        .await
        .expect("Failed to seed session");
    for (number, start, end) in [
        (1_i16, date(2026, 9, 7), date(2026, 12, 18)),
        (2, date(2027, 1, 4), date(2027, 4, 1)),
        (3, date(2027, 4, 19), date(2027, 7, 16)),
    ] {
        calendar
            .create_term(CreateTermInput {
                academic_session_id: session.id,
                term_number: number,
                start_date: start,
                end_date: end,
            })
            .await
            .expect("Failed to seed term");
    }

    println!("Seeding grading scale...");
    let grading = GradingRepository::new(db.clone());
    let scale = grading
        .create_scale("Standard Scale", "Ministry standard grading")
        .await
        .expect("Failed to seed grading scale");
    for (grade, lower, upper) in [
        ("A", 70_u16, 100_u16),
        ("B", 60, 69),
        ("C", 50, 59),
        ("D", 40, 49),
        ("F", 0, 39),
    ] {
        grading
            .add_boundary(scale.id, grade, lower, upper)
            .await
            .expect("Failed to seed grade boundary");
    }

    println!("Seeding fee structure...");
    let finance = FinanceRepository::new(db.clone());
    for (fee_type, optional, naira) in [
        (FeeType::Tuition, false, 30_000_i64),
        (FeeType::Exam, false, 5_000),
        (FeeType::Sports, false, 1_500),
        (FeeType::ExtraLesson, true, 8_000),
    ] {
        finance
            .create_fee(CreateFeeInput {
                school_id: school.id,
                level: "Primary 1".to_string(),
                fee_type,
                is_optional: optional,
                amount: Money::from_naira(naira),
                description: String::new(),
            })
            .await
            .expect("Failed to seed fee");
    }

    println!("Seeding complete!");
}
