//! Concurrent-creation stress test for the registration number sequence.
//!
//! Two schools of the same type registered simultaneously must never
//! compute the same next sequence; the counter-table UPDATE inside the
//! create transaction serializes them.

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use samses_core::identity::registration_sequence_of;
use samses_db::entities::enums::{Program, SchoolType};
use samses_db::repositories::school::{CreateSchoolInput, SchoolRepository};
use tokio::sync::Barrier;

const WRITERS: usize = 10;

#[tokio::test]
async fn test_concurrent_creates_never_duplicate_a_sequence() {
    let (db, _guard) = common::setup_db().await;
    let repo = SchoolRepository::new(db);
    let barrier = Arc::new(Barrier::new(WRITERS));

    let tasks = (0..WRITERS).map(|i| {
        let repo = repo.clone();
        let barrier = Arc::clone(&barrier);
        async move {
            // Line every writer up so the creates race for real.
            barrier.wait().await;
            repo.create(CreateSchoolInput {
                name: format!("Concurrent School {i}"),
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
        }
    });

    let results = join_all(tasks).await;

    let mut sequences = HashSet::new();
    for result in results {
        let school = result.expect("concurrent create should succeed");
        let sequence = registration_sequence_of(&school.registration_number)
            .expect("registration number carries a sequence");
        assert!(
            sequences.insert(sequence),
            "sequence {sequence} was handed out twice"
        );
    }

    // No duplicates and no gaps: exactly 1..=WRITERS was assigned.
    let expected: HashSet<u64> = (1..=WRITERS as u64).collect();
    assert_eq!(sequences, expected);
}
