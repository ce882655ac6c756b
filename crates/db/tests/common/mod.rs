//! Shared test harness: a throwaway SQLite database with the full schema.

use samses_db::migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tempfile::TempDir;

/// Creates a migrated database on a temp file.
///
/// The `TempDir` guard must stay alive for the duration of the test.
pub async fn setup_db() -> (DatabaseConnection, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("samses_test.sqlite");
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let db = Database::connect(&url)
        .await
        .expect("Failed to connect to test database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    (db, dir)
}
