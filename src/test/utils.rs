// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use migration::{MigratorTrait, PolygonMigrator};
use sea_orm::{Database, DatabaseConnection};

use crate::app_data::AppData;

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    PolygonMigrator::up(&db, None)
        .await
        .expect("Failed to run polygon migrations");

    db
}

/// Creates AppData backed by a fresh in-memory database
///
/// Returns (db, app_data); callers keep the connection to inspect rows directly.
pub async fn setup_test_app_data() -> (DatabaseConnection, Arc<AppData>) {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::init(db.clone()));

    (db, app_data)
}
