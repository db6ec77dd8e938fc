// Common test utilities for integration tests

use std::sync::Arc;

use migration::{MigratorTrait, PolygonMigrator};
use poem::test::TestClient;
use poem::Endpoint;
use sea_orm::{Database, DatabaseConnection};

use polygon_manager_backend::api::build_routes;
use polygon_manager_backend::AppData;

/// Creates an in-memory polygon database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    PolygonMigrator::up(&db, None)
        .await
        .expect("Failed to run polygon migrations");

    db
}

/// Full route tree over a fresh database, as main.rs builds it
///
/// Returns the connection too so tests can close it or inspect rows.
pub async fn setup_test_client() -> (DatabaseConnection, TestClient<impl Endpoint>) {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::init(db.clone()));
    let app = build_routes(app_data, "http://localhost:3000", "*");

    (db, TestClient::new(app))
}
