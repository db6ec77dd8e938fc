use std::sync::Arc;
use sea_orm::DatabaseConnection;
use crate::stores::PolygonStore;

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared across
/// coordinators and the API layer.
///
/// ```text
/// main.rs
///   ↓ init_database() + migrate_database()
/// AppData::init(db)
///   ├─ db (DatabaseConnection)
///   └─ polygon_store (Arc<PolygonStore>)
///   ↓ wrapped in Arc<AppData>
///   ├─ PolygonCoordinator::new(app_data)
///   └─ HealthApi::new(app_data)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub polygon_store: Arc<PolygonStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The connection should already be migrated.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let polygon_store = Arc::new(PolygonStore::new());

        tracing::info!("AppData initialization complete");

        Self { db, polygon_store }
    }
}
