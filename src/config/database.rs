use sea_orm::{Database, DatabaseConnection};
use migration::{MigratorTrait, PolygonMigrator};

use crate::config::BootstrapSettings;
use crate::errors::internal::{DatabaseError, InternalError};

/// Connect to the polygon database
///
/// Does NOT run migrations - call `migrate_database()` separately.
pub async fn init_database(bootstrap_settings: &BootstrapSettings) -> Result<DatabaseConnection, InternalError> {
    let database_url = bootstrap_settings.database_url();

    let db = Database::connect(database_url)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to database: {}", database_url);

    Ok(db)
}

/// Apply every pending migration to the given connection
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    PolygonMigrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration { source })?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
