use crate::config::{init_database, migrate_database, BootstrapSettings};

/// Connect to the configured database and apply pending migrations
///
/// Does not build AppData; the connection is dropped afterwards.
pub async fn run_migrations(bootstrap_settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    let db = init_database(bootstrap_settings).await?;
    migrate_database(&db).await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}
