use std::sync::Arc;

use clap::Parser;
use poem::{listener::TcpListener, Server};

use polygon_manager_backend::api::build_routes;
use polygon_manager_backend::cli::{self, Cli, Commands};
use polygon_manager_backend::config::{init_database, init_logging, migrate_database, BootstrapSettings};
use polygon_manager_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();

    let bootstrap_settings = BootstrapSettings::from_env()?;
    tracing::debug!("Bootstrap settings: {:?}", bootstrap_settings);

    if cli.command() == &Commands::Migrate {
        return cli::migrate::run_migrations(&bootstrap_settings).await;
    }

    let db = init_database(&bootstrap_settings).await?;
    migrate_database(&db).await?;

    let app_data = Arc::new(AppData::init(db));

    match cli.command() {
        Commands::Serve => {
            let app = build_routes(
                app_data,
                bootstrap_settings.public_url(),
                bootstrap_settings.cors_origin(),
            );

            let bind_address = bootstrap_settings.server_address();
            tracing::info!("Server listening on http://{}", bind_address);
            tracing::info!("Swagger UI available at {}/swagger", bootstrap_settings.public_url());

            Server::new(TcpListener::bind(bind_address)).run(app).await?;
        }
        command => cli::execute_command(command, app_data).await?,
    }

    Ok(())
}
