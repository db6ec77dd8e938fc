// CLI module for operating on the polygon database without the HTTP server

pub mod migrate;
pub mod polygons;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;
use crate::coordinators::PolygonCoordinator;

/// Polygon manager CLI
#[derive(Parser, Debug)]
#[command(name = "polygon-manager")]
#[command(about = "Polygon manager backend and maintenance CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,

    /// List stored polygons, newest first
    List,

    /// Show a single polygon
    Show {
        /// Polygon id
        id: String,
    },

    /// Delete a polygon
    Delete {
        /// Polygon id
        id: String,
    },
}

impl Cli {
    /// The subcommand to run, with `serve` standing in for none
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}

/// Execute a data command against an initialized AppData
///
/// `serve` and `migrate` are driven from main.rs since they need the
/// settings and the raw connection rather than the stores.
pub async fn execute_command(
    command: &Commands,
    app_data: Arc<AppData>,
) -> Result<(), Box<dyn std::error::Error>> {
    let coordinator = PolygonCoordinator::new(app_data);

    match command {
        Commands::List => polygons::list_polygons(&coordinator).await?,
        Commands::Show { id } => polygons::show_polygon(&coordinator, id).await?,
        Commands::Delete { id } => polygons::delete_polygon(&coordinator, id).await?,
        Commands::Serve | Commands::Migrate => {
            return Err(format!("{:?} is not a data command", command).into());
        }
    }

    Ok(())
}
