//! Server Initialization
//!
//! Loads configuration, installs logging, and launches the HTTP server.

use std::path::Path;

use portal_infrastructure::config::{AppConfig, ConfigLoader};
use tracing::info;

use crate::routes::portal_rocket;

/// Run the portal HTTP server until shutdown
pub async fn run_server(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    portal_infrastructure::logging::init_logging(config.logging.clone())?;

    info!(
        address = %config.server.address,
        port = config.server.port,
        "Starting portal server"
    );

    portal_rocket(&config.server)?.launch().await?;

    info!("Portal server stopped");
    Ok(())
}

/// Load configuration from optional path
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}
