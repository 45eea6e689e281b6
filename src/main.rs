//! # Forum API
//!
//! Application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use forum_api::config::Settings;
use forum_api::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment and config files
    let settings = Settings::load()?;

    forum_api::telemetry::init_tracing(settings.is_production());

    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
