//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::domain::{AuthenticationTokenManager, PasswordHash};
use crate::infrastructure::database;
use crate::infrastructure::repositories::Repositories;
use crate::infrastructure::security::{Argon2PasswordHash, JwtTokenManager};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{cors, logging};
use crate::shared::id::IdGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repositories: Repositories,
    pub password_hash: Arc<dyn PasswordHash>,
    pub tokens: Arc<dyn AuthenticationTokenManager>,
}

/// Build the full router (routes, tracing, CORS) around a state.
pub fn build_router(state: AppState, settings: &Settings) -> Router {
    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(&settings.cors))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let pool = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");
        }

        let ids = Arc::new(IdGenerator::new(settings.ids.machine_id));

        let state = AppState {
            repositories: Repositories::postgres(pool, ids),
            password_hash: Arc::new(Argon2PasswordHash::new()),
            tokens: Arc::new(JwtTokenManager::new(&settings.jwt)),
        };

        health::init_server_start();
        let router = build_router(state, &settings);

        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
