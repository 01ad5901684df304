//! userdir API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod dto;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;
use tracing::info;

use userdir_application::{UserDirectoryService, UserRepository};
use userdir_core::AppError;
use userdir_infrastructure::{InMemoryUserRepository, PostgresUserRepository};

use crate::api_config::{ApiConfig, UserStoreConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let user_repository: Arc<dyn UserRepository> = match &config.user_store {
        UserStoreConfig::Postgres { database_url } => {
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(database_url)
                .await
                .map_err(|error| {
                    AppError::Internal(format!("failed to connect to database: {error}"))
                })?;

            sqlx::migrate!("../../crates/infrastructure/migrations")
                .run(&pool)
                .await
                .map_err(|error| {
                    AppError::Internal(format!("failed to run migrations: {error}"))
                })?;

            if config.migrate_only {
                info!("database migrations applied successfully");
                return Ok(());
            }

            Arc::new(PostgresUserRepository::new(pool))
        }
        UserStoreConfig::InMemory => {
            if config.migrate_only {
                return Err(AppError::Validation(
                    "migrate requires USER_STORE=postgres".to_owned(),
                ));
            }

            let repository = Arc::new(InMemoryUserRepository::new());
            seed_dev_users(&repository).await?;
            repository
        }
    };

    let app_state = AppState {
        user_directory_service: UserDirectoryService::new(user_repository),
    };

    let app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/api/users", get(handlers::users::list_users_handler))
        .route("/api/users/{user_id}", get(handlers::users::get_user_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let address = config.socket_address()?;

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "userdir-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

/// Seeds a handful of users so the memory store is not empty on startup.
async fn seed_dev_users(repository: &InMemoryUserRepository) -> Result<(), AppError> {
    let samples = [
        ("Ada Lovelace", "ada@example.com"),
        ("Grace Hopper", "grace@example.com"),
        ("Edsger Dijkstra", "edsger@example.com"),
    ];

    for (display_name, email) in samples {
        repository.insert(display_name, email).await?;
    }

    info!(count = samples.len(), "seeded in-memory user store");
    Ok(())
}
