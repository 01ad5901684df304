use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use tracing_subscriber::EnvFilter;
use userdir_core::AppError;

/// Selected user store backend.
#[derive(Debug, Clone)]
pub enum UserStoreConfig {
    /// Persist users in PostgreSQL.
    Postgres {
        /// Connection string for the database.
        database_url: String,
    },
    /// Hold users in process memory (development only).
    InMemory,
}

/// Runtime configuration for the API process.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub user_store: UserStoreConfig,
    pub api_host: String,
    pub api_port: u16,
}

impl ApiConfig {
    /// Loads configuration from the process environment.
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        let user_store = match env::var("USER_STORE")
            .unwrap_or_else(|_| "postgres".to_owned())
            .as_str()
        {
            "postgres" => UserStoreConfig::Postgres {
                database_url: required_env("DATABASE_URL")?,
            },
            "memory" => UserStoreConfig::InMemory,
            other => {
                return Err(AppError::Validation(format!(
                    "USER_STORE must be either 'postgres' or 'memory', got '{other}'"
                )));
            }
        };

        Ok(Self {
            migrate_only,
            user_store,
            api_host,
            api_port,
        })
    }

    /// Returns the socket address the listener should bind.
    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}
