//! Gallery Accounts
//!
//! User account lifecycle for an image gallery:
//! - Registration with unique names and salted password hashes
//! - Login verification
//! - Profile updates
//! - Account deletion that also purges the user's uploads on the media
//!   storage service

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use api::state::{AccountServiceTrait, AppState};
use config::DatabaseConfig;
use infrastructure::account::AccountService;
use infrastructure::media::{
    HttpMediaStorageClient, InMemoryMediaAssetRepository, PostgresMediaAssetRepository,
};
use infrastructure::storage::{connect_pool, run_account_migrations, PostgresConfig};
use infrastructure::user::{Argon2Hasher, InMemoryUserRepository, PostgresUserRepository};

/// Create application state from the loaded configuration
///
/// Uses PostgreSQL when `database.url` is set and the in-memory store otherwise.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let hasher = Arc::new(Argon2Hasher::with_params(
        config.security.memory_kib,
        config.security.iterations,
        config.security.parallelism,
    )?);
    let client = Arc::new(HttpMediaStorageClient::new(Duration::from_secs(
        config.media.request_timeout_secs,
    ))?);

    let account_service: Arc<dyn AccountServiceTrait> = match postgres_config(&config.database) {
        Some(postgres) => {
            info!("Connecting to PostgreSQL...");
            let pool = connect_pool(&postgres).await?;

            if config.database.run_migrations {
                let applied = run_account_migrations(&pool).await?;
                info!(applied, "Account store migrations checked");
            }

            Arc::new(AccountService::new(
                Arc::new(PostgresUserRepository::new(pool.clone())),
                Arc::new(PostgresMediaAssetRepository::new(pool)),
                hasher,
                client,
            ))
        }
        None => {
            warn!("database.url not set, using in-memory account store; data is lost on restart");

            Arc::new(AccountService::new(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryMediaAssetRepository::new()),
                hasher,
                client,
            ))
        }
    };

    Ok(AppState::new(account_service))
}

/// Pool settings for the configured database, if any
pub fn postgres_config(database: &DatabaseConfig) -> Option<PostgresConfig> {
    let url = database.url.as_deref().filter(|url| !url.trim().is_empty())?;

    Some(
        PostgresConfig::new(url)
            .with_max_connections(database.max_connections)
            .with_min_connections(database.min_connections)
            .with_connect_timeout(database.connect_timeout_secs)
            .with_idle_timeout(database.idle_timeout_secs),
    )
}
