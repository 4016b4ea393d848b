//! CLI module for the gallery account service
//!
//! - `serve`: run the HTTP API (default)
//! - `migrate`: apply or revert account store migrations

pub mod migrate;
pub mod serve;

use std::net::SocketAddr;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Gallery accounts - registration, login, profile and account deletion
#[derive(Parser)]
#[command(name = "gallery-accounts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve,

    /// Apply pending schema migrations and exit
    Migrate(migrate::MigrateArgs),
}

/// Load `.env`, configuration and the tracing subscriber
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    config
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
