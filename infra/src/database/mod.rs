//! Database module - MySQL implementations using SQLx

pub mod mysql;

pub use mysql::MySqlTokenRepository;

use std::time::Duration;

use hcm_shared::config::DatabaseConfig;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

/// Create a MySQL connection pool from configuration
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    tracing::info!(max_connections = config.max_connections, "connecting to database");

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect(&config.url)
        .await
}
