use anyhow::Result;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use shared_config::AppConfig;

/// Build the shared MySQL pool at startup.
///
/// Every action handler borrows a connection from this pool for the duration
/// of a single query; nothing opens its own connection.
pub async fn connect(config: &AppConfig) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url())
        .await?;

    info!(
        "Connected to MySQL database {} at {}:{}",
        config.db_name, config.db_host, config.db_port
    );

    Ok(pool)
}
