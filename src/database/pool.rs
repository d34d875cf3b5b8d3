use crate::config::get_config;
use crate::error::{Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub async fn create_pool() -> Result<SqlitePool> {
    let config = get_config();
    let database_url = config.database_url.as_deref().ok_or_else(|| {
        Error::Config("DATABASE_URL is required for the sqlite backend".to_string())
    })?;

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| Error::Config(format!("Invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect_with(options)
        .await?;
    Ok(pool)
}
