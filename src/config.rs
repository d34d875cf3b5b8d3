use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "memory" => Ok(StorageBackend::Memory),
            "sqlite" => Ok(StorageBackend::Sqlite),
            other => Err(Error::Config(format!(
                "Unknown storage backend: {} (expected \"memory\" or \"sqlite\")",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub storage_backend: StorageBackend,
    pub database_url: Option<String>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let server_address =
            env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let storage_backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "memory".to_string())
            .parse::<StorageBackend>()?;
        let database_url = env::var("DATABASE_URL").ok();

        if storage_backend == StorageBackend::Sqlite && database_url.is_none() {
            return Err(Error::Config(
                "DATABASE_URL is required when STORAGE_BACKEND=sqlite".to_string(),
            ));
        }

        Ok(Self {
            server_address,
            storage_backend,
            database_url,
        })
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
