//! Runtime configuration from environment variables.

use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_STORAGE_PATH: &str = "storage/students.db";
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file. From `STORAGE_PATH`.
    pub storage_path: PathBuf,
    /// Listen address. From `HTTP_ADDR`.
    pub http_addr: String,
    /// Pool size. From `DATABASE_MAX_CONNECTIONS`.
    pub max_connections: u32,
    /// Request body cap in bytes. From `BODY_LIMIT_BYTES`.
    pub body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build config from any variable source; unset or empty variables keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();
        if let Some(path) = get("STORAGE_PATH") {
            config.storage_path = PathBuf::from(path);
        }
        if let Some(addr) = get("HTTP_ADDR") {
            config.http_addr = addr;
        }
        if let Some(v) = get("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = parse("DATABASE_MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = get("BODY_LIMIT_BYTES") {
            config.body_limit = parse("BODY_LIMIT_BYTES", &v)?;
        }
        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}
