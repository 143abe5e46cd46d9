//! Load configuration from environment variables.

use crate::config::types::{AppConfig, DatabaseConfig, DatabaseType, ServerConfig};
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

impl AppConfig {
    /// Read `DATABASE_*` and `LISTEN_ADDR` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_type: DatabaseType = var("DATABASE_TYPE")
            .ok_or(ConfigError::Missing("DATABASE_TYPE"))?
            .parse()?;

        let mut database = DatabaseConfig::new(database_type);
        if let Some(host) = var("DATABASE_HOST") {
            database.host = host;
        }
        if let Some(name) = var("DATABASE_NAME") {
            database.name = name;
        }
        if let Some(user) = var("DATABASE_USER") {
            database.user = user;
        }
        database.password = var("DATABASE_PASSWORD");
        if let Some(port) = var("DATABASE_PORT") {
            database.port = Some(parse_var("DATABASE_PORT", &port)?);
        }
        if let Some(max) = var("DATABASE_MAX_CONNECTIONS") {
            database.max_connections = parse_var("DATABASE_MAX_CONNECTIONS", &max)?;
        }
        if let Some(secs) = var("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            database.acquire_timeout = Duration::from_secs(parse_var("DATABASE_ACQUIRE_TIMEOUT_SECS", &secs)?);
        }

        let mut server = ServerConfig::default();
        if let Some(addr) = var("LISTEN_ADDR") {
            server.listen_addr = addr;
        }

        Ok(AppConfig { server, database })
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
