//! Runtime configuration types: database backend selection and server binding.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATABASE_HOST: &str = "localhost";
pub const DEFAULT_DATABASE_NAME: &str = "wishlist";
pub const DEFAULT_DATABASE_USER: &str = "wishlist";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

/// SQLite database name that selects a private in-memory database.
pub const SQLITE_MEMORY: &str = ":memory:";

/// Backend named by `DATABASE_TYPE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatabaseType {
    MySql,
    Postgres,
    /// `DATABASE_NAME` is a file path or `:memory:`; host, port and credentials are ignored.
    Sqlite,
}

impl DatabaseType {
    pub fn default_port(self) -> Option<u16> {
        match self {
            DatabaseType::MySql => Some(3306),
            DatabaseType::Postgres => Some(5432),
            DatabaseType::Sqlite => None,
        }
    }
}

impl FromStr for DatabaseType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" => Ok(DatabaseType::MySql),
            "pgsql" => Ok(DatabaseType::Postgres),
            "sqlite" => Ok(DatabaseType::Sqlite),
            _ => Err(ConfigError::UnsupportedDatabaseType(s.to_string())),
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DatabaseType::MySql => "mysql",
            DatabaseType::Postgres => "pgsql",
            DatabaseType::Sqlite => "sqlite",
        })
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub database_type: DatabaseType,
    pub host: String,
    pub port: Option<u16>,
    pub name: String,
    pub user: String,
    pub password: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Defaults for everything except the backend.
    pub fn new(database_type: DatabaseType) -> Self {
        DatabaseConfig {
            database_type,
            host: DEFAULT_DATABASE_HOST.to_string(),
            port: database_type.default_port(),
            name: DEFAULT_DATABASE_NAME.to_string(),
            user: DEFAULT_DATABASE_USER.to_string(),
            password: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    pub fn sqlite(path: impl Into<String>) -> Self {
        DatabaseConfig {
            name: path.into(),
            ..DatabaseConfig::new(DatabaseType::Sqlite)
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_type == DatabaseType::Sqlite && self.name == SQLITE_MEMORY
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}
