//! Application configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use inkwell_infra::database::DatabaseConfig;

/// Configuration errors. Any of these stops the server before it binds.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Deployment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "expected one of \"development\", \"production\", got {other:?}"
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub const DEFAULT_PORT: u16 = 5000;

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let uri = get("MONGODB_URI").ok_or(ConfigError::Missing("MONGODB_URI"))?;

        let environment = get("APP_ENV")
            .ok_or(ConfigError::Missing("APP_ENV"))?
            .parse::<Environment>()
            .map_err(|reason| ConfigError::Invalid {
                name: "APP_ENV",
                reason,
            })?;

        let port = match get("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => Self::DEFAULT_PORT,
        };

        let mut database = DatabaseConfig::new(uri);
        if let Some(raw) = get("DB_MAX_POOL_SIZE") {
            database.max_pool_size = parse_positive("DB_MAX_POOL_SIZE", &raw)?;
        }
        if let Some(raw) = get("DB_IDLE_TIMEOUT_SECS") {
            database.idle_timeout =
                Duration::from_secs(parse_positive("DB_IDLE_TIMEOUT_SECS", &raw)?.into());
        }

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            environment,
            database,
        })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::Invalid {
            name: "PORT",
            reason: format!("expected a port number between 1 and 65535, got {raw:?}"),
        }),
    }
}

fn parse_positive(name: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::Invalid {
            name,
            reason: format!("expected a positive integer, got {raw:?}"),
        }),
    }
}
