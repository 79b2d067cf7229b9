//! Environment-driven settings. A `.env` file is loaded first when present.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
const DEFAULT_MAX_CONNECTIONS: u32 = 100;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    /// Full connection URL. When set, the individual parts below are ignored.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct ServerSettings {
    pub addr: SocketAddr,
    /// Upper bound on each downstream service call.
    pub request_timeout: Duration,
}

impl Settings {
    /// Load `.env` (if any) and read settings from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = DatabaseSettings {
            url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            host: get("POSTGRES_HOST", "localhost"),
            port: parse("POSTGRES_PORT", lookup("POSTGRES_PORT"), 5432)?,
            user: get("POSTGRES_USER", "postgres"),
            password: get("POSTGRES_PASSWORD", ""),
            name: get("POSTGRES_DB", "bookshelf"),
            max_connections: parse(
                "POSTGRES_MAX_CONNECTIONS",
                lookup("POSTGRES_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
        };
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "POSTGRES_MAX_CONNECTIONS",
                reason: "must be at least 1".into(),
            });
        }

        let addr_raw = get("HTTP_ADDR", DEFAULT_HTTP_ADDR);
        let addr = addr_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            key: "HTTP_ADDR",
            reason: format!("'{}': {}", addr_raw, e),
        })?;
        let timeout_secs: u64 = parse(
            "REQUEST_TIMEOUT_SECS",
            lookup("REQUEST_TIMEOUT_SECS"),
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        Ok(Settings {
            database,
            server: ServerSettings {
                addr,
                request_timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(ConfigError::DatabaseUrl);
        }
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name))
    }
}

fn parse<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(s) => s.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: format!("'{}': {}", s, e),
        }),
    }
}
