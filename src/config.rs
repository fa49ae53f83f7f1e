//! Configuration loading and constants.
//!
//! Database settings come from `POSTGRES_*` environment variables with the
//! conventional defaults; the listen address and log filter come from the
//! command line. `DatabaseConfig` is resolved through a lookup function so
//! loading stays testable without touching the process environment.

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "stockroom=debug";

/// Default bind address for the HTTP listener
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Default HTTP listen port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

// Database connection defaults, applied when the corresponding
// POSTGRES_* variable is absent.
const DEFAULT_POSTGRES_USER: &str = "postgres";
const DEFAULT_POSTGRES_PASSWORD: &str = "postgres";
const DEFAULT_POSTGRES_DB: &str = "postgres";
const DEFAULT_POSTGRES_HOST: &str = "localhost";
const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// PostgreSQL connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub host: String,
    pub port: u16,
}

impl DatabaseConfig {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("POSTGRES_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_POSTGRES_PORT,
        };

        Ok(Self {
            user: lookup("POSTGRES_USER").unwrap_or_else(|| DEFAULT_POSTGRES_USER.to_string()),
            password: lookup("POSTGRES_PASSWORD")
                .unwrap_or_else(|| DEFAULT_POSTGRES_PASSWORD.to_string()),
            dbname: lookup("POSTGRES_DB").unwrap_or_else(|| DEFAULT_POSTGRES_DB.to_string()),
            host: lookup("POSTGRES_HOST").unwrap_or_else(|| DEFAULT_POSTGRES_HOST.to_string()),
            port,
        })
    }

    /// Connection options for sqlx. Transport encryption is required.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(PgSslMode::Require)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid POSTGRES_PORT value: {0}")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + '_ {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = DatabaseConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.user, "postgres");
        assert_eq!(config.password, "postgres");
        assert_eq!(config.dbname, "postgres");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("POSTGRES_USER", "app"),
            ("POSTGRES_HOST", "db.internal"),
            ("POSTGRES_PORT", "6432"),
        ]))
        .unwrap();

        assert_eq!(config.user, "app");
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6432);
        // Unset variables still fall back
        assert_eq!(config.dbname, "postgres");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = DatabaseConfig::from_lookup(lookup_from(&[("POSTGRES_PORT", "not-a-port")]))
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPort(raw) if raw == "not-a-port"));
    }
}
