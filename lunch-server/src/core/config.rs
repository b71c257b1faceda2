use std::path::PathBuf;

use chrono_tz::Tz;

use crate::auth::JwtConfig;
use crate::core::ServerError;

/// Default reference time zone for expiration dates
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Paris;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | DATABASE_PATH | {WORK_DIR}/database/lunch.db | SQLite file |
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development, staging or production |
/// | PUBLIC_BASE_URL | http://localhost:{HTTP_PORT} | Prefix of order group share URLs |
/// | BUSINESS_TIMEZONE | Europe/Paris | Zone expiration dates are read in |
/// | LOG_LEVEL | info | Minimum log level |
/// | LOG_DIR | (unset) | Daily rolling log files when set |
/// | JWT_SECRET | generated in debug builds | HS256 signing secret, 32+ chars |
/// | JWT_EXPIRATION_MINUTES | 1440 | Access token lifetime |
/// | JWT_ISSUER | lunch-server | Token issuer |
/// | JWT_AUDIENCE | lunch-clients | Token audience |
///
/// ```ignore
/// WORK_DIR=/data/lunch HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    /// Explicit database file; falls back to `{work_dir}/database/lunch.db`
    pub database_path: Option<String>,
    pub http_port: u16,
    pub environment: String,
    pub public_base_url: String,
    pub business_timezone: Tz,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from the environment, using defaults for unset values
    pub fn from_env() -> Result<Self, ServerError> {
        let defaults = Self::default();

        let http_port = std::env::var("HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.http_port);

        let business_timezone = match std::env::var("BUSINESS_TIMEZONE") {
            Ok(name) => name.parse::<Tz>().map_err(|_| {
                ServerError::Config(format!("Unknown BUSINESS_TIMEZONE: {name}"))
            })?,
            Err(_) => DEFAULT_TIMEZONE,
        };

        Ok(Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or(defaults.work_dir),
            database_path: std::env::var("DATABASE_PATH").ok(),
            http_port,
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{http_port}")),
            business_timezone,
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok(),
            jwt: JwtConfig::from_env().map_err(|e| ServerError::Config(e.to_string()))?,
        })
    }

    /// SQLite database file location
    pub fn database_path(&self) -> PathBuf {
        match &self.database_path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(&self.work_dir)
                .join("database")
                .join("lunch.db"),
        }
    }

    /// Share URL prefix without a trailing slash
    pub fn share_base_url(&self) -> String {
        format!(
            "{}/api/order-groups",
            self.public_base_url.trim_end_matches('/')
        )
    }
}

impl Default for Config {
    /// Development defaults with a freshly generated JWT secret. Reads no
    /// environment variables.
    fn default() -> Self {
        Self {
            work_dir: "./data".into(),
            database_path: None,
            http_port: 3000,
            environment: "development".into(),
            public_base_url: "http://localhost:3000".into(),
            business_timezone: DEFAULT_TIMEZONE,
            log_level: "info".into(),
            log_dir: None,
            jwt: JwtConfig::generated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_defaults_under_work_dir() {
        let config = Config {
            work_dir: "/srv/lunch".into(),
            ..Config::default()
        };
        assert_eq!(
            config.database_path(),
            PathBuf::from("/srv/lunch/database/lunch.db")
        );

        let config = Config {
            database_path: Some("/tmp/other.db".into()),
            ..config
        };
        assert_eq!(config.database_path(), PathBuf::from("/tmp/other.db"));
    }

    #[test]
    fn test_share_base_url_trims_slash() {
        let config = Config {
            public_base_url: "https://lunch.example.com/".into(),
            ..Config::default()
        };
        assert_eq!(
            config.share_base_url(),
            "https://lunch.example.com/api/order-groups"
        );
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.business_timezone, chrono_tz::Europe::Paris);
        assert_eq!(config.environment, "development");
        assert!(config.jwt.secret.len() >= 32);
    }
}
