//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use chrono::{TimeDelta, Utc};
use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `JWT_SECRET` (required): secret used to sign and verify session tokens
/// - `OMDB_API_KEY` (optional): API key forwarded to the movie search upstream
/// - `PORT` (optional): HTTP server port, defaults to 5000
/// - `OMDB_BASE_URL` (optional): upstream search endpoint, defaults to `http://www.omdbapi.com/`
/// - `JWT_EXPIRATION_HOURS` (optional): token lifetime, defaults to 24
/// - `UPSTREAM_TIMEOUT_SECS` (optional): upstream request timeout, defaults to 30
#[derive(Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,

    #[serde(default)]
    pub omdb_api_key: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_omdb_base_url")]
    pub omdb_base_url: String,

    #[serde(default = "default_jwt_expiration_hours")]
    pub jwt_expiration_hours: i64,

    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
}

/// Default port if PORT environment variable is not set.
fn default_port() -> u16 {
    5000
}

fn default_omdb_base_url() -> String {
    "http://www.omdbapi.com/".to_string()
}

fn default_jwt_expiration_hours() -> i64 {
    24
}

fn default_upstream_timeout_secs() -> u64 {
    30
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0}")]
    Env(#[from] envy::Error),

    #[error("OMDB_BASE_URL is not a valid http(s) URL: {0}")]
    InvalidBaseUrl(String),

    #[error("JWT_EXPIRATION_HOURS must be positive and yield a representable expiry date")]
    InvalidExpiration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (`DATABASE_URL`, `JWT_SECRET`)
    /// - Environment variable values cannot be parsed into expected types
    /// - `OMDB_BASE_URL` is not an absolute http(s) URL
    /// - `JWT_EXPIRATION_HOURS` is not positive or pushes token expiry past the supported date range
    pub fn from_env() -> Result<Self, ConfigError> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: database_url -> DATABASE_URL
        let config = envy::from_env::<Config>()?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.omdb_base_url)
            .map_err(|_| ConfigError::InvalidBaseUrl(self.omdb_base_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(self.omdb_base_url.clone()));
        }
        let expiry_representable = self.jwt_expiration_hours > 0
            && TimeDelta::try_hours(self.jwt_expiration_hours)
                .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
                .is_some();
        if !expiry_representable {
            return Err(ConfigError::InvalidExpiration);
        }
        Ok(())
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .field("omdb_api_key", &"<redacted>")
            .field("port", &self.port)
            .field("omdb_base_url", &self.omdb_base_url)
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_optional_vars_missing() {
        let config = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://localhost/cinesearch"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.omdb_api_key, "");
        assert_eq!(config.omdb_base_url, "http://www.omdbapi.com/");
        assert_eq!(config.jwt_expiration_hours, 24);
        assert_eq!(config.upstream_timeout_secs, 30);
    }

    #[test]
    fn missing_database_url_is_rejected() {
        let result = Config::from_vars(vars(&[("JWT_SECRET", "s3cret")]));
        assert!(matches!(result, Err(ConfigError::Env(_))));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://localhost/cinesearch"),
            ("JWT_SECRET", "s3cret"),
            ("OMDB_API_KEY", "abc123"),
            ("PORT", "8080"),
            ("JWT_EXPIRATION_HOURS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.omdb_api_key, "abc123");
        assert_eq!(config.jwt_expiration_hours, 2);
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let result = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://localhost/cinesearch"),
            ("JWT_SECRET", "s3cret"),
            ("OMDB_BASE_URL", "ftp://example.com/"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn out_of_range_expiration_is_rejected() {
        for hours in ["0", "-1", "10000000000", "9223372036854775807"] {
            let result = Config::from_vars(vars(&[
                ("DATABASE_URL", "postgres://localhost/cinesearch"),
                ("JWT_SECRET", "s3cret"),
                ("JWT_EXPIRATION_HOURS", hours),
            ]));
            assert!(
                matches!(result, Err(ConfigError::InvalidExpiration)),
                "accepted {} hours",
                hours
            );
        }
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://user:pw@localhost/cinesearch"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("s3cret"));
        assert!(!rendered.contains("user:pw"));
    }
}
