//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FRESHDAILY_HOST` - Bind address (default: 127.0.0.1)
//! - `FRESHDAILY_PORT` - Listen port (default: 3000)
//! - `FRESHDAILY_SEED_PATH` - JSON catalog seed (default: built-in Fresh Daily seed)
//! - `FRESHDAILY_NOTICE_SECONDS` - How long the save notice stays up (default: 3)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use fresh_daily_core::CatalogStore;
use fresh_daily_core::notice::DEFAULT_NOTICE_SECONDS;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Failed to read seed file {0}: {1}")]
    SeedRead(PathBuf, std::io::Error),
    #[error("Invalid seed file {0}: {1}")]
    SeedInvalid(PathBuf, fresh_daily_core::CatalogError),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// JSON seed file; `None` uses the built-in catalog
    pub seed_path: Option<PathBuf>,
    /// Seconds a notice stays visible
    pub notice_seconds: i64,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            seed_path: None,
            notice_seconds: DEFAULT_NOTICE_SECONDS,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_or(&lookup, "FRESHDAILY_HOST", defaults.host)?;
        let port = parse_or(&lookup, "FRESHDAILY_PORT", defaults.port)?;
        let notice_seconds = parse_or(&lookup, "FRESHDAILY_NOTICE_SECONDS", defaults.notice_seconds)?;
        if notice_seconds <= 0 {
            return Err(ConfigError::InvalidEnvVar(
                "FRESHDAILY_NOTICE_SECONDS".to_string(),
                "must be positive".to_string(),
            ));
        }

        Ok(Self {
            host,
            port,
            seed_path: non_empty(&lookup, "FRESHDAILY_SEED_PATH").map(PathBuf::from),
            notice_seconds,
            sentry_dsn: non_empty(&lookup, "SENTRY_DSN"),
            sentry_environment: non_empty(&lookup, "SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Load the catalog named by `seed_path`, or the built-in seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed file cannot be read or is invalid.
    pub fn load_catalog(&self) -> Result<CatalogStore, ConfigError> {
        let Some(path) = &self.seed_path else {
            return Ok(CatalogStore::fresh_daily());
        };

        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::SeedRead(path.clone(), e))?;
        CatalogStore::from_json(&json).map_err(|e| ConfigError::SeedInvalid(path.clone(), e))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable, treating empty strings as unset.
fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

/// Parse a variable, falling back to `default` when unset.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty(lookup, key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}
