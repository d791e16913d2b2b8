//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional, with defaults matching the demo's original behavior:
//!
//! - `SHOPBOT_CATALOG_SIZE` - Total catalog size including the curated
//!   entries (default: 100)
//! - `SHOPBOT_CATALOG_SEED` - Seed for mock-catalog generation; unset means
//!   a fresh OS seed per process
//! - `SHOPBOT_CHAT_DELAY_MS` - Simulated assistant reply latency
//!   (default: 800)
//! - `SHOPBOT_AUTH_DELAY_MS` - Simulated login/registration latency
//!   (default: 1000)

use std::time::Duration;

use thiserror::Error;

const DEFAULT_CATALOG_SIZE: usize = 100;
const DEFAULT_CHAT_DELAY_MS: u64 = 800;
const DEFAULT_AUTH_DELAY_MS: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Total number of catalog entries to generate.
    pub catalog_size: usize,
    /// Optional fixed seed for catalog generation.
    pub catalog_seed: Option<u64>,
    /// Simulated assistant reply latency.
    pub chat_delay: Duration,
    /// Simulated login/registration latency.
    pub auth_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_size: DEFAULT_CATALOG_SIZE,
            catalog_seed: None,
            chat_delay: Duration::from_millis(DEFAULT_CHAT_DELAY_MS),
            auth_delay: Duration::from_millis(DEFAULT_AUTH_DELAY_MS),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a set variable fails to
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Configuration with all delays removed, for tests.
    #[must_use]
    pub fn for_tests(catalog_seed: u64) -> Self {
        Self {
            catalog_seed: Some(catalog_seed),
            chat_delay: Duration::ZERO,
            auth_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Split out from [`Self::from_env`] so tests can inject variables
    /// without touching the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a present variable fails to
    /// parse.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            catalog_size: parse_or(
                &lookup,
                "SHOPBOT_CATALOG_SIZE",
                defaults.catalog_size,
            )?,
            catalog_seed: parse_optional(&lookup, "SHOPBOT_CATALOG_SEED")?,
            chat_delay: Duration::from_millis(parse_or(
                &lookup,
                "SHOPBOT_CHAT_DELAY_MS",
                DEFAULT_CHAT_DELAY_MS,
            )?),
            auth_delay: Duration::from_millis(parse_or(
                &lookup,
                "SHOPBOT_AUTH_DELAY_MS",
                DEFAULT_AUTH_DELAY_MS,
            )?),
        })
    }
}

/// Parse an optional variable, falling back to a default when unset.
fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_owned(), raw)),
        None => Ok(default),
    }
}

/// Parse an optional variable as `Some(value)` when set.
fn parse_optional<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_owned(), raw)),
        None => Ok(None),
    }
}
