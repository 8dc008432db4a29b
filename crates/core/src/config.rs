//! Configuration loading for CineRank services
//!
//! Environment variables use the `CINERANK_` prefix, with `.env` file
//! support via dotenvy. The override hierarchy is defaults < .env <
//! environment.
//!
//! # Example
//!
//! ```no_run
//! use cinerank_core::config::{load_dotenv, ConfigLoader};
//! use cinerank_core::observability::LogConfig;
//!
//! # fn example() -> Result<(), cinerank_core::CineRankError> {
//! load_dotenv();
//!
//! let log_config = LogConfig::from_env()?;
//! log_config.validate()?;
//! # Ok(())
//! # }
//! ```

use crate::error::CineRankError;
use std::str::FromStr;

/// Configuration loader trait
///
/// Standardized loading and validation of configuration from environment
/// variables.
pub trait ConfigLoader: Sized {
    /// Load configuration from `CINERANK_*` environment variables, using
    /// defaults for missing optional values.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if a variable is present but cannot
    /// be parsed.
    fn from_env() -> Result<Self, CineRankError>;

    /// Validate configuration values against their acceptable ranges.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if any check fails.
    fn validate(&self) -> Result<(), CineRankError>;
}

/// Load a `.env` file when present; missing files are not an error
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Parse an environment variable into `T`, falling back to `default` when
/// the variable is unset
pub fn parse_env_var<T: FromStr>(key: &str, default: T) -> Result<T, CineRankError> {
    match std::env::var(key) {
        Ok(value) => value.parse::<T>().map_err(|_| {
            CineRankError::configuration_key(
                format!("could not parse {key}={value:?}"),
                key,
            )
        }),
        Err(_) => Ok(default),
    }
}
