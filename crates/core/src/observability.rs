//! Structured logging setup for CineRank services
//!
//! Library code logs through `tracing`; this module owns subscriber
//! initialization. The filter honors `RUST_LOG` when set, falling back to
//! the configured default.

use crate::config::{parse_env_var, ConfigLoader};
use crate::error::CineRankError;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output for local development
    Pretty,
    /// One JSON object per line for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other:?}")),
        }
    }
}

/// Logging configuration
///
/// # Environment Variables
///
/// - `CINERANK_LOG_FORMAT` (optional): `pretty` or `json` (default: `pretty`)
/// - `CINERANK_LOG_FILTER` (optional): default filter directive when
///   `RUST_LOG` is unset (default: `info`)
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            filter: "info".to_string(),
        }
    }
}

impl ConfigLoader for LogConfig {
    fn from_env() -> Result<Self, CineRankError> {
        Ok(Self {
            format: parse_env_var("CINERANK_LOG_FORMAT", LogFormat::Pretty)?,
            filter: parse_env_var("CINERANK_LOG_FILTER", "info".to_string())?,
        })
    }

    fn validate(&self) -> Result<(), CineRankError> {
        EnvFilter::try_new(&self.filter).map_err(|e| {
            CineRankError::configuration_key(
                format!("invalid log filter {:?}: {e}", self.filter),
                "CINERANK_LOG_FILTER",
            )
        })?;
        Ok(())
    }
}

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    match config.format {
        LogFormat::Pretty => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .try_init();
        }
    }
}
