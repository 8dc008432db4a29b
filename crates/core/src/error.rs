//! Error types for the CineRank platform
//!
//! Nothing in the ranking path is fatal: data-quality problems are logged
//! and skipped, and empty inputs degrade to fallbacks. The variants here
//! cover the places where an error is the right answer: configuration
//! loading and input validation at the catalog boundary.

use thiserror::Error;

/// Platform-wide error type
#[derive(Debug, Error)]
pub enum CineRankError {
    /// Configuration could not be loaded or failed validation
    #[error("configuration error: {message}")]
    ConfigurationError {
        message: String,
        /// Environment variable the error relates to, when known
        key: Option<String>,
    },

    /// Input data failed validation
    #[error("validation error: {message}")]
    ValidationError {
        message: String,
        /// Field the error relates to, when known
        field: Option<String>,
    },
}

impl CineRankError {
    /// Configuration error without an associated environment variable
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            key: None,
        }
    }

    /// Configuration error tied to a specific environment variable
    pub fn configuration_key(message: impl Into<String>, key: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// Validation error without an associated field
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: None,
        }
    }

    /// Validation error tied to a specific field
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = CineRankError::configuration_key("BOOST_FACTOR out of range", "CINERANK_BOOST_FACTOR");
        assert_eq!(
            err.to_string(),
            "configuration error: BOOST_FACTOR out of range"
        );
    }

    #[test]
    fn test_validation_error_carries_field() {
        let err = CineRankError::validation_field("empty genre set", "genres");
        match err {
            CineRankError::ValidationError { field, .. } => {
                assert_eq!(field.as_deref(), Some("genres"));
            }
            _ => panic!("expected validation error"),
        }
    }
}
