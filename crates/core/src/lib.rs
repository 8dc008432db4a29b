//! # CineRank Core
//!
//! Core data structures and types for the CineRank platform.
//!
//! This crate provides the shared building blocks for the recommendation
//! engine: catalog and interaction models, error handling, genre
//! normalization, configuration loading, and logging setup.
//!
//! ## Modules
//!
//! - `types`: Core type definitions and identifiers
//! - `models`: Domain models for the movie catalog and watch history
//! - `error`: Error types and handling
//! - `validation`: Genre normalization and validation utilities
//! - `config`: Configuration loading from environment variables
//! - `observability`: Structured logging setup

pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::{load_dotenv, parse_env_var, ConfigLoader};
pub use error::CineRankError;
pub use models::{Interaction, Movie, RawMovieRecord};
pub use observability::{init_logging, LogConfig, LogFormat};
pub use types::{Genre, MovieId, UserId};
pub use validation::{normalize_genre, parse_genre_list};

/// Result type alias for CineRank operations
pub type Result<T> = std::result::Result<T, CineRankError>;
