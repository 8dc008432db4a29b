//! # CineRank Recommendation Engine
//!
//! The preference-aware re-ranking engine behind the CineRank dashboard:
//! merges a base recommendation list (from a precomputed model artifact or
//! a popularity fallback) with the user's implicit genre affinity, derived
//! from watch history, into a single ordered result with human-readable
//! justifications.
//!
//! The engine owns no I/O. It consumes three collaborator seams (catalog
//! provider, model provider, interaction store), reads each once per
//! request, and runs the ranking itself as pure functions over in-memory
//! tables.

pub mod affinity;
pub mod boost;
pub mod candidates;
pub mod providers;
pub mod recommend;
pub mod types;

// Re-export key operations and types
pub use affinity::compute_affinity_profile;
pub use boost::boost;
pub use candidates::base_recommendations;
pub use providers::{
    CatalogProvider, InMemoryCatalog, InMemoryInteractionStore, InteractionStore, ModelProvider,
    StaticModel,
};
pub use types::{BoostedCandidate, Candidate, Recommendation, RecommendRequest};

use anyhow::Result;
use cinerank_core::config::{parse_env_var, ConfigLoader};
use cinerank_core::models::Interaction;
use cinerank_core::{CineRankError, Genre, MovieId, UserId};
use std::sync::Arc;
use tracing::warn;

/// Engine tuning parameters
///
/// # Environment Variables
///
/// - `CINERANK_DEFAULT_LIMIT` (optional): recommendations per request (default: 10)
/// - `CINERANK_BOOST_FACTOR` (optional): fraction of the score range added
///   per unit of genre overlap, in (0, 1] (default: 0.25)
/// - `CINERANK_PROFILE_SIZE` (optional): preferred genres inferred from
///   watch history (default: 3)
/// - `CINERANK_OVERSAMPLE` (optional): base-candidate oversampling factor
///   applied before re-ranking (default: 3)
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub default_limit: usize,
    pub boost_factor: f32,
    pub profile_size: usize,
    pub oversample: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            boost_factor: 0.25,
            profile_size: 3,
            oversample: 3,
        }
    }
}

impl ConfigLoader for EngineConfig {
    fn from_env() -> Result<Self, CineRankError> {
        let defaults = Self::default();
        Ok(Self {
            default_limit: parse_env_var("CINERANK_DEFAULT_LIMIT", defaults.default_limit)?,
            boost_factor: parse_env_var("CINERANK_BOOST_FACTOR", defaults.boost_factor)?,
            profile_size: parse_env_var("CINERANK_PROFILE_SIZE", defaults.profile_size)?,
            oversample: parse_env_var("CINERANK_OVERSAMPLE", defaults.oversample)?,
        })
    }

    fn validate(&self) -> Result<(), CineRankError> {
        if self.default_limit == 0 {
            return Err(CineRankError::configuration_key(
                "default limit must be at least 1",
                "CINERANK_DEFAULT_LIMIT",
            ));
        }
        if !(self.boost_factor > 0.0 && self.boost_factor <= 1.0) {
            return Err(CineRankError::configuration_key(
                format!("boost factor must be in (0, 1], got {}", self.boost_factor),
                "CINERANK_BOOST_FACTOR",
            ));
        }
        if self.oversample == 0 {
            return Err(CineRankError::configuration_key(
                "oversample factor must be at least 1",
                "CINERANK_OVERSAMPLE",
            ));
        }
        Ok(())
    }
}

/// Recommendation engine instance
///
/// Bundles the three collaborator seams with the tuning configuration.
/// Collaborators are injected, so a deployment can swap the in-memory
/// implementations for database- or service-backed ones without touching
/// the ranking code.
pub struct RecsEngine {
    config: EngineConfig,
    catalog: Arc<dyn CatalogProvider>,
    model: Arc<dyn ModelProvider>,
    interactions: Arc<dyn InteractionStore>,
}

impl RecsEngine {
    pub fn new(
        config: EngineConfig,
        catalog: Arc<dyn CatalogProvider>,
        model: Arc<dyn ModelProvider>,
        interactions: Arc<dyn InteractionStore>,
    ) -> Self {
        Self {
            config,
            catalog,
            model,
            interactions,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Produce a ranked recommendation list for a request.
    ///
    /// Always yields a (possibly empty) list: collaborator failures degrade
    /// to fallbacks inside the pipeline rather than surfacing here.
    pub async fn recommend(&self, request: &RecommendRequest) -> Vec<Recommendation> {
        recommend::generate(
            &self.config,
            self.catalog.as_ref(),
            self.model.as_ref(),
            self.interactions.as_ref(),
            request,
        )
        .await
    }

    /// The user's inferred genre preferences, strongest first
    pub async fn affinity_profile(&self, user_id: &UserId) -> Vec<Genre> {
        let movies = match self.catalog.all().await {
            Ok(movies) => movies,
            Err(e) => {
                warn!(error = %e, "catalog unavailable, returning empty profile");
                return Vec::new();
            }
        };
        let watched = match self.interactions.watched_by(user_id).await {
            Ok(watched) => watched,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "interaction store unavailable, returning empty profile");
                return Vec::new();
            }
        };
        compute_affinity_profile(&watched, &movies, self.config.profile_size)
    }

    /// Record that a user watched a title (idempotent)
    pub async fn mark_watched(&self, user_id: &UserId, movie_id: MovieId) -> Result<()> {
        self.interactions.mark_watched(user_id, movie_id).await
    }

    /// Remove a title from a user's watch history (idempotent)
    pub async fn unwatch(&self, user_id: &UserId, movie_id: MovieId) -> Result<()> {
        self.interactions.unwatch(user_id, movie_id).await
    }

    /// The user's watch history in insertion order
    pub async fn history(&self, user_id: &UserId) -> Result<Vec<Interaction>> {
        self.interactions.history(user_id).await
    }
}
