//! Types produced and consumed by the re-ranking engine

use chrono::{DateTime, Utc};
use cinerank_core::{Genre, MovieId, UserId};
use serde::{Deserialize, Serialize};

/// A scored candidate from the external model or the popularity fallback
///
/// Scores are whatever the producing model emits: unbounded and not
/// normalized across users.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub movie_id: MovieId,
    pub score: f32,
}

impl Candidate {
    pub fn new(movie_id: MovieId, score: f32) -> Self {
        Self { movie_id, score }
    }
}

/// A candidate after genre boosting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostedCandidate {
    pub movie_id: MovieId,
    /// Base score plus the affinity boost term
    pub score: f32,
    /// Fraction of the user's preferred genres this entry carries, in [0, 1]
    pub overlap_ratio: f32,
}

/// A final recommendation, shaped for a dashboard movie card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub score: f32,
    pub overlap_ratio: f32,
    /// Human-readable justification, e.g. "Because you watched Heat"
    pub explanation: String,
    pub generated_at: DateTime<Utc>,
}

/// Parameters for a single recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub user_id: UserId,
    /// Overrides the engine's configured default when set
    pub limit: Option<usize>,
    /// Restrict results to movies carrying this genre
    pub genre: Option<Genre>,
}

impl RecommendRequest {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            limit: None,
            genre: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<Genre>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}
