//! Catalog models for the CineRank platform
//!
//! The catalog is loaded once at startup and treated as an immutable
//! snapshot for the rest of the session. `RawMovieRecord` is the shape
//! delivered by upstream metadata sources; `Movie` is the canonical entry
//! after genre normalization and rating clamping.

use crate::types::{Genre, MovieId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// Upper bound of the catalog rating scale
pub const MAX_RATING: f32 = 5.0;

/// Raw catalog row as delivered by an upstream metadata source
///
/// The `genres` field is a free-form string; sources disagree on the
/// serialization (pipe-separated, comma-separated, bracketed list).
/// Normalization happens when the row is loaded into a catalog, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RawMovieRecord {
    pub id: MovieId,

    #[validate(length(min = 1, max = 500))]
    pub title: String,

    /// Genre list as serialized by the source
    #[validate(length(min = 1))]
    pub genres: String,

    pub rating: f32,
}

/// Canonical catalog entry
///
/// `id` and `title` are unique keys into the catalog. The genre set is
/// non-empty and kept in a `BTreeSet` for set semantics with deterministic
/// iteration; the rating is clamped to `[0, MAX_RATING]` at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Movie {
    pub id: MovieId,

    #[validate(length(min = 1, max = 500))]
    pub title: String,

    pub genres: BTreeSet<Genre>,

    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f32,
}

impl Movie {
    /// Create a catalog entry, clamping the rating into `[0, MAX_RATING]`
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        genres: impl IntoIterator<Item = Genre>,
        rating: f32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            genres: genres.into_iter().collect(),
            rating: clamp_rating(rating),
        }
    }

    /// Check whether the entry carries a genre
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.contains(genre)
    }

    /// Number of genres from `genres` that this entry carries
    pub fn genre_overlap(&self, genres: &[Genre]) -> usize {
        genres
            .iter()
            .filter(|g| self.genres.contains(g.as_str()))
            .count()
    }
}

/// Clamp a rating into the catalog scale, mapping non-finite values to zero
pub fn clamp_rating(rating: f32) -> f32 {
    if rating.is_finite() {
        rating.clamp(0.0, MAX_RATING)
    } else {
        0.0
    }
}
