//! Base candidate selection
//!
//! The first stage of a recommendation: the external model's ranked list
//! when it has one for the user, otherwise a popularity fallback over
//! unwatched catalog entries. This stage never fails: an empty catalog
//! yields an empty list.

use cinerank_core::models::Movie;
use cinerank_core::MovieId;
use std::collections::HashSet;
use tracing::warn;

use crate::types::Candidate;

/// Select base candidates for a user, truncated to `limit`.
///
/// Model entries pointing outside the catalog or carrying non-finite
/// scores are data-quality problems: they are dropped with a warning and
/// never surface to the caller. When the model contributes nothing usable,
/// the catalog's highest-rated unwatched entries stand in, ordered by
/// rating descending with catalog order on ties.
pub fn base_recommendations(
    model_output: Vec<Candidate>,
    catalog: &[Movie],
    watched: &HashSet<MovieId>,
    limit: usize,
) -> Vec<Candidate> {
    let known: HashSet<MovieId> = catalog.iter().map(|m| m.id).collect();

    let mut from_model = Vec::new();
    for candidate in model_output {
        if !candidate.score.is_finite() {
            warn!(
                movie_id = candidate.movie_id,
                score = candidate.score,
                "dropping model candidate with non-finite score"
            );
            continue;
        }
        if !known.contains(&candidate.movie_id) {
            warn!(
                movie_id = candidate.movie_id,
                "dropping model candidate missing from catalog"
            );
            continue;
        }
        from_model.push(candidate);
        if from_model.len() == limit {
            break;
        }
    }
    if !from_model.is_empty() {
        return from_model;
    }

    // Popularity fallback: highest-rated titles the user has not watched.
    let mut fallback: Vec<Candidate> = catalog
        .iter()
        .filter(|movie| !watched.contains(&movie.id))
        .map(|movie| Candidate::new(movie.id, movie.rating))
        .collect();
    fallback.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    fallback.truncate(limit);
    fallback
}
