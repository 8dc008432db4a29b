//! Composed recommendation pipeline
//!
//! Wires affinity profiling, base candidate selection, and boosting into
//! the single operation the dashboard calls. Collaborator I/O happens once
//! at entry; from there the computation is pure and request-scoped.
//!
//! Nothing in this pipeline is fatal. A failing model provider degrades to
//! the popularity fallback, a failing interaction store to an empty watch
//! history, and a failing catalog to an empty result list, each with a
//! warning, never an error to the caller.

use chrono::Utc;
use cinerank_core::models::Movie;
use cinerank_core::MovieId;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::affinity::compute_affinity_profile;
use crate::boost::boost;
use crate::candidates::base_recommendations;
use crate::providers::{CatalogProvider, InteractionStore, ModelProvider};
use crate::types::{Recommendation, RecommendRequest};
use crate::EngineConfig;

pub(crate) async fn generate(
    config: &EngineConfig,
    catalog: &dyn CatalogProvider,
    model: &dyn ModelProvider,
    interactions: &dyn InteractionStore,
    request: &RecommendRequest,
) -> Vec<Recommendation> {
    let limit = request.limit.unwrap_or(config.default_limit);
    if limit == 0 {
        return Vec::new();
    }

    let movies = match catalog.all().await {
        Ok(movies) => movies,
        Err(e) => {
            warn!(error = %e, "catalog unavailable, returning no recommendations");
            return Vec::new();
        }
    };
    if movies.is_empty() {
        return Vec::new();
    }

    let watched = match interactions.watched_by(&request.user_id).await {
        Ok(watched) => watched,
        Err(e) => {
            warn!(
                user_id = %request.user_id,
                error = %e,
                "interaction store unavailable, treating history as empty"
            );
            HashSet::new()
        }
    };

    let model_output = match model.recommendations_for(&request.user_id).await {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!(
                user_id = %request.user_id,
                error = %e,
                "model unavailable, falling back to catalog popularity"
            );
            Vec::new()
        }
    };

    let profile = compute_affinity_profile(&watched, &movies, config.profile_size);

    // Oversample before boosting so the re-rank has candidates to promote.
    let base_limit = limit.saturating_mul(config.oversample.max(1));
    let base = base_recommendations(model_output, &movies, &watched, base_limit);
    let boosted = boost(&base, &movies, &profile, config.boost_factor);

    debug!(
        user_id = %request.user_id,
        profile = ?profile,
        base_candidates = base.len(),
        "assembling recommendations"
    );

    let by_id: HashMap<MovieId, &Movie> = movies.iter().map(|m| (m.id, m)).collect();
    let generated_at = Utc::now();

    let mut recommendations = Vec::with_capacity(limit);
    for candidate in boosted {
        if watched.contains(&candidate.movie_id) {
            continue;
        }
        let Some(movie) = by_id.get(&candidate.movie_id) else {
            continue;
        };
        if let Some(genre) = &request.genre {
            if !movie.has_genre(genre) {
                continue;
            }
        }

        recommendations.push(Recommendation {
            movie_id: movie.id,
            title: movie.title.clone(),
            score: candidate.score,
            overlap_ratio: candidate.overlap_ratio,
            explanation: explain(movie, &watched, &movies),
            generated_at,
        });
        if recommendations.len() == limit {
            break;
        }
    }

    recommendations
}

/// Pick the watched title that best justifies recommending `movie`: the
/// one sharing the most genres, catalog order on ties. Falls back to a
/// generic line when no watched title overlaps.
fn explain(movie: &Movie, watched: &HashSet<MovieId>, catalog: &[Movie]) -> String {
    let mut best: Option<(&Movie, usize)> = None;
    for other in catalog {
        if other.id == movie.id || !watched.contains(&other.id) {
            continue;
        }
        let shared = other
            .genres
            .iter()
            .filter(|genre| movie.genres.contains(genre.as_str()))
            .count();
        if shared > best.map_or(0, |(_, s)| s) {
            best = Some((other, shared));
        }
    }

    match best {
        Some((other, _)) => format!("Because you watched {}", other.title),
        None => "Recommended for you".to_string(),
    }
}
