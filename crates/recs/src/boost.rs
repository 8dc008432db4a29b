//! Genre-overlap boosting and re-ranking
//!
//! The second stage of a recommendation: each base candidate gains an
//! additive boost proportional to how many of the user's preferred genres
//! it carries, then the list is re-ranked. A pure function over its
//! inputs: calling it twice with the same arguments yields identical
//! output.

use cinerank_core::models::Movie;
use cinerank_core::{Genre, MovieId};
use std::collections::HashMap;

use crate::types::{BoostedCandidate, Candidate};

/// Floor for the observed score range, so degenerate lists (all-equal
/// scores, fewer than two entries) do not zero out the boost term
const MIN_SCORE_RANGE: f32 = 1e-6;

/// Apply affinity boosting to a base candidate list and re-rank.
///
/// For each entry, `overlap_ratio` is the fraction of profile genres the
/// entry carries and the boosted score is
/// `score + boost_factor * score_range * overlap_ratio`. The re-sort is
/// stable: entries with equal boosted scores keep their relative order
/// from the input.
///
/// An empty profile makes this a no-op: order and scores come back
/// untouched with `overlap_ratio` zero everywhere. Candidates absent from
/// the catalog contribute no overlap.
pub fn boost(
    base: &[Candidate],
    catalog: &[Movie],
    profile: &[Genre],
    boost_factor: f32,
) -> Vec<BoostedCandidate> {
    if profile.is_empty() {
        return base
            .iter()
            .map(|candidate| BoostedCandidate {
                movie_id: candidate.movie_id,
                score: candidate.score,
                overlap_ratio: 0.0,
            })
            .collect();
    }

    let by_id: HashMap<MovieId, &Movie> = catalog.iter().map(|m| (m.id, m)).collect();

    let score_range = if base.len() < 2 {
        MIN_SCORE_RANGE
    } else {
        let (min, max) = base.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY),
            |(lo, hi), candidate| (lo.min(candidate.score), hi.max(candidate.score)),
        );
        (max - min).max(MIN_SCORE_RANGE)
    };

    let profile_size = profile.len().max(1) as f32;

    let mut boosted: Vec<BoostedCandidate> = base
        .iter()
        .map(|candidate| {
            let overlap = by_id
                .get(&candidate.movie_id)
                .map(|movie| movie.genre_overlap(profile))
                .unwrap_or(0);
            let overlap_ratio = overlap as f32 / profile_size;
            BoostedCandidate {
                movie_id: candidate.movie_id,
                score: candidate.score + boost_factor * score_range * overlap_ratio,
                overlap_ratio,
            }
        })
        .collect();

    boosted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    boosted
}
