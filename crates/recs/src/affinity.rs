//! Genre affinity profiling
//!
//! Derives a user's implicit genre preferences from watch history. The
//! profile is computed on demand from the interaction snapshot and never
//! stored.

use cinerank_core::models::Movie;
use cinerank_core::{Genre, MovieId};
use std::collections::{HashMap, HashSet};

/// Compute the top-k genres across a user's watched titles.
///
/// Watched titles are scanned in catalog order; each title contributes
/// every genre in its genre set once. Equal counts are broken by the order
/// in which a genre was first encountered during the scan, which keeps the
/// result deterministic regardless of when titles were watched.
///
/// Returns at most `k` genres, fewer when the watched set spans fewer
/// distinct genres, empty when `k` is zero or nothing has been watched.
pub fn compute_affinity_profile(
    watched: &HashSet<MovieId>,
    catalog: &[Movie],
    k: usize,
) -> Vec<Genre> {
    if k == 0 || watched.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    // Genres in first-encounter order over the catalog scan
    let mut encountered: Vec<&str> = Vec::new();

    for movie in catalog {
        if !watched.contains(&movie.id) {
            continue;
        }
        for genre in &movie.genres {
            let count = counts.entry(genre.as_str()).or_insert(0);
            if *count == 0 {
                encountered.push(genre.as_str());
            }
            *count += 1;
        }
    }

    let mut ranked: Vec<(&str, usize, usize)> = encountered
        .iter()
        .enumerate()
        .map(|(first_seen, &genre)| (genre, counts[genre], first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(k)
        .map(|(genre, _, _)| genre.to_string())
        .collect()
}
