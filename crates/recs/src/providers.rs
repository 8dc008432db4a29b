//! Collaborator contracts and in-memory implementations
//!
//! The engine consumes three seams: a catalog provider, an external model
//! provider, and an interaction store. Each is an async trait so a
//! deployment can back it with a database or a service client; the
//! implementations here keep everything in memory, which is how the
//! dashboard runs. I/O happens at these boundaries only; the ranking
//! functions never touch a provider mid-computation.

use anyhow::Result;
use async_trait::async_trait;
use cinerank_core::models::{Interaction, Movie, RawMovieRecord};
use cinerank_core::validation::parse_genre_list;
use cinerank_core::{MovieId, UserId};
use dashmap::DashMap;
use std::collections::{HashMap, HashSet};
use tracing::warn;
use validator::Validate;

use crate::types::Candidate;

/// Read-only access to the movie catalog
///
/// The catalog is loaded once at process start and treated as a static
/// snapshot. `all` returns entries in canonical catalog order, which the
/// affinity tie-break depends on.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn all(&self) -> Result<Vec<Movie>>;
    async fn by_id(&self, id: MovieId) -> Result<Option<Movie>>;
}

/// Access to a precomputed recommendation artifact
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Ranked candidates for a user. Unknown users yield an empty list,
    /// never an error.
    async fn recommendations_for(&self, user_id: &UserId) -> Result<Vec<Candidate>>;
}

/// Persistence seam for watch-history interactions
///
/// `mark_watched` and `unwatch` are idempotent: marking a watched title
/// again or removing an absent record is a no-op, not an error.
#[async_trait]
pub trait InteractionStore: Send + Sync {
    async fn watched_by(&self, user_id: &UserId) -> Result<HashSet<MovieId>>;
    async fn mark_watched(&self, user_id: &UserId, movie_id: MovieId) -> Result<()>;
    async fn unwatch(&self, user_id: &UserId, movie_id: MovieId) -> Result<()>;
    /// Interactions in insertion order, for history display
    async fn history(&self, user_id: &UserId) -> Result<Vec<Interaction>>;
}

/// Immutable in-memory catalog
///
/// Input order is preserved as the canonical catalog order.
pub struct InMemoryCatalog {
    movies: Vec<Movie>,
    index: HashMap<MovieId, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog from already-normalized entries
    pub fn new(movies: Vec<Movie>) -> Self {
        let index = movies
            .iter()
            .enumerate()
            .map(|(position, movie)| (movie.id, position))
            .collect();
        Self { movies, index }
    }

    /// Build a catalog from raw metadata rows.
    ///
    /// Genre serializations are normalized through
    /// `cinerank_core::validation`; rows that fail validation, carry no
    /// usable genres, or collide with an earlier id or title are skipped
    /// with a data-quality warning.
    pub fn from_raw(records: Vec<RawMovieRecord>) -> Self {
        let mut movies: Vec<Movie> = Vec::with_capacity(records.len());
        let mut seen_ids = HashSet::new();
        let mut seen_titles = HashSet::new();

        for record in records {
            if let Err(e) = record.validate() {
                warn!(movie_id = record.id, error = %e, "skipping invalid catalog row");
                continue;
            }

            let genres = parse_genre_list(&record.genres);
            if genres.is_empty() {
                warn!(
                    movie_id = record.id,
                    title = %record.title,
                    raw_genres = %record.genres,
                    "skipping catalog row without usable genres"
                );
                continue;
            }

            if !seen_ids.insert(record.id) {
                warn!(movie_id = record.id, "skipping catalog row with duplicate id");
                continue;
            }
            if !seen_titles.insert(record.title.clone()) {
                warn!(
                    movie_id = record.id,
                    title = %record.title,
                    "skipping catalog row with duplicate title"
                );
                continue;
            }

            movies.push(Movie::new(record.id, record.title, genres, record.rating));
        }

        Self::new(movies)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn all(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.clone())
    }

    async fn by_id(&self, id: MovieId) -> Result<Option<Movie>> {
        Ok(self.index.get(&id).map(|&position| self.movies[position].clone()))
    }
}

/// In-memory snapshot of a precomputed recommendation artifact
///
/// The artifact is produced elsewhere (collaborative filtering, hybrid
/// scoring); this provider only holds its user → ranked-candidates table.
#[derive(Debug, Default)]
pub struct StaticModel {
    rankings: HashMap<UserId, Vec<Candidate>>,
}

impl StaticModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user_id: impl Into<UserId>, candidates: Vec<Candidate>) {
        self.rankings.insert(user_id.into(), candidates);
    }

    pub fn with_user(mut self, user_id: impl Into<UserId>, candidates: Vec<Candidate>) -> Self {
        self.insert(user_id, candidates);
        self
    }
}

#[async_trait]
impl ModelProvider for StaticModel {
    async fn recommendations_for(&self, user_id: &UserId) -> Result<Vec<Candidate>> {
        Ok(self.rankings.get(user_id).cloned().unwrap_or_default())
    }
}

/// Concurrent in-memory interaction store
///
/// Concurrent `mark_watched` and `recommend` calls for the same user are
/// allowed; readers observe some valid snapshot of the user's history.
#[derive(Debug, Default)]
pub struct InMemoryInteractionStore {
    interactions: DashMap<UserId, Vec<Interaction>>,
}

impl InMemoryInteractionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InteractionStore for InMemoryInteractionStore {
    async fn watched_by(&self, user_id: &UserId) -> Result<HashSet<MovieId>> {
        Ok(self
            .interactions
            .get(user_id)
            .map(|entry| entry.iter().map(|i| i.movie_id).collect())
            .unwrap_or_default())
    }

    async fn mark_watched(&self, user_id: &UserId, movie_id: MovieId) -> Result<()> {
        let mut entry = self.interactions.entry(user_id.clone()).or_default();
        if !entry.iter().any(|i| i.movie_id == movie_id) {
            entry.push(Interaction::new(user_id.clone(), movie_id));
        }
        Ok(())
    }

    async fn unwatch(&self, user_id: &UserId, movie_id: MovieId) -> Result<()> {
        if let Some(mut entry) = self.interactions.get_mut(user_id) {
            entry.retain(|i| i.movie_id != movie_id);
        }
        Ok(())
    }

    async fn history(&self, user_id: &UserId) -> Result<Vec<Interaction>> {
        Ok(self
            .interactions
            .get(user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: MovieId, title: &str, genres: &str, rating: f32) -> RawMovieRecord {
        RawMovieRecord {
            id,
            title: title.to_string(),
            genres: genres.to_string(),
            rating,
        }
    }

    #[tokio::test]
    async fn test_from_raw_normalizes_mixed_formats() {
        let catalog = InMemoryCatalog::from_raw(vec![
            raw(1, "Heat", "Action|Crime", 4.5),
            raw(2, "Clueless", "Comedy, Romance", 3.9),
            raw(3, "Alien", "['Horror', 'Sci-Fi']", 4.4),
        ]);

        assert_eq!(catalog.len(), 3);
        let alien = catalog.by_id(3).await.unwrap().unwrap();
        assert!(alien.has_genre("Sci-Fi"));
        assert!(alien.has_genre("Horror"));
    }

    #[tokio::test]
    async fn test_from_raw_skips_bad_rows() {
        let catalog = InMemoryCatalog::from_raw(vec![
            raw(1, "Heat", "Action", 4.5),
            raw(2, "Empty", "(no genres listed)", 3.0),
            raw(1, "Duplicate Id", "Drama", 2.0),
            raw(3, "Heat", "Thriller", 2.0),
            raw(4, "", "Drama", 2.0),
        ]);

        assert_eq!(catalog.len(), 1);
        assert!(catalog.by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_static_model_unknown_user_is_empty() {
        let model = StaticModel::new().with_user("alice", vec![Candidate::new(1, 0.9)]);

        let known = model.recommendations_for(&UserId::new("alice")).await.unwrap();
        assert_eq!(known.len(), 1);

        let unknown = model.recommendations_for(&UserId::new("nobody")).await.unwrap();
        assert!(unknown.is_empty());
    }

    #[tokio::test]
    async fn test_mark_watched_is_idempotent() {
        let store = InMemoryInteractionStore::new();
        let alice = UserId::new("alice");

        store.mark_watched(&alice, 1).await.unwrap();
        store.mark_watched(&alice, 1).await.unwrap();
        store.mark_watched(&alice, 2).await.unwrap();

        let watched = store.watched_by(&alice).await.unwrap();
        assert_eq!(watched.len(), 2);
        assert_eq!(store.history(&alice).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unwatch_is_idempotent() {
        let store = InMemoryInteractionStore::new();
        let alice = UserId::new("alice");

        store.mark_watched(&alice, 1).await.unwrap();
        store.unwatch(&alice, 1).await.unwrap();
        // Removing again, and removing something never watched, are no-ops
        store.unwatch(&alice, 1).await.unwrap();
        store.unwatch(&alice, 99).await.unwrap();
        store.unwatch(&UserId::new("nobody"), 1).await.unwrap();

        assert!(store.watched_by(&alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_preserves_insertion_order() {
        let store = InMemoryInteractionStore::new();
        let alice = UserId::new("alice");

        for movie_id in [5, 1, 3] {
            store.mark_watched(&alice, movie_id).await.unwrap();
        }

        let history = store.history(&alice).await.unwrap();
        let order: Vec<MovieId> = history.iter().map(|i| i.movie_id).collect();
        assert_eq!(order, vec![5, 1, 3]);
    }
}
