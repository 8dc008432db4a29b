//! Engine facade tests: request options, explanations, degraded
//! collaborators, and the JSON shape the dashboard consumes

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use cinerank_core::models::{Movie, RawMovieRecord};
use cinerank_core::{MovieId, UserId};
use cinerank_recs::{
    Candidate, CatalogProvider, EngineConfig, InMemoryCatalog, InMemoryInteractionStore,
    ModelProvider, RecommendRequest, RecsEngine, StaticModel,
};

fn raw(id: MovieId, title: &str, genres: &str, rating: f32) -> RawMovieRecord {
    RawMovieRecord {
        id,
        title: title.to_string(),
        genres: genres.to_string(),
        rating,
    }
}

/// A catalog loaded from rows in the serialization mix real metadata has
fn dashboard_catalog() -> InMemoryCatalog {
    InMemoryCatalog::from_raw(vec![
        raw(1, "Heat", "Action|Crime", 4.3),
        raw(2, "Clueless", "Comedy, Romance", 3.9),
        raw(3, "Ronin", "['Action', 'Thriller']", 3.8),
        raw(4, "Fargo", "Crime|Drama", 4.1),
        raw(5, "Airplane!", "Comedy", 4.0),
    ])
}

fn engine_with(catalog: InMemoryCatalog, model: StaticModel) -> RecsEngine {
    RecsEngine::new(
        EngineConfig::default(),
        Arc::new(catalog),
        Arc::new(model),
        Arc::new(InMemoryInteractionStore::new()),
    )
}

#[tokio::test]
async fn test_genre_filter_restricts_without_reordering() {
    let engine = engine_with(dashboard_catalog(), StaticModel::new());
    let alice = UserId::new("alice");
    engine.mark_watched(&alice, 1).await.unwrap();

    let unfiltered = engine.recommend(&RecommendRequest::new("alice")).await;
    let comedies = engine
        .recommend(&RecommendRequest::new("alice").with_genre("Comedy"))
        .await;

    assert!(!comedies.is_empty());
    assert!(comedies.iter().all(|r| r.movie_id == 2 || r.movie_id == 5));

    // Filtering only removes entries; survivors keep their relative order.
    let surviving: Vec<MovieId> = unfiltered
        .iter()
        .map(|r| r.movie_id)
        .filter(|id| comedies.iter().any(|c| c.movie_id == *id))
        .collect();
    let filtered: Vec<MovieId> = comedies.iter().map(|r| r.movie_id).collect();
    assert_eq!(surviving, filtered);
}

#[tokio::test]
async fn test_explanation_references_watched_overlapping_title() {
    let engine = engine_with(dashboard_catalog(), StaticModel::new());
    let alice = UserId::new("alice");
    engine.mark_watched(&alice, 1).await.unwrap();

    let recs = engine.recommend(&RecommendRequest::new("alice")).await;

    let ronin = recs.iter().find(|r| r.movie_id == 3).unwrap();
    assert_eq!(ronin.explanation, "Because you watched Heat");

    let clueless = recs.iter().find(|r| r.movie_id == 2).unwrap();
    assert_eq!(clueless.explanation, "Recommended for you");
}

#[tokio::test]
async fn test_recommendation_json_shape() {
    let engine = engine_with(dashboard_catalog(), StaticModel::new());

    let recs = engine
        .recommend(&RecommendRequest::new("alice").with_limit(1))
        .await;
    let json = serde_json::to_value(&recs).unwrap();

    let card = &json[0];
    assert!(card["movie_id"].is_number());
    assert!(card["title"].is_string());
    assert!(card["score"].is_number());
    assert!(card["overlap_ratio"].is_number());
    assert!(card["explanation"].is_string());
    assert!(card["generated_at"].is_string());
}

/// Catalog provider that always fails, standing in for a dead backend
struct FailingCatalog;

#[async_trait]
impl CatalogProvider for FailingCatalog {
    async fn all(&self) -> Result<Vec<Movie>> {
        bail!("catalog backend down")
    }

    async fn by_id(&self, _id: MovieId) -> Result<Option<Movie>> {
        bail!("catalog backend down")
    }
}

/// Model provider that always fails
struct FailingModel;

#[async_trait]
impl ModelProvider for FailingModel {
    async fn recommendations_for(&self, _user_id: &UserId) -> Result<Vec<Candidate>> {
        bail!("model backend down")
    }
}

#[tokio::test]
async fn test_catalog_failure_degrades_to_empty_list() {
    let engine = RecsEngine::new(
        EngineConfig::default(),
        Arc::new(FailingCatalog),
        Arc::new(StaticModel::new()),
        Arc::new(InMemoryInteractionStore::new()),
    );

    let recs = engine.recommend(&RecommendRequest::new("alice")).await;
    assert!(recs.is_empty());

    let profile = engine.affinity_profile(&UserId::new("alice")).await;
    assert!(profile.is_empty());
}

#[tokio::test]
async fn test_model_failure_degrades_to_popularity_fallback() {
    let engine = RecsEngine::new(
        EngineConfig::default(),
        Arc::new(dashboard_catalog()),
        Arc::new(FailingModel),
        Arc::new(InMemoryInteractionStore::new()),
    );

    let recs = engine.recommend(&RecommendRequest::new("alice")).await;
    let ids: Vec<MovieId> = recs.iter().map(|r| r.movie_id).collect();
    // Rating order: Heat 4.3, Fargo 4.1, Airplane! 4.0, Clueless 3.9, Ronin 3.8
    assert_eq!(ids, vec![1, 4, 5, 2, 3]);
}

#[tokio::test]
async fn test_zero_limit_request_yields_empty_list() {
    let engine = engine_with(dashboard_catalog(), StaticModel::new());

    let recs = engine
        .recommend(&RecommendRequest::new("alice").with_limit(0))
        .await;
    assert!(recs.is_empty());
}

#[tokio::test]
async fn test_history_round_trip() {
    let engine = engine_with(dashboard_catalog(), StaticModel::new());
    let alice = UserId::new("alice");

    engine.mark_watched(&alice, 4).await.unwrap();
    engine.mark_watched(&alice, 1).await.unwrap();
    engine.mark_watched(&alice, 4).await.unwrap();

    let history = engine.history(&alice).await.unwrap();
    let order: Vec<MovieId> = history.iter().map(|i| i.movie_id).collect();
    assert_eq!(order, vec![4, 1]);

    let watched: HashSet<MovieId> = order.into_iter().collect();
    let recs = engine.recommend(&RecommendRequest::new("alice")).await;
    assert!(recs.iter().all(|r| !watched.contains(&r.movie_id)));
}
