//! Example: A Dashboard Session Against the Re-Ranking Engine
//!
//! Demonstrates the full flow the movie dashboard drives: load a catalog
//! from raw metadata rows, wire up a precomputed model snapshot, mark a few
//! titles watched, and render genre-boosted recommendations.
//!
//! Run with:
//! ```bash
//! cargo run --example dashboard_session
//! ```

use anyhow::Result;
use cinerank_core::models::RawMovieRecord;
use cinerank_core::{init_logging, LogConfig, UserId};
use cinerank_recs::{
    Candidate, EngineConfig, InMemoryCatalog, InMemoryInteractionStore, RecommendRequest,
    RecsEngine, StaticModel,
};
use std::sync::Arc;

fn raw(id: u32, title: &str, genres: &str, rating: f32) -> RawMovieRecord {
    RawMovieRecord {
        id,
        title: title.to_string(),
        genres: genres.to_string(),
        rating,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(&LogConfig::default());

    // Catalog rows arrive in the serialization mix real metadata has:
    // pipe-separated, comma-separated, and bracketed lists.
    let catalog = InMemoryCatalog::from_raw(vec![
        raw(1, "Heat", "Action|Crime", 4.3),
        raw(2, "Clueless", "Comedy, Romance", 3.9),
        raw(3, "Ronin", "['Action', 'Thriller']", 3.8),
        raw(4, "Fargo", "Crime|Drama", 4.1),
        raw(5, "Airplane!", "Comedy", 4.0),
        raw(6, "The Conversation", "Drama|Thriller", 4.2),
    ]);
    println!("Loaded catalog with {} titles", catalog.len());

    // Snapshot of the externally trained artifact: ranked candidates for
    // the users it knows about. Everyone else gets the popularity fallback.
    let model = StaticModel::new().with_user(
        "alice",
        vec![
            Candidate::new(6, 0.92),
            Candidate::new(4, 0.87),
            Candidate::new(2, 0.41),
        ],
    );

    let engine = RecsEngine::new(
        EngineConfig::default(),
        Arc::new(catalog),
        Arc::new(model),
        Arc::new(InMemoryInteractionStore::new()),
    );

    let alice = UserId::new("alice");
    for movie_id in [1, 3] {
        engine.mark_watched(&alice, movie_id).await?;
    }

    let profile = engine.affinity_profile(&alice).await;
    println!("Inferred genre preferences: {}", profile.join(", "));

    println!("\n=== Recommendations for {alice} ===");
    let recs = engine
        .recommend(&RecommendRequest::new("alice").with_limit(5))
        .await;
    for rec in &recs {
        println!(
            "{:<20} score {:.3}  overlap {:.2}  {}",
            rec.title, rec.score, rec.overlap_ratio, rec.explanation
        );
    }

    println!("\n=== Fresh user, Comedy filter ===");
    let comedies = engine
        .recommend(&RecommendRequest::new("bob").with_genre("Comedy"))
        .await;
    for rec in &comedies {
        println!("{:<20} score {:.3}  {}", rec.title, rec.score, rec.explanation);
    }

    Ok(())
}
