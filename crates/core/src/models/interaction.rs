//! Watch-history models
//!
//! An interaction records that a user has watched a catalog title. The pair
//! (user, movie) has set semantics; the timestamp exists for history
//! display and never influences ranking.

use crate::types::{MovieId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single "marked watched" record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub watched_at: DateTime<Utc>,
}

impl Interaction {
    pub fn new(user_id: UserId, movie_id: MovieId) -> Self {
        Self {
            user_id,
            movie_id,
            watched_at: Utc::now(),
        }
    }
}
