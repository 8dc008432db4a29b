//! Core type definitions for the CineRank platform

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier for a movie, stable for the lifetime of a session
pub type MovieId = u32;

/// A single genre label in canonical form (trimmed, non-empty)
pub type Genre = String;

/// Opaque user identifier.
///
/// Dashboard account names are arbitrary strings and are never
/// interchangeable with numeric model row ids. A provider backed by a
/// numerically keyed artifact owns the mapping from `UserId` to its rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
