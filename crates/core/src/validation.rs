//! Genre normalization and validation utilities
//!
//! Upstream metadata sources serialize genre lists inconsistently:
//! pipe-separated (`Action|Crime`), comma-separated (`Action, Crime`), or a
//! bracketed list-as-string (`['Action', 'Crime']`). All of it is
//! normalized here, at the catalog loading boundary, so ranking code only
//! ever sees the canonical set-of-strings representation.

use crate::error::CineRankError;
use crate::types::Genre;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Bracketed list-as-string, e.g. `['Action', 'Crime']` or `["Action"]`
static BRACKETED_LIST_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[(.*)\]\s*$").expect("Failed to compile bracketed list regex"));

/// Genre labels: start alphanumeric, then word characters and a few
/// punctuation marks seen in real metadata (e.g. `Sci-Fi`, `Film-Noir`)
static GENRE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 '&.\-]*$").expect("Failed to compile genre regex")
});

/// Placeholder some sources emit instead of an empty genre field
const NO_GENRES_PLACEHOLDER: &str = "(no genres listed)";

/// Normalize a single genre label: strip quotes and surrounding whitespace.
///
/// Returns `None` for labels that are empty after trimming or that are a
/// known "no genres" placeholder.
pub fn normalize_genre(raw: &str) -> Option<Genre> {
    let trimmed = raw
        .trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .trim();

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NO_GENRES_PLACEHOLDER) {
        return None;
    }

    Some(trimmed.to_string())
}

/// Parse a serialized genre list into the canonical set representation.
///
/// Accepts pipe-separated, comma-separated, and bracketed formats. Labels
/// that normalize to nothing are dropped; an unusable input yields an empty
/// set, which callers treat as a row to skip.
pub fn parse_genre_list(raw: &str) -> BTreeSet<Genre> {
    let inner = match BRACKETED_LIST_REGEX.captures(raw) {
        Some(captures) => captures.get(1).map_or("", |m| m.as_str()),
        None => raw,
    };

    let separator = if inner.contains('|') { '|' } else { ',' };

    inner
        .split(separator)
        .filter_map(normalize_genre)
        .collect()
}

/// Validate a canonical genre label
pub fn validate_genre(genre: &str) -> Result<(), CineRankError> {
    if GENRE_REGEX.is_match(genre) {
        Ok(())
    } else {
        Err(CineRankError::validation_field(
            format!("invalid genre label: {genre:?}"),
            "genre",
        ))
    }
}
