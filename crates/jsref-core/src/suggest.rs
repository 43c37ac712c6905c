//! Autocomplete suggestions: a cheaper sibling of the ranker.
//!
//! Names are offered first (catalog order), then tags (first-seen order).
//! Matching is always case-insensitive and nothing is scored.

use crate::catalog::Catalog;
use std::collections::HashSet;

/// Minimum trimmed query length, in characters, before anything is suggested.
pub const MIN_QUERY_CHARS: usize = 2;

/// Up to `max_suggestions` distinct names and tags containing `query`.
pub fn suggest(catalog: &Catalog, query: &str, max_suggestions: usize) -> Vec<String> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut out: Vec<String> = Vec::new();

    let names = catalog.names();
    let tags = catalog.iter().flat_map(|e| e.tags.iter().map(String::as_str));

    for candidate in names.chain(tags) {
        if out.len() >= max_suggestions {
            break;
        }
        if candidate.to_lowercase().contains(&needle) && seen.insert(candidate) {
            out.push(candidate.to_string());
        }
    }

    tracing::debug!(query, suggestions = out.len(), "suggest: complete");
    out
}
