//! Search layer: per-entry scoring and whole-catalog ranking.
//!
//! [`score`] classifies a single entry against a query using a fixed rule
//! order (exact, prefix, substring, tag, category; first hit wins).
//! [`rank`] runs the scorer over a catalog, layers favorite/visited boosts on
//! top, and returns a deterministically ordered, truncated result list.

use crate::catalog::Catalog;
use crate::types::{CatalogEntry, Match, MatchKind, SearchResult};
use crate::user_state::UserState;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Added to the score of favorited entries when `boost_favorites` is on.
pub const FAVORITE_BOOST: u32 = 10;
/// Added to the score of visited entries when `boost_visited` is on.
pub const VISITED_BOOST: u32 = 5;
/// Default cap on ranked results.
pub const DEFAULT_MAX_RESULTS: usize = 50;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Knobs for [`rank`]. Also the `[search]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Compare query and entry text without lowercasing.
    pub case_sensitive: bool,
    pub boost_favorites: bool,
    pub boost_visited: bool,
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            boost_favorites: true,
            boost_visited: true,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

fn normalize(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

/// Score `entry` against `query`.
///
/// Returns `None` when nothing matches, including for a blank query. The query
/// is used as given; [`rank`] is the entry point that trims it. Tags and the
/// category are compared under the same case rule as the name.
pub fn score(entry: &CatalogEntry, query: &str, case_sensitive: bool) -> Option<Match> {
    if query.trim().is_empty() {
        return None;
    }

    let query = normalize(query, case_sensitive);
    let query = query.as_ref();
    let name = normalize(&entry.name, case_sensitive);

    if name == query {
        return Some(Match::new(MatchKind::Exact, entry.name.as_str()));
    }
    if name.starts_with(query) {
        return Some(Match::new(MatchKind::Prefix, entry.name.as_str()));
    }
    if name.contains(query) {
        return Some(Match::new(MatchKind::Substring, entry.name.as_str()));
    }
    if let Some(tag) = entry
        .tags
        .iter()
        .find(|tag| normalize(tag, case_sensitive).contains(query))
    {
        return Some(Match::new(MatchKind::Tag, tag.as_str()));
    }
    if normalize(&entry.category, case_sensitive).contains(query) {
        return Some(Match::new(MatchKind::Category, entry.category.as_str()));
    }
    None
}

// ---------------------------------------------------------------------------
// Ranker
// ---------------------------------------------------------------------------

/// Score descending, then name ascending (ordinal byte comparison).
pub fn result_order(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.entry_name.cmp(&b.entry_name))
}

/// Rank every catalog entry against `query`.
///
/// A blank query returns an empty list without scanning the catalog.
pub fn rank(
    catalog: &Catalog,
    query: &str,
    state: &UserState,
    options: &SearchOptions,
) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        tracing::trace!("rank: blank query, skipping catalog scan");
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = catalog
        .iter()
        .filter_map(|entry| {
            let m = score(entry, query, options.case_sensitive)?;
            let mut total = m.score;
            if options.boost_favorites && state.is_favorite(&entry.name) {
                total += FAVORITE_BOOST;
            }
            if options.boost_visited && state.is_visited(&entry.name) {
                total += VISITED_BOOST;
            }
            tracing::trace!(entry = %entry.name, kind = %m.kind, base = m.score, total, "rank: matched");
            Some(SearchResult {
                entry_name: entry.name.clone(),
                score: total,
                match_kind: m.kind,
                matched_text: m.matched_text,
            })
        })
        .collect();

    let matched = results.len();
    results.sort_by(result_order);
    results.truncate(options.max_results);

    tracing::debug!(
        query,
        matched,
        returned = results.len(),
        "rank: query complete"
    );
    results
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
