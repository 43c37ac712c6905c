//! Core types for jsref-core.
//!
//! This module defines the data structures shared across the search
//! operations: the immutable [`CatalogEntry`], the [`MatchKind`] that explains
//! why a query hit an entry, and the per-query [`SearchResult`].

use serde::{Deserialize, Serialize};

/// One named item in the reference catalog (a JavaScript built-in object).
///
/// Entries are built once when the catalog is constructed and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name; unique within a catalog.
    pub name: String,
    /// Grouping used by the category filter and the category match rule.
    pub category: String,
    /// Free-text tags, in the order they were declared.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogEntry {
    pub fn new<I, S>(name: impl Into<String>, category: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            category: category.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the entry carries `tag` verbatim.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Why a query matched an entry. Variants are listed in rule priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Prefix,
    Substring,
    Tag,
    Category,
}

impl MatchKind {
    /// Score awarded by the scorer before any user-state boost.
    pub fn base_score(self) -> u32 {
        match self {
            MatchKind::Exact => 100,
            MatchKind::Prefix => 80,
            MatchKind::Substring => 60,
            MatchKind::Tag => 40,
            MatchKind::Category => 30,
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `pad` so column widths in rendered tables apply.
        f.pad(match self {
            MatchKind::Exact => "exact",
            MatchKind::Prefix => "prefix",
            MatchKind::Substring => "substring",
            MatchKind::Tag => "tag",
            MatchKind::Category => "category",
        })
    }
}

/// Outcome of scoring a single entry against a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub score: u32,
    pub kind: MatchKind,
    /// The text the query was found in: the entry name, a tag, or the category.
    pub matched_text: String,
}

impl Match {
    pub(crate) fn new(kind: MatchKind, matched_text: impl Into<String>) -> Self {
        Self {
            score: kind.base_score(),
            kind,
            matched_text: matched_text.into(),
        }
    }
}

/// One row of a ranked result list. Created fresh for every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub entry_name: String,
    /// Base match score plus any favorite/visited boost.
    pub score: u32,
    pub match_kind: MatchKind,
    pub matched_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_scores_descend_in_priority_order() {
        let kinds = [
            MatchKind::Exact,
            MatchKind::Prefix,
            MatchKind::Substring,
            MatchKind::Tag,
            MatchKind::Category,
        ];
        for pair in kinds.windows(2) {
            assert!(pair[0].base_score() > pair[1].base_score());
        }
    }

    #[test]
    fn match_kind_display_honours_width() {
        assert_eq!(format!("{:<9}|", MatchKind::Tag), "tag      |");
    }

    #[test]
    fn match_kind_serializes_lowercase() {
        let json = serde_json::to_string(&MatchKind::Substring).unwrap();
        assert_eq!(json, "\"substring\"");
    }
}
