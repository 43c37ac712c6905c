//! Output rendering for the CLI: plain text tables or JSON.
//!
//! Text output never carries leading or trailing whitespace on a line so it
//! diffs and greps cleanly.

use crate::cli::Format;
use jsref_core::{CatalogEntry, MatchKind, SearchResult};
use serde::Serialize;

/// One row of the `categories` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow<'a> {
    pub category: &'a str,
    pub entries: usize,
    pub summary: Option<&'static str>,
}

/// Everything `show` prints about an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDetail<'a> {
    #[serde(flatten)]
    pub entry: &'a CatalogEntry,
    pub favorite: bool,
    pub visited: bool,
}

pub fn search_results(results: &[SearchResult], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(results)?),
        Format::Text => Ok(results
            .iter()
            .map(|r| match r.match_kind {
                MatchKind::Tag | MatchKind::Category => format!(
                    "{:<3}  {:<9}  {} ({})",
                    r.score, r.match_kind, r.entry_name, r.matched_text
                ),
                _ => format!("{:<3}  {:<9}  {}", r.score, r.match_kind, r.entry_name),
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn names(names: &[String], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(names)?),
        Format::Text => Ok(names.join("\n")),
    }
}

pub fn entry_detail(detail: &EntryDetail<'_>, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(detail)?),
        Format::Text => {
            let yes_no = |b: bool| if b { "yes" } else { "no" };
            let mut lines = vec![
                detail.entry.name.clone(),
                format!("category: {}", detail.entry.category),
            ];
            if !detail.entry.tags.is_empty() {
                lines.push(format!("tags: {}", detail.entry.tags.join(", ")));
            }
            lines.push(format!("favorite: {}", yes_no(detail.favorite)));
            lines.push(format!("visited: {}", yes_no(detail.visited)));
            Ok(lines.join("\n"))
        }
    }
}

pub fn categories(rows: &[CategoryRow<'_>], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(rows)?),
        Format::Text => Ok(rows
            .iter()
            .map(|row| match row.summary {
                Some(summary) => format!("{} ({}): {}", row.category, row.entries, summary),
                None => format!("{} ({})", row.category, row.entries),
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
