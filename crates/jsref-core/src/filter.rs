//! Filter — hard include predicates over a sequence of catalog names.
//!
//! Unlike [`rank`](crate::search::rank), filtering never scores or reorders:
//! it makes one pass over its input and drops every name that fails an active
//! criterion.

use crate::catalog::Catalog;
use crate::types::CatalogEntry;
use crate::user_state::UserState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Criteria for [`filter`]. An empty set or `false` leaves that criterion off;
/// all active criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Allowed categories; the entry's category must be one of them.
    pub categories: BTreeSet<String>,
    /// The entry must carry at least one of these tags.
    pub tags: BTreeSet<String>,
    /// Only favorited entries.
    pub favorites: bool,
    /// Only visited entries.
    pub visited: bool,
}

impl FilterOptions {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn favorites_only(mut self) -> Self {
        self.favorites = true;
        self
    }

    pub fn visited_only(mut self) -> Self {
        self.visited = true;
        self
    }

    /// Whether no criterion is active, i.e. [`filter`] keeps everything.
    pub fn is_unconstrained(&self) -> bool {
        self.categories.is_empty() && self.tags.is_empty() && !self.favorites && !self.visited
    }

    fn accepts(&self, name: &str, entry: Option<&CatalogEntry>, state: &UserState) -> bool {
        if !self.categories.is_empty()
            && !entry.is_some_and(|e| self.categories.contains(&e.category))
        {
            return false;
        }
        if !self.tags.is_empty()
            && !entry.is_some_and(|e| e.tags.iter().any(|t| self.tags.contains(t)))
        {
            return false;
        }
        if self.favorites && !state.is_favorite(name) {
            return false;
        }
        if self.visited && !state.is_visited(name) {
            return false;
        }
        true
    }
}

/// Keep the names from `names` that satisfy `criteria`, in input order.
///
/// Category and tag criteria are checked against `catalog`; a name with no
/// catalog entry fails them.
pub fn filter<I, S>(
    catalog: &Catalog,
    names: I,
    criteria: &FilterOptions,
    state: &UserState,
) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let kept: Vec<String> = names
        .into_iter()
        .filter(|name| {
            let name: &str = name.as_ref();
            let keep = criteria.accepts(name, catalog.get(name), state);
            if !keep {
                tracing::trace!(name, "filter: dropped");
            }
            keep
        })
        .map(|name| AsRef::<str>::as_ref(&name).to_string())
        .collect();
    tracing::debug!(kept = kept.len(), "filter: complete");
    kept
}
