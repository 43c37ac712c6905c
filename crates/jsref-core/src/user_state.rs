//! Per-user favorites and visited history.
//!
//! The search core only ever reads this; it is owned by whatever persists it.
//! Membership is by catalog name, so names the catalog does not know are
//! harmless: they are simply never looked up.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    #[serde(default)]
    pub favorites: BTreeSet<String>,
    #[serde(default)]
    pub visited: BTreeSet<String>,
}

impl UserState {
    pub fn with_favorite(mut self, name: impl Into<String>) -> Self {
        self.favorites.insert(name.into());
        self
    }

    pub fn with_visited(mut self, name: impl Into<String>) -> Self {
        self.visited.insert(name.into());
        self
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.contains(name)
    }

    pub fn is_visited(&self, name: &str) -> bool {
        self.visited.contains(name)
    }

    /// Parse `{"favorites": [...], "visited": [...]}`. Both keys are optional.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| Error::UserState { path: None, source })
    }

    /// Read a state file written by the persistence layer.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let state: Self = serde_json::from_str(&raw).map_err(|source| Error::UserState {
            path: Some(path.to_path_buf()),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            favorites = state.favorites.len(),
            visited = state.visited.len(),
            "user state loaded"
        );
        Ok(state)
    }

    /// Like [`UserState::load`], but a missing file yields an empty state.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(Error::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no user state file, starting empty");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Favorited or visited names that `catalog` has no entry for, sorted.
    pub fn unknown_names<'a>(&'a self, catalog: &Catalog) -> Vec<&'a str> {
        let unknown: BTreeSet<&str> = self
            .favorites
            .iter()
            .chain(self.visited.iter())
            .map(String::as_str)
            .filter(|name| !catalog.contains(name))
            .collect();
        unknown.into_iter().collect()
    }
}
