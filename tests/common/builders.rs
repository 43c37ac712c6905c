//! Test builders — ergonomic constructors for catalogs, user state, and options.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use jsref_core::{Catalog, CatalogEntry, SearchOptions, UserState};

// ---------------------------------------------------------------------------
// CatalogBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Catalog`] fixtures.
///
/// # Example
///
/// ```rust
/// let catalog = CatalogBuilder::new()
///     .entry("Array", "Collections", &["list", "iterable"])
///     .entry("ArrayBuffer", "Binary", &["buffer"])
///     .build();
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    entries: Vec<CatalogEntry>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, name: &str, category: &str, tags: &[&str]) -> Self {
        self.entries
            .push(CatalogEntry::new(name, category, tags.iter().copied()));
        self
    }

    pub fn build(self) -> Catalog {
        Catalog::new(self.entries).expect("test catalog must have unique, non-empty names")
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// State with the given favorites and visited names.
pub fn state(favorites: &[&str], visited: &[&str]) -> UserState {
    let state = favorites
        .iter()
        .fold(UserState::default(), |s, name| s.with_favorite(*name));
    visited.iter().fold(state, |s, name| s.with_visited(*name))
}

/// Default options with a different result cap.
pub fn limited(max_results: usize) -> SearchOptions {
    SearchOptions {
        max_results,
        ..SearchOptions::default()
    }
}

/// Default options with both boosts switched off.
pub fn unboosted() -> SearchOptions {
    SearchOptions {
        boost_favorites: false,
        boost_visited: false,
        ..SearchOptions::default()
    }
}
