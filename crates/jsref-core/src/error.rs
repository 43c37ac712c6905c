//! Error type for the fallible edges of jsref-core: building a catalog and
//! loading user state. Query operations themselves never fail.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("catalog entry #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate catalog entry name: {0}")]
    DuplicateName(String),

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `path` is `None` when the JSON did not come from a file.
    #[error("invalid user state{}: {source}", origin(path.as_deref()))]
    UserState {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

fn origin(path: Option<&Path>) -> String {
    path.map(|p| format!(" in '{}'", p.display())).unwrap_or_default()
}
