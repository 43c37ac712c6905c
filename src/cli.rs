//! Command-line surface, parsed with clap derive.

use clap::{Args, Parser, Subcommand, ValueEnum};
use jsref_core::{FilterOptions, SearchOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jsref",
    version,
    about = "jsref — search the JavaScript built-in object reference"
)]
pub struct Cli {
    /// Config file layered over the built-in defaults, instead of
    /// ~/.config/jsref/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog file (TOML, JSON or YAML) replacing the built-in catalog.
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// User state JSON file with `favorites` and `visited` name lists.
    #[arg(long, global = true, value_name = "PATH")]
    pub state: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Write debug logs to /tmp/jsref-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank catalog entries against a query.
    Search(SearchArgs),
    /// Autocomplete names and tags for a partial query.
    Suggest {
        query: String,
        /// Maximum number of suggestions (defaults to `suggest.max_suggestions`).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List catalog entries matching every given criterion.
    Filter(FilterArgs),
    /// Show a single catalog entry.
    Show { name: String },
    /// List categories with entry counts.
    Categories,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    pub query: String,

    /// Match without lowercasing query and entry text.
    #[arg(long)]
    pub case_sensitive: bool,

    #[arg(long)]
    pub no_boost_favorites: bool,

    #[arg(long)]
    pub no_boost_visited: bool,

    /// Maximum number of results (defaults to `search.max_results`).
    #[arg(long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

impl SearchArgs {
    /// Apply command-line flags on top of the configured options. Flags only
    /// ever switch behaviour on or off relative to the config, never back.
    pub fn options(&self, base: &SearchOptions) -> SearchOptions {
        SearchOptions {
            case_sensitive: base.case_sensitive || self.case_sensitive,
            boost_favorites: base.boost_favorites && !self.no_boost_favorites,
            boost_visited: base.boost_visited && !self.no_boost_visited,
            max_results: self.limit.unwrap_or(base.max_results),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Keep entries in this category (repeatable; any of them).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Keep entries carrying this tag (repeatable; any of them).
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Keep favorited entries only.
    #[arg(long)]
    pub favorites: bool,

    /// Keep visited entries only.
    #[arg(long)]
    pub visited: bool,
}

impl FilterArgs {
    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            categories: self.categories.iter().cloned().collect(),
            tags: self.tags.iter().cloned().collect(),
            favorites: self.favorites,
            visited: self.visited,
        }
    }
}
