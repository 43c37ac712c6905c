//! jsref-core — catalog search core for jsref.
//!
//! This crate exposes the catalog and the three query operations that run over
//! it, plus the shared types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! Catalog ──► Scorer ──► Ranker ──┐
//!    │                            ├──► caller (CLI / UI)
//!    ├──────► Filter ─────────────┤
//!    └──────► Suggest ────────────┘
//!                 ▲
//!             UserState (read-only)
//! ```
//!
//! Every operation is a pure, synchronous function of its inputs. The catalog
//! is passed in explicitly; nothing here holds global state.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod search;
pub mod suggest;
pub mod types;
pub mod user_state;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use filter::{filter, FilterOptions};
pub use search::{rank, score, SearchOptions};
pub use suggest::suggest;
pub use types::{CatalogEntry, Match, MatchKind, SearchResult};
pub use user_state::UserState;
