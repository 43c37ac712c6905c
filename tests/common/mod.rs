//! Shared test utilities for jsref integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Everything here is deterministic and in-memory except
//! the on-disk fixture writers, which only ever touch a caller-owned tempdir.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
