//! Static catalogs and on-disk fixture writers used across harnesses.

use super::builders::CatalogBuilder;
use jsref_core::Catalog;
use std::path::{Path, PathBuf};

/// The two-entry catalog used by the reference scenarios.
pub fn array_catalog() -> Catalog {
    CatalogBuilder::new()
        .entry("Array", "Collections", &["list", "iterable"])
        .entry("ArrayBuffer", "Binary", &["buffer"])
        .build()
}

/// A slightly larger catalog with overlapping names, tags, and categories.
pub fn collections_catalog() -> Catalog {
    CatalogBuilder::new()
        .entry("Array", "Collections", &["list", "iterable", "indexed"])
        .entry("ArrayBuffer", "Binary", &["buffer", "bytes"])
        .entry("Map", "Collections", &["keyed", "iterable"])
        .entry("Set", "Collections", &["unique", "iterable", "keyed"])
        .entry("WeakMap", "Collections", &["keyed", "weak"])
        .entry("WeakSet", "Collections", &["weak"])
        .entry("DataView", "Binary", &["buffer", "endianness"])
        .entry("Uint8Array", "Binary", &["typed", "bytes"])
        .entry("Promise", "Control abstraction", &["async", "then"])
        .entry("JSON", "Structured data", &["parse", "stringify"])
        .build()
}

/// Catalog file in TOML form, equivalent to [`array_catalog`].
pub const ARRAY_CATALOG_TOML: &str = r#"
[[entries]]
name = "Array"
category = "Collections"
tags = ["list", "iterable"]

[[entries]]
name = "ArrayBuffer"
category = "Binary"
tags = ["buffer"]
"#;

/// Write `contents` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("fixture write");
    path
}
