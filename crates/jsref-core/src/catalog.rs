//! Catalog — the immutable list of reference entries every query runs over.
//!
//! [`Catalog::builtin`] returns the embedded JavaScript built-in object
//! reference. [`Catalog::load`] reads a replacement catalog from a TOML, JSON,
//! or YAML file with a top-level `entries` array.

use crate::error::{Error, Result};
use crate::types::CatalogEntry;
use phf::phf_map;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded data
// ---------------------------------------------------------------------------

type BuiltinRow = (&'static str, &'static str, &'static [&'static str]);

/// (name, category, tags) for every built-in entry, in display order.
const BUILTINS: &[BuiltinRow] = &[
    ("Object", "Fundamental", &["prototype", "properties", "keys"]),
    ("Function", "Fundamental", &["callable", "closure", "bind"]),
    ("Boolean", "Fundamental", &["primitive", "truthy", "wrapper"]),
    ("Symbol", "Fundamental", &["primitive", "unique", "well-known"]),
    ("Error", "Errors", &["exception", "throw", "stack"]),
    ("AggregateError", "Errors", &["exception", "multiple", "promise"]),
    ("EvalError", "Errors", &["exception", "eval"]),
    ("RangeError", "Errors", &["exception", "bounds"]),
    ("ReferenceError", "Errors", &["exception", "undeclared"]),
    ("SyntaxError", "Errors", &["exception", "parse"]),
    ("TypeError", "Errors", &["exception", "type"]),
    ("URIError", "Errors", &["exception", "encoding"]),
    ("Number", "Numbers", &["primitive", "float", "parse"]),
    ("BigInt", "Numbers", &["primitive", "arbitrary-precision", "integer"]),
    ("Math", "Numbers", &["static", "trigonometry", "random"]),
    ("Date", "Dates", &["time", "timestamp", "calendar"]),
    ("String", "Text", &["primitive", "unicode", "template"]),
    ("RegExp", "Text", &["pattern", "match", "replace"]),
    ("Array", "Collections", &["list", "iterable", "indexed"]),
    ("Map", "Collections", &["keyed", "iterable", "dictionary"]),
    ("Set", "Collections", &["unique", "iterable", "keyed"]),
    ("WeakMap", "Collections", &["keyed", "weak", "garbage-collection"]),
    ("WeakSet", "Collections", &["weak", "garbage-collection"]),
    ("ArrayBuffer", "Binary", &["buffer", "bytes", "transferable"]),
    ("SharedArrayBuffer", "Binary", &["buffer", "shared-memory", "worker"]),
    ("DataView", "Binary", &["buffer", "endianness", "bytes"]),
    ("TypedArray", "Binary", &["buffer", "typed", "iterable"]),
    ("Int8Array", "Binary", &["typed", "signed", "8-bit"]),
    ("Uint8Array", "Binary", &["typed", "unsigned", "8-bit", "bytes"]),
    ("Uint8ClampedArray", "Binary", &["typed", "unsigned", "8-bit", "canvas"]),
    ("Int16Array", "Binary", &["typed", "signed", "16-bit"]),
    ("Uint16Array", "Binary", &["typed", "unsigned", "16-bit"]),
    ("Int32Array", "Binary", &["typed", "signed", "32-bit"]),
    ("Uint32Array", "Binary", &["typed", "unsigned", "32-bit"]),
    ("Float32Array", "Binary", &["typed", "float", "32-bit"]),
    ("Float64Array", "Binary", &["typed", "float", "64-bit"]),
    ("BigInt64Array", "Binary", &["typed", "signed", "64-bit"]),
    ("BigUint64Array", "Binary", &["typed", "unsigned", "64-bit"]),
    ("Atomics", "Binary", &["static", "shared-memory", "worker"]),
    ("JSON", "Structured data", &["serialize", "parse", "stringify"]),
    ("Promise", "Control abstraction", &["async", "then", "microtask"]),
    ("AsyncFunction", "Control abstraction", &["async", "await"]),
    ("Generator", "Control abstraction", &["iterator", "yield", "lazy"]),
    ("AsyncGenerator", "Control abstraction", &["async", "iterator", "yield"]),
    ("Iterator", "Control abstraction", &["iterator", "protocol", "helpers"]),
    ("Reflect", "Reflection", &["static", "metaprogramming"]),
    ("Proxy", "Reflection", &["trap", "handler", "metaprogramming"]),
    ("WeakRef", "Memory management", &["weak", "garbage-collection"]),
    ("FinalizationRegistry", "Memory management", &["cleanup", "garbage-collection"]),
    ("Intl", "Internationalization", &["locale", "format", "collation"]),
];

/// One-line description of each built-in category.
static CATEGORY_SUMMARIES: phf::Map<&'static str, &'static str> = phf_map! {
    "Fundamental" => "Basic objects upon which all other objects are based",
    "Errors" => "Error constructors thrown by the engine and user code",
    "Numbers" => "Numeric primitives and mathematical helpers",
    "Dates" => "Points in time and calendar arithmetic",
    "Text" => "String representation and pattern matching",
    "Collections" => "Indexed and keyed collections of values",
    "Binary" => "Raw binary buffers and typed views over them",
    "Structured data" => "Serialization of structured values",
    "Control abstraction" => "Promises, generators, and iteration protocols",
    "Reflection" => "Interception and introspection of object operations",
    "Memory management" => "Weak references and finalization callbacks",
    "Internationalization" => "Locale-sensitive formatting and comparison",
};

/// Static description of a built-in category, if it is one.
pub fn category_summary(category: &str) -> Option<&'static str> {
    CATEGORY_SUMMARIES.get(category).copied()
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Immutable, validated list of [`CatalogEntry`] values with a name index.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

/// On-disk shape accepted by [`Catalog::load`].
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or duplicate names.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(Error::EmptyName { index: i });
            }
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(Error::DuplicateName(entry.name.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    /// The embedded JavaScript built-in object reference.
    pub fn builtin() -> Self {
        let entries = BUILTINS
            .iter()
            .map(|(name, category, tags)| CatalogEntry::new(*name, *category, tags.iter().copied()))
            .collect();
        Self::new(entries).expect("built-in catalog names must be unique and non-empty")
    }

    /// Read a catalog file. The format is inferred from the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let file: CatalogFile = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()?;
        let catalog = Self::new(file.entries)?;
        tracing::info!(path = %path.display(), entries = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Distinct tags across all entries in first-seen order.
    pub fn tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .flat_map(|e| e.tags.iter().map(String::as_str))
            .filter(|t| seen.insert(*t))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
