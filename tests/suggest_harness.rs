#![allow(unused)]
//! Suggestion generator integration harness.
//!
//! # What this covers
//!
//! - **Minimum length**: fewer than two (trimmed) characters → nothing.
//! - **Two passes**: names in catalog order, then tags in first-seen order.
//! - **Cap**: `max_suggestions` bounds the combined output.
//! - **Deduplication** across both passes.
//! - **Property** (proptest): output is bounded, duplicate-free, and every
//!   suggestion contains the query case-insensitively.
//!
//! # Running
//!
//! ```sh
//! cargo test --test suggest_harness
//! ```

mod common;
use common::*;
use jsref_core::{suggest, Catalog};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use std::collections::HashSet;

#[test]
fn ar_suggests_both_names() {
    assert_eq!(suggest(&array_catalog(), "ar", 5), vec!["Array", "ArrayBuffer"]);
}

#[rstest]
#[case("")]
#[case("a")]
#[case(" a ")]
#[case("\t")]
fn too_short(#[case] query: &str) {
    assert!(suggest(&collections_catalog(), query, 10).is_empty());
}

#[test]
fn names_then_tags_in_first_seen_order() {
    // Names containing "ke": none. Tags: "keyed" (Map, first seen there).
    assert_eq!(suggest(&collections_catalog(), "ke", 10), vec!["keyed"]);

    // "ty": no names; tags "typed".
    assert_eq!(suggest(&collections_catalog(), "ty", 10), vec!["typed"]);

    // "we": names WeakMap, WeakSet; tag "weak".
    assert_eq!(
        suggest(&collections_catalog(), "we", 10),
        vec!["WeakMap", "WeakSet", "weak"]
    );
}

#[test]
fn query_is_case_insensitive() {
    assert_eq!(
        suggest(&collections_catalog(), "WEAK", 10),
        vec!["WeakMap", "WeakSet", "weak"]
    );
}

#[test]
fn cap_stops_before_tags() {
    assert_eq!(
        suggest(&collections_catalog(), "we", 2),
        vec!["WeakMap", "WeakSet"]
    );
}

#[test]
fn builtin_catalog_suggestions() {
    let suggestions = suggest(&Catalog::builtin(), "prom", 8);
    assert_eq!(suggestions, vec!["Promise", "promise"]);
}

proptest! {
    #[test]
    fn prop_suggestions_are_bounded_unique_and_relevant(
        query in "[ ]{0,2}[a-zA-Z]{0,4}[ ]{0,2}",
        max in 0usize..12,
    ) {
        let suggestions = suggest(&collections_catalog(), &query, max);
        prop_assert!(suggestions.len() <= max);

        let unique: HashSet<&String> = suggestions.iter().collect();
        prop_assert_eq!(unique.len(), suggestions.len());

        let needle = query.trim().to_lowercase();
        if needle.chars().count() < 2 {
            prop_assert!(suggestions.is_empty());
        }
        for s in &suggestions {
            prop_assert!(s.to_lowercase().contains(&needle));
        }
    }
}
