//! Domain-specific assertion macros for jsref harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* ranking invariant was violated.

/// Assert the entry names of a result list, in order.
///
/// ```rust
/// assert_ranked!(results, ["Array", "ArrayBuffer"]);
/// ```
#[macro_export]
macro_rules! assert_ranked {
    ($results:expr, [$($name:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $results.iter().map(|r| r.entry_name.as_str()).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "ranked entry names differ");
    }};
}

/// Assert that a result list is sorted by score descending, then name
/// ascending.
#[macro_export]
macro_rules! assert_rank_order {
    ($results:expr) => {{
        let results: &[jsref_core::SearchResult] = &$results;
        for pair in results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let ordered = a.score > b.score || (a.score == b.score && a.entry_name < b.entry_name);
            if !ordered {
                panic!(
                    "assert_rank_order! failed:\n  {:?} ({})\n  precedes\n  {:?} ({})",
                    a.entry_name, a.score, b.entry_name, b.score
                );
            }
        }
    }};
}

/// Assert that one named result has the given score and match kind.
#[macro_export]
macro_rules! assert_result {
    ($results:expr, $name:expr, $score:expr, $kind:expr) => {{
        let results: &[jsref_core::SearchResult] = &$results;
        let name: &str = $name;
        match results.iter().find(|r| r.entry_name == name) {
            Some(r) => {
                pretty_assertions::assert_eq!(
                    (r.score, r.match_kind),
                    ($score, $kind),
                    "score/kind for {:?}",
                    name
                );
            }
            None => panic!(
                "assert_result! failed: {:?} not in results {:?}",
                name,
                results.iter().map(|r| &r.entry_name).collect::<Vec<_>>()
            ),
        }
    }};
}
