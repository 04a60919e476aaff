//! Integration tests for the result algebra.
//!
//! These tests go through the public API only: an in-memory index stands in
//! for the persistent store, and a failing lookup checks error propagation.

use std::error::Error as _;

use term_search::{
    all_of, any_of, excluding, lookup_terms, AlgebraConfig, CombineRule, IndexLookup,
    LookupError, MemoryIndex, RankOrder, Score, ScoreMap, SearchError, SearchResult,
};

fn make_result(entries: &[(&str, Score)]) -> SearchResult {
    entries.iter().copied().collect()
}

/// A small corpus in the shape a crawler would produce.
fn make_index() -> MemoryIndex {
    let mut index = MemoryIndex::new();
    index.add_document(
        "https://en.wikipedia.org/wiki/Java_(programming_language)",
        "java is a programming language java runs on the jvm".split_whitespace(),
    );
    index.add_document(
        "https://en.wikipedia.org/wiki/Programming_language",
        "a programming language is a notation for programming".split_whitespace(),
    );
    index.add_document(
        "https://en.wikipedia.org/wiki/Java",
        "java is an island java coffee".split_whitespace(),
    );
    index
}

/// Lookup backend whose store is unreachable.
struct UnreachableIndex;

impl IndexLookup for UnreachableIndex {
    async fn get_counts(&self, _term: &str) -> Result<ScoreMap, LookupError> {
        Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

const JAVA_LANG: &str = "https://en.wikipedia.org/wiki/Java_(programming_language)";
const PROG_LANG: &str = "https://en.wikipedia.org/wiki/Programming_language";
const JAVA_ISLAND: &str = "https://en.wikipedia.org/wiki/Java";

#[tokio::test]
async fn java_and_programming() {
    let index = make_index();
    let java = SearchResult::from_lookup("java", &index).await.expect("lookup");
    let programming = SearchResult::from_lookup("programming", &index)
        .await
        .expect("lookup");

    let both = java.and(&programming);
    assert_eq!(both.len(), 1);
    // 2 x "java" + 1 x "programming"
    assert_eq!(both.relevance(JAVA_LANG), 3);
    assert_eq!(both.sorted(), vec![(JAVA_LANG.to_string(), 3)]);
}

#[tokio::test]
async fn java_or_programming_ranked() {
    let index = make_index();
    let results = lookup_terms(&["java", "programming"], &index)
        .await
        .expect("lookups");
    let either = any_of(&results);

    assert_eq!(either.len(), 3);
    assert_eq!(
        either.sorted(),
        vec![
            (JAVA_ISLAND.to_string(), 2),
            (PROG_LANG.to_string(), 2),
            (JAVA_LANG.to_string(), 3),
        ]
    );
    assert_eq!(either.ranked(RankOrder::Descending)[0].0, JAVA_LANG);
}

#[tokio::test]
async fn java_not_programming() {
    let index = make_index();
    let results = lookup_terms(&["java", "programming"], &index)
        .await
        .expect("lookups");
    let only_java = excluding(&results[0], &results[1..]);
    assert_eq!(only_java, make_result(&[(JAVA_ISLAND, 2)]));
}

#[tokio::test]
async fn three_term_conjunction() {
    let index = make_index();
    let results = lookup_terms(&["a", "programming", "language"], &index)
        .await
        .expect("lookups");
    let all = all_of(&results);

    // a + programming + language per document
    // JAVA_LANG: 1 + 1 + 1
    assert_eq!(all.relevance(JAVA_LANG), 3);
    // PROG_LANG: 2 + 2 + 1
    assert_eq!(all.relevance(PROG_LANG), 5);
    assert!(!all.contains(JAVA_ISLAND));
}

#[tokio::test]
async fn unavailable_index_surfaces_error() {
    let err = SearchResult::from_lookup("java", &UnreachableIndex)
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::IndexUnavailable { .. }));
    assert!(err.to_string().contains("java"));
    assert_eq!(
        err.source().map(ToString::to_string).as_deref(),
        Some("connection refused")
    );

    let err = lookup_terms(&["java", "coffee"], &UnreachableIndex)
        .await
        .unwrap_err();
    match err {
        SearchError::IndexUnavailable { term, .. } => assert_eq!(term, "java"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn two_term_example() {
    let a = make_result(&[("u1", 3), ("u2", 1)]);
    let b = make_result(&[("u2", 2), ("u3", 5)]);

    assert_eq!(a.or(&b), make_result(&[("u1", 3), ("u2", 3), ("u3", 5)]));
    assert_eq!(a.and(&b), make_result(&[("u2", 3)]));
    assert_eq!(a.minus(&b), make_result(&[("u1", 3)]));
    assert_eq!(
        a.sorted(),
        vec![("u2".to_string(), 1), ("u1".to_string(), 3)]
    );
}

#[test]
fn membership_properties_hold_on_fixtures() {
    let fixtures = [
        make_result(&[]),
        make_result(&[("d1", 0)]),
        make_result(&[("d1", 4), ("d2", 0), ("d3", 7)]),
        make_result(&[("d2", 1), ("d4", 2)]),
        make_result(&[("d1", 1), ("d2", 2), ("d3", 3), ("d4", 4), ("d5", 5)]),
    ];
    let universe = ["d1", "d2", "d3", "d4", "d5", "d6"];

    for a in &fixtures {
        for b in &fixtures {
            let union = a.or(b);
            let inter = a.and(b);
            let diff = a.minus(b);

            for d in universe {
                assert_eq!(union.contains(d), a.contains(d) || b.contains(d));
                assert_eq!(inter.contains(d), a.contains(d) && b.contains(d));
                assert_eq!(diff.contains(d), a.contains(d) && !b.contains(d));

                if union.contains(d) {
                    assert_eq!(union.relevance(d), a.relevance(d) + b.relevance(d));
                }
                if inter.contains(d) {
                    assert_eq!(inter.relevance(d), a.relevance(d) + b.relevance(d));
                }
                if diff.contains(d) {
                    assert_eq!(diff.relevance(d), a.relevance(d));
                }
            }

            assert_eq!(union, b.or(a));
            assert_eq!(inter, b.and(a));
        }

        let doubled: SearchResult = a.iter().map(|(d, s)| (d, s * 2)).collect();
        assert_eq!(a.and(a), doubled);
        assert!(a.minus(a).is_empty());

        let sorted = a.sorted();
        assert_eq!(sorted.len(), a.len());
        assert!(sorted.windows(2).all(|w| w[0].1 <= w[1].1));
        let mut sorted_scores: Vec<Score> = sorted.iter().map(|(_, s)| *s).collect();
        let mut raw_scores: Vec<Score> = a.iter().map(|(_, s)| s).collect();
        sorted_scores.sort_unstable();
        raw_scores.sort_unstable();
        assert_eq!(sorted_scores, raw_scores);
    }
}

#[test]
fn configured_policy_and_order() {
    let config = AlgebraConfig::from_toml_str("combine = \"max\"\norder = \"descending\"")
        .expect("valid config");
    assert_eq!(config.combine, CombineRule::Max);

    let a = make_result(&[("u1", 3), ("u2", 1)]);
    let b = make_result(&[("u2", 2), ("u3", 5)]);
    let merged = a.or_with(&b, &config.combine);

    assert_eq!(
        config.rank(&merged),
        vec![
            ("u3".to_string(), 5),
            ("u1".to_string(), 3),
            ("u2".to_string(), 2),
        ]
    );
}

#[test]
fn results_shared_across_threads() {
    let a = std::sync::Arc::new(make_result(&[("u1", 3), ("u2", 1)]));
    let b = make_result(&[("u2", 2)]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let a = std::sync::Arc::clone(&a);
            let b = b.clone();
            std::thread::spawn(move || a.and(&b))
        })
        .collect();

    for handle in handles {
        let joined = handle.join().expect("worker thread");
        assert_eq!(joined, make_result(&[("u2", 3)]));
    }
}
