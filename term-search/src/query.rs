//! Multi-term evaluation: concurrent lookups and boolean folds.
//!
//! A boolean query is evaluated by looking up each term once and then
//! folding the per-term results pairwise:
//!
//! ```text
//! "java AND programming"        → all_of([java, programming])
//! "java OR coffee"              → any_of([java, coffee])
//! "java NOT coffee NOT island"  → excluding(java, [coffee, island])
//! ```

use crate::error::{Result, SearchError};
use crate::lookup::IndexLookup;
use crate::result::SearchResult;

/// Look up every term concurrently and wrap each mapping.
///
/// Results are returned in the same order as `terms`.
///
/// # Errors
///
/// Returns [`SearchError::IndexUnavailable`] for the first term (in input
/// order) whose lookup failed. All lookups run to completion first; failures
/// are logged at warn level as they are observed.
pub async fn lookup_terms<L, S>(terms: &[S], index: &L) -> Result<Vec<SearchResult>>
where
    L: IndexLookup,
    S: AsRef<str>,
{
    let futures: Vec<_> = terms
        .iter()
        .map(|term| SearchResult::from_lookup(term.as_ref(), index))
        .collect();

    let outcomes = futures::future::join_all(futures).await;

    let mut results = Vec::with_capacity(outcomes.len());
    let mut first_error: Option<SearchError> = None;
    for outcome in outcomes {
        match outcome {
            Ok(result) => results.push(result),
            Err(err) => {
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    if let Some(err) = first_error {
        return Err(err);
    }

    tracing::debug!(terms = terms.len(), "all term lookups succeeded");
    Ok(results)
}

/// Intersect all results (`r0 AND r1 AND ...`). Empty input gives an empty
/// result.
pub fn all_of<'a, I>(results: I) -> SearchResult
where
    I: IntoIterator<Item = &'a SearchResult>,
{
    let mut iter = results.into_iter();
    let Some(first) = iter.next() else {
        return SearchResult::default();
    };
    let combined = iter.fold(first.clone(), |acc, next| acc.and(next));
    tracing::debug!(documents = combined.len(), "AND fold finished");
    combined
}

/// Unite all results (`r0 OR r1 OR ...`). Empty input gives an empty result.
pub fn any_of<'a, I>(results: I) -> SearchResult
where
    I: IntoIterator<Item = &'a SearchResult>,
{
    let combined = results
        .into_iter()
        .fold(SearchResult::default(), |acc, next| acc.or(next));
    tracing::debug!(documents = combined.len(), "OR fold finished");
    combined
}

/// Remove from `base` every document present in any of `others`.
pub fn excluding<'a, I>(base: &SearchResult, others: I) -> SearchResult
where
    I: IntoIterator<Item = &'a SearchResult>,
{
    others
        .into_iter()
        .fold(base.clone(), |acc, next| acc.minus(next))
}
