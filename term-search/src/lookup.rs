//! Trait definition for the inverted-index lookup collaborator.
//!
//! The algebra never talks to storage directly. A backend (a key-value store
//! client, a file-backed index, the in-memory [`MemoryIndex`]) implements
//! [`IndexLookup`] and hands back term frequencies per document.

use std::collections::HashMap;
use std::future::Future;

use crate::error::LookupError;
use crate::types::{Score, ScoreMap};

/// A source of term→document→count mappings.
///
/// Implementors own their timeout, retry, and connection policy. Any failure
/// they return is surfaced by
/// [`SearchResult::from_lookup`](crate::SearchResult::from_lookup) as
/// [`SearchError::IndexUnavailable`](crate::SearchError::IndexUnavailable).
///
/// All implementations must be `Send + Sync` so several terms can be looked
/// up concurrently.
pub trait IndexLookup: Send + Sync {
    /// Return, for `term`, the number of occurrences in each document that
    /// contains it. Documents without the term are absent from the map.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the index cannot be read.
    fn get_counts(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<ScoreMap, LookupError>> + Send;
}

/// An in-memory inverted index: term → document → count.
///
/// Stands in for a persistent index in tests and small embedded uses.
/// Lookups never fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    terms: HashMap<String, ScoreMap>,
}

impl MemoryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of a document and add the counts to the index.
    ///
    /// Re-adding the same document replaces its previous counts.
    pub fn add_document<I, T>(&mut self, document: &str, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for counts in self.terms.values_mut() {
            counts.remove(document);
        }
        self.terms.retain(|_, counts| !counts.is_empty());

        let mut local: HashMap<String, Score> = HashMap::new();
        for token in tokens {
            *local.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }
        for (term, count) in local {
            self.terms
                .entry(term)
                .or_default()
                .insert(document.to_string(), count);
        }
    }

    /// Store precomputed counts for `term`, replacing any existing ones.
    pub fn insert_counts(&mut self, term: &str, counts: ScoreMap) {
        self.terms.insert(term.to_string(), counts);
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Synchronous form of [`IndexLookup::get_counts`].
    pub fn counts(&self, term: &str) -> ScoreMap {
        self.terms.get(term).cloned().unwrap_or_default()
    }
}

impl IndexLookup for MemoryIndex {
    async fn get_counts(&self, term: &str) -> Result<ScoreMap, LookupError> {
        Ok(self.counts(term))
    }
}
