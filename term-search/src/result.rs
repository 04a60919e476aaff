//! The search result algebra: union, intersection, difference, ranking.
//!
//! A [`SearchResult`] maps document identifiers to relevance scores. It is an
//! immutable value: every combinator borrows both operands and builds a new
//! result.
//!
//! ```text
//! a = {u1:3, u2:1}        b = {u2:2, u3:5}
//!
//! a.or(b)    = {u1:3, u2:3, u3:5}
//! a.and(b)   = {u2:3}
//! a.minus(b) = {u1:3}
//! a.sorted() = [(u2,1), (u1,3)]
//! ```
//!
//! Membership is decided by key presence, never by score: a document stored
//! with an explicit score of 0 still takes part in `and` and still blocks
//! itself in `minus`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::lookup::IndexLookup;
use crate::policy::{combine_score, ScorePolicy};
use crate::types::{RankOrder, RankedDoc, Score, ScoreMap};

/// Relevance scores of the documents matching a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResult {
    scores: ScoreMap,
}

impl SearchResult {
    /// Wrap a document→score mapping. The mapping is owned from here on.
    pub fn new(scores: ScoreMap) -> Self {
        Self { scores }
    }

    /// Look up `term` in `index` and wrap the returned counts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::IndexUnavailable`] if the lookup fails. No
    /// retry is attempted here.
    pub async fn from_lookup<L>(term: &str, index: &L) -> Result<Self>
    where
        L: IndexLookup,
    {
        match index.get_counts(term).await {
            Ok(scores) => {
                tracing::debug!(term, documents = scores.len(), "index lookup returned");
                Ok(Self::new(scores))
            }
            Err(err) => {
                tracing::warn!(term, error = %err, "index lookup failed");
                Err(SearchError::index_unavailable(term, err))
            }
        }
    }

    /// Relevance of `document`, or 0 if it is not in this result.
    pub fn relevance(&self, document: &str) -> Score {
        self.scores.get(document).copied().unwrap_or(0)
    }

    /// Whether `document` is a key of this result.
    pub fn contains(&self, document: &str) -> bool {
        self.scores.contains_key(document)
    }

    /// Number of documents in this result.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether this result has no documents.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over document identifiers, in no particular order.
    pub fn documents(&self) -> impl Iterator<Item = &str> + '_ {
        self.scores.keys().map(String::as_str)
    }

    /// Iterate over `(document, score)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Score)> + '_ {
        self.scores.iter().map(|(doc, score)| (doc.as_str(), *score))
    }

    /// Borrow the underlying mapping.
    pub fn scores(&self) -> &ScoreMap {
        &self.scores
    }

    /// Consume the result and return the underlying mapping.
    pub fn into_scores(self) -> ScoreMap {
        self.scores
    }

    /// Union, merging shared documents with the default sum policy.
    pub fn or(&self, other: &SearchResult) -> SearchResult {
        self.or_with(other, &combine_score)
    }

    /// Union, scoring documents of `other` with `policy`.
    ///
    /// Documents only in `self` keep their score unchanged. Every document of
    /// `other` is scored as `policy.combine(self.relevance(d), other_score)`,
    /// so one present only in `other` is combined with 0.
    pub fn or_with<P>(&self, other: &SearchResult, policy: &P) -> SearchResult
    where
        P: ScorePolicy + ?Sized,
    {
        let mut either = self.scores.clone();
        for (doc, &theirs) in &other.scores {
            either
                .entry(doc.clone())
                .and_modify(|ours| *ours = policy.combine(*ours, theirs))
                .or_insert_with(|| policy.combine(0, theirs));
        }
        tracing::trace!(
            left = self.len(),
            right = other.len(),
            out = either.len(),
            "or"
        );
        SearchResult::new(either)
    }

    /// Intersection, merging scores with the default sum policy.
    pub fn and(&self, other: &SearchResult) -> SearchResult {
        self.and_with(other, &combine_score)
    }

    /// Intersection, merging scores with `policy`.
    ///
    /// A document is kept iff it is a key of both results.
    pub fn and_with<P>(&self, other: &SearchResult, policy: &P) -> SearchResult
    where
        P: ScorePolicy + ?Sized,
    {
        let both: ScoreMap = self
            .scores
            .iter()
            .filter_map(|(doc, &ours)| {
                other
                    .scores
                    .get(doc)
                    .map(|&theirs| (doc.clone(), policy.combine(ours, theirs)))
            })
            .collect();
        tracing::trace!(
            left = self.len(),
            right = other.len(),
            out = both.len(),
            "and"
        );
        SearchResult::new(both)
    }

    /// Difference: documents of `self` that are not keys of `other`.
    pub fn minus(&self, other: &SearchResult) -> SearchResult {
        let exclusive: ScoreMap = self
            .scores
            .iter()
            .filter(|(doc, _)| !other.scores.contains_key(doc.as_str()))
            .map(|(doc, &score)| (doc.clone(), score))
            .collect();
        tracing::trace!(
            left = self.len(),
            right = other.len(),
            out = exclusive.len(),
            "minus"
        );
        SearchResult::new(exclusive)
    }

    /// All entries ordered by ascending score.
    ///
    /// Lowest relevance comes first; use [`SearchResult::ranked`] with
    /// [`RankOrder::Descending`] for best-first output. Equal scores are
    /// ordered by document identifier.
    pub fn sorted(&self) -> Vec<RankedDoc> {
        self.ranked(RankOrder::Ascending)
    }

    /// All entries ordered by score in the given direction.
    ///
    /// Equal scores are always ordered by ascending document identifier.
    pub fn ranked(&self, order: RankOrder) -> Vec<RankedDoc> {
        let mut entries: Vec<RankedDoc> = self
            .scores
            .iter()
            .map(|(doc, &score)| (doc.clone(), score))
            .collect();
        entries.sort_by(|(doc_a, score_a), (doc_b, score_b)| {
            let by_score = match order {
                RankOrder::Ascending => score_a.cmp(score_b),
                RankOrder::Descending => score_b.cmp(score_a),
            };
            by_score.then_with(|| doc_a.cmp(doc_b))
        });
        entries
    }
}

impl From<ScoreMap> for SearchResult {
    fn from(scores: ScoreMap) -> Self {
        Self::new(scores)
    }
}

impl FromIterator<(String, Score)> for SearchResult {
    fn from_iter<I: IntoIterator<Item = (String, Score)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, Score)> for SearchResult {
    fn from_iter<I: IntoIterator<Item = (&'a str, Score)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(doc, score)| (doc.to_string(), score))
            .collect()
    }
}
