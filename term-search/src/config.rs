//! Algebra configuration with sensible defaults.
//!
//! [`AlgebraConfig`] selects the built-in combination rule and the ranking
//! direction. By default relevances are summed and results rank lowest score
//! first.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::policy::{CombineRule, ScorePolicy};
use crate::result::SearchResult;
use crate::types::{RankOrder, RankedDoc, Score};

/// Configuration for combining and ranking search results.
///
/// Use [`Default::default()`] for sum + ascending, or load from TOML
/// with [`AlgebraConfig::from_toml_str`]. Missing keys take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlgebraConfig {
    /// Rule used to merge the relevances a document has in two results.
    pub combine: CombineRule,
    /// Direction used by [`AlgebraConfig::rank`].
    pub order: RankOrder,
}

impl AlgebraConfig {
    /// Parse a configuration from a TOML document.
    ///
    /// ```
    /// # fn main() -> term_search::Result<()> {
    /// let config = term_search::AlgebraConfig::from_toml_str("order = \"descending\"")?;
    /// assert_eq!(config.order, term_search::RankOrder::Descending);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, SearchError> {
        toml::from_str(text).map_err(|e| SearchError::Config(e.message().to_string()))
    }

    /// Combine two relevances with the configured rule.
    pub fn combine(&self, a: Score, b: Score) -> Score {
        self.combine.combine(a, b)
    }

    /// Rank `result` in the configured direction.
    pub fn rank(&self, result: &SearchResult) -> Vec<RankedDoc> {
        result.ranked(self.order)
    }
}
