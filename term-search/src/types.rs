//! Core value types shared by the algebra, the lookup trait, and ranking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Relevance score of a document. A term-frequency count for single-term
/// lookups, a combined score for algebra results.
pub type Score = u64;

/// Mapping from document identifier (typically a URL) to relevance score.
pub type ScoreMap = HashMap<String, Score>;

/// A document with its score, as produced by ranking.
pub type RankedDoc = (String, Score);

/// Direction in which a result set is ranked by score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankOrder {
    /// Lowest score first. This is what [`SearchResult::sorted`] produces.
    ///
    /// [`SearchResult::sorted`]: crate::SearchResult::sorted
    #[default]
    Ascending,
    /// Highest score first (most relevant document at the top).
    Descending,
}

impl RankOrder {
    /// Returns the configuration name of this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for RankOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
