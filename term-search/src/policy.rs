//! Score combination policies for boolean operations.
//!
//! `and` merges the two relevances of each shared document with a
//! [`ScorePolicy`]; `or` applies it to every document of the right operand,
//! with 0 standing in for a missing left score. The default is
//! [`CombineRule::Sum`]: the combined relevance of a multi-term match is the
//! sum of its per-term frequencies.
//!
//! ```text
//! Sum  → a + b   (saturating)
//! Max  → max(a, b)
//! Min  → min(a, b)
//! ```
//!
//! Any `Fn(Score, Score) -> Score + Send + Sync` closure is also a policy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Score;

/// A rule for merging the relevances a document has in two results.
pub trait ScorePolicy: Send + Sync {
    /// Combine `a` (left operand) with `b` (right operand).
    fn combine(&self, a: Score, b: Score) -> Score;
}

impl<F> ScorePolicy for F
where
    F: Fn(Score, Score) -> Score + Send + Sync,
{
    fn combine(&self, a: Score, b: Score) -> Score {
        self(a, b)
    }
}

/// The default combination: sum of relevances.
///
/// Saturates at [`Score::MAX`] instead of overflowing.
pub fn combine_score(a: Score, b: Score) -> Score {
    a.saturating_add(b)
}

/// Built-in combination rules, selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombineRule {
    /// Sum of both relevances.
    #[default]
    Sum,
    /// The larger of the two relevances.
    Max,
    /// The smaller of the two relevances.
    Min,
}

impl CombineRule {
    /// Returns the configuration name of this rule.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    /// Returns all built-in rules.
    pub fn all() -> &'static [CombineRule] {
        &[Self::Sum, Self::Max, Self::Min]
    }
}

impl ScorePolicy for CombineRule {
    fn combine(&self, a: Score, b: Score) -> Score {
        match self {
            Self::Sum => combine_score(a, b),
            Self::Max => a.max(b),
            Self::Min => a.min(b),
        }
    }
}

impl fmt::Display for CombineRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
