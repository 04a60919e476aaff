//! # term-search
//!
//! Boolean result algebra for an inverted-index search engine.
//!
//! An index lookup returns, for one term, how often the term occurs in each
//! document. This crate wraps those counts in a [`SearchResult`] and combines
//! results with `and`, `or`, and `minus` to evaluate boolean queries, then
//! ranks the final result by relevance.
//!
//! ## Design
//!
//! - [`SearchResult`] is an immutable value: combinators never mutate their
//!   operands and are safe to call from any thread
//! - Storage is hidden behind the [`IndexLookup`] trait; the crate has no
//!   dependency on any particular key-value store
//! - The rule that merges two relevances is an injectable [`ScorePolicy`]
//!   (sum by default)
//! - [`SearchResult::sorted`] ranks lowest score first; best-first ranking is
//!   available through [`SearchResult::ranked`]
//!
//! ## Logging
//!
//! Lookups and folds emit [`tracing`] events at debug level, failed lookups at
//! warn level, and individual combinators at trace level. Nothing is printed.
//!
//! # Examples
//!
//! ```
//! # async fn example() -> term_search::Result<()> {
//! use term_search::{MemoryIndex, SearchResult};
//!
//! let mut index = MemoryIndex::new();
//! index.add_document("https://a.org", ["java", "programming", "java"]);
//! index.add_document("https://b.org", ["java"]);
//!
//! let java = SearchResult::from_lookup("java", &index).await?;
//! let programming = SearchResult::from_lookup("programming", &index).await?;
//!
//! let both = java.and(&programming);
//! assert_eq!(both.sorted(), vec![("https://a.org".to_string(), 3)]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod lookup;
pub mod policy;
pub mod query;
pub mod result;
pub mod types;

pub use config::AlgebraConfig;
pub use error::{LookupError, Result, SearchError};
pub use lookup::{IndexLookup, MemoryIndex};
pub use policy::{combine_score, CombineRule, ScorePolicy};
pub use query::{all_of, any_of, excluding, lookup_terms};
pub use result::SearchResult;
pub use types::{RankOrder, RankedDoc, Score, ScoreMap};
