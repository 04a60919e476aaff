//! Error types for the term-search crate.
//!
//! The combinators on [`SearchResult`](crate::SearchResult) are total, so the
//! only failures come from the index lookup collaborator and from
//! configuration parsing.

/// Boxed error produced by an [`IndexLookup`](crate::IndexLookup) backend.
pub type LookupError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while building search results.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The index lookup collaborator failed to return counts for a term.
    #[error("index unavailable for term {term:?}: {source}")]
    IndexUnavailable {
        /// The term whose lookup failed.
        term: String,
        /// The collaborator's own error.
        #[source]
        source: LookupError,
    },

    /// Invalid algebra configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Wrap a collaborator failure for `term`.
    pub fn index_unavailable(term: impl Into<String>, source: impl Into<LookupError>) -> Self {
        Self::IndexUnavailable {
            term: term.into(),
            source: source.into(),
        }
    }
}

/// Convenience type alias for term-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_index_unavailable() {
        let err = SearchError::index_unavailable("java", "connection refused");
        assert_eq!(
            err.to_string(),
            "index unavailable for term \"java\": connection refused"
        );
    }

    #[test]
    fn index_unavailable_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "store timed out");
        let err = SearchError::index_unavailable("rust", io);
        let source = err.source().expect("source should be kept");
        assert_eq!(source.to_string(), "store timed out");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("unknown variant `median`".into());
        assert_eq!(err.to_string(), "config error: unknown variant `median`");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
