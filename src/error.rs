//! Error types for lexicon construction and bounded search.

use std::time::Duration;

use thiserror::Error;

/// Failure while building a [`Lexicon`](crate::Lexicon) from a line source.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The source could not be read, or line `line` was not valid UTF-8.
    #[error("failed to read word list at line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons a bounded ladder search stopped before finishing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("ladder search was cancelled")]
    Cancelled,

    #[error("ladder search exceeded its deadline after {elapsed:?}")]
    DeadlineExceeded { elapsed: Duration },

    #[error("ladder search reached its limit of {limit} expansions")]
    ExpansionLimitReached { limit: usize },
}
