//! Error types for wordshield.
//!
//! The read path (`detect`, `replace`, `debug_infos`) is infallible once a
//! snapshot has been published; the only runtime failure mode is the word
//! source callback, which is fatal on the initial build and merely logged on
//! periodic rebuilds.

use thiserror::Error;

/// Boxed error returned by word-source callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The main error type for wordshield operations.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The word-source callback returned an error.
    #[error("word source failed: {source}")]
    WordSource {
        /// The underlying callback error.
        #[source]
        source: BoxError,
    },
}

impl FilterError {
    /// Wrap a word-source callback error.
    #[must_use]
    pub fn word_source(source: impl Into<BoxError>) -> Self {
        Self::WordSource {
            source: source.into(),
        }
    }
}

/// A specialized `Result` type for wordshield operations.
pub type Result<T> = std::result::Result<T, FilterError>;
