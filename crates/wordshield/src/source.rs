//! Word-source contract.
//!
//! A [`WordSource`] supplies the raw word list the trie is built from. It is
//! treated as an opaque, potentially slow or fallible asynchronous callback —
//! typically backed by a database, a config service, or a remote list. The
//! hot-reload coordinator invokes it once at startup and then on every
//! rebuild tick; a slow source only delays when the *next* snapshot becomes
//! visible, never the readers.
//!
//! Each returned entry is either a plain word or a combo specification
//! `head|part1|...|partN` using `|` as the segment delimiter.
//!
//! # Example
//!
//! ```rust
//! use wordshield::{StaticWordSource, WordSource};
//!
//! let source = StaticWordSource::new(["傻逼", "司马南|美国"]);
//! # let _ = source;
//! ```

use futures::future::BoxFuture;

use crate::error::BoxError;

/// An asynchronous supplier of word specifications.
///
/// Implemented automatically for `Fn() -> impl Future` closures, so a plain
/// async closure works anywhere a `WordSource` is expected.
pub trait WordSource: Send + Sync {
    /// Load the current word list.
    ///
    /// An error here is fatal during the initial build and non-fatal (logged,
    /// previous snapshot retained) during periodic rebuilds.
    fn load(&self) -> BoxFuture<'_, std::result::Result<Vec<String>, BoxError>>;
}

impl<F, Fut> WordSource for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = std::result::Result<Vec<String>, BoxError>> + Send + 'static,
{
    fn load(&self) -> BoxFuture<'_, std::result::Result<Vec<String>, BoxError>> {
        Box::pin(self())
    }
}

/// A word source backed by a fixed in-memory list.
///
/// Useful for tests and for deployments whose word set ships with the binary.
#[derive(Debug, Clone, Default)]
pub struct StaticWordSource {
    words: Vec<String>,
}

impl StaticWordSource {
    /// Create a source from any iterable of word specifications.
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for StaticWordSource {
    fn load(&self) -> BoxFuture<'_, std::result::Result<Vec<String>, BoxError>> {
        let words = self.words.clone();
        Box::pin(async move { Ok(words) })
    }
}
