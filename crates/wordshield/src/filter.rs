//! The hot-reload coordinator.
//!
//! A [`WordFilter`] owns the currently published [`TrieTree`] snapshot and
//! the machinery for rebuilding it: the word-source callback, the optional
//! phonetic expansion step, and the periodic background rebuild task.
//!
//! Snapshots are published through an [`ArcSwap`]: the writer builds a
//! complete new tree off to the side and swaps it in with a single atomic
//! store, while readers load the latest fully-built snapshot at call entry
//! and use it for the duration of that call. Readers never block on the
//! writer and never observe a half-built trie; hit counters are the only
//! state shared for writing between concurrent readers.
//!
//! # Example
//!
//! ```rust
//! use wordshield::{FilterConfig, StaticWordSource, WordFilter};
//!
//! # async fn run() -> wordshield::Result<()> {
//! let filter = WordFilter::new(
//!     StaticWordSource::new(["傻逼", "司马南|美国"]),
//!     FilterConfig::new().statistics(true),
//! )
//! .await?;
//!
//! assert_eq!(filter.hit("我觉得你是傻逼"), Some("傻逼".to_string()));
//! let (hit, masked) = filter.replace("司马南在美国买房子");
//! assert!(hit);
//! assert_eq!(masked, "***在**买房子");
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use regex::Regex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::config::FilterConfig;
use crate::error::{FilterError, Result};
use crate::source::WordSource;
use crate::trie::{TrieTree, WordStats};

/// A word made of CJK ideographs, optionally joined by interpunct-style
/// separators. Only words of this shape are handed to the phonetic expander.
static CJK_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "^\\p{Han}+([\u{00B7}\u{2022}\u{2027}\u{30FB}\u{002E}\u{0387}\u{16EB}\u{2219}\u{22C5}\u{FF65}\u{05BC}]\\p{Han}+)*$",
    )
    .expect("CJK word pattern is a valid regex")
});

/// Sensitive-word filter with a hot-reloadable word set.
///
/// Construction synchronously performs the initial build; a failing word
/// source at that point is fatal. After a successful publish, periodic
/// rebuild failures only log an error and leave the previous snapshot
/// untouched.
pub struct WordFilter {
    snapshot: Arc<ArcSwap<TrieTree>>,
    source: Arc<dyn WordSource>,
    config: FilterConfig,
    shutdown: CancellationToken,
}

impl std::fmt::Debug for WordFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordFilter")
            .field("config", &self.config)
            .field("shutdown", &self.shutdown)
            .finish()
    }
}

impl WordFilter {
    /// Build the initial snapshot from `source` and, when a non-zero rebuild
    /// interval is configured, start the background rebuild task.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::WordSource`] when the initial load fails; no
    /// partially-usable filter is ever exposed.
    pub async fn new(source: impl WordSource + 'static, config: FilterConfig) -> Result<Self> {
        let source: Arc<dyn WordSource> = Arc::new(source);
        let tree = build_snapshot(source.as_ref(), &config).await?;
        let snapshot = Arc::new(ArcSwap::from_pointee(tree));
        debug!("initial word set published");

        let filter = Self {
            snapshot,
            source,
            config,
            shutdown: CancellationToken::new(),
        };
        filter.spawn_rebuild_task();
        Ok(filter)
    }

    /// Scan `text`, stopping early once `min_hits` hits have been satisfied.
    ///
    /// Returns whether the requirement was satisfied together with the hit
    /// words in detection order.
    #[must_use]
    pub fn detect(&self, text: &str, min_hits: usize) -> (bool, Vec<String>) {
        self.snapshot.load().detect(text, min_hits)
    }

    /// Convenience wrapper requiring exactly one hit; returns the first hit
    /// word when the text contains a configured word.
    #[must_use]
    pub fn hit(&self, text: &str) -> Option<String> {
        let (is_hit, mut hit_words) = self.detect(text, 1);
        if is_hit {
            Some(hit_words.swap_remove(0))
        } else {
            None
        }
    }

    /// Produce a masked copy of `text` using the configured mask character.
    ///
    /// Returns whether any replacement occurred together with the full text
    /// (unchanged when there was no hit).
    #[must_use]
    pub fn replace(&self, text: &str) -> (bool, String) {
        self.snapshot.load().replace(text, self.config.mask_char)
    }

    /// Diagnostic snapshot: every stored word with its current hit counter.
    #[must_use]
    pub fn debug_infos(&self) -> Vec<WordStats> {
        self.snapshot.load().debug_infos()
    }

    /// Rebuild the word set now and publish the new snapshot on success.
    ///
    /// Hit counters start from zero on the new snapshot; the old one remains
    /// valid for readers that loaded it before the swap.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::WordSource`] when the load fails; the previous
    /// snapshot stays published.
    pub async fn rebuild(&self) -> Result<()> {
        let tree = build_snapshot(self.source.as_ref(), &self.config).await?;
        self.snapshot.store(Arc::new(tree));
        debug!("word set rebuilt");
        Ok(())
    }

    /// Stop the background rebuild task. Idempotent; also invoked on drop.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    fn spawn_rebuild_task(&self) {
        let interval = self.config.rebuild_interval;
        if interval.is_zero() {
            return;
        }
        let snapshot = Arc::clone(&self.snapshot);
        let source = Arc::clone(&self.source);
        let config = self.config.clone();
        let shutdown = self.shutdown.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await; // Skip first immediate tick
            loop {
                tokio::select! {
                    () = shutdown.cancelled() => break,
                    _ = ticker.tick() => {
                        match build_snapshot(source.as_ref(), &config).await {
                            Ok(tree) => {
                                snapshot.store(Arc::new(tree));
                                debug!("word set rebuilt");
                            }
                            Err(err) => {
                                // Previous snapshot stays published.
                                error!(error = %err, "word set rebuild failed");
                            }
                        }
                    }
                }
            }
            debug!("rebuild task stopped");
        });
    }
}

impl Drop for WordFilter {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Load the word list and construct a complete, independent trie from it.
async fn build_snapshot(source: &dyn WordSource, config: &FilterConfig) -> Result<TrieTree> {
    let mut words = source
        .load()
        .await
        .map_err(|source| FilterError::WordSource { source })?;

    if config.phonetic {
        if let Some(expander) = &config.expander {
            let expanded: Vec<String> = words
                .iter()
                .filter(|word| CJK_WORD.is_match(word))
                .map(|word| expander(word))
                .collect();
            words.extend(expanded);
        }
    }

    let mut tree = TrieTree::new().with_filter_chars(config.filter_chars.iter().copied());
    if config.statistics {
        tree = tree.with_stats();
    }
    tree.add_words(&words);
    Ok(tree)
}
