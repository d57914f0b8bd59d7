//! Configuration for the word filter.
//!
//! This module defines [`FilterConfig`], which controls the mask character,
//! the noise-character set, the periodic rebuild interval, and the named mode
//! flags (phonetic expansion, hit statistics).

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default mask character used by `replace`.
pub const DEFAULT_MASK_CHAR: char = '*';

/// A phonetic expander: maps a CJK word to its already-transliterated form
/// (for example pinyin), which is inserted into the trie alongside the
/// original word when the `phonetic` mode is enabled.
///
/// The transliteration itself is an external collaborator; this crate only
/// consumes its output.
pub type Expander = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Configuration for a [`WordFilter`](crate::WordFilter).
#[derive(Clone)]
pub struct FilterConfig {
    /// Character substituted for matched code points by `replace`.
    pub mask_char: char,

    /// Explicit set of code points to treat as noise.
    ///
    /// When empty, the categorical default applies: any code point that is
    /// not a CJK ideograph, not a Unicode letter, and not a digit is noise.
    pub filter_chars: Vec<char>,

    /// Interval between background rebuilds. `Duration::ZERO` disables the
    /// periodic rebuild task.
    pub rebuild_interval: Duration,

    /// Insert phonetic variants of CJK words (requires an [`Expander`]).
    pub phonetic: bool,

    /// Track per-word hit counters, reported by `debug_infos`.
    pub statistics: bool,

    /// The phonetic expander callback, consulted only when `phonetic` is set.
    pub expander: Option<Expander>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            mask_char: DEFAULT_MASK_CHAR,
            filter_chars: Vec::new(),
            rebuild_interval: Duration::ZERO,
            phonetic: false,
            statistics: false,
            expander: None,
        }
    }
}

impl FilterConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mask character.
    #[must_use]
    pub const fn mask_char(mut self, mask: char) -> Self {
        self.mask_char = mask;
        self
    }

    /// Set the explicit noise-character set, overriding the categorical
    /// default.
    #[must_use]
    pub fn filter_chars<I>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.filter_chars = chars.into_iter().collect();
        self
    }

    /// Set the periodic rebuild interval. Zero disables the background task.
    #[must_use]
    pub const fn rebuild_interval(mut self, interval: Duration) -> Self {
        self.rebuild_interval = interval;
        self
    }

    /// Enable or disable phonetic expansion.
    #[must_use]
    pub const fn phonetic(mut self, enabled: bool) -> Self {
        self.phonetic = enabled;
        self
    }

    /// Enable or disable hit statistics.
    #[must_use]
    pub const fn statistics(mut self, enabled: bool) -> Self {
        self.statistics = enabled;
        self
    }

    /// Set the phonetic expander callback.
    #[must_use]
    pub fn expander(mut self, expander: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.expander = Some(Arc::new(expander));
        self
    }
}

impl fmt::Debug for FilterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterConfig")
            .field("mask_char", &self.mask_char)
            .field("filter_chars", &self.filter_chars)
            .field("rebuild_interval", &self.rebuild_interval)
            .field("phonetic", &self.phonetic)
            .field("statistics", &self.statistics)
            .field("expander", &self.expander.is_some())
            .finish()
    }
}
