//! Trie vertex.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sentinel code point used by root vertices.
const ROOT_SENTINEL: char = '\0';

/// A trie vertex: one code point, its exclusively-owned children, and the
/// terminal bookkeeping for words ending here.
///
/// After the owning snapshot is published the vertex is read-only except for
/// `hit_count`, which tolerates concurrent increments.
#[derive(Debug)]
pub(crate) struct Node {
    /// The code point this vertex represents.
    pub ch: char,
    /// True if a word ends at this vertex.
    pub is_end: bool,
    /// Sub-words required for this terminal to count as a full combo match.
    /// Empty for plain words.
    pub combo_parts: Vec<String>,
    /// Children keyed by code point. Parent exclusively owns children; there
    /// are no back-references.
    pub children: HashMap<char, Node>,
    /// Hits recorded against this terminal, when statistics are enabled.
    pub hit_count: AtomicU64,
}

impl Node {
    /// Create a vertex for the given code point.
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            is_end: false,
            combo_parts: Vec::new(),
            children: HashMap::new(),
            hit_count: AtomicU64::new(0),
        }
    }

    /// Create a root vertex.
    pub fn root() -> Self {
        Self::new(ROOT_SENTINEL)
    }

    /// Record one hit against this terminal.
    ///
    /// Increments are atomic and lossless under concurrent access; ordering
    /// between concurrent increments is unspecified.
    pub fn record_hit(&self, stats_enabled: bool) {
        if stats_enabled {
            self.hit_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Current hit count.
    pub fn hits(&self) -> u64 {
        self.hit_count.load(Ordering::Relaxed)
    }
}
