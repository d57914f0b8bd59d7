//! The trie matching engine.
//!
//! A [`TrieTree`] owns two prefix trees: the primary trie for top-level
//! words and a secondary combo trie used exclusively to resolve the scattered
//! sub-parts of combo words (`head|part1|part2|...`). Matching is a fuzzy
//! forward scan that tolerates interleaved noise characters (punctuation,
//! emoji, whitespace) anywhere inside a candidate span, with a deliberate
//! single-character-retreat restart on failure rather than automaton failure
//! links.
//!
//! A tree is immutable once published as a snapshot, with the sole exception
//! of its per-terminal atomic hit counters.
//!
//! # Example
//!
//! ```rust
//! use wordshield::TrieTree;
//!
//! let mut tree = TrieTree::new();
//! tree.add_words(["垃圾", "司马南|美国"]);
//!
//! let (hit, words) = tree.detect("我觉得你是，垃、！！圾", 1);
//! assert!(hit);
//! assert_eq!(words, vec!["垃圾".to_string()]);
//!
//! let (hit, masked) = tree.replace("司马南在美国买房子", '*');
//! assert!(hit);
//! assert_eq!(masked, "***在**买房子");
//! ```

mod node;
mod tree;

pub use tree::{TrieTree, WordStats};
