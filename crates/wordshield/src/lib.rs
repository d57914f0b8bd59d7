//! wordshield: sensitive-word detection, counting, and masking
//!
//! This crate detects, counts, and masks occurrences of a configurable set
//! of sensitive character sequences inside arbitrary text. The matcher
//! tolerates interleaved noise characters (punctuation, emoji, whitespace)
//! and supports "combo" words whose sub-parts may appear scattered anywhere
//! in the text rather than contiguously.
//!
//! # Features
//!
//! - **Noise-tolerant trie matching** — `垃、！！圾` still matches `垃圾`,
//!   and masking preserves the interleaved punctuation
//! - **Combo words** — `司马南|美国` matches only when every part is present
//!   somewhere in the text
//! - **Hot reload** — the word set is rebuilt from an async source and
//!   atomically swapped while concurrent lookups proceed uninterrupted
//! - **Hit statistics** — optional per-word atomic counters, reported by
//!   `debug_infos`
//! - **Phonetic expansion hook** — CJK words can be inserted alongside an
//!   externally transliterated variant
//!
//! # Example
//!
//! ```rust
//! use wordshield::{FilterConfig, StaticWordSource, WordFilter};
//!
//! # async fn run() -> wordshield::Result<()> {
//! let filter = WordFilter::new(
//!     StaticWordSource::new(["垃圾", "司马南|美国"]),
//!     FilterConfig::new(),
//! )
//! .await?;
//!
//! assert_eq!(filter.hit("你真是垃圾"), Some("垃圾".to_string()));
//!
//! let (hit, masked) = filter.replace("司马南在美国买房子");
//! assert!(hit);
//! assert_eq!(masked, "***在**买房子");
//! # Ok(())
//! # }
//! ```

// Core types
pub mod config;
pub mod error;
pub mod prelude;

// Core modules
pub mod filter;
pub mod source;
pub mod trie;

pub use config::{DEFAULT_MASK_CHAR, Expander, FilterConfig};
pub use error::{BoxError, FilterError, Result};
pub use filter::WordFilter;
pub use source::{StaticWordSource, WordSource};
pub use trie::{TrieTree, WordStats};
