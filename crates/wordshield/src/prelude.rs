//! Convenient re-exports for common wordshield usage.
//!
//! This module provides a single import to access the most commonly used
//! types and traits from wordshield.
//!
//! # Example
//!
//! ```ignore
//! use wordshield::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let filter = WordFilter::new(
//!         StaticWordSource::new(["傻逼", "司马南|美国"]),
//!         FilterConfig::new(),
//!     )
//!     .await?;
//!     let (hit, masked) = filter.replace("我觉得你是傻逼");
//!     assert!(hit);
//!     Ok(())
//! }
//! ```

// Configuration
pub use crate::config::{DEFAULT_MASK_CHAR, Expander, FilterConfig};

// Error handling
pub use crate::error::{BoxError, FilterError, Result};

// Word sources
pub use crate::source::{StaticWordSource, WordSource};

// Matching engine
pub use crate::trie::{TrieTree, WordStats};

// Hot-reload coordinator
pub use crate::filter::WordFilter;
