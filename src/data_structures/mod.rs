//! Data structures for the prefix index.
//!
//! The core [`PrefixIndex`] is a single-owner, insert-only trie. Sharing it
//! across threads goes through [`SharedPrefixIndex`], which adds one
//! reader-writer lock around the whole tree.

pub mod prefix_index;
pub mod shared_index;

// Re-export common data structures
pub use prefix_index::{PrefixIndex, PrefixIndexConfig, PrefixIndexError, PrefixIndexResult};
pub use shared_index::SharedPrefixIndex;
