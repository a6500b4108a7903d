// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe handle around a [`PrefixIndex`].
//!
//! A single reader-writer lock guards the whole tree. Insertions hold the
//! write lock until the new path is fully linked, and queries hold the read
//! lock until their results are materialized, so a query observes the tree
//! either entirely before or entirely after any insertion.

use std::sync::Arc;

use parking_lot::RwLock;

use super::prefix_index::{PrefixIndex, PrefixIndexConfig, PrefixIndexResult};

/// Cloneable, shareable prefix index.
#[derive(Debug, Clone, Default)]
pub struct SharedPrefixIndex {
    inner: Arc<RwLock<PrefixIndex>>,
}

impl SharedPrefixIndex {
    /// Creates a new empty shared index with default configuration.
    pub fn new() -> Self {
        Self::from_index(PrefixIndex::new())
    }

    /// Creates a new empty shared index with the specified configuration.
    pub fn with_config(config: PrefixIndexConfig) -> Self {
        Self::from_index(PrefixIndex::with_config(config))
    }

    /// Wraps an already populated index.
    pub fn from_index(index: PrefixIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Inserts a word. See [`PrefixIndex::insert`].
    pub fn insert<W>(&self, word: W) -> PrefixIndexResult<bool>
    where
        W: AsRef<str>,
    {
        self.inner.write().insert(word)
    }

    /// Inserts every word under one write lock. See [`PrefixIndex::insert_all`].
    pub fn insert_all<I>(&self, words: I) -> PrefixIndexResult<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.inner.write().insert_all(words)
    }

    /// Returns every stored word starting with `prefix`. See
    /// [`PrefixIndex::find_matches`].
    pub fn find_matches<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.inner.read().find_matches(prefix)
    }

    /// Checks whether `word` was inserted exactly.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.inner.read().contains(word)
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns the number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.inner.read().node_count()
    }
}

impl From<PrefixIndex> for SharedPrefixIndex {
    fn from(index: PrefixIndex) -> Self {
        Self::from_index(index)
    }
}
