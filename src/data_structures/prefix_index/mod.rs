// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Index
//!
//! An insert-only prefix tree that answers "every stored word starting with
//! `P`" in time proportional to `|P|` plus the number of matches, independent
//! of how many unrelated words the index holds.
//!
//! # Example
//!
//! ```
//! use prefix_index_lib::data_structures::prefix_index::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! index.insert("cat").unwrap();
//! index.insert("catalogue").unwrap();
//! index.insert("dog").unwrap();
//!
//! assert_eq!(index.find_matches("cat"), vec!["cat", "catalogue"]);
//! assert_eq!(index.find_matches("cata"), vec!["catalogue"]);
//! assert!(index.find_matches("cow").is_empty());
//! ```
//!
//! Characters are compared literally; no case folding or normalization is
//! applied to either words or prefixes.

mod error;
mod iter;
mod node;

pub use error::{PrefixIndexError, PrefixIndexResult};
pub use iter::Matches;
use node::{Node, NodeId};

/// Configuration options for the prefix index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixIndexConfig {
    /// Number of nodes to pre-allocate in the arena
    pub initial_capacity: usize,

    /// Upper bound on the number of nodes, root included. `None` means the
    /// index grows until the arena's addressable limit.
    pub max_nodes: Option<usize>,
}

impl Default for PrefixIndexConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1024,
            max_nodes: None,
        }
    }
}

impl PrefixIndexConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of nodes pre-allocated when the index is created.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Cap the number of nodes the index may hold.
    ///
    /// Insertions that would need more nodes fail with
    /// [`PrefixIndexError::CapacityExceeded`] and leave the index unchanged.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Effective node budget: `max_nodes` capped at what a `NodeId` can address.
    fn node_limit(&self) -> usize {
        self.max_nodes
            .map_or(NodeId::MAX_NODES, |max| max.min(NodeId::MAX_NODES))
    }
}

/// In-memory prefix tree over a growing set of strings.
///
/// Key features:
/// * Arena-allocated nodes addressed by index
/// * Deterministic, lexicographic match order
/// * Non-recursive subtree enumeration
/// * All-or-nothing insertion under a configurable node budget
///
/// The index itself is single-threaded: mutation takes `&mut self`. Use
/// [`SharedPrefixIndex`](crate::data_structures::SharedPrefixIndex) to share
/// one index between threads.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    /// Node arena; slot 0 is the root sentinel
    nodes: Vec<Node>,

    /// Number of terminal nodes
    len: usize,

    /// Configuration options
    config: PrefixIndexConfig,
}

impl PrefixIndex {
    /// Largest number of nodes any index can address, root included.
    pub const MAX_NODES: usize = NodeId::MAX_NODES;

    /// Creates a new empty `PrefixIndex` with default configuration.
    pub fn new() -> Self {
        Self::with_config(PrefixIndexConfig::default())
    }

    /// Creates a new empty `PrefixIndex` with the specified configuration.
    ///
    /// The pre-allocation is capped at the node limit and is best effort: if
    /// the arena cannot be reserved up front it grows on demand instead.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the index.
    pub fn with_config(config: PrefixIndexConfig) -> Self {
        let capacity = config.initial_capacity.min(config.node_limit()).max(1);
        let mut nodes = Vec::new();
        if let Err(err) = nodes.try_reserve(capacity) {
            tracing::warn!(capacity, %err, "could not pre-allocate prefix index arena");
        }
        nodes.push(Node::default());
        Self {
            nodes,
            len: 0,
            config,
        }
    }

    /// Returns the configuration this index was created with.
    pub fn config(&self) -> &PrefixIndexConfig {
        &self.config
    }

    /// Inserts a word into the index.
    ///
    /// The empty string is a valid word; it marks the root as terminal and is
    /// returned by the empty-prefix query.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was not present before.
    /// * `Ok(false)` - The word was already stored; the index is unchanged.
    /// * `Err(PrefixIndexError)` - The nodes needed for the word could not be
    ///   obtained. No partial path is left behind.
    pub fn insert<W>(&mut self, word: W) -> PrefixIndexResult<bool>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let (mut node, consumed) = self.walk(word);

        let rest = &word[consumed..];
        if !rest.is_empty() {
            self.reserve_nodes(rest.chars().count())?;
            for c in rest.chars() {
                node = self.push_child(node, c);
            }
        }

        let target = &mut self.nodes[node.index()];
        if target.is_terminal() {
            return Ok(false);
        }
        target.stored_value = Some(word.to_owned());
        self.len += 1;
        Ok(true)
    }

    /// Inserts every word yielded by `words`, stopping at the first failure.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of words that were new.
    /// * `Err(PrefixIndexError)` - Words before the failing one stay inserted.
    pub fn insert_all<I>(&mut self, words: I) -> PrefixIndexResult<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut inserted = 0;
        for word in words {
            if self.insert(word)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Returns every stored word that starts with `prefix`.
    ///
    /// Words come back in ascending character order. A prefix that leads
    /// nowhere yields an empty vector. The empty prefix returns every word.
    pub fn find_matches<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.iter_prefix(prefix).map(str::to_owned).collect()
    }

    /// Lazily iterates over every stored word that starts with `prefix`.
    ///
    /// Yields the same sequence as [`find_matches`](Self::find_matches)
    /// without allocating the result strings.
    pub fn iter_prefix<P>(&self, prefix: P) -> Matches<'_>
    where
        P: AsRef<str>,
    {
        Matches::new(&self.nodes, self.find_node(prefix.as_ref()))
    }

    /// Checks whether `word` was inserted exactly.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.find_node(word.as_ref())
            .is_some_and(|id| self.nodes[id.index()].is_terminal())
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Follows edges for as much of `text` as the tree holds.
    ///
    /// Returns the deepest node reached and the number of bytes of `text`
    /// consumed getting there.
    fn walk(&self, text: &str) -> (NodeId, usize) {
        let mut current = NodeId::ROOT;
        for (offset, c) in text.char_indices() {
            match self.nodes[current.index()].children.get(&c) {
                Some(&next) => current = next,
                None => return (current, offset),
            }
        }
        (current, text.len())
    }

    /// Node reached by consuming all of `prefix`, if the path exists.
    fn find_node(&self, prefix: &str) -> Option<NodeId> {
        let (node, consumed) = self.walk(prefix);
        (consumed == prefix.len()).then_some(node)
    }

    /// Makes room for `additional` nodes or fails without touching the tree.
    fn reserve_nodes(&mut self, additional: usize) -> PrefixIndexResult<()> {
        let max_nodes = self.node_limit();
        let required = self.nodes.len().saturating_add(additional);
        if required > max_nodes {
            tracing::debug!(required, max_nodes, "prefix index node budget exhausted");
            return Err(PrefixIndexError::CapacityExceeded {
                max_nodes,
                required,
            });
        }
        self.nodes.try_reserve(additional)?;
        Ok(())
    }

    fn node_limit(&self) -> usize {
        self.config.node_limit()
    }

    /// Appends a fresh node under `parent`. Capacity must already be reserved.
    fn push_child(&mut self, parent: NodeId, c: char) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node::default());
        self.nodes[parent.index()].children.insert(c, id);
        id
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}
