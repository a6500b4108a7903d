// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Arena node for the prefix index.
//!
//! Nodes are stored contiguously in the index's arena and refer to their
//! children by [`NodeId`] rather than by pointer. Each node is linked from
//! exactly one parent edge.

use std::collections::BTreeMap;

/// Position of a node inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    /// The root sentinel always occupies the first arena slot.
    pub(crate) const ROOT: NodeId = NodeId(0);

    /// Largest number of nodes addressable by a `NodeId`.
    pub(crate) const MAX_NODES: usize = u32::MAX as usize;

    /// Wraps an arena index. Callers keep the arena below [`Self::MAX_NODES`].
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::MAX_NODES, "arena index {index} out of range");
        Self(index as u32)
    }

    /// Arena slot of this node.
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single position in the prefix tree.
#[derive(Debug, Default, Clone)]
pub(crate) struct Node {
    /// Child edges, ordered by character
    pub(crate) children: BTreeMap<char, NodeId>,

    /// The word ending exactly here, if any
    pub(crate) stored_value: Option<String>,
}

impl Node {
    /// Whether some inserted word ends at this node.
    pub(crate) fn is_terminal(&self) -> bool {
        self.stored_value.is_some()
    }
}
