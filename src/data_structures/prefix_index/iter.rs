// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy enumeration of the words below a node.

use std::iter::FusedIterator;

use super::node::{Node, NodeId};

/// Iterator over the stored words in a subtree, returned by
/// [`PrefixIndex::iter_prefix`](super::PrefixIndex::iter_prefix).
///
/// Walks the subtree depth-first with an explicit stack, so arbitrarily long
/// shared prefixes cannot exhaust the call stack. A node is yielded before its
/// children and children are visited in ascending character order, which makes
/// the output lexicographic by character sequence.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    nodes: &'a [Node],
    stack: Vec<NodeId>,
}

impl<'a> Matches<'a> {
    pub(super) fn new(nodes: &'a [Node], start: Option<NodeId>) -> Self {
        Self {
            nodes,
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = &self.nodes[id.index()];
            // Reversed so the smallest character is popped first
            self.stack.extend(node.children.values().rev().copied());
            if let Some(word) = node.stored_value.as_deref() {
                return Some(word);
            }
        }
        None
    }
}

impl FusedIterator for Matches<'_> {}
