// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix index.
//!
//! Every failure here is a resource condition. Lookups never fail, and any
//! `&str` is a valid word or prefix.

use std::collections::TryReserveError;

/// Errors that can occur while growing a [`PrefixIndex`](super::PrefixIndex).
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PrefixIndexError {
    /// Inserting the word would grow the tree past its node budget.
    #[error("Node budget exceeded: {required} nodes required, limit is {max_nodes}")]
    CapacityExceeded {
        /// The node budget in effect.
        max_nodes: usize,
        /// Total nodes the insertion would have needed.
        required: usize,
    },

    /// The node arena could not be grown.
    #[error("Failed to allocate trie nodes: {0}")]
    AllocationFailed(#[from] TryReserveError),
}

/// Result type for prefix index operations.
pub type PrefixIndexResult<T> = Result<T, PrefixIndexError>;
