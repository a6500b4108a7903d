//! Prefix Index Library
//!
//! An in-memory prefix tree for autocomplete-style lookups, together with
//! the pieces needed to run it as a tool: layered configuration, dictionary
//! loading and error reporting.
//!
//! # Architecture
//!
//! - [`data_structures::PrefixIndex`] is the storage and query engine in one:
//!   an insert-only, arena-backed trie.
//! - [`data_structures::SharedPrefixIndex`] puts one reader-writer lock
//!   around an index for multi-threaded callers.
//! - [`dictionary`] fills an index from word list files.
//! - [`output`] renders query results as plain lines or JSON.
//! - [`config`] and [`error`] carry the ambient settings and failures.

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod output;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the prefix index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Routes reported errors to the tracing pipeline.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
