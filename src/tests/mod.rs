//! Test modules for the prefix index.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests of the prefix index using proptest
//! - Shared fixtures and strategies

pub mod config_tests;
pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{dictionary_strategy, word_strategy, TestFixture};
