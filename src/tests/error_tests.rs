//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::PrefixIndexError;
use crate::error::config::ConfigError;
use crate::error::{
    report_error, set_error_reporter, AppError, ErrorContext, ErrorReporter, TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = AppError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that wrapped errors keep their source message.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = AppError::from(io_error);
    assert!(format!("{error}").contains("file not found"));

    let error = AppError::from(PrefixIndexError::CapacityExceeded {
        max_nodes: 4,
        required: 9,
    });
    assert_eq!(
        error.to_string(),
        "Index error: Node budget exceeded: 9 nodes required, limit is 4"
    );

    let error = AppError::from(ConfigError::ValidationError("bad level".to_string()));
    assert!(error.to_string().starts_with("Configuration error:"));
}

/// Without an active span there is nothing to capture.
#[test]
fn test_span_trace_without_subscriber() {
    let context = ErrorContext::new(AppError::Custom("x".to_string()), "test").with_span_trace();
    assert!(context.trace.is_none());

    let context = context.with_trace("manual trace");
    assert_eq!(context.trace.as_deref(), Some("manual trace"));
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reported errors.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());

    let context = ErrorContext::new(AppError::Custom("test error".to_string()), "test_component");
    report_error(context);

    assert!(reporter.reported_count() >= 1);
}

/// Test that the default tracing error reporter can be used.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(AppError::Custom("test error".to_string()), "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
