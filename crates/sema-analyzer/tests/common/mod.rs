//! Common test utilities for semantic analysis tests.

#![allow(dead_code)]

use sema_analyzer::{Metrics, analyze};
use sema_ast::Node;
use sema_core::{Error, SemanticError};

/// Analyzes `program` and returns its metrics, panicking on any error.
pub fn metrics_of(program: &Node) -> Metrics {
    match analyze(program) {
        Ok(metrics) => metrics,
        Err(err) => panic!("expected the program to pass, got: {err}"),
    }
}

/// Analyzes `program` and returns the semantic error it must produce.
pub fn semantic_error(program: &Node) -> SemanticError {
    match analyze(program) {
        Ok(metrics) => panic!("expected a semantic error, got metrics {metrics}"),
        Err(Error::Semantic(err)) => err,
        Err(err) => panic!("expected a semantic error, got: {err}"),
    }
}

/// Helper function to check if a program passes semantic analysis.
pub fn should_pass(program: &Node) -> bool {
    analyze(program).is_ok()
}

/// Helper function to check if a program fails semantic analysis.
pub fn should_fail(program: &Node) -> bool {
    analyze(program).is_err()
}
