//! Core types and utilities for the Sema semantic analyzer.
//!
//! This crate provides the semantic type domain, its compatibility rules, and
//! the error types shared by every stage of the workspace.

pub mod error;
pub mod types;

pub use error::{Error, Result, SemanticError};
pub use types::SemanticType;
