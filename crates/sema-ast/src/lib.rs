//! Syntax tree consumed by the Sema semantic analyzer.
//!
//! Trees are produced by an external parser. This crate defines the node
//! model, helpers for building trees in code, and a TOML interchange format
//! for loading trees from disk.

pub mod ast;
pub mod build;
mod tree;

pub use ast::{ComparisonOp, Node, NodeKind};
pub use tree::{load_tree, parse_tree};
