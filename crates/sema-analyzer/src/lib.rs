//! Semantic analysis for Sema syntax trees.
//!
//! This crate validates declarations and types of a parsed program and, in
//! the same walk, gathers program metrics: declared variables, `while` and
//! `if` statements, enum values, and operator applications.

mod checker;
mod metrics;
mod symbol_table;

pub use checker::Analyzer;
pub use metrics::Metrics;
pub use symbol_table::{Symbol, SymbolTable};

use sema_ast::Node;
use sema_core::Result;

/// Performs semantic analysis on a program tree.
///
/// Each call uses a fresh [`Analyzer`], so repeated runs never share symbols
/// or counters.
///
/// # Errors
/// Returns the first violation found:
/// - Undefined identifiers used as values
/// - Names declared more than once
/// - Unknown declared types
/// - Type errors in conditions, expressions, assignments, switches and cases
///
/// # Examples
/// ```
/// use sema_analyzer::analyze;
/// use sema_ast::build::*;
///
/// // num a; if (true) { a = 1 + 2; }
/// let tree = program([
///     declaration("num", "a"),
///     stmt(if_stmt(
///         expr(boolean(true)),
///         [block([stmt(assign("a", expr(add([int(1), int(2)]))))])],
///     )),
/// ]);
/// let metrics = analyze(&tree).unwrap();
/// assert_eq!(metrics.to_string(), "{VAR:1, WHILE:0, IF:1, ENUM_VALUES:0, OP:1}");
/// ```
pub fn analyze(program: &Node) -> Result<Metrics> {
    Analyzer::new().check_program(program)
}
