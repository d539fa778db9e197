//! Utility functions and constants shared across the CLI.

use anyhow::{Context, Result};
use colored::Colorize;
use sema_utils::Config;
use std::path::PathBuf;

/// Template for the starter tree of new projects: `num a; a = 1 + 2;`
pub const MAIN_TREE_TEMPLATE: &str = r#"kind = "Program"

[[children]]
kind = "Declaration"
value = "num"
children = [{ kind = "Identifier", value = "a" }]

[[children]]
kind = "Stmt"

[[children.children]]
kind = "AssignStmt"

[[children.children.children]]
kind = "Identifier"
value = "a"

[[children.children.children]]
kind = "Expr"

[[children.children.children.children]]
kind = "AddExpr"
children = [
    { kind = "GenValue", children = [{ kind = "IntValue", value = 1 }] },
    { kind = "GenValue", children = [{ kind = "IntValue", value = 2 }] },
]
"#;

/// Finds the Sema project root and config.
///
/// # Errors
/// Returns an error if not in a Sema project directory.
pub fn find_project() -> Result<(Config, PathBuf)> {
    Config::find().with_context(|| "Not in a Sema project directory")
}

/// Prints a status message with colored output.
///
/// Status lines go to stderr so stdout only carries metrics records.
pub fn print_status(status: &str, message: &str) {
    eprintln!("{} {message}", status.green().bold());
}
