//! Analysis pipeline stages.

use anyhow::{Context, Result, anyhow};
use sema_analyzer::Metrics;
use sema_ast::Node;
use std::fs;
use std::path::Path;
use tracing::info;

/// Loads a syntax tree file.
///
/// # Errors
/// Returns an error if the file cannot be read or describes a malformed tree.
pub fn load(path: &Path) -> Result<Node> {
    sema_ast::load_tree(path).map_err(|e| {
        eprintln!("{:?}", miette::Report::new(e));
        anyhow!("Failed to load {}", path.display())
    })
}

/// Runs semantic analysis on a syntax tree.
///
/// # Errors
/// Returns an error if the tree violates a semantic rule.
pub fn analyze(tree: &Node) -> Result<Metrics> {
    sema_analyzer::analyze(tree).map_err(|e| {
        eprintln!("{:?}", miette::Report::new(e));
        anyhow!("Semantic analysis failed")
    })
}

/// Loads and analyzes one tree file.
///
/// # Errors
/// Returns an error if any stage fails.
pub fn check_tree(path: &Path) -> Result<Metrics> {
    let tree = load(path)?;
    info!(path = %path.display(), nodes = tree.size(), "loaded tree");

    let metrics = analyze(&tree)?;
    info!(path = %path.display(), %metrics, "analysis finished");
    Ok(metrics)
}

/// Analyzes every tree, stopping at the first failure.
///
/// # Errors
/// Returns the error of the first tree that fails; no metrics are returned
/// in that case.
pub fn check_all(paths: &[impl AsRef<Path>]) -> Result<Vec<Metrics>> {
    paths
        .iter()
        .map(|path| check_tree(path.as_ref()))
        .collect()
}

/// Writes one metrics record per line to `destination`, or to stdout.
///
/// # Errors
/// Returns an error if the destination file cannot be written.
pub fn emit(records: &[Metrics], destination: Option<&Path>) -> Result<()> {
    let Some(destination) = destination else {
        for metrics in records {
            println!("{metrics}");
        }
        return Ok(());
    };

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let contents: String = records.iter().map(|metrics| format!("{metrics}\n")).collect();
    fs::write(destination, contents)
        .with_context(|| format!("Failed to write {}", destination.display()))
}
