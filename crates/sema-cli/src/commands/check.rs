//! Implementation of the `sema check` command.

use crate::pipeline;
use crate::utils::{find_project, print_status};
use anyhow::Result;
use std::path::PathBuf;
use std::time::Instant;

/// Executes the `check` command.
///
/// Explicit tree files are analyzed as given and their records printed to
/// stdout. Without arguments the trees and output file come from sema.toml.
///
/// # Errors
/// Returns an error if a tree cannot be loaded or fails analysis.
pub fn execute(trees: &[PathBuf]) -> Result<()> {
    let start = Instant::now();

    let (paths, destination) = if trees.is_empty() {
        let (config, project_root) = find_project()?;
        print_status(
            "Checking",
            &format!("{} ({})", config.project.name, project_root.display()),
        );
        (
            config.tree_paths(&project_root),
            config.metrics_path(&project_root),
        )
    } else {
        (trees.to_vec(), None)
    };

    let records = pipeline::check_all(&paths)?;
    pipeline::emit(&records, destination.as_deref())?;

    print_status(
        "Finished",
        &format!(
            "{} tree(s) in {:.2}s",
            records.len(),
            start.elapsed().as_secs_f64()
        ),
    );
    Ok(())
}
