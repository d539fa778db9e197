//! Implementation of the `sema init` command.

use crate::utils::{MAIN_TREE_TEMPLATE, print_status};
use anyhow::{Context, Result};
use sema_utils::{CONFIG_FILE, Config};
use std::fs;
use std::path::Path;

/// Executes the `init` command to initialize a Sema project in `dir`.
///
/// # Errors
/// Returns an error if sema.toml already exists or if files cannot be created.
pub fn execute(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{CONFIG_FILE} already exists in {}", dir.display());
    }

    let project_name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("sema-project");

    let config = Config::new(project_name);
    config.save(&config_path)?;

    // Create the starter trees if they don't exist
    for tree_path in config.tree_paths(dir) {
        if tree_path.exists() {
            continue;
        }
        if let Some(parent) = tree_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&tree_path, MAIN_TREE_TEMPLATE)
            .with_context(|| format!("Failed to create {}", tree_path.display()))?;
    }

    print_status("Created", &format!("Sema project '{project_name}'"));
    eprintln!();
    eprintln!("To get started:");
    eprintln!("  sema check");

    Ok(())
}
