//! Configuration file handling for Sema projects.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "sema.toml";

/// Represents the sema.toml configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub project: Project,
    #[serde(default)]
    pub output: Output,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// Syntax tree files analyzed by `sema check`, relative to the project root
    #[serde(default = "default_trees")]
    pub trees: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Output {
    /// File receiving the metrics records; stdout when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<PathBuf>,
}

fn default_trees() -> Vec<PathBuf> {
    vec![PathBuf::from("trees/main.toml")]
}

impl Config {
    /// Creates a new default configuration with the given project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            project: Project {
                name: name.into(),
                trees: default_trees(),
            },
            output: Output::default(),
        }
    }

    /// Loads configuration from a sema.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse {CONFIG_FILE}"))
    }

    /// Saves configuration to a sema.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))
    }

    /// Finds the sema.toml file starting from the current directory.
    ///
    /// # Errors
    /// Returns an error if no sema.toml is found in the current or parent directories.
    pub fn find() -> Result<(Self, PathBuf)> {
        let current_dir =
            std::env::current_dir().with_context(|| "Failed to get current directory")?;
        Self::find_from(current_dir)
    }

    /// Finds the sema.toml file starting from `start` and walking up.
    ///
    /// # Errors
    /// Returns an error if no sema.toml is found in `start` or any parent directory.
    pub fn find_from(start: impl Into<PathBuf>) -> Result<(Self, PathBuf)> {
        let mut current_dir = start.into();

        loop {
            let config_path = current_dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                return Ok((config, current_dir));
            }

            if !current_dir.pop() {
                anyhow::bail!(
                    "Could not find {CONFIG_FILE} in current directory or any parent directory"
                );
            }
        }
    }

    /// Resolves the configured tree files against the project root.
    #[must_use]
    pub fn tree_paths(&self, project_root: &Path) -> Vec<PathBuf> {
        self.project
            .trees
            .iter()
            .map(|tree| project_root.join(tree))
            .collect()
    }

    /// Resolves the configured metrics file against the project root.
    #[must_use]
    pub fn metrics_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.output
            .metrics
            .as_ref()
            .map(|metrics| project_root.join(metrics))
    }
}
