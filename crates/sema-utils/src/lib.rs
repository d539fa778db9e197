//! Shared utilities for Sema tools.

mod config;

pub use config::{CONFIG_FILE, Config, Output, Project};
