//! Sema CLI library for testing and reusability.

pub mod commands;
pub mod pipeline;
pub mod utils;

pub use sema_utils::Config;
