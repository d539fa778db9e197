//! Command implementations for the Sema CLI.

pub mod check;
pub mod init;
