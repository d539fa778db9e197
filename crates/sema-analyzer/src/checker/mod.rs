//! Rule engine: one rule per node kind, applied in a single depth-first walk.

mod core;
mod declarations;
mod expressions;
mod helpers;
mod program;
mod statements;

pub use self::core::Analyzer;
