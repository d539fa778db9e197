//! Core analyzer structure.

use crate::metrics::Metrics;
use crate::symbol_table::SymbolTable;

/// Semantic analyzer for one program.
///
/// Owns the symbol table and the metric counters for exactly one run; build a
/// fresh analyzer for every tree so runs never share state.
#[derive(Debug, Default)]
pub struct Analyzer {
    /// Every declared name of the program
    pub(crate) symbols: SymbolTable,
    /// Counters bumped while the tree is walked
    pub(crate) metrics: Metrics,
}

impl Analyzer {
    /// Creates an analyzer with an empty symbol table and zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol table built so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Returns the counters accumulated so far.
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }
}
