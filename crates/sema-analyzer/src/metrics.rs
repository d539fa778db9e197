//! Program metrics gathered while the analyzer walks the tree.

use std::fmt;

/// Counters for one analysis run.
///
/// Every counter except `variables` is bumped by the rule that visits the
/// corresponding construct. `variables` is derived from the final symbol table
/// once the whole program has been checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Declared variables (enum type and value names excluded)
    pub variables: usize,
    pub whiles: usize,
    pub ifs: usize,
    /// Values across every enum declaration
    pub enum_values: usize,
    /// Binary and unary operator applications
    pub operators: usize,
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{VAR:{}, WHILE:{}, IF:{}, ENUM_VALUES:{}, OP:{}}}",
            self.variables, self.whiles, self.ifs, self.enum_values, self.operators
        )
    }
}
