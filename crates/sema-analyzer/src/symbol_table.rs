//! Symbol table for tracking declared names during semantic analysis.

use sema_core::{SemanticError, SemanticType};
use std::collections::HashMap;

/// Represents a symbol in the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol<'a> {
    /// The declared name
    pub name: &'a str,
    /// The semantic type bound to the name
    pub symbol_type: SemanticType,
}

/// Flat symbol table shared by variables, enum types and enum values.
///
/// The language has no scopes: every declared name lives in one namespace for
/// the whole program, and entries are only ever inserted.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, SemanticType>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` with the given type.
    ///
    /// # Errors
    /// Returns [`SemanticError::MultipleDeclaration`] if the name is already
    /// bound, whatever its category.
    pub fn declare(&mut self, name: &str, symbol_type: SemanticType) -> Result<(), SemanticError> {
        if self.symbols.contains_key(name) {
            return Err(SemanticError::MultipleDeclaration {
                name: name.to_string(),
            });
        }

        self.symbols.insert(name.to_string(), symbol_type);
        Ok(())
    }

    /// Looks up the type bound to `name`.
    pub fn lookup(&self, name: &str) -> Option<SemanticType> {
        self.symbols.get(name).copied()
    }

    /// Returns true for `num`, `bool`, or a declared enum type name.
    pub fn is_valid_type_name(&self, name: &str) -> bool {
        SemanticType::from_primitive(name).is_some()
            || self.lookup(name) == Some(SemanticType::EnumType)
    }

    /// Resolves the type of a variable declared with the type name `name`.
    ///
    /// Primitive keywords map to their tag, an enum type name to
    /// [`SemanticType::EnumVar`], and anything else to
    /// [`SemanticType::Unknown`].
    pub fn resolve_declared_type(&self, name: &str) -> SemanticType {
        if let Some(primitive) = SemanticType::from_primitive(name) {
            return primitive;
        }

        match self.lookup(name) {
            Some(SemanticType::EnumType) => SemanticType::EnumVar,
            _ => SemanticType::Unknown,
        }
    }

    /// Counts declared variables, leaving out enum type and enum value names.
    pub fn variable_count(&self) -> usize {
        self.symbols
            .values()
            .filter(|symbol_type| symbol_type.is_variable())
            .count()
    }

    /// Returns the number of declared names.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if nothing has been declared yet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over every declared symbol in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol<'_>> {
        self.symbols.iter().map(|(name, symbol_type)| Symbol {
            name: name.as_str(),
            symbol_type: *symbol_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table_basic() {
        let mut table = SymbolTable::new();
        assert!(table.declare("x", SemanticType::Number).is_ok());
        assert_eq!(table.lookup("x"), Some(SemanticType::Number));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_symbol_table_duplicate_error() {
        let mut table = SymbolTable::new();
        table.declare("Color", SemanticType::EnumType).unwrap();

        let err = table.declare("Color", SemanticType::Bool).unwrap_err();
        assert_eq!(
            err,
            SemanticError::MultipleDeclaration {
                name: "Color".to_string()
            }
        );
        // The first binding survives the failed declaration
        assert_eq!(table.lookup("Color"), Some(SemanticType::EnumType));
    }

    #[test]
    fn test_symbol_table_undefined() {
        let table = SymbolTable::new();
        assert!(table.lookup("undefined").is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn test_type_names() {
        let mut table = SymbolTable::new();
        table.declare("Color", SemanticType::EnumType).unwrap();
        table.declare("Red", SemanticType::EnumValue).unwrap();

        assert!(table.is_valid_type_name("num"));
        assert!(table.is_valid_type_name("bool"));
        assert!(table.is_valid_type_name("Color"));
        assert!(!table.is_valid_type_name("Red"));
        assert!(!table.is_valid_type_name("Shade"));

        assert_eq!(table.resolve_declared_type("num"), SemanticType::Number);
        assert_eq!(table.resolve_declared_type("bool"), SemanticType::Bool);
        assert_eq!(table.resolve_declared_type("Color"), SemanticType::EnumVar);
        assert_eq!(table.resolve_declared_type("Red"), SemanticType::Unknown);
    }

    #[test]
    fn test_variable_count() {
        let mut table = SymbolTable::new();
        table.declare("Color", SemanticType::EnumType).unwrap();
        table.declare("Red", SemanticType::EnumValue).unwrap();
        table.declare("c", SemanticType::EnumVar).unwrap();
        table.declare("n", SemanticType::Number).unwrap();

        assert_eq!(table.variable_count(), 2);
        assert_eq!(table.iter().count(), 4);
    }
}
