//! Variable and enum declarations.

use crate::checker::core::Analyzer;
use crate::checker::helpers::identifier_at;
use sema_ast::Node;
use sema_core::{Result, SemanticError, SemanticType};
use tracing::debug;

impl Analyzer {
    /// Checks a variable declaration and binds its name.
    ///
    /// `num a;` carries its type keyword on the node and the identifier as the
    /// only child. `Color c;` carries the enum type name as the first child and
    /// the identifier as the second.
    pub(crate) fn check_declaration(&mut self, node: &Node, type_name: Option<&str>) -> Result<()> {
        let (name, declared_type) = if node.children.len() > 1 {
            let enum_type = identifier_at(node, 0)?;
            let name = identifier_at(node, 1)?;

            if !self.symbols.is_valid_type_name(enum_type) {
                return Err(SemanticError::UnknownDeclaredType {
                    name: name.to_string(),
                    type_name: enum_type.to_string(),
                }
                .into());
            }

            (name, self.symbols.resolve_declared_type(enum_type))
        } else {
            let name = identifier_at(node, 0)?;
            let declared_type = type_name
                .map(|type_name| self.symbols.resolve_declared_type(type_name))
                .unwrap_or_default();
            (name, declared_type)
        };

        debug!(name, %declared_type, "declare variable");
        self.symbols.declare(name, declared_type)?;
        Ok(())
    }

    /// Checks an enum statement: binds the type name and each of its values.
    pub(crate) fn check_enum(&mut self, node: &Node) -> Result<()> {
        let type_name = identifier_at(node, 0)?;
        let value_count = node.children.len() - 1;
        self.metrics.enum_values += value_count;

        debug!(type_name, values = value_count, "declare enum");
        self.symbols.declare(type_name, SemanticType::EnumType)?;

        for index in 1..node.children.len() {
            let value = identifier_at(node, index)?;
            self.symbols.declare(value, SemanticType::EnumValue)?;
        }

        Ok(())
    }
}
