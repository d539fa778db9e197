//! Helper functions to reduce code duplication.

use sema_ast::Node;
use sema_core::{Error, Result, SemanticError, SemanticType};

/// Returns the child at `index`, or a tree error naming the parent kind.
pub(crate) fn child(node: &Node, index: usize) -> Result<&Node> {
    node.children.get(index).ok_or_else(|| {
        Error::Tree(format!(
            "{} is missing child #{index}",
            node.kind.name()
        ))
    })
}

/// Returns the name of the identifier child at `index`.
pub(crate) fn identifier_at(node: &Node, index: usize) -> Result<&str> {
    let target = child(node, index)?;
    target.identifier().ok_or_else(|| {
        Error::Tree(format!(
            "{} expects an Identifier as child #{index}, found {}",
            node.kind.name(),
            target.kind.name()
        ))
    })
}

/// Fails with [`SemanticError::InvalidExpressionType`] unless `found` is `expected`.
pub(crate) fn expect_operand(found: SemanticType, expected: SemanticType) -> Result<()> {
    if found != expected {
        return Err(SemanticError::InvalidExpressionType.into());
    }
    Ok(())
}
