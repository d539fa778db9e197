//! Expression rules and operator counting.

use crate::checker::core::Analyzer;
use crate::checker::helpers::{child, expect_operand};
use sema_ast::{ComparisonOp, Node, NodeKind};
use sema_core::{Result, SemanticError, SemanticType};

impl Analyzer {
    /// Checks a value position. Identifiers directly below it are read as
    /// values and must be declared.
    pub(crate) fn check_value(&mut self, node: &Node) -> Result<SemanticType> {
        let mut result = SemanticType::Unknown;
        for value in &node.children {
            let value_type = match &value.kind {
                NodeKind::Identifier(name) => self.resolve_value(name)?,
                _ => self.check_node(value)?,
            };
            if value_type.is_known() {
                result = value_type;
            }
        }
        Ok(result)
    }

    fn resolve_value(&self, name: &str) -> Result<SemanticType> {
        self.symbols.lookup(name).ok_or_else(|| {
            SemanticError::UndefinedIdentifier {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Checks a relational or equality chain.
    ///
    /// A single operand passes its type through. Each additional operand is
    /// one comparison; nested operators inside the operands are counted once,
    /// when the operand itself is checked.
    pub(crate) fn check_comparison(
        &mut self,
        node: &Node,
        operator: Option<ComparisonOp>,
    ) -> Result<SemanticType> {
        let operand_types = node
            .children
            .iter()
            .map(|operand| self.check_node(operand))
            .collect::<Result<Vec<_>>>()?;

        let [first, rest @ ..] = operand_types.as_slice() else {
            return Ok(SemanticType::Unknown);
        };
        if rest.is_empty() {
            return Ok(*first);
        }

        self.metrics.operators += rest.len();

        match operator {
            Some(op) if op.is_equality() => {
                if !first.is_equality_operand() {
                    return Err(SemanticError::InvalidExpressionType.into());
                }
                for operand_type in rest {
                    expect_operand(*operand_type, *first)?;
                }
            }
            _ => {
                for operand_type in &operand_types {
                    expect_operand(*operand_type, SemanticType::Number)?;
                }
            }
        }

        Ok(SemanticType::Bool)
    }

    /// Checks an additive or multiplicative chain.
    ///
    /// The whole chain counts as one operator, whatever its length.
    pub(crate) fn check_arithmetic(&mut self, node: &Node) -> Result<SemanticType> {
        if node.children.len() <= 1 {
            return self.check_children(node);
        }

        self.metrics.operators += 1;
        for operand in &node.children {
            let operand_type = self.check_node(operand)?;
            expect_operand(operand_type, SemanticType::Number)?;
        }

        Ok(SemanticType::Number)
    }

    /// Checks a `&&` / `||` chain: every operand shares the first one's type.
    pub(crate) fn check_bool_chain(&mut self, node: &Node, ops: &[String]) -> Result<SemanticType> {
        let mut expected = SemanticType::Unknown;
        for operand in &node.children {
            let operand_type = self.check_node(operand)?;
            if expected.is_known() {
                expect_operand(operand_type, expected)?;
            } else {
                expected = operand_type;
            }
        }

        if ops.is_empty() {
            return Ok(expected);
        }

        self.metrics.operators += 1;
        Ok(SemanticType::Bool)
    }

    /// Checks a logical negation.
    pub(crate) fn check_not(&mut self, node: &Node, ops: &[String]) -> Result<SemanticType> {
        if ops.is_empty() {
            return self.check_children(node);
        }

        self.metrics.operators += 1;
        let operand_type = self.check_node(child(node, 0)?)?;
        expect_operand(operand_type, SemanticType::Bool)?;

        Ok(SemanticType::Bool)
    }

    /// Checks an arithmetic negation. The operand type is not constrained.
    pub(crate) fn check_unary(&mut self, node: &Node, ops: &[String]) -> Result<SemanticType> {
        if !ops.is_empty() {
            self.metrics.operators += 1;
        }
        self.check_children(node)
    }
}
