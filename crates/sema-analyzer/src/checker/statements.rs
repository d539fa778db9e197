//! Statement rules: conditionals, loops, assignment and switch.

use crate::checker::core::Analyzer;
use crate::checker::helpers::{child, identifier_at};
use sema_ast::{Node, NodeKind};
use sema_core::{Error, Result, SemanticError, SemanticType};

impl Analyzer {
    /// Checks an `if` statement.
    pub(crate) fn check_if(&mut self, node: &Node) -> Result<SemanticType> {
        self.metrics.ifs += 1;
        self.check_conditional(node)
    }

    /// Checks a `while` statement.
    pub(crate) fn check_while(&mut self, node: &Node) -> Result<SemanticType> {
        self.metrics.whiles += 1;
        self.check_conditional(node)
    }

    /// Visits every child, then requires the first child (the condition) to
    /// have been Bool. Errors raised in the body take precedence.
    fn check_conditional(&mut self, node: &Node) -> Result<SemanticType> {
        let condition_type = self.check_node(child(node, 0)?)?;

        for body in &node.children[1..] {
            self.check_node(body)?;
        }

        if condition_type != SemanticType::Bool {
            return Err(SemanticError::InvalidConditionType.into());
        }

        Ok(SemanticType::Unknown)
    }

    /// Checks an assignment statement.
    pub(crate) fn check_assignment(&mut self, node: &Node) -> Result<SemanticType> {
        let name = identifier_at(node, 0)?;
        let target_type = self.symbols.lookup(name);
        let value_type = self.check_node(child(node, 1)?)?;

        let compatible =
            target_type.is_some_and(|target_type| target_type.accepts_assignment(value_type));
        if !compatible {
            return Err(SemanticError::InvalidAssignmentType {
                name: name.to_string(),
            }
            .into());
        }

        Ok(SemanticType::Unknown)
    }

    /// Checks a `switch` statement and each of its cases.
    pub(crate) fn check_switch(&mut self, node: &Node) -> Result<SemanticType> {
        let name = identifier_at(node, 0)?;
        let switch_type = match self.symbols.lookup(name) {
            Some(switch_type) if switch_type.is_switchable() => switch_type,
            _ => {
                return Err(SemanticError::InvalidSwitchType {
                    name: name.to_string(),
                }
                .into());
            }
        };

        for arm in &node.children[1..] {
            match arm.kind {
                NodeKind::CaseStmt => self.check_case(arm, switch_type)?,
                _ => {
                    self.check_node(arm)?;
                }
            }
        }

        Ok(SemanticType::Unknown)
    }

    /// Checks a case label against the governing switch type.
    ///
    /// Only the label is examined; the statements of the case are not walked.
    fn check_case(&self, node: &Node, switch_type: SemanticType) -> Result<()> {
        let label = child(node, 0)?;

        let (label_type, mismatch) = match &label.kind {
            NodeKind::Identifier(name) => (
                self.symbols.lookup(name),
                SemanticError::invalid_identifier_case(name.as_str()),
            ),
            NodeKind::IntValue(value) => (
                Some(SemanticType::Number),
                SemanticError::invalid_integer_case(*value),
            ),
            other => {
                return Err(Error::Tree(format!(
                    "case label must be an Identifier or IntValue, found {}",
                    other.name()
                )));
            }
        };

        match label_type {
            Some(label_type) if switch_type.accepts_case(label_type) => Ok(()),
            _ => Err(mismatch.into()),
        }
    }
}
