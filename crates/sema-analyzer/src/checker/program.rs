//! Program root, node dispatch and pass-through rules.

use crate::checker::core::Analyzer;
use crate::metrics::Metrics;
use sema_ast::{Node, NodeKind};
use sema_core::{Error, Result, SemanticType};
use tracing::{debug, trace};

impl Analyzer {
    /// Checks a complete program and returns its metrics.
    ///
    /// # Errors
    /// Returns the first semantic rule violation found in walk order, or a
    /// tree error if `program` is not a well-formed `Program` node.
    pub fn check_program(&mut self, program: &Node) -> Result<Metrics> {
        if program.kind != NodeKind::Program {
            return Err(Error::Tree(format!(
                "the root must be a Program node, found {}",
                program.kind.name()
            )));
        }

        debug!(nodes = program.size(), "checking program");

        for item in &program.children {
            self.check_node(item)?;
        }

        self.metrics.variables = self.symbols.variable_count();

        debug!(
            symbols = self.symbols.len(),
            variables = self.metrics.variables,
            operators = self.metrics.operators,
            "program is well typed"
        );
        Ok(self.metrics)
    }

    /// Applies the rule for `node` and returns the type it synthesizes.
    ///
    /// Statements synthesize [`SemanticType::Unknown`].
    pub(crate) fn check_node(&mut self, node: &Node) -> Result<SemanticType> {
        trace!(kind = node.kind.name(), children = node.children.len(), "visit");

        match &node.kind {
            NodeKind::Program => Err(Error::Tree(
                "Program node found below the root".to_string(),
            )),

            NodeKind::Declaration { type_name } => {
                self.check_declaration(node, type_name.as_deref())?;
                Ok(SemanticType::Unknown)
            }
            NodeKind::EnumStmt => {
                self.check_enum(node)?;
                Ok(SemanticType::Unknown)
            }

            NodeKind::Block | NodeKind::Stmt | NodeKind::Expr => self.check_children(node),
            NodeKind::GenValue => self.check_value(node),

            NodeKind::IfStmt => self.check_if(node),
            NodeKind::WhileStmt => self.check_while(node),
            NodeKind::AssignStmt => self.check_assignment(node),
            NodeKind::SwitchStmt => self.check_switch(node),
            NodeKind::CaseStmt => Err(Error::Tree(
                "CaseStmt found outside of a SwitchStmt".to_string(),
            )),

            NodeKind::CompExpr { operator } => self.check_comparison(node, *operator),
            NodeKind::AddExpr | NodeKind::MulExpr => self.check_arithmetic(node),
            NodeKind::BoolExpr { ops } => self.check_bool_chain(node, ops),
            NodeKind::NotExpr { ops } => self.check_not(node, ops),
            NodeKind::UnaExpr { ops } => self.check_unary(node, ops),

            NodeKind::BoolValue(_) => Ok(SemanticType::Bool),
            NodeKind::IntValue(_) => Ok(SemanticType::Number),
            // Only typed in a value position, see `check_value`
            NodeKind::Identifier(_) => Ok(SemanticType::Unknown),
        }
    }

    /// Visits every child and keeps the last definite type they produce.
    pub(crate) fn check_children(&mut self, node: &Node) -> Result<SemanticType> {
        let mut result = SemanticType::Unknown;
        for child in &node.children {
            let child_type = self.check_node(child)?;
            if child_type.is_known() {
                result = child_type;
            }
        }
        Ok(result)
    }
}
