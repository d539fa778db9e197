//! TOML interchange format for syntax trees.
//!
//! A tree is one table per node:
//!
//! ```toml
//! kind = "Program"
//!
//! [[children]]
//! kind = "Declaration"
//! value = "num"
//!
//! [[children.children]]
//! kind = "Identifier"
//! value = "a"
//! ```
//!
//! `value` holds the literal payload (type keyword, identifier name, integer,
//! boolean or comparison operator) and `ops` the operator tokens of boolean and
//! unary nodes.

use crate::ast::{ComparisonOp, Node, NodeKind};
use sema_core::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNode {
    kind: RawKind,
    #[serde(default)]
    value: Option<RawValue>,
    #[serde(default)]
    ops: Vec<String>,
    #[serde(default)]
    children: Vec<RawNode>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
enum RawKind {
    Program,
    Declaration,
    Block,
    Stmt,
    IfStmt,
    WhileStmt,
    AssignStmt,
    EnumStmt,
    SwitchStmt,
    CaseStmt,
    Expr,
    CompExpr,
    AddExpr,
    MulExpr,
    BoolExpr,
    NotExpr,
    UnaExpr,
    GenValue,
    BoolValue,
    Identifier,
    IntValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Parses a syntax tree from its TOML representation.
///
/// # Errors
/// Returns [`Error::Tree`] if the document is not valid TOML or describes a
/// node whose payload does not fit its kind.
///
/// # Examples
/// ```
/// use sema_ast::{NodeKind, parse_tree};
///
/// let tree = parse_tree(r#"
///     kind = "Program"
///
///     [[children]]
///     kind = "EnumStmt"
///     children = [
///         { kind = "Identifier", value = "Color" },
///         { kind = "Identifier", value = "Red" },
///     ]
/// "#).unwrap();
/// assert_eq!(tree.kind, NodeKind::Program);
/// assert_eq!(tree.children[0].children.len(), 2);
/// ```
pub fn parse_tree(source: &str) -> Result<Node> {
    let raw: RawNode = toml::from_str(source).map_err(|e| Error::Tree(e.to_string()))?;
    raw.into_node()
}

/// Reads and parses a syntax tree file.
///
/// # Errors
/// Returns an IO error if the file cannot be read, or [`Error::Tree`] if its
/// contents are malformed.
pub fn load_tree(path: impl AsRef<Path>) -> Result<Node> {
    let source = fs::read_to_string(path.as_ref())?;
    parse_tree(&source)
}

impl RawNode {
    fn into_node(self) -> Result<Node> {
        let Self {
            kind,
            value,
            ops,
            children,
        } = self;

        let carries_ops = matches!(kind, RawKind::BoolExpr | RawKind::NotExpr | RawKind::UnaExpr);
        if !ops.is_empty() && !carries_ops {
            return Err(Error::Tree(format!(
                "{kind:?} nodes do not carry operator tokens"
            )));
        }

        let kind = match kind {
            RawKind::Program => NodeKind::Program,
            RawKind::Declaration => NodeKind::Declaration {
                type_name: optional_text(kind, value)?,
            },
            RawKind::Block => NodeKind::Block,
            RawKind::Stmt => NodeKind::Stmt,
            RawKind::IfStmt => NodeKind::IfStmt,
            RawKind::WhileStmt => NodeKind::WhileStmt,
            RawKind::AssignStmt => NodeKind::AssignStmt,
            RawKind::EnumStmt => NodeKind::EnumStmt,
            RawKind::SwitchStmt => NodeKind::SwitchStmt,
            RawKind::CaseStmt => NodeKind::CaseStmt,
            RawKind::Expr => NodeKind::Expr,
            RawKind::CompExpr => {
                let operator = optional_text(kind, value)?
                    .map(|op| op.parse::<ComparisonOp>())
                    .transpose()
                    .map_err(Error::Tree)?;
                if operator.is_none() && children.len() > 1 {
                    return Err(Error::Tree(
                        "CompExpr with several operands needs an operator".to_string(),
                    ));
                }
                NodeKind::CompExpr { operator }
            }
            RawKind::AddExpr => NodeKind::AddExpr,
            RawKind::MulExpr => NodeKind::MulExpr,
            RawKind::BoolExpr => NodeKind::BoolExpr { ops },
            RawKind::NotExpr => NodeKind::NotExpr { ops },
            RawKind::UnaExpr => NodeKind::UnaExpr { ops },
            RawKind::GenValue => NodeKind::GenValue,
            RawKind::BoolValue => match value {
                Some(RawValue::Bool(b)) => NodeKind::BoolValue(b),
                _ => return Err(expected(kind, "a boolean value")),
            },
            RawKind::Identifier => match value {
                Some(RawValue::Text(name)) => NodeKind::Identifier(name),
                _ => return Err(expected(kind, "a string name")),
            },
            RawKind::IntValue => match value {
                Some(RawValue::Int(n)) => NodeKind::IntValue(n),
                _ => return Err(expected(kind, "an integer value")),
            },
        };

        let children = children
            .into_iter()
            .map(RawNode::into_node)
            .collect::<Result<Vec<_>>>()?;

        Ok(Node { kind, children })
    }
}

fn optional_text(kind: RawKind, value: Option<RawValue>) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(RawValue::Text(text)) => Ok(Some(text)),
        Some(_) => Err(expected(kind, "a string value")),
    }
}

fn expected(kind: RawKind, what: &str) -> Error {
    Error::Tree(format!("{kind:?} node expects {what}"))
}
