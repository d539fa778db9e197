//! Helpers for assembling syntax trees in code.
//!
//! The shapes produced here match what the parser emits, so trees built in
//! tests and tools go through exactly the same rules as parsed programs.
//!
//! ```
//! use sema_ast::build::*;
//!
//! // num a; a = 1 + 2;
//! let program = program([
//!     declaration("num", "a"),
//!     stmt(assign("a", expr(add([int(1), int(2)])))),
//! ]);
//! assert_eq!(program.children.len(), 2);
//! ```

use crate::ast::{ComparisonOp, Node, NodeKind};

pub fn program(items: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::Program, items)
}

/// `num a;` / `bool a;`
pub fn declaration(type_name: &str, name: &str) -> Node {
    Node::new(
        NodeKind::Declaration {
            type_name: Some(type_name.to_string()),
        },
        [ident(name)],
    )
}

/// `Color c;` where `Color` names an enum.
pub fn enum_declaration(enum_type: &str, name: &str) -> Node {
    Node::new(
        NodeKind::Declaration { type_name: None },
        [ident(enum_type), ident(name)],
    )
}

pub fn block(statements: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::Block, statements)
}

pub fn stmt(inner: Node) -> Node {
    Node::new(NodeKind::Stmt, [inner])
}

pub fn if_stmt(condition: Node, body: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::IfStmt, std::iter::once(condition).chain(body))
}

pub fn while_stmt(condition: Node, body: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::WhileStmt, std::iter::once(condition).chain(body))
}

pub fn assign(name: &str, value: Node) -> Node {
    Node::new(NodeKind::AssignStmt, [ident(name), value])
}

/// `enum Name { values... }`
pub fn enum_stmt(name: &str, values: &[&str]) -> Node {
    Node::new(
        NodeKind::EnumStmt,
        std::iter::once(name).chain(values.iter().copied()).map(ident),
    )
}

pub fn switch(name: &str, cases: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::SwitchStmt, std::iter::once(ident(name)).chain(cases))
}

/// A case whose label is `label` (an `Identifier` or `IntValue` node).
pub fn case(label: Node, body: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::CaseStmt, std::iter::once(label).chain(body))
}

pub fn expr(inner: Node) -> Node {
    Node::new(NodeKind::Expr, [inner])
}

/// `lhs op rhs`
pub fn compare(op: ComparisonOp, lhs: Node, rhs: Node) -> Node {
    compare_chain(op, [lhs, rhs])
}

/// `a op b op c ...` sharing one operator.
pub fn compare_chain(op: ComparisonOp, operands: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::CompExpr { operator: Some(op) }, operands)
}

pub fn add(operands: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::AddExpr, operands)
}

pub fn mul(operands: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::MulExpr, operands)
}

/// Boolean chain with the given operator tokens, e.g. `&["&&", "||"]`.
pub fn bool_chain(ops: &[&str], operands: impl IntoIterator<Item = Node>) -> Node {
    Node::new(
        NodeKind::BoolExpr {
            ops: ops.iter().map(|op| (*op).to_string()).collect(),
        },
        operands,
    )
}

/// `lhs && rhs`
pub fn and(lhs: Node, rhs: Node) -> Node {
    bool_chain(&["&&"], [lhs, rhs])
}

/// `!operand`
pub fn not(operand: Node) -> Node {
    Node::new(
        NodeKind::NotExpr {
            ops: vec!["!".to_string()],
        },
        [operand],
    )
}

/// `-operand`
pub fn negate(operand: Node) -> Node {
    Node::new(
        NodeKind::UnaExpr {
            ops: vec!["-".to_string()],
        },
        [operand],
    )
}

/// Identifier read as a value.
pub fn var(name: &str) -> Node {
    Node::new(NodeKind::GenValue, [ident(name)])
}

/// Integer literal in a value position.
pub fn int(value: i64) -> Node {
    Node::new(NodeKind::GenValue, [int_literal(value)])
}

/// Boolean literal in a value position.
pub fn boolean(value: bool) -> Node {
    Node::new(NodeKind::GenValue, [Node::leaf(NodeKind::BoolValue(value))])
}

/// Bare identifier, e.g. a declaration target or case label.
pub fn ident(name: &str) -> Node {
    Node::leaf(NodeKind::Identifier(name.to_string()))
}

/// Bare integer literal, e.g. a case label.
pub fn int_literal(value: i64) -> Node {
    Node::leaf(NodeKind::IntValue(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_stmt_shape() {
        let node = enum_stmt("Color", &["Red", "Green"]);
        let names: Vec<_> = node.children.iter().filter_map(Node::identifier).collect();
        assert_eq!(names, ["Color", "Red", "Green"]);
    }

    #[test]
    fn test_declaration_shapes() {
        let primitive = declaration("num", "a");
        assert_eq!(primitive.children.len(), 1);
        assert_eq!(
            primitive.kind,
            NodeKind::Declaration {
                type_name: Some("num".to_string())
            }
        );

        let typed = enum_declaration("Color", "c");
        assert_eq!(typed.children.len(), 2);
        assert_eq!(typed.children[0].identifier(), Some("Color"));
    }

    #[test]
    fn test_if_stmt_condition_first() {
        let node = if_stmt(expr(boolean(true)), [block([])]);
        assert_eq!(node.children[0].kind, NodeKind::Expr);
        assert_eq!(node.children[1].kind, NodeKind::Block);
    }
}
