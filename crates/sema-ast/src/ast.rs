//! Node definitions for the syntax tree.

use std::fmt;
use std::str::FromStr;

/// A node of the syntax tree: a kind with its payload and ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

/// Every node kind the parser produces.
///
/// Literal payloads live on the variant that carries them; operator tokens are
/// only recorded on comparison, boolean and unary operator nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Root of a compilation unit
    Program,

    /// Variable declaration: `num a;` or `Color c;`
    ///
    /// For primitive declarations the type keyword is stored here and the only
    /// child is the identifier. Enum-typed declarations carry the type name as
    /// their first child instead.
    Declaration { type_name: Option<String> },

    Block,
    Stmt,
    IfStmt,
    WhileStmt,

    /// `name = expr;`
    AssignStmt,

    /// `enum Name { A, B, ... }`
    EnumStmt,

    /// `switch (name) { case ...: }`
    SwitchStmt,

    /// `case label:`
    CaseStmt,

    Expr,

    /// Relational or equality chain; single-child nodes carry no operator
    CompExpr { operator: Option<ComparisonOp> },

    AddExpr,
    MulExpr,

    /// `&&` / `||` chain
    BoolExpr { ops: Vec<String> },

    /// Logical negation, present when `ops` is non-empty
    NotExpr { ops: Vec<String> },

    /// Arithmetic negation, present when `ops` is non-empty
    UnaExpr { ops: Vec<String> },

    /// Value position: an identifier below this node is read as a value
    GenValue,

    BoolValue(bool),
    Identifier(String),
    IntValue(i64),
}

impl NodeKind {
    /// Returns the parser's name for this node kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::Declaration { .. } => "Declaration",
            Self::Block => "Block",
            Self::Stmt => "Stmt",
            Self::IfStmt => "IfStmt",
            Self::WhileStmt => "WhileStmt",
            Self::AssignStmt => "AssignStmt",
            Self::EnumStmt => "EnumStmt",
            Self::SwitchStmt => "SwitchStmt",
            Self::CaseStmt => "CaseStmt",
            Self::Expr => "Expr",
            Self::CompExpr { .. } => "CompExpr",
            Self::AddExpr => "AddExpr",
            Self::MulExpr => "MulExpr",
            Self::BoolExpr { .. } => "BoolExpr",
            Self::NotExpr { .. } => "NotExpr",
            Self::UnaExpr { .. } => "UnaExpr",
            Self::GenValue => "GenValue",
            Self::BoolValue(_) => "BoolValue",
            Self::Identifier(_) => "Identifier",
            Self::IntValue(_) => "IntValue",
        }
    }
}

impl Node {
    /// Creates a node with the given children.
    pub fn new(kind: NodeKind, children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            kind,
            children: children.into_iter().collect(),
        }
    }

    /// Creates a node without children.
    #[must_use]
    pub fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Returns the identifier name if this node is an `Identifier`.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }
}

/// Operator of a `CompExpr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
}

impl ComparisonOp {
    /// Returns true for `==` and `!=`.
    #[must_use]
    pub fn is_equality(self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }
}

impl FromStr for ComparisonOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Self::Less),
            ">" => Ok(Self::Greater),
            "<=" => Ok(Self::LessEqual),
            ">=" => Ok(Self::GreaterEqual),
            "==" => Ok(Self::Equal),
            "!=" => Ok(Self::NotEqual),
            other => Err(format!("unknown comparison operator '{other}'")),
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
