//! Error types and result aliases for the Sema analyzer.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the Sema workspace.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed syntax tree: {0}")]
    #[diagnostic(code(sema::tree))]
    Tree(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Semantic(#[from] SemanticError),
}

/// A semantic rule violation. Every variant aborts the analysis run.
///
/// The `Display` wording is consumed by existing tooling and must not change.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("Invalid use of undefined Identifier {name}")]
    #[diagnostic(
        code(sema::semantic::undefined_identifier),
        help("declare the identifier before using it in an expression")
    )]
    UndefinedIdentifier { name: String },

    #[error("Identifier {name} has multiple declarations")]
    #[diagnostic(
        code(sema::semantic::multiple_declaration),
        help("variables, enum types and enum values share a single namespace")
    )]
    MultipleDeclaration { name: String },

    #[error("Identifier {name} has been declared with the type {type_name} that does not exist")]
    #[diagnostic(
        code(sema::semantic::unknown_declared_type),
        help("use `num`, `bool`, or an enum declared earlier in the program")
    )]
    UnknownDeclaredType { name: String, type_name: String },

    #[error("Invalid type in condition")]
    #[diagnostic(
        code(sema::semantic::invalid_condition_type),
        help("`if` and `while` conditions must be of type bool")
    )]
    InvalidConditionType,

    #[error("Invalid type in expression")]
    #[diagnostic(code(sema::semantic::invalid_expression_type))]
    InvalidExpressionType,

    #[error("Invalid type in assignation of Identifier {name}")]
    #[diagnostic(code(sema::semantic::invalid_assignment_type))]
    InvalidAssignmentType { name: String },

    #[error("Invalid type in switch of Identifier {name}")]
    #[diagnostic(
        code(sema::semantic::invalid_switch_type),
        help("only num and enum variables can be switched on")
    )]
    InvalidSwitchType { name: String },

    #[error("Invalid type in case of {category} {label}")]
    #[diagnostic(code(sema::semantic::invalid_case_type))]
    InvalidCaseType {
        /// `"integer"` or `"Identifier"`
        category: &'static str,
        label: String,
    },
}

impl SemanticError {
    /// Builds a [`SemanticError::InvalidCaseType`] for an integer case label.
    pub fn invalid_integer_case(value: i64) -> Self {
        Self::InvalidCaseType {
            category: "integer",
            label: value.to_string(),
        }
    }

    /// Builds a [`SemanticError::InvalidCaseType`] for an identifier case label.
    pub fn invalid_identifier_case(name: impl Into<String>) -> Self {
        Self::InvalidCaseType {
            category: "Identifier",
            label: name.into(),
        }
    }
}

/// Result type alias using the Sema Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_messages() {
        let err = SemanticError::MultipleDeclaration {
            name: "a".to_string(),
        };
        assert_eq!(err.to_string(), "Identifier a has multiple declarations");

        let err = SemanticError::UnknownDeclaredType {
            name: "c".to_string(),
            type_name: "Shade".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Identifier c has been declared with the type Shade that does not exist"
        );
    }

    #[test]
    fn test_case_labels() {
        assert_eq!(
            SemanticError::invalid_integer_case(3).to_string(),
            "Invalid type in case of integer 3"
        );
        assert_eq!(
            SemanticError::invalid_identifier_case("Red").to_string(),
            "Invalid type in case of Identifier Red"
        );
    }

    #[test]
    fn test_semantic_is_transparent() {
        let err: Error = SemanticError::InvalidConditionType.into();
        assert_eq!(err.to_string(), "Invalid type in condition");
    }
}
