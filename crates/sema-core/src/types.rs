//! Semantic type domain and the compatibility rules shared by every check.

use std::fmt;

/// Type tag inferred for a node or bound to a symbol.
///
/// `EnumType`, `EnumVar` and `EnumValue` never compare equal to the primitive
/// `Bool`/`Number` tags. `Unknown` means "no type observed yet" and is never a
/// valid resting type for a well-typed subexpression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SemanticType {
    Bool,
    Number,
    /// The name of an enumeration
    EnumType,
    /// A variable declared with an enumeration as its type
    EnumVar,
    /// One member of an enumeration
    EnumValue,
    #[default]
    Unknown,
}

impl SemanticType {
    /// Maps a primitive type keyword to its tag.
    pub fn from_primitive(name: &str) -> Option<Self> {
        match name {
            "num" => Some(Self::Number),
            "bool" => Some(Self::Bool),
            _ => None,
        }
    }

    /// Returns true if a symbol of this type counts towards the `VAR` metric.
    pub fn is_variable(self) -> bool {
        !matches!(self, Self::EnumType | Self::EnumValue)
    }

    /// Returns true once a definite type has been observed.
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }

    /// Checks whether a value of type `value` may be assigned to `self`.
    ///
    /// Equal tags are always accepted; an enum value may also be stored in an
    /// enum variable.
    pub fn accepts_assignment(self, value: Self) -> bool {
        self == value || (self == Self::EnumVar && value == Self::EnumValue)
    }

    /// Returns true if a `switch` may dispatch on a value of this type.
    pub fn is_switchable(self) -> bool {
        matches!(self, Self::Number | Self::EnumVar)
    }

    /// Checks a case label's type against the governing switch type.
    pub fn accepts_case(self, label: Self) -> bool {
        match self {
            Self::EnumVar => label == Self::EnumValue,
            _ => label == self,
        }
    }

    /// Returns true if `==`/`!=` may compare operands of this type.
    pub fn is_equality_operand(self) -> bool {
        matches!(self, Self::Number | Self::Bool)
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Number => "num",
            Self::EnumType => "enum type",
            Self::EnumVar => "enum variable",
            Self::EnumValue => "enum value",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_keywords() {
        assert_eq!(SemanticType::from_primitive("num"), Some(SemanticType::Number));
        assert_eq!(SemanticType::from_primitive("bool"), Some(SemanticType::Bool));
        assert_eq!(SemanticType::from_primitive("Color"), None);
    }

    #[test]
    fn test_assignment_compatibility() {
        use SemanticType::*;

        assert!(Number.accepts_assignment(Number));
        assert!(EnumVar.accepts_assignment(EnumValue));
        assert!(EnumVar.accepts_assignment(EnumVar));
        assert!(!EnumValue.accepts_assignment(EnumVar));
        assert!(!EnumVar.accepts_assignment(Number));
        assert!(!Bool.accepts_assignment(Number));
    }

    #[test]
    fn test_case_compatibility() {
        use SemanticType::*;

        assert!(EnumVar.accepts_case(EnumValue));
        assert!(!EnumVar.accepts_case(EnumVar));
        assert!(Number.accepts_case(Number));
        assert!(!Number.accepts_case(EnumValue));
    }

    #[test]
    fn test_variable_tags() {
        assert!(SemanticType::EnumVar.is_variable());
        assert!(SemanticType::Number.is_variable());
        assert!(!SemanticType::EnumType.is_variable());
        assert!(!SemanticType::EnumValue.is_variable());
    }
}
