//! Enum declaration and enum-typed variable tests.

mod common;
use common::{metrics_of, semantic_error, should_pass};
use sema_ast::build::*;
use sema_core::SemanticError;

fn color_program(statements: impl IntoIterator<Item = sema_ast::Node>) -> sema_ast::Node {
    program(
        [
            enum_stmt("Color", &["Red", "Green", "Blue"]),
            enum_declaration("Color", "c"),
        ]
        .into_iter()
        .chain(statements),
    )
}

#[test]
fn test_enum_values_counted() {
    let metrics = metrics_of(&color_program([]));
    assert_eq!(metrics.enum_values, 3);
    // Only `c` is a variable
    assert_eq!(metrics.variables, 1);
}

#[test]
fn test_assign_enum_value() {
    let tree = color_program([stmt(assign("c", expr(var("Red"))))]);
    assert!(should_pass(&tree));
}

#[test]
fn test_assign_number_to_enum_variable() {
    let tree = color_program([stmt(assign("c", expr(int(1))))]);
    let err = semantic_error(&tree);
    insta::assert_snapshot!(err, @"Invalid type in assignation of Identifier c");
}

#[test]
fn test_assign_enum_variable_to_enum_variable() {
    let tree = color_program([
        enum_declaration("Color", "d"),
        stmt(assign("d", expr(var("c")))),
    ]);
    assert!(should_pass(&tree));
}

#[test]
fn test_assign_enum_value_to_number() {
    let tree = color_program([
        declaration("num", "n"),
        stmt(assign("n", expr(var("Green")))),
    ]);
    assert_eq!(
        semantic_error(&tree),
        SemanticError::InvalidAssignmentType {
            name: "n".to_string()
        }
    );
}

#[test]
fn test_enum_values_share_the_namespace() {
    let tree = program([enum_stmt("Light", &["On", "Off"]), enum_stmt("Switch", &["On"])]);
    assert_eq!(
        semantic_error(&tree),
        SemanticError::MultipleDeclaration {
            name: "On".to_string()
        }
    );

    let tree = program([enum_stmt("Color", &["Red"]), declaration("num", "Color")]);
    assert_eq!(
        semantic_error(&tree),
        SemanticError::MultipleDeclaration {
            name: "Color".to_string()
        }
    );

    let tree = program([declaration("bool", "Red"), enum_stmt("Color", &["Red"])]);
    assert!(matches!(
        semantic_error(&tree),
        SemanticError::MultipleDeclaration { .. }
    ));
}

#[test]
fn test_enum_value_repeated_in_one_enum() {
    let tree = program([enum_stmt("Color", &["Red", "Red"])]);
    assert!(matches!(
        semantic_error(&tree),
        SemanticError::MultipleDeclaration { .. }
    ));
}

#[test]
fn test_enum_without_values() {
    let metrics = metrics_of(&program([enum_stmt("Empty", &[])]));
    assert_eq!(metrics.enum_values, 0);
    assert_eq!(metrics.variables, 0);
}

#[test]
fn test_enum_values_across_declarations() {
    let tree = program([
        enum_stmt("Color", &["Red", "Green"]),
        enum_stmt("Size", &["Small", "Medium", "Large"]),
    ]);
    assert_eq!(metrics_of(&tree).enum_values, 5);
}
