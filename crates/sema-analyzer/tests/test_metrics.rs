//! End-to-end metric tests over complete programs.

mod common;
use common::metrics_of;
use sema_analyzer::{Analyzer, analyze};
use sema_ast::ComparisonOp::{Equal, GreaterEqual};
use sema_ast::Node;
use sema_ast::build::*;

/// ```text
/// enum Color { Red, Green, Blue }
/// num a; bool done; Color c;
/// a = 1 + 2 * 3;
/// while (!done) {
///     a = -a;
///     if (a >= 10) { done = true; }
/// }
/// c = Blue;
/// switch (c) { case Red: case Blue: }
/// done = done || a == 3;
/// ```
fn sample_program() -> Node {
    program([
        enum_stmt("Color", &["Red", "Green", "Blue"]),
        declaration("num", "a"),
        declaration("bool", "done"),
        enum_declaration("Color", "c"),
        stmt(assign("a", expr(add([int(1), mul([int(2), int(3)])])))),
        stmt(while_stmt(
            expr(not(var("done"))),
            [block([
                stmt(assign("a", expr(negate(var("a"))))),
                stmt(if_stmt(
                    expr(compare(GreaterEqual, var("a"), int(10))),
                    [block([stmt(assign("done", expr(boolean(true))))])],
                )),
            ])],
        )),
        stmt(assign("c", expr(var("Blue")))),
        stmt(switch("c", [case(ident("Red"), []), case(ident("Blue"), [])])),
        stmt(assign(
            "done",
            expr(bool_chain(
                &["||"],
                [var("done"), compare(Equal, var("a"), int(3))],
            )),
        )),
    ])
}

#[test]
fn test_sample_program_metrics() {
    let metrics = metrics_of(&sample_program());
    insta::assert_snapshot!(metrics, @"{VAR:3, WHILE:1, IF:1, ENUM_VALUES:3, OP:7}");
}

#[test]
fn test_independent_runs_agree() {
    let tree = sample_program();
    let first = analyze(&tree).unwrap();
    let second = analyze(&tree).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_analyzer_keeps_run_state() {
    let mut analyzer = Analyzer::new();
    let metrics = analyzer.check_program(&sample_program()).unwrap();

    assert_eq!(analyzer.metrics(), metrics);
    // Color, Red, Green, Blue, a, done, c
    assert_eq!(analyzer.symbols().len(), 7);
}

#[test]
fn test_failed_run_does_not_leak() {
    let broken = program([declaration("num", "a"), declaration("bool", "a")]);
    assert!(analyze(&broken).is_err());

    let metrics = metrics_of(&program([declaration("num", "a")]));
    assert_eq!(metrics.variables, 1);
}
