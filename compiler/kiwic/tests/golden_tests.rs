// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Golden tests for the Kiwi driver.
//!
//! Each `tests/golden/<name>.json` is an ESTree program; the rendered result
//! line must equal `tests/golden/<name>.expected`.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use kiwi_eval::{EvalConfig, EvalErrorKind};
use kiwi_ir::InputError;
use kiwic::{evaluate_source, CliError};

fn golden_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
}

/// All `.json` fixtures, sorted for stable failure output.
fn find_fixtures(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|e| e == "json"))
        .collect();
    files.sort();
    files
}

fn run_golden_test(path: &Path) -> Result<(), String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let expected_path = path.with_extension("expected");
    let expected = fs::read_to_string(&expected_path)
        .map_err(|e| format!("Failed to read {}: {e}", expected_path.display()))?;

    let outcome = evaluate_source(&source, EvalConfig::default())
        .map_err(|e| format!("{}: {e}", path.display()))?;

    let actual = outcome.to_string();
    if actual != expected.trim_end() {
        return Err(format!(
            "Output mismatch for {}:\n--- Expected ---\n{}\n--- Got ---\n{actual}\n",
            path.display(),
            expected.trim_end(),
        ));
    }
    Ok(())
}

#[test]
fn golden_programs() {
    let files = find_fixtures(&golden_dir());
    assert!(!files.is_empty(), "no golden fixtures found");

    let failures: Vec<String> = files
        .iter()
        .filter_map(|path| run_golden_test(path).err())
        .collect();
    assert!(
        failures.is_empty(),
        "{} of {} golden tests failed:\n\n{}",
        failures.len(),
        files.len(),
        failures.join("\n")
    );
}

#[test]
fn golden_programs_are_idempotent() {
    for path in find_fixtures(&golden_dir()) {
        let source = fs::read_to_string(&path).unwrap();
        let first = evaluate_source(&source, EvalConfig::default()).unwrap();
        let second = evaluate_source(&source, EvalConfig::default()).unwrap();
        assert_eq!(first.to_string(), second.to_string(), "{}", path.display());
    }
}

// Driver-level failures

#[test]
fn unknown_node_type_is_malformed_input() {
    let source = r#"{"type": "Program", "body": [
        {"type": "ExpressionStatement", "expression": {"type": "ArrayExpression", "elements": []}}
    ]}"#;
    let err = evaluate_source(source, EvalConfig::default()).unwrap_err();
    assert!(matches!(err, CliError::Input(_)), "{err}");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn shape_errors_do_not_trigger_garbage_skipping() {
    // The outer object is valid JSON but not a program. The inner program
    // object is not retried.
    let source = r#"{"wrapper": {"type": "Program", "body": []}}"#;
    let err = evaluate_source(source, EvalConfig::default()).unwrap_err();
    assert!(matches!(err, CliError::Input(_)), "{err}");
}

#[test]
fn unary_minus_is_a_rendered_error() {
    let source = r#"{"type": "Program", "body": [{"type": "ExpressionStatement",
        "expression": {"type": "UnaryExpression", "operator": "-", "prefix": true,
                       "argument": {"type": "Literal", "value": 1, "raw": "1"}}}]}"#;
    let outcome = evaluate_source(source, EvalConfig::default()).unwrap();
    assert_eq!(outcome.to_string(), "(error \"invalid unary type banana\")");
}

#[test]
fn unsupported_binary_operator_is_malformed_input() {
    let source = r#"{"type": "Program", "body": [{"type": "ExpressionStatement",
        "expression": {"type": "BinaryExpression", "operator": "%",
                       "left": {"type": "Literal", "value": 7, "raw": "7"},
                       "right": {"type": "Literal", "value": 2, "raw": "2"}}}]}"#;
    let err = evaluate_source(source, EvalConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "unsupported binary operator `%`");
    assert_eq!(err.exit_code(), 1);
}

/// `1 + 1 + ... + 1` with `terms` ones, nested to the left as an ESTree
/// parser emits it.
fn sum_of_ones(terms: usize) -> String {
    let one = r#"{"type": "Literal", "value": 1, "raw": "1"}"#;
    let open = r#"{"type": "BinaryExpression", "operator": "+", "left": "#;
    let close = format!(r#", "right": {one}}}"#);
    let expr = format!(
        "{}{one}{}",
        open.repeat(terms - 1),
        close.repeat(terms - 1)
    );
    format!(
        r#"{{"type": "Program", "body": [{{"type": "ExpressionStatement", "expression": {expr}}}]}}"#
    )
}

#[test]
fn deeply_nested_expression_evaluates() {
    for terms in [124, 125, 200, 1500] {
        let outcome = evaluate_source(&sum_of_ones(terms), EvalConfig::default()).unwrap();
        assert_eq!(outcome.to_string(), format!("(value (number {terms}))"));
    }
}

#[test]
fn nesting_past_the_limit_is_fatal() {
    let err = evaluate_source(&sum_of_ones(3000), EvalConfig::default()).unwrap_err();
    assert!(
        matches!(err, CliError::Input(InputError::NestingTooDeep { .. })),
        "{err}"
    );
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn call_depth_limit_is_fatal() {
    let source = fs::read_to_string(golden_dir().join("fibonacci.json")).unwrap();
    let err = evaluate_source(&source, EvalConfig::default().with_max_call_depth(Some(3)))
        .unwrap_err();
    let CliError::Eval(eval) = &err else {
        panic!("expected an evaluation fault, got {err}");
    };
    assert_eq!(eval.kind, EvalErrorKind::RecursionLimit { limit: 3 });
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn unlimited_depth_runs_to_completion() {
    let source = fs::read_to_string(golden_dir().join("fibonacci.json")).unwrap();
    let outcome = evaluate_source(&source, EvalConfig::unbounded()).unwrap();
    assert_eq!(outcome.to_string(), "(value (number 610))");
}
