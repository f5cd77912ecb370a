#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pig_diagnostic::{CompileError, ErrorCode};
use pretty_assertions::assert_eq;

const DEMO: &str = include_str!("../../../../demos/toy_universe.json");

fn compile(input: &str) -> Result<serde_json::Value, DriverError> {
    let json = compile_json(input, &CompileOptions::sequential(), false)?;
    Ok(serde_json::from_str(&json).unwrap())
}

#[test]
fn demo_universe_compiles() {
    let universe = compile(DEMO).unwrap();

    let domains = universe["domains"].as_array().unwrap();
    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0]["name"], "Toy");

    let transform = &universe["transforms"][0];
    assert_eq!(transform["source_domain_name"], "Toy");
    assert_eq!(transform["dest_domain_name"], "ToyIndexed");

    let difference = &transform["source_domain_difference"];
    assert_eq!(difference["name"], "ToyToToyIndexedDifference");
    assert_eq!(difference["tuples"].as_array().unwrap().len(), 0);

    let expr = &difference["sums"][0];
    assert_eq!(expr["evolution"], "inherited");
    assert_eq!(expr["variants"][0]["tag"], "variable");
    assert_eq!(expr["variants"][0]["evolution"], "changed");
}

#[test]
fn output_is_newline_terminated() {
    let compact = compile_json(DEMO, &CompileOptions::default(), false).unwrap();
    let pretty = compile_json(DEMO, &CompileOptions::default(), true).unwrap();
    assert!(compact.ends_with('\n'));
    assert_eq!(compact.lines().count(), 1);
    assert!(pretty.lines().count() > 1);

    let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
    let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(a, b);
}

#[test]
fn cardinality_defaults_to_required() {
    let universe = compile(
        r#"{"domains": [{"tag": "d", "tuples": [{"tag": "t", "properties": [
            {"tag": "x", "type_name": "int"}
        ]}]}]}"#,
    )
    .unwrap();
    let tuple = &universe["domains"][0]["tuples"][0];
    assert_eq!(tuple["properties"][0]["is_nullable"], false);
    assert_eq!(tuple["properties"][0]["is_variadic"], false);
    assert_eq!(universe["transforms"].as_array().unwrap().len(), 0);
}

#[test]
fn malformed_json_is_an_io_class_error() {
    let err = compile("{\"domains\": [").unwrap_err();
    assert!(matches!(err, DriverError::Parse(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn compile_error_passes_through() {
    let err = compile(
        r#"{"domains": [{"tag": "d"}], "transforms": [{"source": "d", "destination": "e"}]}"#,
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), 1);
    let DriverError::Compile(inner) = &err else {
        panic!("expected a compile error, got {err}");
    };
    assert_eq!(inner.code(), ErrorCode::E3001);
    assert!(matches!(inner, CompileError::UnknownDomain { .. }));
    assert_eq!(err.to_string(), "[E3001] unknown destination domain `e`");
}

#[test]
fn io_errors_name_the_path() {
    let missing = Path::new("/nonexistent/pigc/universe.json");
    let err = read_input(Some(missing)).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("universe.json"), "{err}");
}
