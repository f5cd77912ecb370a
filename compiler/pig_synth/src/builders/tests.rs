#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::test_support::{optional, required, tuple, variadic};
use pig_ir::Arity;
use pretty_assertions::assert_eq;

fn param_names(builder: &BuilderFunction) -> Vec<&str> {
    builder.parameters.iter().map(|p| p.name.as_str()).collect()
}

fn arg_values(builder: &BuilderFunction) -> Vec<&ArgumentValue> {
    builder
        .constructor_arguments
        .iter()
        .map(|a| &a.value)
        .collect()
}

#[test]
fn all_required_gets_only_baseline() {
    let t = tuple(
        "plus",
        vec![required("left", "expr"), required("right", "expr")],
        false,
    );
    let builders = synthesize_builders(&t).unwrap();
    assert_eq!(builders.len(), 1);
    assert_eq!(builders[0].name, "plus");
    assert_eq!(param_names(&builders[0]), vec!["left", "right"]);
    assert_eq!(builders[0].arity(), Arity::exact(2));
}

#[test]
fn two_trailing_nullables_cover_every_arity() {
    let t = tuple(
        "select_item",
        vec![
            required("expr", "expr"),
            required("as_name", "symbol"),
            optional("at_name", "symbol"),
            optional("by_name", "symbol"),
        ],
        false,
    );
    assert_eq!(t.arity, Arity::bounded(2, 4));

    let builders = synthesize_builders(&t).unwrap();
    assert_eq!(builders.len(), 3);

    let arities: Vec<_> = builders.iter().map(BuilderFunction::arity).collect();
    assert_eq!(
        arities,
        vec![Arity::exact(4), Arity::exact(3), Arity::exact(2)]
    );
    for builder in &builders {
        assert_eq!(builder.name, "selectItem");
        assert!(t.arity.contains(builder.parameters.len()));
    }

    assert_eq!(
        param_names(&builders[1]),
        vec!["expr", "asName", "atName"]
    );
    assert_eq!(
        arg_values(&builders[2]),
        vec![
            &ArgumentValue::Parameter("expr".into()),
            &ArgumentValue::Parameter("asName".into()),
            &ArgumentValue::Absent,
            &ArgumentValue::Absent,
        ]
    );
}

#[test]
fn variadic_becomes_repeated_parameter() {
    let t = tuple(
        "call",
        vec![required("name", "symbol"), variadic("args", "expr")],
        false,
    );
    let builders = synthesize_builders(&t).unwrap();
    assert_eq!(builders.len(), 1);

    let args = &builders[0].parameters[1];
    assert!(args.is_variadic);
    assert_eq!(args.default_value, None);
    assert_eq!(builders[0].arity(), Arity::at_least(1));
}

#[test]
fn nullable_run_before_variadic_omits_both() {
    let t = tuple(
        "call",
        vec![
            required("name", "symbol"),
            optional("set_quantifier", "symbol"),
            variadic("args", "expr"),
        ],
        false,
    );
    let builders = synthesize_builders(&t).unwrap();
    assert_eq!(builders.len(), 2);

    let short = &builders[1];
    assert_eq!(param_names(short), vec!["name"]);
    assert_eq!(
        arg_values(short),
        vec![
            &ArgumentValue::Parameter("name".into()),
            &ArgumentValue::Absent,
            &ArgumentValue::Empty,
        ]
    );
}

#[test]
fn record_baseline_carries_defaults() {
    let t = tuple(
        "options",
        vec![
            required("name", "symbol"),
            optional("limit", "int"),
            variadic("tags", "symbol"),
        ],
        true,
    );
    let builders = synthesize_builders(&t).unwrap();
    let defaults: Vec<_> = builders[0]
        .parameters
        .iter()
        .map(|p| p.default_value.clone())
        .collect();
    assert_eq!(
        defaults,
        vec![None, Some(ArgumentValue::Absent), Some(ArgumentValue::Empty)]
    );

    // Shorter forms stay positional.
    assert!(builders[1..]
        .iter()
        .flat_map(|b| &b.parameters)
        .all(|p| p.default_value.is_none()));
}

#[test]
fn parameter_types_follow_property_types() {
    let t = tuple("lit", vec![required("value", "ion")], false);
    let builders = synthesize_builders(&t).unwrap();
    assert_eq!(builders[0].parameters[0].type_name, "IonElement");
}

#[test]
fn colliding_generated_names_are_rejected() {
    let t = tuple(
        "weird",
        vec![required("foo_bar", "int"), required("foo__bar", "int")],
        false,
    );
    assert_eq!(
        synthesize_builders(&t),
        Err(ShapeError::NameCollision {
            name: "fooBar".into(),
            first: "foo_bar".into(),
            second: "foo__bar".into(),
        })
    );
}

#[test]
fn duplicate_property_tags_are_rejected() {
    let t = tuple(
        "twice",
        vec![required("x", "int"), required("x", "symbol")],
        false,
    );
    assert_eq!(
        synthesize_builders(&t),
        Err(ShapeError::DuplicateProperty {
            property: "x".into()
        })
    );
}

#[test]
fn synthesis_is_deterministic() {
    let t = tuple(
        "thing",
        vec![required("a", "int"), optional("b", "int"), optional("c", "int")],
        false,
    );
    assert_eq!(synthesize_builders(&t), synthesize_builders(&t));
}
