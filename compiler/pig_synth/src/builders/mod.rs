//! Builder Synthesizer.
//!
//! Produces the ordered overload set of construction entry points for a
//! tuple:
//!
//! 1. A baseline builder taking every property positionally; a variadic
//!    property becomes a repeated parameter.
//! 2. One shorter builder per omittable suffix of the trailing nullable run,
//!    longest first. Omitted nullable properties are wired to
//!    [`ArgumentValue::Absent`] and an omitted variadic to
//!    [`ArgumentValue::Empty`].
//!
//! Every bounded arity of the tuple is thereby reachable through exactly one
//! fixed parameter list.

use pig_diagnostic::ShapeError;
use pig_ir::name::to_camel_case;
use pig_ir::{ArgumentValue, BuilderFunction, ConstructorArgument, Parameter, Property, Tuple};
use rustc_hash::{FxHashMap, FxHashSet};

/// Synthesize every builder for `tuple`, baseline first.
pub fn synthesize_builders(tuple: &Tuple) -> Result<Vec<BuilderFunction>, ShapeError> {
    check_names(&tuple.properties)?;

    let name = to_camel_case(&tuple.tag);
    let props = &tuple.properties;

    // Properties before a trailing variadic are the only ones a shorter
    // builder can omit.
    let fixed_len = match props.last() {
        Some(last) if last.is_variadic => props.len() - 1,
        _ => props.len(),
    };
    let nullable_run = props[..fixed_len]
        .iter()
        .rev()
        .take_while(|p| p.is_nullable && !p.is_variadic)
        .count();

    let mut builders = Vec::with_capacity(1 + nullable_run);
    builders.push(baseline(&name, tuple));
    for omitted in 1..=nullable_run {
        builders.push(shortened(&name, props, fixed_len - omitted));
    }
    Ok(builders)
}

/// Parameter and argument names come from property names; they must be
/// unique within the tuple.
fn check_names(props: &[Property]) -> Result<(), ShapeError> {
    let mut tags: FxHashSet<&str> = FxHashSet::default();
    let mut by_name: FxHashMap<&str, &str> = FxHashMap::default();

    for prop in props {
        if !tags.insert(prop.tag.as_str()) {
            return Err(ShapeError::DuplicateProperty {
                property: prop.tag.clone(),
            });
        }
        if let Some(first) = by_name.insert(prop.name.as_str(), prop.tag.as_str()) {
            return Err(ShapeError::NameCollision {
                name: prop.name.clone(),
                first: first.to_owned(),
                second: prop.tag.clone(),
            });
        }
    }
    Ok(())
}

fn baseline(name: &str, tuple: &Tuple) -> BuilderFunction {
    let parameters = tuple
        .properties
        .iter()
        .map(|p| Parameter {
            name: p.name.clone(),
            type_name: p.type_name.clone(),
            default_value: if tuple.is_record {
                omitted_value(p)
            } else {
                None
            },
            is_variadic: p.is_variadic,
        })
        .collect();

    let constructor_arguments = tuple
        .properties
        .iter()
        .map(|p| ConstructorArgument {
            name: p.name.clone(),
            value: ArgumentValue::Parameter(p.name.clone()),
        })
        .collect();

    BuilderFunction {
        name: name.to_owned(),
        parameters,
        constructor_arguments,
    }
}

/// Builder taking only the first `kept` properties.
fn shortened(name: &str, props: &[Property], kept: usize) -> BuilderFunction {
    let parameters = props[..kept]
        .iter()
        .map(|p| Parameter {
            name: p.name.clone(),
            type_name: p.type_name.clone(),
            default_value: None,
            is_variadic: false,
        })
        .collect();

    let constructor_arguments = props
        .iter()
        .enumerate()
        .map(|(i, p)| ConstructorArgument {
            name: p.name.clone(),
            value: if i < kept {
                ArgumentValue::Parameter(p.name.clone())
            } else {
                omitted_value(p).unwrap_or(ArgumentValue::Absent)
            },
        })
        .collect();

    BuilderFunction {
        name: name.to_owned(),
        parameters,
        constructor_arguments,
    }
}

/// Value standing in for an omitted property; required properties have
/// none.
fn omitted_value(prop: &Property) -> Option<ArgumentValue> {
    if prop.is_variadic {
        Some(ArgumentValue::Empty)
    } else if prop.is_nullable {
        Some(ArgumentValue::Absent)
    } else {
        None
    }
}

#[cfg(test)]
mod tests;
