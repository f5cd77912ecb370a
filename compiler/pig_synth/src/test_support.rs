//! Shorthand for building properties and tuples in unit tests.

use pig_ir::{Arity, Evolution, Property, PropertyDecl, Tuple};

use crate::domain::TypeScope;

pub(crate) fn required(tag: &str, ty: &str) -> Property {
    TypeScope::empty("Test").property(&PropertyDecl::required(tag, ty))
}

pub(crate) fn optional(tag: &str, ty: &str) -> Property {
    TypeScope::empty("Test").property(&PropertyDecl::optional(tag, ty))
}

pub(crate) fn variadic(tag: &str, ty: &str) -> Property {
    TypeScope::empty("Test").property(&PropertyDecl::variadic(tag, ty))
}

/// A tuple with no builders yet; the arity is computed if the shape is
/// legal.
pub(crate) fn tuple(tag: &str, properties: Vec<Property>, is_record: bool) -> Tuple {
    let arity = crate::compute_arity(&properties).unwrap_or(Arity::exact(0));
    Tuple {
        name: pig_ir::name::to_pascal_case(tag),
        tag: tag.to_owned(),
        constructor_name: format!("Test.{}", pig_ir::name::to_pascal_case(tag)),
        base_type: "Test".to_owned(),
        has_variadic_element: properties.iter().any(|p| p.is_variadic),
        properties,
        arity,
        builders: Vec::new(),
        is_record,
        evolution: Evolution::Inherited,
    }
}
