//! Domain synthesis: `DomainDecl` → `TypeDomain`.
//!
//! Checks tag uniqueness, resolves property types against the domain's own
//! tags, derives generated names, and runs the Arity Calculator and Builder
//! Synthesizer for every tuple and sum variant.

use pig_diagnostic::{CompileError, ShapeError};
use pig_ir::name::{qualify, to_camel_case, to_pascal_case};
use pig_ir::{
    Cardinality, DomainDecl, Evolution, PrimitiveType, Property, PropertyDecl, PropertyTransform,
    Sum, SumDecl, Tuple, TupleDecl, TupleKind, TypeDomain, TypeRef,
};
use rustc_hash::FxHashMap;

use crate::{compute_arity, synthesize_builders};

/// Names visible to property types inside one domain.
///
/// Maps each tuple, sum and variant tag to its qualified generated name.
pub(crate) struct TypeScope<'a> {
    domain_name: String,
    names: FxHashMap<&'a str, String>,
}

impl<'a> TypeScope<'a> {
    #[cfg(test)]
    pub(crate) fn empty(domain_name: &str) -> Self {
        TypeScope {
            domain_name: domain_name.to_owned(),
            names: FxHashMap::default(),
        }
    }

    /// Index every tag of `decl`, rejecting duplicate tags and distinct tags
    /// that generate the same qualified name.
    fn index(decl: &'a DomainDecl, domain_name: &str) -> Result<Self, CompileError> {
        let mut names: FxHashMap<&'a str, String> = FxHashMap::default();
        let mut owners: FxHashMap<String, &'a str> = FxHashMap::default();
        let mut insert = |tag: &'a str, name: String| {
            if names.contains_key(tag) {
                return Err(CompileError::DuplicateTag {
                    domain: decl.tag.clone(),
                    tag: tag.to_owned(),
                });
            }
            if let Some(first) = owners.insert(name.clone(), tag) {
                return Err(CompileError::NameCollision {
                    domain: decl.tag.clone(),
                    name,
                    first: first.to_owned(),
                    second: tag.to_owned(),
                });
            }
            names.insert(tag, name);
            Ok(())
        };

        for tuple in &decl.tuples {
            insert(tuple.tag.as_str(), qualify(domain_name, &to_pascal_case(&tuple.tag)))?;
        }
        for sum in &decl.sums {
            let sum_name = qualify(domain_name, &to_pascal_case(&sum.tag));
            for variant in &sum.variants {
                insert(variant.tag.as_str(), qualify(&sum_name, &to_pascal_case(&variant.tag)))?;
            }
            insert(sum.tag.as_str(), sum_name)?;
        }

        Ok(TypeScope {
            domain_name: domain_name.to_owned(),
            names,
        })
    }

    /// Resolve a universe type name to its reference and generated name.
    fn resolve(&self, type_name: &str) -> (TypeRef, String) {
        if let Some(prim) = PrimitiveType::from_type_name(type_name) {
            return (TypeRef::Primitive(prim), prim.generated_name().to_owned());
        }
        match self.names.get(type_name) {
            Some(qualified) => (TypeRef::Domain(type_name.to_owned()), qualified.clone()),
            None => (TypeRef::Opaque(type_name.to_owned()), to_pascal_case(type_name)),
        }
    }

    /// Build a synthesized property from its declaration.
    pub(crate) fn property(&self, decl: &PropertyDecl) -> Property {
        let (type_ref, type_name) = self.resolve(&decl.type_name);
        let hook = type_name
            .strip_prefix(&self.domain_name)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(type_name.as_str())
            .replace('.', "");
        Property {
            name: to_camel_case(&decl.tag),
            tag: decl.tag.clone(),
            type_name,
            raw_type_name: decl.type_name.clone(),
            type_ref,
            is_variadic: decl.cardinality == Cardinality::Variadic,
            is_nullable: decl.cardinality == Cardinality::Optional,
            transform: PropertyTransform {
                method: format!("transform{hook}"),
                cardinality: decl.cardinality,
            },
        }
    }
}

/// Synthesize a declared domain.
#[tracing::instrument(level = "debug", skip_all, fields(domain = %decl.tag))]
pub fn synthesize_domain(decl: &DomainDecl) -> Result<TypeDomain, CompileError> {
    let name = to_pascal_case(&decl.tag);
    let scope = TypeScope::index(decl, &name)?;

    let tuples = decl
        .tuples
        .iter()
        .map(|tuple| synthesize_tuple(&scope, &decl.tag, &name, tuple.tag.clone(), tuple))
        .collect::<Result<Vec<_>, _>>()?;

    let sums = decl
        .sums
        .iter()
        .map(|sum| synthesize_sum(&scope, &decl.tag, &name, sum))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        tuples = tuples.len(),
        sums = sums.len(),
        "domain synthesized"
    );

    Ok(TypeDomain {
        name,
        tag: decl.tag.clone(),
        tuples,
        sums,
    })
}

fn synthesize_sum(
    scope: &TypeScope<'_>,
    domain_tag: &str,
    domain_name: &str,
    decl: &SumDecl,
) -> Result<Sum, CompileError> {
    if decl.variants.is_empty() {
        return Err(CompileError::invalid_shape(
            domain_tag,
            &decl.tag,
            ShapeError::EmptySum,
        ));
    }

    let name = to_pascal_case(&decl.tag);
    let sum_type = qualify(domain_name, &name);
    let variants = decl
        .variants
        .iter()
        .map(|variant| {
            let member = format!("{}.{}", decl.tag, variant.tag);
            synthesize_tuple(scope, domain_tag, &sum_type, member, variant)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Sum {
        name,
        tag: decl.tag.clone(),
        base_type: domain_name.to_owned(),
        variants,
        evolution: Evolution::Inherited,
    })
}

/// Synthesize one tuple whose base type is `base_type` (the domain for
/// top-level tuples, the sum for variants). `member` is the tag path used
/// in errors.
fn synthesize_tuple(
    scope: &TypeScope<'_>,
    domain_tag: &str,
    base_type: &str,
    member: String,
    decl: &TupleDecl,
) -> Result<Tuple, CompileError> {
    let shape_error = |reason| CompileError::invalid_shape(domain_tag, &member, reason);

    let properties: Vec<Property> = decl.properties.iter().map(|p| scope.property(p)).collect();
    let arity = compute_arity(&properties).map_err(shape_error)?;
    let name = to_pascal_case(&decl.tag);

    let mut tuple = Tuple {
        constructor_name: qualify(base_type, &name),
        name,
        tag: decl.tag.clone(),
        base_type: base_type.to_owned(),
        has_variadic_element: properties.iter().any(|p| p.is_variadic),
        properties,
        arity,
        builders: Vec::new(),
        is_record: decl.kind == TupleKind::Record,
        evolution: Evolution::Inherited,
    };
    tuple.builders = synthesize_builders(&tuple).map_err(shape_error)?;
    Ok(tuple)
}

/// Recompute arity and builders of an already-synthesized tuple, tagging it
/// with `evolution`.
pub fn resynthesize_tuple(tuple: &Tuple, evolution: Evolution) -> Result<Tuple, ShapeError> {
    let mut out = tuple.clone();
    out.arity = compute_arity(&out.properties)?;
    out.has_variadic_element = out.properties.iter().any(|p| p.is_variadic);
    out.builders = synthesize_builders(&out)?;
    out.evolution = evolution;
    Ok(out)
}
