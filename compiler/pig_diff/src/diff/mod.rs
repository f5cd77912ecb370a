//! Domain Difference Engine.
//!
//! Computes the difference domain between a source domain and a destination
//! domain believed to evolve from it. Tags drive the comparison, not shapes:
//! a renamed tuple with an identical shape is a removal plus an addition.
//!
//! - Destination-only tags are emitted as [`Evolution::Added`].
//! - Tags in both domains whose shapes differ are emitted as
//!   [`Evolution::Changed`]. A tag that switched kind (a tuple that became a
//!   sum, a variant that became a top-level tuple, ...) counts as changed.
//! - Unchanged tags are omitted; the renderer supplies identity transforms.
//! - Source-only tags are recorded in [`Transform::removed_tags`] and never
//!   emitted.
//!
//! A sum with an unchanged variant set is itself unchanged. It is still
//! emitted, as `Inherited`, when some of its variants changed shape; it then
//! holds only those variants.

use pig_diagnostic::CompileError;
use pig_ir::{Evolution, Sum, Transform, Tuple, TypeDomain};
use pig_synth::resynthesize_tuple;
use rustc_hash::{FxHashMap, FxHashSet};

/// Compute the transform from `source` to `destination`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(source = %source.tag, destination = %destination.tag)
)]
pub fn diff(source: &TypeDomain, destination: &TypeDomain) -> Result<Transform, CompileError> {
    let src_tuples: FxHashMap<&str, &Tuple> = source
        .tuples
        .iter()
        .map(|t| (t.tag.as_str(), t))
        .collect();
    let src_sums: FxHashMap<&str, &Sum> =
        source.sums.iter().map(|s| (s.tag.as_str(), s)).collect();
    let src_tags = SourceTags(all_tags(source).collect());

    let mut tuples = Vec::new();
    for tuple in &destination.tuples {
        let evolution = match src_tuples.get(tuple.tag.as_str()) {
            None => src_tags.evolution_of(&tuple.tag),
            Some(old) if tuples_equal(old, tuple) => continue,
            Some(_) => Evolution::Changed,
        };
        tuples.push(resynthesize(destination, &tuple.tag, tuple, evolution)?);
    }

    let mut sums = Vec::new();
    for sum in &destination.sums {
        let old = src_sums.get(sum.tag.as_str()).copied();
        if let Some(emitted) = diff_sum(destination, &src_tags, old, sum)? {
            sums.push(emitted);
        }
    }

    let difference = TypeDomain {
        name: format!("{}To{}Difference", source.name, destination.name),
        tag: format!("{}_to_{}", source.tag, destination.tag),
        tuples,
        sums,
    };

    let removed_tags = removed_tags(source, destination);
    check_removed_unreferenced(source, destination, &difference, &removed_tags)?;

    tracing::debug!(
        tuples = difference.tuples.len(),
        sums = difference.sums.len(),
        removed = removed_tags.len(),
        "difference computed"
    );

    Ok(Transform {
        source_domain_difference: difference,
        source_domain_name: source.name.clone(),
        dest_domain_name: destination.name.clone(),
        removed_tags,
    })
}

/// Every tag the source domain defines, whatever its kind.
struct SourceTags<'a>(FxHashSet<&'a str>);

impl SourceTags<'_> {
    /// Evolution of a destination member with no same-kind source
    /// counterpart.
    fn evolution_of(&self, tag: &str) -> Evolution {
        if self.0.contains(tag) {
            Evolution::Changed
        } else {
            Evolution::Added
        }
    }
}

/// Diff one destination sum against its source counterpart, if any.
///
/// Returns `None` when nothing about the sum needs a transform hook.
fn diff_sum(
    destination: &TypeDomain,
    src_tags: &SourceTags<'_>,
    old: Option<&Sum>,
    sum: &Sum,
) -> Result<Option<Sum>, CompileError> {
    let member = |variant: &Tuple| format!("{}.{}", sum.tag, variant.tag);

    let Some(old) = old else {
        let variants = sum
            .variants
            .iter()
            .map(|v| {
                let evolution = src_tags.evolution_of(&v.tag);
                resynthesize(destination, &member(v), v, evolution)
            })
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Some(Sum {
            variants,
            evolution: src_tags.evolution_of(&sum.tag),
            ..sum.clone()
        }));
    };

    let old_variants: FxHashMap<&str, &Tuple> = old
        .variants
        .iter()
        .map(|v| (v.tag.as_str(), v))
        .collect();

    if sums_equal(old, sum) {
        let mut variants = Vec::new();
        for variant in &sum.variants {
            let unchanged = old_variants
                .get(variant.tag.as_str())
                .is_some_and(|o| tuples_equal(o, variant));
            if !unchanged {
                variants.push(resynthesize(
                    destination,
                    &member(variant),
                    variant,
                    Evolution::Changed,
                )?);
            }
        }
        if variants.is_empty() {
            return Ok(None);
        }
        return Ok(Some(Sum {
            variants,
            evolution: Evolution::Inherited,
            ..sum.clone()
        }));
    }

    let variants = sum
        .variants
        .iter()
        .map(|variant| {
            let evolution = match old_variants.get(variant.tag.as_str()) {
                None => src_tags.evolution_of(&variant.tag),
                Some(o) if tuples_equal(o, variant) => Evolution::Inherited,
                Some(_) => Evolution::Changed,
            };
            resynthesize(destination, &member(variant), variant, evolution)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(Sum {
        variants,
        evolution: Evolution::Changed,
        ..sum.clone()
    }))
}

fn resynthesize(
    destination: &TypeDomain,
    member: &str,
    tuple: &Tuple,
    evolution: Evolution,
) -> Result<Tuple, CompileError> {
    resynthesize_tuple(tuple, evolution)
        .map_err(|reason| CompileError::invalid_shape(&destination.tag, member, reason))
}

/// Structural equality of two tuples with the same tag.
///
/// Requires the same construction style and, per property, the same tag,
/// type name, nullability and variadicity, in the same order.
pub fn tuples_equal(a: &Tuple, b: &Tuple) -> bool {
    a.tag == b.tag
        && a.is_record == b.is_record
        && a.properties.len() == b.properties.len()
        && a.properties.iter().zip(&b.properties).all(|(x, y)| {
            x.tag == y.tag
                && x.raw_type_name == y.raw_type_name
                && x.is_nullable == y.is_nullable
                && x.is_variadic == y.is_variadic
        })
}

/// Structural equality of two sums: the same set of variant tags.
pub fn sums_equal(a: &Sum, b: &Sum) -> bool {
    let tags = |s: &Sum| -> FxHashSet<String> {
        s.variants.iter().map(|v| v.tag.clone()).collect()
    };
    a.tag == b.tag && tags(a) == tags(b)
}

/// Every tag the domain defines: tuples, sums and sum variants.
fn all_tags(domain: &TypeDomain) -> impl Iterator<Item = &str> {
    let sums = domain.sums.iter().flat_map(|s| {
        std::iter::once(s.tag.as_str()).chain(s.variants.iter().map(|v| v.tag.as_str()))
    });
    domain.tuples.iter().map(|t| t.tag.as_str()).chain(sums)
}

/// Source tags the destination no longer defines, in source order.
fn removed_tags(source: &TypeDomain, destination: &TypeDomain) -> Vec<String> {
    let kept: FxHashSet<&str> = all_tags(destination).collect();
    all_tags(source)
        .filter(|tag| !kept.contains(tag))
        .map(str::to_owned)
        .collect()
}

/// No emitted member may still name a type the destination removed.
fn check_removed_unreferenced(
    source: &TypeDomain,
    destination: &TypeDomain,
    difference: &TypeDomain,
    removed: &[String],
) -> Result<(), CompileError> {
    if removed.is_empty() {
        return Ok(());
    }
    let removed: FxHashSet<&str> = removed.iter().map(String::as_str).collect();

    let members = difference
        .tuples
        .iter()
        .map(|t| (t.tag.clone(), t))
        .chain(difference.sums.iter().flat_map(|s| {
            s.variants
                .iter()
                .map(move |v| (format!("{}.{}", s.tag, v.tag), v))
        }));

    for (member, tuple) in members {
        if let Some(prop) = tuple
            .properties
            .iter()
            .find(|p| removed.contains(p.raw_type_name.as_str()))
        {
            return Err(CompileError::RemovedTagReferenced {
                source_domain: source.tag.clone(),
                destination_domain: destination.tag.clone(),
                member,
                property: prop.tag.clone(),
                tag: prop.raw_type_name.clone(),
            });
        }
    }
    Ok(())
}
