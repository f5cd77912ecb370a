//! Arity Calculator.
//!
//! Computes the legal range of positional argument counts for a tuple from
//! its ordered properties:
//! - required: contributes 1 to both bounds
//! - nullable: contributes 0 to the minimum, 1 to the maximum
//! - variadic: contributes 0 to the minimum, makes the maximum unbounded
//!
//! Nullable properties may only appear in trailing position, and a single
//! variadic property may only appear last.

use pig_diagnostic::ShapeError;
use pig_ir::{Arity, MaxArity, Property};

/// Compute the arity range of a tuple with the given properties.
pub fn compute_arity(properties: &[Property]) -> Result<Arity, ShapeError> {
    let mut min = 0usize;
    let mut max = 0usize;
    let mut first_optional: Option<&str> = None;
    let mut variadic: Option<&str> = None;

    for prop in properties {
        if let Some(var) = variadic {
            return Err(if prop.is_variadic {
                ShapeError::MultipleVariadic {
                    first: var.to_owned(),
                    second: prop.tag.clone(),
                }
            } else {
                ShapeError::VariadicNotLast {
                    property: var.to_owned(),
                }
            });
        }

        if prop.is_variadic {
            variadic = Some(&prop.tag);
        } else if prop.is_nullable {
            first_optional.get_or_insert(&prop.tag);
            max += 1;
        } else {
            if let Some(after) = first_optional {
                return Err(ShapeError::RequiredAfterOptional {
                    property: prop.tag.clone(),
                    after: after.to_owned(),
                });
            }
            min += 1;
            max += 1;
        }
    }

    Ok(Arity {
        min,
        max: if variadic.is_some() {
            MaxArity::Unbounded
        } else {
            MaxArity::Bounded(max)
        },
    })
}
