//! Arity Calculator and Builder Synthesizer.
//!
//! Turns declared domains into synthesized [`TypeDomain`](pig_ir::TypeDomain)s:
//! - [`compute_arity`]: legal positional argument range of a tuple
//! - [`synthesize_builders`]: ordered builder overloads of a tuple
//! - [`synthesize_domain`]: a whole domain, with tag checks and type
//!   resolution
//!
//! All functions are pure; the same declaration always yields the same
//! output.

mod arity;
mod builders;
mod domain;

#[cfg(test)]
mod test_support;

pub use arity::compute_arity;
pub use builders::synthesize_builders;
pub use domain::{resynthesize_tuple, synthesize_domain};
