//! Domain Difference Engine and universe compilation.
//!
//! - [`diff`]: the difference domain between two synthesized domains
//! - [`check_acyclic`]: cycle detection over transform requests
//! - [`compile_universe`]: the full pass from declarations to a
//!   [`TypeUniverse`](pig_ir::TypeUniverse)
//!
//! Diffing is a pure function of its two inputs. Domains are looked up
//! through an explicit [`DomainIndex`], never through global state.

mod diff;
mod graph;
mod universe;

pub use diff::{diff, sums_equal, tuples_equal};
pub use graph::check_acyclic;
pub use universe::{compile_universe, CompileOptions, DomainIndex};
