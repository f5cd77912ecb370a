//! PIG IR - Domain Model Types
//!
//! This crate contains the data structures shared by every pass of the
//! domain compiler:
//! - Declarations: the already-parsed type universe handed to the core
//! - Domain model: synthesized domains, tuples, sums and properties
//! - Builders: synthesized construction entry points for tuples
//! - Arity ranges and naming rules
//!
//! # Design Philosophy
//!
//! - **Immutable**: every value is built once, bottom-up, and never revised
//! - **Structured output**: renderers receive ranges and tagged variants, not
//!   pre-flattened text
//! - **Deterministic**: all collections are `Vec`s in declaration order
//!
//! With the `serde` feature enabled, declarations deserialize from and the
//! model serializes to any serde format.

mod arity;
mod builder;
pub mod decl;
mod model;
pub mod name;

pub use arity::{Arity, MaxArity};
pub use builder::{ArgumentValue, BuilderFunction, ConstructorArgument, Parameter};
pub use decl::{
    Cardinality, DomainDecl, PropertyDecl, SumDecl, TransformRequest, TupleDecl, TupleKind,
    UniverseDecl,
};
pub use model::{
    Evolution, PrimitiveType, Property, PropertyTransform, Sum, Transform, Tuple, TypeDomain,
    TypeRef, TypeUniverse,
};
