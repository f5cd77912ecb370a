//! Compile errors.
//!
//! Every error is fatal to the compilation pass. Each carries the domain
//! tag, member tag and property name involved so it can be acted on without
//! re-running the compiler.

use std::fmt;

use crate::ErrorCode;

/// Why a single tuple or sum is malformed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// More than one variadic property.
    #[error("more than one variadic property: `{first}` and `{second}`")]
    MultipleVariadic { first: String, second: String },

    /// A variadic property is followed by another property.
    #[error("variadic property `{property}` must be the last property")]
    VariadicNotLast { property: String },

    /// A required property follows a nullable or variadic one.
    #[error("required property `{property}` follows optional property `{after}`")]
    RequiredAfterOptional { property: String, after: String },

    /// Two properties generate the same parameter name.
    #[error("properties `{first}` and `{second}` both generate the name `{name}`")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    /// The same property tag appears twice.
    #[error("property `{property}` is declared more than once")]
    DuplicateProperty { property: String },

    /// A sum declares no variants.
    #[error("sum declares no variants")]
    EmptySum,
}

impl ShapeError {
    /// The property this error is about, if it is about one.
    pub fn property(&self) -> Option<&str> {
        match self {
            ShapeError::MultipleVariadic { second, .. } => Some(second),
            ShapeError::VariadicNotLast { property }
            | ShapeError::RequiredAfterOptional { property, .. }
            | ShapeError::DuplicateProperty { property } => Some(property),
            ShapeError::NameCollision { second, .. } => Some(second),
            ShapeError::EmptySum => None,
        }
    }
}

/// Which side of a transform request an unknown domain was named on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DomainRole {
    Source,
    Destination,
}

impl fmt::Display for DomainRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainRole::Source => f.write_str("source"),
            DomainRole::Destination => f.write_str("destination"),
        }
    }
}

/// Fatal compilation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A tuple or sum is locally malformed.
    #[error("[E1001] invalid shape of `{member}` in domain `{domain}`: {reason}")]
    InvalidShape {
        domain: String,
        /// Tag of the tuple or sum; variants are written `sum.variant`.
        member: String,
        reason: ShapeError,
    },

    /// Two members of one domain share a tag.
    #[error("[E2001] tag `{tag}` is declared more than once in domain `{domain}`")]
    DuplicateTag { domain: String, tag: String },

    /// Two domains share a tag.
    #[error("[E2002] domain `{tag}` is declared more than once")]
    DuplicateDomain { tag: String },

    /// Two distinct tags of one domain generate the same name.
    #[error(
        "[E2003] tags `{first}` and `{second}` in domain `{domain}` both generate `{name}`"
    )]
    NameCollision {
        domain: String,
        name: String,
        first: String,
        second: String,
    },

    /// A transform request names a domain that does not exist.
    #[error("[E3001] unknown {role} domain `{tag}`")]
    UnknownDomain { tag: String, role: DomainRole },

    /// The transform graph makes a domain its own ancestor.
    #[error("[E3002] cyclic transform chain: {}", .chain.join(" -> "))]
    CyclicTransform {
        /// Domain tags along the cycle; first and last are the same.
        chain: Vec<String>,
    },

    /// A changed destination member still references a tag the destination
    /// removed.
    #[error(
        "[E3003] `{member}.{property}` in transform `{source_domain}` -> `{destination_domain}` references removed tag `{tag}`"
    )]
    RemovedTagReferenced {
        source_domain: String,
        destination_domain: String,
        member: String,
        property: String,
        tag: String,
    },
}

impl CompileError {
    pub fn invalid_shape(
        domain: impl Into<String>,
        member: impl Into<String>,
        reason: ShapeError,
    ) -> Self {
        CompileError::InvalidShape {
            domain: domain.into(),
            member: member.into(),
            reason,
        }
    }

    /// The error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::InvalidShape { .. } => ErrorCode::E1001,
            CompileError::DuplicateTag { .. } => ErrorCode::E2001,
            CompileError::DuplicateDomain { .. } => ErrorCode::E2002,
            CompileError::NameCollision { .. } => ErrorCode::E2003,
            CompileError::UnknownDomain { .. } => ErrorCode::E3001,
            CompileError::CyclicTransform { .. } => ErrorCode::E3002,
            CompileError::RemovedTagReferenced { .. } => ErrorCode::E3003,
        }
    }
}
