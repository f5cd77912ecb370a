//! Declarations: the parsed type universe before synthesis.
//!
//! These are the input contract of the core. A producer (the universe
//! parser) builds them; the synthesizer turns each [`DomainDecl`] into a
//! [`TypeDomain`](crate::TypeDomain) and the difference engine runs the
//! [`TransformRequest`]s. Nothing here is validated yet.

/// How many values a property holds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Cardinality {
    /// Exactly one value.
    #[default]
    Required,
    /// Zero or one value. Only legal in trailing position.
    Optional,
    /// Zero or more values. Only legal as the last property.
    Variadic,
}

/// Construction style of a tuple.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TupleKind {
    /// Positional construction only.
    #[default]
    Product,
    /// Keyword-style construction allowed.
    Record,
}

/// A declared property of a tuple.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyDecl {
    pub tag: String,
    /// Type name as written in the universe (`int`, `expr`, ...).
    pub type_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cardinality: Cardinality,
}

impl PropertyDecl {
    pub fn new(tag: impl Into<String>, type_name: impl Into<String>, cardinality: Cardinality) -> Self {
        PropertyDecl {
            tag: tag.into(),
            type_name: type_name.into(),
            cardinality,
        }
    }

    pub fn required(tag: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(tag, type_name, Cardinality::Required)
    }

    pub fn optional(tag: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(tag, type_name, Cardinality::Optional)
    }

    pub fn variadic(tag: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(tag, type_name, Cardinality::Variadic)
    }
}

/// A declared tuple, either top-level or a sum variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TupleDecl {
    pub tag: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: TupleKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Vec<PropertyDecl>,
}

impl TupleDecl {
    /// A positional tuple.
    pub fn product(tag: impl Into<String>, properties: Vec<PropertyDecl>) -> Self {
        TupleDecl {
            tag: tag.into(),
            kind: TupleKind::Product,
            properties,
        }
    }

    /// A tuple that also allows keyword-style construction.
    pub fn record(tag: impl Into<String>, properties: Vec<PropertyDecl>) -> Self {
        TupleDecl {
            tag: tag.into(),
            kind: TupleKind::Record,
            properties,
        }
    }
}

/// A declared sum (tagged union of tuple variants).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SumDecl {
    pub tag: String,
    pub variants: Vec<TupleDecl>,
}

impl SumDecl {
    pub fn new(tag: impl Into<String>, variants: Vec<TupleDecl>) -> Self {
        SumDecl {
            tag: tag.into(),
            variants,
        }
    }
}

/// A declared type domain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainDecl {
    pub tag: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tuples: Vec<TupleDecl>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sums: Vec<SumDecl>,
}

impl DomainDecl {
    pub fn new(tag: impl Into<String>, tuples: Vec<TupleDecl>, sums: Vec<SumDecl>) -> Self {
        DomainDecl {
            tag: tag.into(),
            tuples,
            sums,
        }
    }
}

/// Request to compute the transform from `source` to `destination`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformRequest {
    /// Tag of the domain being transformed from.
    pub source: String,
    /// Tag of the domain being transformed into.
    pub destination: String,
}

impl TransformRequest {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        TransformRequest {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// The whole parsed universe: domains and transform requests, in
/// declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniverseDecl {
    pub domains: Vec<DomainDecl>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub transforms: Vec<TransformRequest>,
}
