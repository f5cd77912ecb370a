//! Synthesized domain model.
//!
//! This is the output contract handed to the renderer: fully resolved
//! domains (arities and builders computed) and transforms. The renderer
//! performs text substitution only and never re-derives structural facts
//! from these values.

use crate::{Arity, BuilderFunction, Cardinality};

/// Builtin primitive types every domain can reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrimitiveType {
    Int,
    Symbol,
    Ion,
    Bool,
    String,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 5] = [
        PrimitiveType::Int,
        PrimitiveType::Symbol,
        PrimitiveType::Ion,
        PrimitiveType::Bool,
        PrimitiveType::String,
    ];

    /// Look up a primitive by its universe type name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.type_name() == name)
    }

    /// Name as written in a type universe.
    pub const fn type_name(self) -> &'static str {
        match self {
            PrimitiveType::Int => "int",
            PrimitiveType::Symbol => "symbol",
            PrimitiveType::Ion => "ion",
            PrimitiveType::Bool => "bool",
            PrimitiveType::String => "string",
        }
    }

    /// Name of the wrapper type in generated code.
    pub const fn generated_name(self) -> &'static str {
        match self {
            PrimitiveType::Int => "LongPrimitive",
            PrimitiveType::Symbol => "SymbolPrimitive",
            PrimitiveType::Ion => "IonElement",
            PrimitiveType::Bool => "BoolPrimitive",
            PrimitiveType::String => "StringPrimitive",
        }
    }
}

/// What a property's declared type refers to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TypeRef {
    /// A builtin primitive.
    Primitive(PrimitiveType),
    /// A tuple or sum of the same domain, by tag.
    Domain(String),
    /// A name this domain does not define; passed through untouched.
    Opaque(String),
}

impl TypeRef {
    /// The domain tag referenced, if any.
    pub fn domain_tag(&self) -> Option<&str> {
        match self {
            TypeRef::Domain(tag) => Some(tag),
            TypeRef::Primitive(_) | TypeRef::Opaque(_) => None,
        }
    }
}

/// How the renderer transforms a property's value.
///
/// `method` names the per-type transform hook (`transformExpr`,
/// `transformLongPrimitive`, ...); the cardinality tells whether it is
/// applied once, to an optional value, or to each repetition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyTransform {
    pub method: String,
    pub cardinality: Cardinality,
}

/// A property of a synthesized tuple.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    /// Generated name, `camelCase`.
    pub name: String,
    /// Name as defined in the type universe.
    pub tag: String,
    /// Qualified generated type name.
    pub type_name: String,
    /// Type name as written in the type universe.
    pub raw_type_name: String,
    pub type_ref: TypeRef,
    pub is_variadic: bool,
    pub is_nullable: bool,
    pub transform: PropertyTransform,
}

impl Property {
    pub fn cardinality(&self) -> Cardinality {
        match (self.is_variadic, self.is_nullable) {
            (true, _) => Cardinality::Variadic,
            (false, true) => Cardinality::Optional,
            (false, false) => Cardinality::Required,
        }
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        !self.is_variadic && !self.is_nullable
    }
}

/// How a member of a domain relates to the domain it evolved from.
///
/// Members of ordinary domains are `Inherited`. Inside a difference domain,
/// `Added` and `Changed` members need a caller-supplied transform; an
/// `Inherited` member is only emitted when it contains one that does.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Evolution {
    #[default]
    Inherited,
    Added,
    Changed,
}

impl Evolution {
    /// Whether the generated transform hook must be left abstract.
    pub const fn is_transform_abstract(self) -> bool {
        match self {
            Evolution::Inherited => false,
            Evolution::Added | Evolution::Changed => true,
        }
    }
}

/// A synthesized record type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple {
    /// Generated name, `PascalCase`.
    pub name: String,
    /// Name as defined in the type universe.
    pub tag: String,
    /// Fully qualified constructor identity.
    pub constructor_name: String,
    /// Identity of the base type (domain or owning sum).
    pub base_type: String,
    pub properties: Vec<Property>,
    pub arity: Arity,
    pub builders: Vec<BuilderFunction>,
    /// Keyword-style construction allowed.
    pub is_record: bool,
    pub evolution: Evolution,
    pub has_variadic_element: bool,
}

impl Tuple {
    #[inline]
    pub fn is_transform_abstract(&self) -> bool {
        self.evolution.is_transform_abstract()
    }

    /// Tags of domain types this tuple's properties reference.
    pub fn referenced_tags(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().filter_map(|p| p.type_ref.domain_tag())
    }
}

/// A synthesized tagged union.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum {
    /// Generated name, `PascalCase`.
    pub name: String,
    /// Name as defined in the type universe.
    pub tag: String,
    /// Identity of the base type (the domain).
    pub base_type: String,
    pub variants: Vec<Tuple>,
    pub evolution: Evolution,
}

impl Sum {
    #[inline]
    pub fn is_transform_abstract(&self) -> bool {
        self.evolution.is_transform_abstract()
    }

    pub fn variant(&self, tag: &str) -> Option<&Tuple> {
        self.variants.iter().find(|v| v.tag == tag)
    }
}

/// A synthesized type domain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDomain {
    /// Generated name, `PascalCase`.
    pub name: String,
    /// Name as defined in the type universe.
    pub tag: String,
    pub tuples: Vec<Tuple>,
    pub sums: Vec<Sum>,
}

impl TypeDomain {
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty() && self.sums.is_empty()
    }

    pub fn tuple(&self, tag: &str) -> Option<&Tuple> {
        self.tuples.iter().find(|t| t.tag == tag)
    }

    pub fn sum(&self, tag: &str) -> Option<&Sum> {
        self.sums.iter().find(|s| s.tag == tag)
    }

    /// Every tuple of the domain, sum variants included, in declaration
    /// order.
    pub fn all_tuples(&self) -> impl Iterator<Item = &Tuple> {
        self.tuples
            .iter()
            .chain(self.sums.iter().flat_map(|s| s.variants.iter()))
    }
}

/// The difference between a source domain and a destination domain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Only the tuples and sums that need a transform hook.
    pub source_domain_difference: TypeDomain,
    /// Generated name of the source domain.
    pub source_domain_name: String,
    /// Generated name of the destination domain.
    pub dest_domain_name: String,
    /// Tags present in the source domain but not in the destination.
    pub removed_tags: Vec<String>,
}

/// Root of the synthesized model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeUniverse {
    pub domains: Vec<TypeDomain>,
    pub transforms: Vec<Transform>,
}

#[cfg(test)]
mod tests;
