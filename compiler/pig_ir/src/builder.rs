//! Synthesized builder signatures.
//!
//! A builder is one construction entry point for a tuple. All builders of a
//! tuple share a name and differ by parameter count; each one wires its
//! parameters (or an explicit absent/empty value) to the tuple constructor's
//! arguments, in property order.

use crate::Arity;

/// Value passed to a constructor argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArgumentValue {
    /// Forward the named builder parameter.
    Parameter(String),
    /// An omitted nullable property.
    Absent,
    /// An omitted variadic property (no repetitions).
    Empty,
}

/// A builder parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: String,
    /// Generated type name of one value of this parameter.
    pub type_name: String,
    /// Value used when a keyword-style call omits this parameter.
    pub default_value: Option<ArgumentValue>,
    /// Repeated parameter (zero or more values).
    pub is_variadic: bool,
}

/// A constructor argument and the value wired into it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructorArgument {
    pub name: String,
    pub value: ArgumentValue,
}

/// One synthesized construction entry point.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuilderFunction {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub constructor_arguments: Vec<ConstructorArgument>,
}

impl BuilderFunction {
    /// Positional argument counts this builder accepts.
    pub fn arity(&self) -> Arity {
        let fixed = self.parameters.iter().filter(|p| !p.is_variadic).count();
        if self.parameters.iter().any(|p| p.is_variadic) {
            Arity::at_least(fixed)
        } else {
            Arity::exact(fixed)
        }
    }
}
