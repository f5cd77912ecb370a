//! Arity ranges for tuple construction.
//!
//! An arity is the inclusive range of positional argument counts a tuple
//! accepts. The upper bound is open when the tuple ends in a variadic
//! property.

use std::fmt;

/// Upper bound of an [`Arity`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MaxArity {
    /// At most this many arguments (inclusive).
    Bounded(usize),
    /// Any number of arguments at or above the minimum.
    Unbounded,
}

/// Inclusive range of positional argument counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arity {
    /// Fewest arguments accepted.
    pub min: usize,
    /// Most arguments accepted.
    pub max: MaxArity,
}

impl Arity {
    /// Arity accepting exactly `n` arguments.
    #[inline]
    pub const fn exact(n: usize) -> Self {
        Arity {
            min: n,
            max: MaxArity::Bounded(n),
        }
    }

    /// Arity accepting `min` or more arguments.
    #[inline]
    pub const fn at_least(min: usize) -> Self {
        Arity {
            min,
            max: MaxArity::Unbounded,
        }
    }

    /// Arity accepting `min..=max` arguments.
    #[inline]
    pub const fn bounded(min: usize, max: usize) -> Self {
        debug_assert!(min <= max);
        Arity {
            min,
            max: MaxArity::Bounded(max),
        }
    }

    #[inline]
    pub const fn is_unbounded(self) -> bool {
        matches!(self.max, MaxArity::Unbounded)
    }

    /// The upper bound, if any.
    #[inline]
    pub const fn max_bounded(self) -> Option<usize> {
        match self.max {
            MaxArity::Bounded(n) => Some(n),
            MaxArity::Unbounded => None,
        }
    }

    /// Whether a call site with `count` positional arguments is legal.
    pub fn contains(self, count: usize) -> bool {
        match self.max {
            MaxArity::Bounded(max) => (self.min..=max).contains(&count),
            MaxArity::Unbounded => count >= self.min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            MaxArity::Bounded(max) if max == self.min => write!(f, "{max}"),
            MaxArity::Bounded(max) => write!(f, "{}..={max}", self.min),
            MaxArity::Unbounded => write!(f, "{}..", self.min),
        }
    }
}

#[cfg(test)]
mod tests;
