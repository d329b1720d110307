//! Heterogeneous set elements.
//!
//! [`Value`] lets one set mix numbers, text, booleans, nulls and nested sets,
//! while keeping membership strict: values of different variants are never
//! the same member, and there is no implicit coercion between them.
//!
//! # Examples
//!
//! ```rust
//! use uniset::collection::{Set, Value};
//!
//! let mut set: Set<Value> = Set::new();
//! assert!(set.add(Value::from("Hello")));
//! assert!(set.add(Value::from("hello")));
//! assert!(set.add(Value::from(5)));
//! assert!(set.add(Value::from(5.0)));
//! assert!(!set.add(Value::from(5)));
//! assert_eq!(set.len(), 4);
//! ```

use std::fmt;

use super::checksum::{checksum_bool, checksum_display, checksum_f64, checksum_str};
use super::element::Element;
use super::unique_set::Set;

/// A dynamically typed set element.
///
/// `PartialEq` on `Value` compares nested sets structurally, like
/// [`Set::equals`]. Membership inside a set uses [`Element::strict_eq`]
/// instead, which compares nested sets by instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// The null value. Contributes nothing to a structural hash.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// A text value, compared case-sensitively.
    Text(String),
    /// A nested set of values.
    Set(Set<Value>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the nested set, if this value is one.
    #[inline]
    #[must_use]
    pub const fn as_set(&self) -> Option<&Set<Self>> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Returns the name of the variant, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Set(_) => "set",
        }
    }
}

impl Element for Value {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left.strict_eq(right),
            (Self::Int(left), Self::Int(right)) => left.strict_eq(right),
            (Self::Float(left), Self::Float(right)) => left.strict_eq(right),
            (Self::Text(left), Self::Text(right)) => left.strict_eq(right),
            (Self::Set(left), Self::Set(right)) => left.strict_eq(right),
            _ => false,
        }
    }

    fn structural_hash(&self) -> u64 {
        match self {
            Self::Null => 0,
            Self::Bool(value) => checksum_bool(*value),
            Self::Int(value) => checksum_display(value),
            Self::Float(value) => checksum_f64(*value),
            Self::Text(value) => checksum_str(value),
            Self::Set(set) => set.structural_hash(),
        }
    }

    fn structural_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Set(left), Self::Set(right)) => left.structural_eq(right),
            _ => self.strict_eq(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Text(value) => write!(formatter, "{value:?}"),
            Self::Set(set) => write!(formatter, "{set}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer_for_value {
    ($($integer:ty),* $(,)?) => {
        $(
            impl From<$integer> for Value {
                fn from(value: $integer) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer_for_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Set<Self>> for Value {
    fn from(value: Set<Self>) -> Self {
        Self::Set(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
