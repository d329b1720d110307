//! The capability a type needs to be stored in a [`Set`](super::Set).
//!
//! A set never compares elements with `PartialEq`. It asks the element
//! itself, through [`Element::strict_eq`], whether two values are the same
//! member, and through [`Element::structural_hash`] what it contributes to
//! the enclosing set's fingerprint.
//!
//! Implementations are provided for:
//!
//! - every primitive integer, `f32`, `f64`, `bool` and `char`
//! - `str`, `String`, and references or boxes of any element
//! - `Option<T>`, where `None` is the null value
//! - [`Set<T>`](super::Set) itself, see its documentation for the nested case
//! - the heterogeneous [`Value`](super::Value)

use super::checksum::{checksum_bool, checksum_display, checksum_f32, checksum_f64, checksum_str};

/// Membership capability of set elements.
///
/// # Laws
///
/// - `strict_eq` is symmetric.
/// - `strict_eq` never panics, whatever the two values are.
/// - If `a.strict_eq(&b)` then `a.structural_hash() == b.structural_hash()`.
///
/// `strict_eq` does not have to be reflexive: a float NaN is not strictly
/// equal to itself, so it can be added to a set more than once.
///
/// # Examples
///
/// ```rust
/// use uniset::collection::{Element, Set};
///
/// #[derive(Debug)]
/// struct Tag(&'static str);
///
/// impl Element for Tag {
///     fn strict_eq(&self, other: &Self) -> bool {
///         self.0 == other.0
///     }
///
///     fn structural_hash(&self) -> u64 {
///         self.0.structural_hash()
///     }
/// }
///
/// let mut tags = Set::new();
/// assert!(tags.add(Tag("red")));
/// assert!(!tags.add(Tag("red")));
/// ```
pub trait Element {
    /// Returns `true` if `self` and `other` are the same member: identical
    /// type and identical value, with no coercion.
    fn strict_eq(&self, other: &Self) -> bool;

    /// Returns this element's contribution to a set's structural hash.
    ///
    /// Null values contribute zero.
    fn structural_hash(&self) -> u64;

    /// Returns `true` if both values hold the same content.
    ///
    /// Used by [`EqualityPolicy::Multiset`](super::EqualityPolicy::Multiset).
    /// Defaults to [`strict_eq`](Element::strict_eq); containers whose strict
    /// equality is identity-based override it to compare contents.
    #[inline]
    fn structural_eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

macro_rules! impl_element_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Element for $integer {
                #[inline]
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }

                #[inline]
                fn structural_hash(&self) -> u64 {
                    checksum_display(self)
                }
            }
        )*
    };
}

impl_element_for_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Element for f64 {
    #[inline]
    #[allow(clippy::float_cmp)]
    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn structural_hash(&self) -> u64 {
        checksum_f64(*self)
    }
}

impl Element for f32 {
    #[inline]
    #[allow(clippy::float_cmp)]
    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn structural_hash(&self) -> u64 {
        checksum_f32(*self)
    }
}

impl Element for bool {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn structural_hash(&self) -> u64 {
        checksum_bool(*self)
    }
}

impl Element for char {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn structural_hash(&self) -> u64 {
        let mut buffer = [0_u8; 4];
        checksum_str(self.encode_utf8(&mut buffer))
    }
}

impl Element for str {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn structural_hash(&self) -> u64 {
        checksum_str(self)
    }
}

impl Element for String {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn structural_hash(&self) -> u64 {
        checksum_str(self)
    }
}

impl<T: Element + ?Sized> Element for &T {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        (**self).strict_eq(*other)
    }

    #[inline]
    fn structural_hash(&self) -> u64 {
        (**self).structural_hash()
    }

    #[inline]
    fn structural_eq(&self, other: &Self) -> bool {
        (**self).structural_eq(*other)
    }
}

impl<T: Element + ?Sized> Element for Box<T> {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        (**self).strict_eq(&**other)
    }

    #[inline]
    fn structural_hash(&self) -> u64 {
        (**self).structural_hash()
    }

    #[inline]
    fn structural_eq(&self, other: &Self) -> bool {
        (**self).structural_eq(&**other)
    }
}

impl<T: Element> Element for Option<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(left), Some(right)) => left.strict_eq(right),
            _ => false,
        }
    }

    fn structural_hash(&self) -> u64 {
        self.as_ref().map_or(0, Element::structural_hash)
    }

    fn structural_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(left), Some(right)) => left.structural_eq(right),
            _ => false,
        }
    }
}
