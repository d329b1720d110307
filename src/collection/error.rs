//! Error type for the diagnostic bulk operations.
//!
//! [`Set::add_all`](super::Set::add_all) and
//! [`Set::remove_all`](super::Set::remove_all) report a rejected batch as a
//! plain `false`. Their `try_` counterparts return a [`BatchError`] naming the
//! input element that caused the rollback, and hand that element back.

use std::fmt;

/// Reason a bulk operation was rejected and rolled back.
///
/// `position` is the zero-based index of the offending element in the input
/// sequence. The set is always left exactly as it was before the call.
///
/// # Examples
///
/// ```rust
/// use uniset::collection::{BatchError, Set};
///
/// let mut set: Set<i32> = [2, 4, 5].into_iter().collect();
/// let error = set.try_add_all([6, 4, 8]).unwrap_err();
///
/// assert_eq!(error, BatchError::Duplicate { position: 1, element: 4 });
/// assert_eq!(error.to_string(), "batch rejected: element at position 1 is already present");
/// assert_eq!(set.to_vec(), vec![2, 4, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError<T> {
    /// An element of an insertion batch was already present, either in the
    /// set or earlier in the same batch.
    Duplicate {
        /// Index of the element in the input sequence.
        position: usize,
        /// The rejected element.
        element: T,
    },
    /// An element of a removal batch was not present.
    Missing {
        /// Index of the element in the input sequence.
        position: usize,
        /// The element that could not be removed.
        element: T,
    },
}

impl<T> BatchError<T> {
    /// Returns the index of the offending element in the input sequence.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Duplicate { position, .. } | Self::Missing { position, .. } => *position,
        }
    }

    /// Returns the offending element.
    #[must_use]
    pub const fn element(&self) -> &T {
        match self {
            Self::Duplicate { element, .. } | Self::Missing { element, .. } => element,
        }
    }

    /// Consumes the error, returning the offending element.
    #[must_use]
    pub fn into_element(self) -> T {
        match self {
            Self::Duplicate { element, .. } | Self::Missing { element, .. } => element,
        }
    }
}

impl<T> fmt::Display for BatchError<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { position, .. } => write!(
                formatter,
                "batch rejected: element at position {position} is already present"
            ),
            Self::Missing { position, .. } => write!(
                formatter,
                "batch rejected: element at position {position} is not present"
            ),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for BatchError<T> {}
