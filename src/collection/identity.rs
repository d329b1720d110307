//! Per-instance identity of a [`Set`](super::Set).
//!
//! Two sets holding the same elements are still two distinct instances.
//! Nested sets are compared by instance when checking for duplicates, so
//! every set carries a [`SetId`] allocated once at construction.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SET_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a set instance.
///
/// Identifiers are never reused within a process. Cloning a set allocates a
/// fresh identifier: a clone is a new instance.
///
/// # Examples
///
/// ```rust
/// use uniset::collection::Set;
///
/// let first: Set<i32> = Set::new();
/// let second: Set<i32> = Set::new();
/// assert_ne!(first.id(), second.id());
/// assert_ne!(first.id(), first.clone().id());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetId(u64);

impl SetId {
    /// Allocates the next identifier.
    pub(crate) fn next() -> Self {
        Self(NEXT_SET_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value of the identifier.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "set#{}", self.0)
    }
}
