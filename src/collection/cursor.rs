//! Traversal of a [`Set`](super::Set) in insertion order.
//!
//! Two styles are offered:
//!
//! - [`Iter`] and [`IntoIter`], ordinary Rust iterators.
//! - [`Cursor`], a positioned cursor with explicit `rewind`, `current`,
//!   `key`, `next` and `valid` steps, for hosts that drive traversal by hand.
//!
//! Both borrow the set (or own it), so the set cannot be mutated while a
//! traversal is in progress.

use std::iter::FusedIterator;

/// Iterator over references to the elements of a set, in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    pub(crate) inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the elements of a set, in insertion order.
#[derive(Debug)]
pub struct IntoIter<T> {
    pub(crate) inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

/// A positioned cursor over the elements of a set.
///
/// A fresh cursor is positioned on the first element. Advancing past the
/// last element leaves the cursor invalid until it is rewound.
///
/// # Examples
///
/// ```rust
/// use uniset::collection::Set;
///
/// let set: Set<&str> = ["a", "b"].into_iter().collect();
/// let mut cursor = set.cursor();
///
/// let mut seen = Vec::new();
/// while cursor.valid() {
///     seen.push((cursor.key(), *cursor.current().unwrap()));
///     cursor.next();
/// }
/// assert_eq!(seen, vec![(0, "a"), (1, "b")]);
///
/// cursor.rewind();
/// assert_eq!(cursor.current(), Some(&"a"));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    elements: &'a [T],
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) const fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            position: 0,
        }
    }

    /// Moves the cursor back to the first element.
    #[inline]
    pub const fn rewind(&mut self) {
        self.position = 0;
    }

    /// Returns the element under the cursor, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&'a T> {
        self.elements.get(self.position)
    }

    /// Returns the zero-based position of the cursor.
    ///
    /// Past the end this equals the number of elements.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> usize {
        self.position
    }

    /// Advances the cursor and returns the element it lands on.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'a T> {
        if self.position < self.elements.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Returns `true` while the cursor is on an element.
    #[inline]
    #[must_use]
    pub const fn valid(&self) -> bool {
        self.position < self.elements.len()
    }
}
