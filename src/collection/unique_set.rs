//! Insertion-ordered set with all-or-nothing bulk operations.
//!
//! This module provides [`Set`], a mutable collection of unique elements that
//! remembers the order in which they were added.
//!
//! # Overview
//!
//! - Membership is decided by [`Element::strict_eq`]: same type, same value,
//!   no coercion. Nested sets are members by instance.
//! - [`Set::add_all`] and [`Set::remove_all`] are atomic: if any single
//!   element is rejected, the set is restored to its exact pre-call state.
//! - Equality between sets is decided by their structural hash, the wrapping
//!   sum of every element's [`Element::structural_hash`].
//!
//! # Time Complexity
//!
//! | Operation          | Complexity          |
//! |--------------------|---------------------|
//! | `add`              | O(n)                |
//! | `add_all`          | O(n · m + m²)       |
//! | `remove`           | O(n)                |
//! | `remove_all`       | O(n · m)            |
//! | `contains`         | O(n)                |
//! | `len` / `is_empty` | O(1)                |
//! | `structural_hash`  | O(total elements)   |
//!
//! Every lookup is a linear scan. The collection targets small in-memory
//! sets where preserving insertion order matters more than asymptotics.
//!
//! # Equality Caveat
//!
//! Comparing structural hashes is weaker than comparing contents: two sets
//! with different elements may, in principle, have the same hash sum. Use
//! [`Set::equals_with`] with [`EqualityPolicy::Multiset`] when an exact
//! comparison is required.
//!
//! # Examples
//!
//! ```rust
//! use uniset::collection::Set;
//!
//! let mut set = Set::new();
//! assert!(set.add(1));
//! assert!(set.add(3));
//! assert!(!set.add(1));
//!
//! // Rejected batches leave the set untouched
//! assert!(!set.add_all([2, 3, 4]));
//! assert_eq!(set.to_vec(), vec![1, 3]);
//!
//! assert!(set.add_all([2, 4]));
//! assert_eq!(set.to_vec(), vec![1, 3, 2, 4]);
//!
//! assert!(set.remove(&3));
//! assert_eq!(set.to_vec(), vec![1, 2, 4]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::cursor::{Cursor, IntoIter, Iter};
use super::element::Element;
use super::error::BatchError;
use super::identity::SetId;

/// How [`Set::equals_with`] compares two sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EqualityPolicy {
    /// Equal iff the structural hashes are equal. Fast, but subject to hash
    /// collisions. This is what [`Set::equals`] and `==` use.
    #[default]
    StructuralHash,
    /// Equal iff both sets hold the same elements, pairing every element of
    /// one side with a distinct, structurally equal element of the other.
    /// Nested sets are compared recursively with this same policy.
    Multiset,
}

/// An insertion-ordered collection of unique elements.
///
/// # Type Parameters
///
/// * `T` - The element type. Most operations require [`Element`].
///
/// # Nested Sets
///
/// A `Set<T>` is itself an [`Element`]. As an element it is strictly equal
/// only to itself: two distinct instances are never duplicates, even when
/// both are empty and therefore [`equals`](Set::equals) each other.
///
/// ```rust
/// use uniset::collection::Set;
///
/// let mut outer: Set<Set<i32>> = Set::new();
/// assert!(outer.add(Set::new()));
/// assert!(outer.add(Set::new()));
/// assert_eq!(outer.len(), 2);
/// ```
pub struct Set<T> {
    elements: Vec<T>,
    identity: SetId,
}

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::collection::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty set with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            identity: SetId::next(),
        }
    }

    /// Returns the identity of this instance.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> SetId {
        self.identity
    }

    /// Returns `true` if `self` and `other` are the same instance.
    #[inline]
    #[must_use]
    pub fn is_same_instance(&self, other: &Self) -> bool {
        self.identity == other.identity
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes all elements. The instance keeps its identity.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns a read-only view of the elements in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::collection::Set;
    ///
    /// let set: Set<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(set.as_slice(), &[3, 1, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the set, returning its elements in insertion order.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// Each call starts again from the first element.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.elements.iter(),
        }
    }

    /// Returns a positioned cursor on the first element.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.elements)
    }
}

impl<T: Clone> Set<T> {
    /// Returns a copy of the elements in insertion order.
    ///
    /// Nested sets in the copy are new instances.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T: Element> Set<T> {
    fn position_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Element + ?Sized,
    {
        self.elements
            .iter()
            .position(|item| Borrow::<Q>::borrow(item).strict_eq(element))
    }

    /// Adds an element to the end of the set.
    ///
    /// Returns `false`, leaving the set unchanged, if a strictly equal
    /// element is already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::collection::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.add("Hello"));
    /// assert!(set.add("hello"));
    /// assert!(!set.add("Hello"));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        if self.position_of(&element).is_some() {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Adds every element of `elements`, in order, or none of them.
    ///
    /// Returns `true` if all elements were added. If any element is already
    /// present, either in the set or earlier in `elements`, the set is
    /// restored to its state before the call and `false` is returned.
    ///
    /// See [`Set::try_add_all`] to learn which element was rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::collection::Set;
    ///
    /// let mut set: Set<i32> = [2, 4, 5].into_iter().collect();
    /// assert!(!set.add_all([2, 4, 6]));
    /// assert_eq!(set.len(), 3);
    /// assert!(!set.contains(&6));
    /// ```
    pub fn add_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        self.try_add_all(elements).is_ok()
    }

    /// Adds every element of `elements`, in order, or none of them.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Duplicate`] carrying the first rejected element
    /// and its input position. The set is then exactly as it was before the
    /// call.
    pub fn try_add_all<I>(&mut self, elements: I) -> Result<(), BatchError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let original_length = self.elements.len();

        for (position, element) in elements.into_iter().enumerate() {
            if self.position_of(&element).is_some() {
                // Only appends happened since the call started.
                self.elements.truncate(original_length);
                log_event!(
                    debug,
                    position,
                    original_length,
                    "insertion batch rejected, set rolled back"
                );
                return Err(BatchError::Duplicate { position, element });
            }
            self.elements.push(element);
        }

        log_event!(
            trace,
            added = self.elements.len() - original_length,
            "insertion batch committed"
        );
        Ok(())
    }

    /// Returns `true` if the set contains an element strictly equal to
    /// `element`.
    ///
    /// Borrowed forms of the element type are accepted, so a `Set<String>`
    /// can be queried with a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::collection::Set;
    ///
    /// let set: Set<String> = ["five".to_owned()].into_iter().collect();
    /// assert!(set.contains("five"));
    /// assert!(!set.contains("Five"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Element + ?Sized,
    {
        self.position_of(element).is_some()
    }

    /// Removes the element strictly equal to `element`.
    ///
    /// Later elements shift down by one, keeping their relative order.
    /// Returns `false`, leaving the set unchanged, if no such element exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::collection::Set;
    ///
    /// let mut set: Set<i32> = (1..=6).collect();
    /// assert!(set.remove(&3));
    /// assert_eq!(set.as_slice()[2], 4);
    /// assert!(!set.remove(&7));
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Element + ?Sized,
    {
        self.take(element).is_some()
    }

    /// Removes and returns the element strictly equal to `element`.
    pub fn take<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Element + ?Sized,
    {
        self.position_of(element)
            .map(|position| self.elements.remove(position))
    }

    /// Removes every element of `elements`, in order, or none of them.
    ///
    /// Returns `true` if all elements were removed. If any element is not
    /// present, including one already removed earlier in the same batch,
    /// the set is restored to its state before the call and `false` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::collection::Set;
    ///
    /// let mut set: Set<i32> = (1..=5).collect();
    /// assert!(!set.remove_all([2, 4, 9]));
    /// assert_eq!(set.to_vec(), vec![1, 2, 3, 4, 5]);
    ///
    /// assert!(set.remove_all(&[2, 4]));
    /// assert_eq!(set.to_vec(), vec![1, 3, 5]);
    /// ```
    pub fn remove_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.try_remove_all(elements).is_ok()
    }

    /// Removes every element of `elements`, in order, or none of them.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Missing`] carrying the first element that could
    /// not be removed and its input position. The set is then exactly as it
    /// was before the call, in the same order.
    pub fn try_remove_all<I>(&mut self, elements: I) -> Result<(), BatchError<I::Item>>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut removed: Vec<(usize, T)> = Vec::new();

        for (position, element) in elements.into_iter().enumerate() {
            let target: &T = element.borrow();
            match self.position_of(target) {
                Some(index) => removed.push((index, self.elements.remove(index))),
                None => {
                    log_event!(
                        debug,
                        position,
                        restored = removed.len(),
                        "removal batch rejected, set rolled back"
                    );
                    // Undo in reverse so every index refers to the state it
                    // was recorded in.
                    for (index, item) in removed.into_iter().rev() {
                        self.elements.insert(index, item);
                    }
                    return Err(BatchError::Missing { position, element });
                }
            }
        }

        log_event!(trace, removed = removed.len(), "removal batch committed");
        Ok(())
    }

    /// Returns the structural hash of the set.
    ///
    /// The hash is the sum, wrapping on overflow, of every element's
    /// [`Element::structural_hash`]: nested sets contribute their own
    /// structural hash, null values contribute zero, and atomic values
    /// contribute the CRC-32 of their canonical text. Insertion order does
    /// not affect the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::collection::Set;
    ///
    /// let forward: Set<i32> = [1, 2, 3].into_iter().collect();
    /// let backward: Set<i32> = [3, 2, 1].into_iter().collect();
    /// assert_eq!(forward.structural_hash(), backward.structural_hash());
    /// assert_eq!(Set::<i32>::new().structural_hash(), 0);
    /// ```
    #[must_use]
    pub fn structural_hash(&self) -> u64 {
        self.elements
            .iter()
            .fold(0_u64, |hash, element| hash.wrapping_add(element.structural_hash()))
    }

    /// Returns `true` if both sets have the same structural hash.
    ///
    /// See the module documentation for the collision caveat.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::collection::{Set, Value};
    ///
    /// let values = [Value::from(5), Value::from(8), Value::from("test")];
    /// let mut left: Set<Value> = Set::new();
    /// let mut right: Set<Value> = Set::new();
    /// left.add_all(values.clone());
    /// right.add_all(values.into_iter().rev());
    /// assert!(left.equals(&right));
    ///
    /// right.add(Value::from("fail"));
    /// assert!(!left.equals(&right));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.structural_hash() == other.structural_hash()
    }

    /// Compares two sets using the given policy.
    #[must_use]
    pub fn equals_with(&self, other: &Self, policy: EqualityPolicy) -> bool {
        match policy {
            EqualityPolicy::StructuralHash => self.equals(other),
            EqualityPolicy::Multiset => self.same_elements(other),
        }
    }

    fn same_elements(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut matched = vec![false; other.len()];
        self.elements.iter().all(|element| {
            let counterpart = other
                .elements
                .iter()
                .zip(matched.iter_mut())
                .find(|(candidate, taken)| !**taken && element.structural_eq(candidate));
            match counterpart {
                Some((_, taken)) => {
                    *taken = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl<T: Element> Element for Set<T> {
    /// Nested sets are the same member only when they are the same instance.
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        self.is_same_instance(other)
    }

    #[inline]
    fn structural_hash(&self) -> u64 {
        Self::structural_hash(self)
    }

    fn structural_eq(&self, other: &Self) -> bool {
        self.same_elements(other)
    }
}

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Set<T> {
    /// Clones the elements into a new instance with a fresh identity.
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            identity: SetId::next(),
        }
    }
}

impl<T: Element> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Element> Eq for Set<T> {}

impl<T: Element> Hash for Set<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

impl<T: Element> FromIterator<T> for Set<T> {
    /// Builds a set by adding each element in turn; duplicates are skipped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Element> Extend<T> for Set<T> {
    /// Adds each element in turn; duplicates are skipped, not rolled back.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.elements.into_iter(),
        }
    }
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default, Element);
static_assertions::assert_impl_all!(Set<Set<String>>: Element, Eq, Hash);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::checksum::checksum_str;
    use rstest::{fixture, rstest};

    #[fixture]
    fn one_to_six() -> Set<i32> {
        (1..=6).collect()
    }

    #[rstest]
    fn test_new_set_is_empty() {
        let set: Set<i32> = Set::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.to_vec().is_empty());
    }

    #[rstest]
    fn test_add_appends_in_order() {
        let mut set = Set::new();
        assert!(set.add(1));
        assert!(set.add(2));
        assert!(set.add(3));
        assert_eq!(set.as_slice(), &[1, 2, 3]);
    }

    #[rstest]
    fn test_add_duplicate_is_rejected() {
        let mut set = Set::new();
        assert!(set.add(5));
        assert!(!set.add(5));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&5));
    }

    #[rstest]
    fn test_add_all_commits_union() {
        let mut set: Set<i32> = [1, 3, 5].into_iter().collect();
        assert!(set.add_all([2, 4, 6]));
        assert_eq!(set.to_vec(), vec![1, 3, 5, 2, 4, 6]);
    }

    #[rstest]
    fn test_add_all_rolls_back_on_existing_element() {
        let mut set: Set<i32> = [2, 4, 5].into_iter().collect();
        assert!(!set.add_all([2, 4, 6]));
        assert_eq!(set.to_vec(), vec![2, 4, 5]);
    }

    #[rstest]
    fn test_add_all_rolls_back_on_duplicate_within_batch() {
        let mut set: Set<i32> = [1].into_iter().collect();
        assert!(!set.add_all([7, 8, 7]));
        assert_eq!(set.to_vec(), vec![1]);
    }

    #[rstest]
    fn test_add_all_with_empty_batch_succeeds() {
        let mut set: Set<i32> = [1].into_iter().collect();
        assert!(set.add_all(std::iter::empty()));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_try_add_all_reports_position(mut one_to_six: Set<i32>) {
        let error = one_to_six.try_add_all([10, 11, 3, 12]).unwrap_err();
        assert_eq!(
            error,
            BatchError::Duplicate {
                position: 2,
                element: 3
            }
        );
        assert_eq!(one_to_six.len(), 6);
    }

    #[rstest]
    fn test_remove_closes_gap(mut one_to_six: Set<i32>) {
        assert!(one_to_six.remove(&3));
        assert_eq!(one_to_six.as_slice()[2], 4);
        assert!(!one_to_six.contains(&3));
        assert_eq!(one_to_six.to_vec(), vec![1, 2, 4, 5, 6]);
    }

    #[rstest]
    fn test_remove_missing_leaves_set_unchanged(mut one_to_six: Set<i32>) {
        assert!(!one_to_six.remove(&7));
        assert_eq!(one_to_six.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    fn test_take_returns_removed_element() {
        let mut set: Set<String> = ["a".to_owned(), "b".to_owned()].into_iter().collect();
        assert_eq!(set.take("a"), Some("a".to_owned()));
        assert_eq!(set.take("a"), None);
    }

    #[rstest]
    fn test_remove_all_commits(mut one_to_six: Set<i32>) {
        assert!(one_to_six.remove_all([6, 1, 3]));
        assert_eq!(one_to_six.to_vec(), vec![2, 4, 5]);
    }

    #[rstest]
    fn test_remove_all_restores_original_order(mut one_to_six: Set<i32>) {
        assert!(!one_to_six.remove_all([5, 1, 3, 42]));
        assert_eq!(one_to_six.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    fn test_remove_all_rejects_repeated_element(mut one_to_six: Set<i32>) {
        let error = one_to_six.try_remove_all([2, 2]).unwrap_err();
        assert_eq!(error.position(), 1);
        assert_eq!(one_to_six.len(), 6);
    }

    #[rstest]
    fn test_remove_all_accepts_references(mut one_to_six: Set<i32>) {
        let doomed = vec![1, 2];
        assert!(one_to_six.remove_all(&doomed));
        assert_eq!(one_to_six.len(), 4);
    }

    #[rstest]
    fn test_clear_keeps_identity(mut one_to_six: Set<i32>) {
        let id = one_to_six.id();
        one_to_six.clear();
        assert!(one_to_six.is_empty());
        assert_eq!(one_to_six.id(), id);
    }

    #[rstest]
    fn test_structural_hash_is_sum_of_checksums() {
        let set: Set<&str> = ["5", "8", "test"].into_iter().collect();
        let expected = checksum_str("5") + checksum_str("8") + checksum_str("test");
        assert_eq!(set.structural_hash(), expected);
    }

    struct Saturated(u8);

    impl Element for Saturated {
        fn strict_eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }

        fn structural_hash(&self) -> u64 {
            u64::MAX
        }
    }

    #[rstest]
    fn test_structural_hash_wraps_on_overflow() {
        let set: Set<Saturated> = [Saturated(1), Saturated(2)].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.structural_hash(), u64::MAX - 1);
    }

    #[rstest]
    fn test_signed_zero_sets_agree_under_both_policies() {
        let positive: Set<f64> = [0.0].into_iter().collect();
        let negative: Set<f64> = [-0.0].into_iter().collect();
        assert!(positive.equals(&negative));
        assert!(positive.equals_with(&negative, EqualityPolicy::StructuralHash));
        assert!(positive.equals_with(&negative, EqualityPolicy::Multiset));
    }

    #[rstest]
    fn test_structural_hash_recurses_into_nested_sets() {
        let inner: Set<i32> = [1, 2].into_iter().collect();
        let inner_hash = inner.structural_hash();
        let mut outer = Set::new();
        outer.add(inner);
        outer.add(Set::new());
        assert_eq!(outer.structural_hash(), inner_hash);
    }

    #[rstest]
    fn test_structural_hash_ignores_nulls() {
        let set: Set<Option<i32>> = [Some(4), None].into_iter().collect();
        assert_eq!(set.structural_hash(), 4_i32.structural_hash());
    }

    #[rstest]
    fn test_equals_ignores_order() {
        let left: Set<i32> = [5, 8, 13].into_iter().collect();
        let right: Set<i32> = [13, 5, 8].into_iter().collect();
        assert!(left.equals(&right));
        assert_eq!(left, right);
    }

    #[rstest]
    fn test_equals_detects_extra_element() {
        let left: Set<i32> = [5, 8].into_iter().collect();
        let right: Set<i32> = [5, 8, 13].into_iter().collect();
        assert!(!left.equals(&right));
    }

    #[rstest]
    fn test_multiset_policy_tells_collisions_apart() {
        let left: Set<i32> = [1, 2].into_iter().collect();
        let right: Set<i32> = [2, 1].into_iter().collect();
        let other: Set<i32> = [1, 3].into_iter().collect();
        assert!(left.equals_with(&right, EqualityPolicy::Multiset));
        assert!(!left.equals_with(&other, EqualityPolicy::Multiset));
        assert_eq!(
            left.equals_with(&other, EqualityPolicy::StructuralHash),
            left.equals(&other)
        );
    }

    #[rstest]
    fn test_multiset_policy_recurses_structurally() {
        let mut left: Set<Set<i32>> = Set::new();
        let mut right: Set<Set<i32>> = Set::new();
        left.add([1, 2].into_iter().collect());
        right.add([2, 1].into_iter().collect());
        assert!(left.equals_with(&right, EqualityPolicy::Multiset));
    }

    #[rstest]
    fn test_distinct_empty_sets_are_not_duplicates() {
        let mut outer: Set<Set<i32>> = Set::new();
        assert!(outer.add(Set::new()));
        assert!(outer.add(Set::new()));
        assert_eq!(outer.len(), 2);
        assert!(outer.as_slice()[0].equals(&outer.as_slice()[1]));
    }

    #[rstest]
    fn test_clone_is_a_new_instance() {
        let original: Set<i32> = [1].into_iter().collect();
        let copy = original.clone();
        assert!(!original.is_same_instance(&copy));
        assert!(!original.strict_eq(&copy));
        assert_eq!(original, copy);
    }

    #[rstest]
    fn test_nested_set_membership_is_by_instance() {
        let mut outer: Set<Set<i32>> = Set::new();
        let inner: Set<i32> = [1].into_iter().collect();
        let lookalike = inner.clone();
        outer.add(inner);
        assert!(!outer.contains(&lookalike));
        assert!(outer.contains(&outer.as_slice()[0]));
    }

    #[rstest]
    fn test_extend_skips_duplicates() {
        let mut set: Set<i32> = [1, 2].into_iter().collect();
        set.extend([2, 3, 3, 4]);
        assert_eq!(set.to_vec(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_debug_format() {
        let set: Set<i32> = [1, 2].into_iter().collect();
        assert_eq!(format!("{set:?}"), "{1, 2}");
    }

    #[rstest]
    fn test_display_format() {
        let set: Set<i32> = [3, 1].into_iter().collect();
        assert_eq!(format!("{set}"), "{3, 1}");
        assert_eq!(format!("{}", Set::<i32>::new()), "{}");
    }

    #[rstest]
    fn test_into_iter_yields_owned_elements_in_order() {
        let set: Set<String> = ["x".to_owned(), "y".to_owned()].into_iter().collect();
        let owned: Vec<String> = set.into_iter().collect();
        assert_eq!(owned, vec!["x".to_owned(), "y".to_owned()]);
    }

    #[rstest]
    fn test_iter_restarts_from_first_element(one_to_six: Set<i32>) {
        let first_pass: Vec<&i32> = one_to_six.iter().take(2).collect();
        let second_pass: Vec<&i32> = one_to_six.iter().take(2).collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass, vec![&1, &2]);
    }
}
