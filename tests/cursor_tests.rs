//! Unit tests for Set traversal.

#![cfg(feature = "collection")]

use rstest::rstest;
use uniset::collection::Set;

#[rstest]
fn test_cursor_walks_in_insertion_order() {
    let set: Set<i32> = [3, 1, 2].into_iter().collect();
    let mut cursor = set.cursor();
    let mut visited = Vec::new();

    while cursor.valid() {
        visited.push((cursor.key(), cursor.current().copied()));
        cursor.next();
    }

    assert_eq!(visited, vec![(0, Some(3)), (1, Some(1)), (2, Some(2))]);
}

#[rstest]
fn test_cursor_rewind_restarts_from_first_position() {
    let set: Set<&str> = ["a", "b", "c"].into_iter().collect();
    let mut cursor = set.cursor();
    while cursor.next().is_some() {}

    assert!(!cursor.valid());
    cursor.rewind();
    assert!(cursor.valid());
    assert_eq!(cursor.key(), 0);
    assert_eq!(cursor.current(), Some(&"a"));
}

#[rstest]
fn test_cursor_over_empty_set_is_invalid() {
    let set: Set<i32> = Set::new();
    let cursor = set.cursor();
    assert!(!cursor.valid());
    assert_eq!(cursor.current(), None);
}

#[rstest]
fn test_cursor_reflects_set_after_removal() {
    let mut set: Set<i32> = (1..=4).collect();
    set.remove(&2);

    let mut cursor = set.cursor();
    cursor.next();
    assert_eq!(cursor.key(), 1);
    assert_eq!(cursor.current(), Some(&3));
}

#[rstest]
fn test_for_loop_over_reference() {
    let set: Set<i32> = (1..=3).collect();
    let mut total = 0;
    for element in &set {
        total += element;
    }
    assert_eq!(total, 6);
}

#[rstest]
fn test_iter_is_restartable() {
    let set: Set<i32> = (1..=3).collect();
    assert_eq!(set.iter().count(), 3);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[rstest]
fn test_into_iter_consumes_in_order() {
    let set: Set<String> = ["x", "y"].into_iter().map(str::to_owned).collect();
    let mut iter = set.into_iter();
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next().as_deref(), Some("x"));
    assert_eq!(iter.next().as_deref(), Some("y"));
    assert_eq!(iter.next(), None);
}
