//! Integration tests for the ordered engine.
//!
//! These tests drive `RawSet` through a user-defined `ElementBehavior` that
//! counts copies and destroys, checking the ownership contract end to end.

use ordset::engine::{Cursor, ElementBehavior, EngineError, INLINE_CAPACITY, RawSet};
use rstest::rstest;
use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

// =============================================================================
// Counting Behavior
// =============================================================================

#[derive(Clone, Default)]
struct Counting {
    copies: Rc<Cell<usize>>,
    destroys: Rc<Cell<usize>>,
}

impl Counting {
    fn live(&self) -> usize {
        self.copies.get() - self.destroys.get()
    }
}

impl ElementBehavior<String> for Counting {
    fn copy(&self, element: &String) -> Option<String> {
        self.copies.set(self.copies.get() + 1);
        Some(element.clone())
    }

    fn destroy(&self, element: String) {
        self.destroys.set(self.destroys.get() + 1);
        drop(element);
    }

    fn compare(&self, left: &String, right: &String) -> Ordering {
        left.cmp(right)
    }
}

fn words(set: &RawSet<String, Counting>) -> Vec<&str> {
    set.iter().map(String::as_str).collect()
}

// =============================================================================
// Ownership
// =============================================================================

#[rstest]
fn test_add_clones_the_callers_value() {
    let behavior = Counting::default();
    let mut set = RawSet::create(behavior.clone());
    let value = "pear".to_string();

    set.add(&value).unwrap();

    assert_eq!(behavior.copies.get(), 1);
    assert_eq!(value, "pear");
    assert_eq!(words(&set), vec!["pear"]);
}

#[rstest]
fn test_duplicate_add_does_not_clone() {
    let behavior = Counting::default();
    let mut set = RawSet::create(behavior.clone());
    set.add(&"fig".to_string()).unwrap();

    assert_eq!(
        set.add(&"fig".to_string()),
        Err(EngineError::ItemAlreadyExists)
    );
    assert_eq!(behavior.copies.get(), 1);
}

#[rstest]
fn test_every_clone_is_destroyed_exactly_once() {
    let behavior = Counting::default();
    {
        let mut set = RawSet::create(behavior.clone());
        for word in ["kiwi", "apple", "date", "cherry", "banana"] {
            set.add(&word.to_string()).unwrap();
        }
        set.remove(&"date".to_string()).unwrap();
        let copy = set.try_copy().unwrap();
        assert_eq!(behavior.live(), 8);
        drop(copy);
        assert_eq!(behavior.live(), 4);
    }
    assert_eq!(behavior.live(), 0);
    assert_eq!(behavior.destroys.get(), 9);
}

#[rstest]
fn test_clear_then_reuse() {
    let behavior = Counting::default();
    let mut set = RawSet::create(behavior.clone());
    for word in ["b", "a"] {
        set.add(&word.to_string()).unwrap();
    }
    set.clear();
    assert_eq!(behavior.live(), 0);
    assert!(set.is_empty());

    set.add(&"c".to_string()).unwrap();
    assert_eq!(words(&set), vec!["c"]);
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
fn test_growth_past_inline_capacity_keeps_order() {
    let mut set = RawSet::create(Counting::default());
    let count = INLINE_CAPACITY * 3;
    for index in (0..count).rev() {
        set.add(&format!("{index:03}")).unwrap();
    }

    let expected: Vec<String> = (0..count).map(|index| format!("{index:03}")).collect();
    let actual: Vec<String> = set.iter().cloned().collect();
    assert_eq!(actual, expected);
}

// =============================================================================
// Cursor Protocol
// =============================================================================

#[rstest]
fn test_cursor_walk_matches_iterator() {
    let mut set = RawSet::create(Counting::default());
    for word in ["m", "c", "x"] {
        set.add(&word.to_string()).unwrap();
    }

    let mut walked = Vec::new();
    let mut cursor = set.first();
    while let Some(element) = set.element(cursor) {
        walked.push(element.as_str());
        cursor = set.next(cursor);
    }

    assert_eq!(walked, words(&set));
    assert_eq!(cursor, Cursor::end());
}

#[rstest]
fn test_cursors_equal_only_for_same_element() {
    let mut set = RawSet::create(Counting::default());
    for word in ["a", "b"] {
        set.add(&word.to_string()).unwrap();
    }

    assert_eq!(set.first(), set.first());
    assert_ne!(set.first(), set.next(set.first()));
    assert_eq!(set.next(set.next(set.first())), Cursor::end());
}

#[rstest]
fn test_remove_invalidates_only_cursors_to_the_removed_element() {
    let mut set = RawSet::create(Counting::default());
    for word in ["a", "b", "c"] {
        set.add(&word.to_string()).unwrap();
    }
    let first = set.first();
    let last = set.next(set.next(first));
    assert_eq!(set.element(last).map(String::as_str), Some("c"));

    set.remove(&"a".to_string()).unwrap();
    assert_eq!(set.element(first), None);
    assert_eq!(set.element(last).map(String::as_str), Some("c"));
    assert_eq!(set.next(set.first()), last);
}

#[rstest]
fn test_contains_sets_internal_cursor_for_resumed_traversal() {
    let mut set = RawSet::create(Counting::default());
    for word in ["a", "b", "c", "d"] {
        set.add(&word.to_string()).unwrap();
    }

    assert_eq!(set.contains(&"b".to_string()).map(String::as_str), Some("b"));

    let mut rest = Vec::new();
    let mut cursor = set.current();
    while let Some(element) = set.element(cursor) {
        rest.push(element.clone());
        cursor = set.next(cursor);
    }
    assert_eq!(rest, vec!["b", "c", "d"]);
}

// =============================================================================
// Allocation Failure
// =============================================================================

/// Fails every copy once `budget` reaches zero.
#[derive(Clone)]
struct Budgeted {
    budget: Rc<Cell<usize>>,
    destroys: Rc<Cell<usize>>,
}

impl ElementBehavior<u32> for Budgeted {
    fn copy(&self, element: &u32) -> Option<u32> {
        let remaining = self.budget.get();
        if remaining == 0 {
            return None;
        }
        self.budget.set(remaining - 1);
        Some(*element)
    }

    fn destroy(&self, _element: u32) {
        self.destroys.set(self.destroys.get() + 1);
    }

    fn compare(&self, left: &u32, right: &u32) -> Ordering {
        left.cmp(right)
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn test_failed_copy_leaks_nothing(#[case] budget_for_copy: usize) {
    let behavior = Budgeted {
        budget: Rc::new(Cell::new(usize::MAX)),
        destroys: Rc::new(Cell::new(0)),
    };
    let mut set = RawSet::create(behavior.clone());
    for value in 0..10 {
        set.add(&value).unwrap();
    }

    behavior.budget.set(budget_for_copy);
    assert!(matches!(set.try_copy(), Err(EngineError::OutOfMemory)));
    assert_eq!(behavior.destroys.get(), budget_for_copy);
    assert_eq!(set.len(), 10);
}

#[rstest]
fn test_failed_add_leaves_set_unchanged() {
    let behavior = Budgeted {
        budget: Rc::new(Cell::new(2)),
        destroys: Rc::new(Cell::new(0)),
    };
    let mut set = RawSet::create(behavior);
    set.add(&1).unwrap();
    set.add(&3).unwrap();

    assert_eq!(set.add(&2), Err(EngineError::OutOfMemory));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
}
