//! Integration tests for the opaque-handle API.

use ordset::engine::handle::{self, Set};
use ordset::engine::{CompareFn, CopyFn, DestroyFn, SetStatus};
use rstest::{fixture, rstest};
use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Fixtures
// =============================================================================

/// A set of boxed integers whose destroy callback logs what it frees.
struct Logged {
    set: Option<Set<Box<i64>>>,
    freed: Rc<RefCell<Vec<i64>>>,
}

fn copy_box() -> CopyFn<Box<i64>> {
    Rc::new(|element: &Box<i64>| Some(element.clone()))
}

fn compare_box() -> CompareFn<Box<i64>> {
    Rc::new(|left: &Box<i64>, right: &Box<i64>| left.cmp(right))
}

#[fixture]
fn logged() -> Logged {
    let freed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&freed);
    let destroy: DestroyFn<Box<i64>> = Rc::new(move |element: Box<i64>| {
        sink.borrow_mut().push(*element);
    });
    Logged {
        set: handle::create(Some(copy_box()), Some(destroy), Some(compare_box())),
        freed,
    }
}

fn collect(set: Option<&Set<Box<i64>>>) -> Vec<i64> {
    handle::elements(set).map(|element| **element).collect()
}

// =============================================================================
// Tests
// =============================================================================

#[rstest]
fn test_create_requires_all_callbacks() {
    assert!(handle::create(Some(copy_box()), None, Some(compare_box())).is_none());
    assert!(handle::create::<Box<i64>>(None, None, None).is_none());
}

#[rstest]
fn test_add_reports_success_and_duplicates(mut logged: Logged) {
    assert_eq!(handle::add(logged.set.as_mut(), &Box::new(2)), SetStatus::Success);
    assert_eq!(handle::add(logged.set.as_mut(), &Box::new(1)), SetStatus::Success);
    assert_eq!(
        handle::add(logged.set.as_mut(), &Box::new(2)),
        SetStatus::ItemAlreadyExists
    );
    assert_eq!(handle::size(logged.set.as_ref()), Some(2));
    assert_eq!(collect(logged.set.as_ref()), vec![1, 2]);
}

#[rstest]
fn test_remove_frees_through_destroy_callback(mut logged: Logged) {
    for value in [5, 3, 8] {
        handle::add(logged.set.as_mut(), &Box::new(value));
    }
    assert_eq!(handle::remove(logged.set.as_mut(), &Box::new(3)), SetStatus::Success);
    assert_eq!(
        handle::remove(logged.set.as_mut(), &Box::new(3)),
        SetStatus::ItemDoesNotExist
    );
    assert_eq!(*logged.freed.borrow(), vec![3]);
    assert_eq!(collect(logged.set.as_ref()), vec![5, 8]);
}

#[rstest]
fn test_destroy_frees_every_element(mut logged: Logged) {
    for value in 0..20 {
        handle::add(logged.set.as_mut(), &Box::new(value));
    }
    handle::destroy(logged.set.take());

    let mut freed = logged.freed.borrow().clone();
    freed.sort_unstable();
    assert_eq!(freed, (0..20).collect::<Vec<_>>());
}

#[rstest]
fn test_copy_is_independent(mut logged: Logged) {
    for value in [1, 2] {
        handle::add(logged.set.as_mut(), &Box::new(value));
    }
    let mut copy = handle::copy(logged.set.as_ref());
    assert_eq!(handle::remove(copy.as_mut(), &Box::new(2)), SetStatus::Success);

    assert_eq!(collect(copy.as_ref()), vec![1]);
    assert_eq!(collect(logged.set.as_ref()), vec![1, 2]);
}

#[rstest]
fn test_contains_returns_stored_element(mut logged: Logged) {
    handle::add(logged.set.as_mut(), &Box::new(7));
    let probe = Box::new(7);
    let found = handle::contains(logged.set.as_mut(), &probe).unwrap();
    assert_eq!(**found, 7);
    assert!(!std::ptr::eq(found, &probe));
    assert!(handle::contains(logged.set.as_mut(), &Box::new(9)).is_none());
}

#[rstest]
fn test_cursor_functions_walk_in_order(mut logged: Logged) {
    for value in [30, 10, 20] {
        handle::add(logged.set.as_mut(), &Box::new(value));
    }
    let set = logged.set.as_ref();
    let mut walked = Vec::new();
    let mut cursor = handle::first(set);
    while let Some(element) = handle::element(set, cursor) {
        walked.push(**element);
        cursor = handle::next(set, cursor);
    }
    assert_eq!(walked, vec![10, 20, 30]);
    assert!(handle::next(set, cursor).is_end());
}

#[rstest]
fn test_clear_reports_success_and_empties(mut logged: Logged) {
    for value in [1, 2, 3] {
        handle::add(logged.set.as_mut(), &Box::new(value));
    }
    assert_eq!(handle::clear(logged.set.as_mut()), SetStatus::Success);
    assert_eq!(handle::size(logged.set.as_ref()), Some(0));
    assert_eq!(logged.freed.borrow().len(), 3);
}

#[rstest]
fn test_status_round_trips_through_result() {
    assert!(SetStatus::Success.into_result().is_ok());
    assert!(SetStatus::ItemDoesNotExist.into_result().is_err());
}
