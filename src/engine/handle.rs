//! Opaque-handle API over the ordered engine.
//!
//! These free functions mirror a callback-driven container interface: the
//! set is created from three caller-supplied functions, passed around as an
//! opaque [`Set`], and every entry point accepts an absent set (`None`) and
//! reports it instead of failing.
//!
//! | Function     | Absent set result                 |
//! |--------------|-----------------------------------|
//! | [`create`]   | `None` if any callback is missing |
//! | [`copy`]     | `None`                            |
//! | [`destroy`]  | no-op                             |
//! | [`size`]     | `None`                            |
//! | [`first`]    | end cursor                        |
//! | [`next`]     | end cursor                        |
//! | [`element`]  | `None`                            |
//! | [`contains`] | `None`                            |
//! | [`add`]      | [`SetStatus::NullArgument`]       |
//! | [`remove`]   | [`SetStatus::NullArgument`]       |
//! | [`clear`]    | [`SetStatus::NullArgument`]       |
//!
//! # Examples
//!
//! ```rust
//! use ordset::engine::handle;
//! use ordset::engine::SetStatus;
//! use std::rc::Rc;
//!
//! let mut set = handle::create(
//!     Some(Rc::new(|element: &String| Some(element.clone()))),
//!     Some(Rc::new(drop::<String>)),
//!     Some(Rc::new(|left: &String, right: &String| left.cmp(right))),
//! );
//!
//! assert_eq!(handle::add(set.as_mut(), &"b".to_string()), SetStatus::Success);
//! assert_eq!(handle::add(set.as_mut(), &"a".to_string()), SetStatus::Success);
//! assert_eq!(handle::size(set.as_ref()), Some(2));
//!
//! let names: Vec<&String> = handle::elements(set.as_ref()).collect();
//! assert_eq!(names, vec!["a", "b"]);
//!
//! handle::destroy(set);
//! ```

use super::behavior::{Callbacks, CompareFn, CopyFn, DestroyFn};
use super::cursor::Cursor;
use super::raw_set::RawSet;
use super::status::{EngineError, SetStatus};

/// The opaque set type driven by a [`Callbacks`] table.
pub type Set<E> = RawSet<E, Callbacks<E>>;

/// Creates an empty set, or `None` if any of the three callbacks is missing.
#[must_use]
pub fn create<E>(
    copy: Option<CopyFn<E>>,
    destroy: Option<DestroyFn<E>>,
    compare: Option<CompareFn<E>>,
) -> Option<Set<E>> {
    Callbacks::new(copy, destroy, compare).map(RawSet::create)
}

/// Deep-copies `set`, or returns `None` if it is absent or a copy fails.
///
/// A failed copy leaves nothing behind: clones made before the failure are
/// destroyed.
#[must_use]
pub fn copy<E>(set: Option<&Set<E>>) -> Option<Set<E>> {
    set?.try_copy().ok()
}

/// Destroys every element of `set`, then the set itself.
pub fn destroy<E>(set: Option<Set<E>>) {
    drop(set);
}

/// Returns the element count, or `None` for an absent set.
#[must_use]
pub fn size<E>(set: Option<&Set<E>>) -> Option<usize> {
    set.map(RawSet::len)
}

/// Returns a cursor to the least element; end if the set is absent or empty.
#[must_use]
pub fn first<E>(set: Option<&Set<E>>) -> Cursor {
    set.map_or_else(Cursor::end, RawSet::first)
}

/// Advances `cursor`; end if the set is absent or the cursor is exhausted.
#[must_use]
pub fn next<E>(set: Option<&Set<E>>, cursor: Cursor) -> Cursor {
    set.map_or_else(Cursor::end, |set| set.next(cursor))
}

/// Dereferences `cursor`; `None` for an absent set, end, or a cursor whose
/// element has been removed.
#[must_use]
pub fn element<E>(set: Option<&Set<E>>, cursor: Cursor) -> Option<&E> {
    set?.element(cursor)
}

/// Returns the stored element equal to `probe` and moves the set's internal
/// cursor to it.
pub fn contains<'a, E>(set: Option<&'a mut Set<E>>, probe: &E) -> Option<&'a E> {
    set?.contains(probe)
}

/// Adds a clone of `element`.
pub fn add<E>(set: Option<&mut Set<E>>, element: &E) -> SetStatus {
    set.ok_or(EngineError::NullArgument)
        .and_then(|set| set.add(element))
        .into()
}

/// Removes and destroys the stored element equal to `element`.
pub fn remove<E>(set: Option<&mut Set<E>>, element: &E) -> SetStatus {
    set.ok_or(EngineError::NullArgument)
        .and_then(|set| set.remove(element))
        .into()
}

/// Destroys every stored element.
pub fn clear<E>(set: Option<&mut Set<E>>) -> SetStatus {
    set.map_or(SetStatus::NullArgument, |set| {
        set.clear();
        SetStatus::Success
    })
}

/// Visits every stored element in ascending order.
///
/// This is the iteration pattern built from [`first`], [`next`] and
/// [`element`]; an absent set yields nothing.
pub fn elements<E>(set: Option<&Set<E>>) -> impl Iterator<Item = &E> {
    set.into_iter().flat_map(RawSet::iter)
}

// =============================================================================
// Tests
// =============================================================================
