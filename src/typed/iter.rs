//! Positions and iteration for [`OrderedSet`](super::OrderedSet).

use std::iter::FusedIterator;

use super::comparator::Comparator;
use super::set::TypedBehavior;
use crate::engine::{Cursor, Elements};

/// A read-only position within an [`OrderedSet`](super::OrderedSet).
///
/// A position does not borrow its set, so it can be kept while the set is
/// mutated. It stays on its element through inserts and erases of other
/// elements, and stops being valid once its own element is erased or the
/// set is cleared. Dereference it with
/// [`OrderedSet::get`](super::OrderedSet::get) and advance it with
/// [`OrderedSet::successor`](super::OrderedSet::successor).
///
/// Positions compare equal when both are at end or both refer to the same
/// element of the same set.
///
/// # Examples
///
/// ```rust
/// use ordset::typed::OrderedSet;
///
/// let set: OrderedSet<i32> = [10, 20].into_iter().collect();
/// let mut position = set.begin();
/// let mut seen = Vec::new();
/// while position != set.end() {
///     seen.push(*set.get(position).unwrap());
///     position = set.successor(position);
/// }
/// assert_eq!(seen, vec![10, 20]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    cursor: Cursor,
}

impl Position {
    #[inline]
    pub(super) const fn new(cursor: Cursor) -> Self {
        Self { cursor }
    }

    /// The one-past-last position shared by every set.
    #[inline]
    #[must_use]
    pub const fn end() -> Self {
        Self::new(Cursor::end())
    }

    /// Returns `true` if this is the end position.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.cursor.is_end()
    }

    #[inline]
    pub(super) const fn cursor(self) -> Cursor {
        self.cursor
    }
}

impl From<Position> for Cursor {
    #[inline]
    fn from(position: Position) -> Self {
        position.cursor()
    }
}

static_assertions::assert_impl_all!(Position: Copy, Send, Sync, Eq);

/// Iterator over references to the elements of an
/// [`OrderedSet`](super::OrderedSet), in ascending order.
///
/// Items are shared references, so elements cannot be modified in place:
///
/// ```compile_fail
/// use ordset::typed::OrderedSet;
///
/// let set: OrderedSet<i32> = [1].into_iter().collect();
/// for element in set.iter() {
///     *element = 2;
/// }
/// ```
pub struct Iter<'a, T: Clone, C: Comparator<T>> {
    inner: Elements<'a, T, TypedBehavior<C>>,
}

impl<'a, T: Clone, C: Comparator<T>> Iter<'a, T, C> {
    #[inline]
    pub(super) const fn new(inner: Elements<'a, T, TypedBehavior<C>>) -> Self {
        Self { inner }
    }
}

impl<'a, T: Clone, C: Comparator<T>> Iterator for Iter<'a, T, C> {
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

impl<T: Clone, C: Comparator<T>> ExactSizeIterator for Iter<'_, T, C> {}

impl<T: Clone, C: Comparator<T>> FusedIterator for Iter<'_, T, C> {}
