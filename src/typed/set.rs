//! The typed ordered set.
//!
//! [`OrderedSet`] binds an element type and a [`Comparator`] to the ordered
//! engine: elements are copied with [`Clone`], released by dropping them,
//! and compared by asking the comparator twice. Engine result codes become
//! [`SetError`] values.
//!
//! # Time Complexity
//!
//! | Operation    | Cost |
//! |--------------|------|
//! | `insert`     | O(n) |
//! | `erase`      | O(n) |
//! | `find`       | O(n) |
//! | `size`       | O(1) |
//! | `begin`      | O(1) |
//! | `successor`  | O(1) |
//! | `get`        | O(1) |
//! | `try_clone`  | O(n) |
//! | `clear`      | O(n) |

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use super::comparator::{Comparator, NaturalOrder};
use super::error::SetError;
use super::iter::{Iter, Position};
use crate::engine::{ElementBehavior, EngineError, RawSet};

/// Engine behaviors for a typed element: `Clone` to copy, `Drop` to destroy,
/// a [`Comparator`] to order.
#[derive(Debug, Clone, Default)]
pub(crate) struct TypedBehavior<C> {
    comparator: C,
}

impl<T: Clone, C: Comparator<T>> ElementBehavior<T> for TypedBehavior<C> {
    #[inline]
    fn copy(&self, element: &T) -> Option<T> {
        Some(element.clone())
    }

    #[inline]
    fn destroy(&self, element: T) {
        drop(element);
    }

    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.comparator.three_way(left, right)
    }
}

/// Maps an engine failure onto the facade's error surface.
///
/// # Panics
///
/// Panics on `NullArgument` and `ItemAlreadyExists`. The facade always owns
/// an engine, so `NullArgument` cannot arise, and `insert` handles
/// `ItemAlreadyExists` before translating.
fn translate(error: EngineError) -> SetError {
    match error {
        EngineError::OutOfMemory => SetError::Allocation,
        EngineError::ItemDoesNotExist => SetError::ElementNotFound,
        EngineError::NullArgument => unreachable!("facade engine is never absent"),
        EngineError::ItemAlreadyExists => {
            unreachable!("duplicate insertion is reported as inserted == false")
        }
    }
}

/// An ordered, duplicate-free set of `T` sorted by the comparator `C`.
///
/// Each inserted value is cloned into the set; the set owns its clones and
/// drops them on removal, on [`clear`](Self::clear), and when it is dropped
/// itself. Copying a set clones every element.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`.
/// * `C` - A strict weak order over `T`. Defaults to [`NaturalOrder`].
///
/// # Examples
///
/// ```rust
/// use ordset::typed::{OrderedSet, SetError};
///
/// let mut set: OrderedSet<i32> = OrderedSet::new();
/// set.insert(&2).unwrap();
/// set.insert(&1).unwrap();
///
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(set.get(set.find(&1).unwrap()), Ok(&1));
/// assert_eq!(set.find(&3), Err(SetError::ElementNotFound));
///
/// let mut copy = set.clone();
/// copy.erase(&2).unwrap();
/// assert_eq!(copy.size(), 1);
/// assert_eq!(set.size(), 2);
/// ```
///
/// With a custom comparator:
///
/// ```rust
/// use ordset::typed::OrderedSet;
///
/// let mut set = OrderedSet::with_comparator(|left: &i32, right: &i32| left > right);
/// for value in [1, 3, 2] {
///     set.insert(&value).unwrap();
/// }
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
pub struct OrderedSet<T: Clone, C: Comparator<T> = NaturalOrder> {
    engine: RawSet<T, TypedBehavior<C>>,
}

impl<T: Clone, C: Comparator<T> + Default> OrderedSet<T, C> {
    /// Creates an empty set ordered by `C::default()`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone, C: Comparator<T>> OrderedSet<T, C> {
    /// Creates an empty set ordered by `comparator`.
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            engine: RawSet::create(TypedBehavior { comparator }),
        }
    }

    /// Returns the comparator the set was built with.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.engine.behavior().comparator
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.engine.len()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.engine.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    /// Returns the position of the least element, or [`end`](Self::end) if
    /// the set is empty.
    #[inline]
    #[must_use]
    pub fn begin(&self) -> Position {
        Position::new(self.engine.first())
    }

    /// Returns the one-past-last position.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Position {
        Position::end()
    }

    /// Same as [`begin`](Self::begin); positions are always read-only.
    #[inline]
    #[must_use]
    pub fn cbegin(&self) -> Position {
        self.begin()
    }

    /// Same as [`end`](Self::end); positions are always read-only.
    #[inline]
    #[must_use]
    pub const fn cend(&self) -> Position {
        self.end()
    }

    /// Returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidIterator`] if `position` is at end, was
    /// issued by another set, or refers to an element that has since been
    /// erased or cleared.
    #[inline]
    pub fn get(&self, position: Position) -> Result<&T, SetError> {
        self.engine
            .element(position.cursor())
            .ok_or(SetError::InvalidIterator)
    }

    /// Returns the position following `position`, or end.
    #[inline]
    #[must_use]
    pub fn successor(&self, position: Position) -> Position {
        Position::new(self.engine.next(position.cursor()))
    }

    /// Returns an iterator over the elements in ascending order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter::new(self.engine.iter())
    }

    /// Returns the least element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.engine.element(self.engine.first())
    }

    /// Returns the greatest element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns the position of the element equal to `value`.
    ///
    /// Walks the set from [`begin`](Self::begin); equality means neither
    /// element is ordered before the other.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::ElementNotFound`] if no element is equal to
    /// `value`. Use [`find_or_end`](Self::find_or_end) to get
    /// [`end`](Self::end) instead.
    pub fn find(&self, value: &T) -> Result<Position, SetError> {
        let position = self.find_or_end(value);
        if position.is_end() {
            Err(SetError::ElementNotFound)
        } else {
            Ok(position)
        }
    }

    /// Returns the position of the element equal to `value`, or
    /// [`end`](Self::end) if there is none.
    #[must_use]
    pub fn find_or_end(&self, value: &T) -> Position {
        let behavior = self.engine.behavior();
        let mut cursor = self.engine.first();
        while let Some(stored) = self.engine.element(cursor) {
            if behavior.compare(stored, value) == Ordering::Equal {
                return Position::new(cursor);
            }
            cursor = self.engine.next(cursor);
        }
        Position::end()
    }

    /// Returns `true` if an element equal to `value` is stored.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        !self.find_or_end(value).is_end()
    }

    /// Inserts a clone of `value`.
    ///
    /// Returns the position of the stored element and whether it was newly
    /// inserted. When an equal element already exists the set is unchanged
    /// and its position is returned with `false`.
    ///
    /// Positions to elements already stored stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Allocation`] if the clone cannot be stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::typed::OrderedSet;
    ///
    /// let mut set: OrderedSet<&str> = OrderedSet::new();
    /// let (first, inserted) = set.insert(&"a").unwrap();
    /// assert!(inserted);
    ///
    /// let (again, inserted) = set.insert(&"a").unwrap();
    /// assert!(!inserted);
    /// assert_eq!(set.get(again), Ok(&"a"));
    /// assert_eq!(set.size(), 1);
    /// # let _ = first;
    /// ```
    pub fn insert(&mut self, value: &T) -> Result<(Position, bool), SetError> {
        let inserted = match self.engine.add(value) {
            Ok(()) => true,
            Err(EngineError::ItemAlreadyExists) => false,
            Err(error) => return Err(translate(error)),
        };
        Ok((self.find_or_end(value), inserted))
    }

    /// Removes the element equal to `value`.
    ///
    /// Positions to other elements stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::ElementNotFound`] if no element is equal to
    /// `value`.
    pub fn erase(&mut self, value: &T) -> Result<(), SetError> {
        self.engine.remove(value).map_err(translate)
    }

    /// Removes the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidIterator`] if `position` does not refer to
    /// an element of this set.
    pub fn erase_at(&mut self, position: Position) -> Result<(), SetError> {
        let value = self.get(position)?.clone();
        self.erase(&value)
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.engine.clear();
    }
}

impl<T: Clone, C: Comparator<T> + Clone> OrderedSet<T, C> {
    /// Returns a deep copy: every element is cloned, none is shared.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Allocation`] if storage for the copy cannot be
    /// reserved. Nothing is left behind on failure.
    pub fn try_clone(&self) -> Result<Self, SetError> {
        self.engine
            .try_copy()
            .map(|engine| Self { engine })
            .map_err(translate)
    }

    /// Replaces the contents of `self` with a deep copy of `source`.
    ///
    /// The copy is built completely before the current contents are
    /// dropped, so on failure `self` is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Allocation`] if the copy cannot be built.
    pub fn assign_from(&mut self, source: &Self) -> Result<(), SetError> {
        let replacement = source.try_clone()?;
        trace!(
            previous = self.len(),
            len = replacement.len(),
            "replacing set contents"
        );
        *self = replacement;
        Ok(())
    }
}

/// Unwraps the result of an infallible-signature operation.
fn expect_storage<R>(result: Result<R, SetError>, operation: &str) -> R {
    match result {
        Ok(value) => value,
        Err(error) => panic!("OrderedSet::{operation} failed: {error}"),
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Clone for OrderedSet<T, C> {
    /// # Panics
    ///
    /// Panics if storage for the copy cannot be allocated; use
    /// [`OrderedSet::try_clone`] to handle that case.
    fn clone(&self) -> Self {
        expect_storage(self.try_clone(), "clone")
    }

    /// # Panics
    ///
    /// Panics if storage for the copy cannot be allocated, leaving `self`
    /// unchanged; use [`OrderedSet::assign_from`] to handle that case.
    fn clone_from(&mut self, source: &Self) {
        expect_storage(self.assign_from(source), "clone_from");
    }
}

impl<T: Clone, C: Comparator<T> + Default> Default for OrderedSet<T, C> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + fmt::Debug, C: Comparator<T>> fmt::Debug for OrderedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone + fmt::Display, C: Comparator<T>> fmt::Display for OrderedSet<T, C> {
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

impl<T: Clone + PartialEq, C: Comparator<T>> PartialEq for OrderedSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Clone + Eq, C: Comparator<T>> Eq for OrderedSet<T, C> {}

impl<'a, T: Clone, C: Comparator<T>> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone, C: Comparator<T>> Extend<T> for OrderedSet<T, C> {
    /// Inserts every element, skipping duplicates.
    ///
    /// # Panics
    ///
    /// Panics if storage for an element cannot be allocated.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            expect_storage(self.insert(&element), "extend");
        }
    }
}

impl<T: Clone, C: Comparator<T> + Default> FromIterator<T> for OrderedSet<T, C> {
    /// Collects the elements into a new set, skipping duplicates.
    ///
    /// # Panics
    ///
    /// Panics if storage for an element cannot be allocated.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(feature = "serde")]
impl<T, C> serde::Serialize for OrderedSet<T, C>
where
    T: serde::Serialize + Clone,
    C: Comparator<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedSetVisitor<T, C> {
    marker: std::marker::PhantomData<(T, C)>,
}

#[cfg(feature = "serde")]
impl<T, C> OrderedSetVisitor<T, C> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::de::Visitor<'de> for OrderedSetVisitor<T, C>
where
    T: serde::Deserialize<'de> + Clone,
    C: Comparator<T> + Default,
{
    type Value = OrderedSet<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = OrderedSet::new();
        while let Some(element) = seq.next_element::<T>()? {
            set.insert(&element)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for OrderedSet<T, C>
where
    T: serde::Deserialize<'de> + Clone,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
