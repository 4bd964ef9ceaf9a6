//! The ordered engine.
//!
//! [`RawSet`] keeps its elements in a single contiguous sequence sorted by
//! the bound [`ElementBehavior::compare`]. The sequence is re-sorted on every
//! mutation by splicing at the right place, so traversal is a plain forward
//! walk and duplicate detection is one three-way comparison.
//!
//! # Time Complexity
//!
//! | Operation   | Cost          |
//! |-------------|---------------|
//! | `add`       | O(n)          |
//! | `remove`    | O(n)          |
//! | `contains`  | O(n)          |
//! | `len`       | O(1)          |
//! | `first`     | O(1)          |
//! | `next`      | O(1)*         |
//! | `element`   | O(1)*         |
//! | `try_copy`  | O(n)          |
//! | `clear`     | O(n)          |
//!
//! \* O(n) when other elements were spliced in or out after the cursor was
//! made.
//!
//! Lookups are linear scans that stop at the first element not less than
//! the probe.
//!
//! # Element Keys
//!
//! Each stored element is tagged with a key drawn from a per-set counter at
//! insertion. Cursors hold that key and the slot it occupied, so a cursor
//! follows its element when other elements are spliced in or out; resolving
//! a cursor whose slot has shifted is a linear scan for the key.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::behavior::ElementBehavior;
use super::cursor::{Cursor, next_identity};
use super::status::EngineError;

/// Number of elements stored inline before the engine spills to the heap.
pub const INLINE_CAPACITY: usize = 8;

/// An ordered, duplicate-free set of owned elements.
///
/// Every element is a clone produced by the bound copy behavior and is
/// released through the bound destroy behavior, either on [`remove`],
/// [`clear`], or when the set itself is dropped.
///
/// [`remove`]: RawSet::remove
/// [`clear`]: RawSet::clear
///
/// # Examples
///
/// ```rust
/// use ordset::engine::{Callbacks, EngineError, RawSet};
/// use std::rc::Rc;
///
/// let callbacks = Callbacks::new(
///     Some(Rc::new(|element: &i32| Some(*element))),
///     Some(Rc::new(drop::<i32>)),
///     Some(Rc::new(|left: &i32, right: &i32| left.cmp(right))),
/// )
/// .unwrap();
///
/// let mut set = RawSet::create(callbacks);
/// set.add(&2).unwrap();
/// set.add(&1).unwrap();
/// assert_eq!(set.add(&2), Err(EngineError::ItemAlreadyExists));
///
/// let elements: Vec<i32> = set.iter().copied().collect();
/// assert_eq!(elements, vec![1, 2]);
/// ```
pub struct RawSet<E, B: ElementBehavior<E>> {
    elements: SmallVec<[(u64, E); INLINE_CAPACITY]>,
    behavior: B,
    identity: u64,
    next_key: u64,
    internal: Option<usize>,
}

impl<E, B: ElementBehavior<E>> RawSet<E, B> {
    /// Creates an empty set bound to `behavior`.
    ///
    /// No allocation happens until the inline capacity is exceeded.
    #[must_use]
    pub fn create(behavior: B) -> Self {
        Self {
            elements: SmallVec::new(),
            behavior,
            identity: next_identity(),
            next_key: 0,
            internal: None,
        }
    }

    /// Produces an independent copy holding a clone of every element.
    ///
    /// The copy shares the behaviors but no elements. If any clone fails, the
    /// clones made so far are destroyed and nothing is returned.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfMemory`] if reserving storage or cloning
    /// an element fails.
    pub fn try_copy(&self) -> Result<Self, EngineError>
    where
        B: Clone,
    {
        let mut copy = Self::create(self.behavior.clone());
        copy.next_key = self.next_key;
        if copy.elements.try_reserve(self.elements.len()).is_err() {
            warn!(len = self.elements.len(), "storage reservation failed during set copy");
            return Err(EngineError::OutOfMemory);
        }
        for (key, element) in &self.elements {
            let Some(clone) = self.behavior.copy(element) else {
                warn!(
                    copied = copy.elements.len(),
                    len = self.elements.len(),
                    "element copy failed during set copy"
                );
                return Err(EngineError::OutOfMemory);
            };
            copy.elements.push((*key, clone));
        }
        trace!(len = copy.elements.len(), "copied set");
        Ok(copy)
    }

    /// Returns the bound behaviors.
    #[inline]
    #[must_use]
    pub const fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Returns the number of stored elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set stores no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Looks up the stored element equal to `probe`.
    ///
    /// On a hit the internal cursor (see [`current`](Self::current)) is moved
    /// to the found element; on a miss it is moved to end.
    pub fn contains(&mut self, probe: &E) -> Option<&E> {
        match self.locate(probe) {
            Ok(index) => {
                self.internal = Some(index);
                self.elements.get(index).map(|(_, element)| element)
            }
            Err(_) => {
                self.internal = None;
                None
            }
        }
    }

    /// Returns the internal cursor last positioned by [`contains`](Self::contains).
    ///
    /// Any insert, remove or clear moves it back to end.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Cursor {
        self.internal
            .map_or_else(Cursor::end, |index| self.cursor_at(index))
    }

    /// Returns a cursor to the least element, or end if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Cursor {
        self.cursor_at(0)
    }

    /// Returns a cursor to the successor of `cursor`.
    ///
    /// Advancing from the last element, from end, from a cursor whose
    /// element has been removed, or from a cursor another set issued yields
    /// end.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn next(&self, cursor: Cursor) -> Cursor {
        self.index_of(cursor)
            .map_or_else(Cursor::end, |index| self.cursor_at(index + 1))
    }

    /// Returns the element at `cursor`, or `None` for end and invalid cursors.
    #[inline]
    #[must_use]
    pub fn element(&self, cursor: Cursor) -> Option<&E> {
        self.index_of(cursor)
            .and_then(|index| self.elements.get(index))
            .map(|(_, element)| element)
    }

    /// Adds a clone of `value` at its sorted position.
    ///
    /// Cursors to elements already stored stay on those elements.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ItemAlreadyExists`] if an equal element is stored;
    ///   the set is unchanged.
    /// - [`EngineError::OutOfMemory`] if storage cannot grow or the copy
    ///   behavior fails; the set is unchanged.
    pub fn add(&mut self, value: &E) -> Result<(), EngineError> {
        let index = match self.locate(value) {
            Ok(existing) => {
                debug!(index = existing, len = self.elements.len(), "rejected duplicate element");
                return Err(EngineError::ItemAlreadyExists);
            }
            Err(insertion_point) => insertion_point,
        };
        if self.elements.try_reserve(1).is_err() {
            warn!(len = self.elements.len(), "storage reservation failed on add");
            return Err(EngineError::OutOfMemory);
        }
        let Some(clone) = self.behavior.copy(value) else {
            warn!(len = self.elements.len(), "element copy failed on add");
            return Err(EngineError::OutOfMemory);
        };
        let key = self.next_key;
        self.next_key = self.next_key.wrapping_add(1);
        self.elements.insert(index, (key, clone));
        self.internal = None;
        trace!(index, len = self.elements.len(), "inserted element");
        Ok(())
    }

    /// Removes the element equal to `probe` and destroys it.
    ///
    /// Cursors to the removed element no longer dereference; cursors to the
    /// remaining elements stay on them.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ItemDoesNotExist`] if no stored element equals
    /// `probe`; the set is unchanged.
    pub fn remove(&mut self, probe: &E) -> Result<(), EngineError> {
        let Ok(index) = self.locate(probe) else {
            debug!(len = self.elements.len(), "remove found no matching element");
            return Err(EngineError::ItemDoesNotExist);
        };
        let (_, removed) = self.elements.remove(index);
        self.behavior.destroy(removed);
        self.internal = None;
        trace!(index, len = self.elements.len(), "removed element");
        Ok(())
    }

    /// Destroys every element, leaving the set empty.
    pub fn clear(&mut self) {
        let cleared = self.elements.len();
        self.destroy_all();
        self.internal = None;
        trace!(cleared, "cleared set");
    }

    /// Returns a lazy forward iterator over the elements in ascending order.
    ///
    /// The iterator is built only from [`first`](Self::first),
    /// [`next`](Self::next) and [`element`](Self::element).
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Elements<'_, E, B> {
        Elements {
            set: self,
            cursor: self.first(),
        }
    }

    /// Resolves `cursor` to the slot of its element if this set issued it
    /// and the element is still stored.
    ///
    /// The slot recorded in the cursor is tried first; if another element
    /// now occupies it, the slots are scanned for the cursor's key.
    pub(crate) fn index_of(&self, cursor: Cursor) -> Option<usize> {
        let (key, hint) = cursor.slot_in(self.identity)?;
        match self.elements.get(hint) {
            Some((stored, _)) if *stored == key => Some(hint),
            _ => self.elements.iter().position(|(stored, _)| *stored == key),
        }
    }

    /// Cursor to the element at `index`, or end past the last slot.
    #[inline]
    fn cursor_at(&self, index: usize) -> Cursor {
        self.elements
            .get(index)
            .map_or_else(Cursor::end, |(key, _)| Cursor::at(self.identity, *key, index))
    }

    /// Linear scan in ascending order.
    ///
    /// Returns `Ok(index)` of the element equal to `probe`, or `Err(index)`
    /// of the first element greater than it (the insertion point).
    fn locate(&self, probe: &E) -> Result<usize, usize> {
        for (index, (_, stored)) in self.elements.iter().enumerate() {
            match self.behavior.compare(stored, probe) {
                Ordering::Less => {}
                Ordering::Equal => return Ok(index),
                Ordering::Greater => return Err(index),
            }
        }
        Err(self.elements.len())
    }

    fn destroy_all(&mut self) {
        for (_, element) in self.elements.drain(..) {
            self.behavior.destroy(element);
        }
    }
}

impl<E, B: ElementBehavior<E>> Drop for RawSet<E, B> {
    fn drop(&mut self) {
        if !self.elements.is_empty() {
            trace!(len = self.elements.len(), "destroying set");
        }
        self.destroy_all();
    }
}

impl<E: fmt::Debug, B: ElementBehavior<E>> fmt::Debug for RawSet<E, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, E, B: ElementBehavior<E>> IntoIterator for &'a RawSet<E, B> {
    type Item = &'a E;
    type IntoIter = Elements<'a, E, B>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy forward iterator over a [`RawSet`], driven by its cursor protocol.
pub struct Elements<'a, E, B: ElementBehavior<E>> {
    set: &'a RawSet<E, B>,
    cursor: Cursor,
}

impl<'a, E, B: ElementBehavior<E>> Iterator for Elements<'a, E, B> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.set.element(self.cursor)?;
        self.cursor = self.set.next(self.cursor);
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .set
            .index_of(self.cursor)
            .map_or(0, |index| self.set.len() - index);
        (remaining, Some(remaining))
    }
}

impl<E, B: ElementBehavior<E>> ExactSizeIterator for Elements<'_, E, B> {}

impl<E, B: ElementBehavior<E>> FusedIterator for Elements<'_, E, B> {}

// =============================================================================
// Tests
// =============================================================================
