//! The three element behaviors bound to an engine at construction.
//!
//! An engine never touches its elements directly: cloning on insertion and
//! set copy, releasing on removal and teardown, and ordering all go through
//! an [`ElementBehavior`]. [`Callbacks`] is the callback-table form used by
//! the opaque-handle API; the typed facade supplies its own implementation.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Copy, destroy and three-way compare for elements of type `E`.
///
/// # Contract
///
/// - `copy` returns an independently owned clone, or `None` when the clone
///   cannot be allocated.
/// - `destroy` is the only path through which a stored element is released.
/// - `compare` is a total order consistent with itself: it decides both the
///   iteration order and duplicate detection (`Ordering::Equal`).
pub trait ElementBehavior<E> {
    /// Clones `element`, or returns `None` on allocation failure.
    fn copy(&self, element: &E) -> Option<E>;

    /// Releases an element the engine no longer stores.
    fn destroy(&self, element: E);

    /// Three-way comparison of two elements.
    fn compare(&self, left: &E, right: &E) -> Ordering;
}

/// Clones an element, `None` signalling allocation failure.
pub type CopyFn<E> = Rc<dyn Fn(&E) -> Option<E>>;

/// Releases an element.
pub type DestroyFn<E> = Rc<dyn Fn(E)>;

/// Three-way comparison.
pub type CompareFn<E> = Rc<dyn Fn(&E, &E) -> Ordering>;

/// A callback table binding three caller-supplied functions.
///
/// Copies of a set share the same table, so the functions are reference
/// counted rather than boxed.
///
/// # Examples
///
/// ```rust
/// use ordset::engine::Callbacks;
/// use std::rc::Rc;
///
/// let callbacks: Option<Callbacks<i32>> = Callbacks::new(
///     Some(Rc::new(|element: &i32| Some(*element))),
///     Some(Rc::new(drop::<i32>)),
///     Some(Rc::new(|left: &i32, right: &i32| left.cmp(right))),
/// );
/// assert!(callbacks.is_some());
///
/// let missing: Option<Callbacks<i32>> = Callbacks::new(None, Some(Rc::new(drop::<i32>)), None);
/// assert!(missing.is_none());
/// ```
pub struct Callbacks<E> {
    copy: CopyFn<E>,
    destroy: DestroyFn<E>,
    compare: CompareFn<E>,
}

impl<E> Callbacks<E> {
    /// Binds the three functions, or returns `None` if any is missing.
    #[must_use]
    pub fn new(
        copy: Option<CopyFn<E>>,
        destroy: Option<DestroyFn<E>>,
        compare: Option<CompareFn<E>>,
    ) -> Option<Self> {
        Some(Self {
            copy: copy?,
            destroy: destroy?,
            compare: compare?,
        })
    }
}

impl<E> Clone for Callbacks<E> {
    fn clone(&self) -> Self {
        Self {
            copy: Rc::clone(&self.copy),
            destroy: Rc::clone(&self.destroy),
            compare: Rc::clone(&self.compare),
        }
    }
}

impl<E> fmt::Debug for Callbacks<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

impl<E> ElementBehavior<E> for Callbacks<E> {
    #[inline]
    fn copy(&self, element: &E) -> Option<E> {
        (self.copy)(element)
    }

    #[inline]
    fn destroy(&self, element: E) {
        (self.destroy)(element);
    }

    #[inline]
    fn compare(&self, left: &E, right: &E) -> Ordering {
        (self.compare)(left, right)
    }
}

// =============================================================================
// Tests
// =============================================================================
