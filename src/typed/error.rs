//! Error type for the typed set.

/// Errors raised by [`OrderedSet`](super::OrderedSet) operations.
///
/// # Examples
///
/// ```rust
/// use ordset::typed::{OrderedSet, SetError};
///
/// let set: OrderedSet<i32> = [1, 2].into_iter().collect();
/// match set.find(&3) {
///     Err(SetError::ElementNotFound) => {}
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SetError {
    /// Storage for an element, or for a copy of the set, could not be
    /// allocated.
    #[error("memory allocation failed")]
    Allocation,
    /// No element equal to the requested value is stored.
    #[error("element not found")]
    ElementNotFound,
    /// The position is at end, belongs to another set, or refers to an
    /// element that has been erased.
    #[error("invalid iterator")]
    InvalidIterator,
}
