//! Strict weak orders used by [`OrderedSet`](super::OrderedSet).
//!
//! A comparator only answers "is `left` strictly before `right`?". The set
//! derives a three-way result by asking twice, so two elements are equal
//! exactly when neither is before the other.

use std::cmp::Ordering;

/// A strict weak order over `T`.
///
/// Any `Fn(&T, &T) -> bool` closure is a comparator.
///
/// # Examples
///
/// ```rust
/// use ordset::typed::{Comparator, NaturalOrder, ReverseOrder};
///
/// assert!(NaturalOrder.less(&1, &2));
/// assert!(ReverseOrder::new(NaturalOrder).less(&2, &1));
///
/// let by_length = |left: &&str, right: &&str| left.len() < right.len();
/// assert!(by_length.less(&"ab", &"abc"));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Returns `true` if `left` is ordered strictly before `right`.
    fn less(&self, left: &T, right: &T) -> bool;

    /// Three-way comparison synthesised from two calls to [`less`](Self::less).
    #[inline]
    fn three_way(&self, left: &T, right: &T) -> Ordering {
        if self.less(left, right) {
            Ordering::Less
        } else if self.less(right, left) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// The ordering given by `T`'s [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        left < right
    }
}

/// Reverses an inner comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder<C = NaturalOrder>(C);

impl<C> ReverseOrder<C> {
    /// Wraps `inner`, ordering by it from greatest to least.
    #[inline]
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self(inner)
    }

    /// Returns the wrapped comparator.
    #[inline]
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for ReverseOrder<C> {
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        self.0.less(right, left)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn test_natural_three_way(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(NaturalOrder.three_way(&left, &right), expected);
    }

    #[rstest]
    #[case(1, 2, Ordering::Greater)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Less)]
    fn test_reverse_three_way(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(ReverseOrder::new(NaturalOrder).three_way(&left, &right), expected);
    }

    #[rstest]
    fn test_closure_comparator_treats_incomparable_as_equal() {
        let by_length = |left: &String, right: &String| left.len() < right.len();
        assert_eq!(
            by_length.three_way(&"ab".to_string(), &"cd".to_string()),
            Ordering::Equal
        );
        assert_eq!(
            by_length.three_way(&"a".to_string(), &"cd".to_string()),
            Ordering::Less
        );
    }

    #[rstest]
    fn test_natural_order_on_unsized_strings() {
        assert!(NaturalOrder.less("apple", "banana"));
    }
}
