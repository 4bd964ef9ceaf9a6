//! Positions within one engine instance.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

/// Hands out a process-unique identity for a new engine.
pub(crate) fn next_identity() -> u64 {
    NEXT_IDENTITY.fetch_add(1, AtomicOrdering::Relaxed)
}

/// A weak, non-owning position within a [`RawSet`](super::RawSet).
///
/// A cursor is either *at an element* or at *end*. It records the identity
/// of the set that produced it and the key the set gave that element on
/// insertion, plus the slot the element occupied when the cursor was made.
/// Inserting or removing other elements leaves the cursor on its element.
/// Once its own element is removed, or the set is cleared, the cursor
/// dereferences to nothing instead of to an arbitrary element. A cursor
/// handed to a different set never dereferences.
///
/// Two cursors are equal when both are at end, or when both refer to the
/// same stored element of the same set.
///
/// # Examples
///
/// ```rust
/// use ordset::engine::Cursor;
///
/// assert_eq!(Cursor::end(), Cursor::end());
/// assert!(Cursor::end().is_end());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    owner: u64,
    key: Option<u64>,
    hint: usize,
}

impl Cursor {
    /// The one-past-last sentinel.
    #[inline]
    #[must_use]
    pub const fn end() -> Self {
        Self {
            owner: 0,
            key: None,
            hint: 0,
        }
    }

    #[inline]
    pub(crate) const fn at(owner: u64, key: u64, hint: usize) -> Self {
        Self {
            owner,
            key: Some(key),
            hint,
        }
    }

    /// Returns `true` if this cursor is the end sentinel.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.key.is_none()
    }

    /// Returns the element key and the slot hint if the cursor was issued by
    /// `owner` and points at an element.
    #[inline]
    pub(crate) fn slot_in(&self, owner: u64) -> Option<(u64, usize)> {
        self.key
            .filter(|_| self.owner == owner)
            .map(|key| (key, self.hint))
    }
}

impl Default for Cursor {
    #[inline]
    fn default() -> Self {
        Self::end()
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        match (self.key, other.key) {
            (None, None) => true,
            (Some(left), Some(right)) => left == right && self.owner == other.owner,
            _ => false,
        }
    }
}

impl Eq for Cursor {}

static_assertions::assert_impl_all!(Cursor: Copy, Send, Sync, Eq);

// =============================================================================
// Tests
// =============================================================================
