//! The ordered engine and its opaque-handle API.
//!
//! - [`RawSet`]: an ordered, duplicate-free set of owned elements, generic
//!   over the [`ElementBehavior`] that copies, destroys and compares them
//! - [`Cursor`]: a weak position within one [`RawSet`]
//! - [`Callbacks`]: an [`ElementBehavior`] built from three caller-supplied
//!   functions
//! - [`handle`]: free functions over an optional [`handle::Set`], reporting
//!   [`SetStatus`] codes
//!
//! # Ownership
//!
//! The engine never stores a caller's value. [`RawSet::add`] clones it
//! through the copy behavior and the clone belongs to the set from then on.
//! Removal, [`RawSet::clear`] and dropping the set hand each element to the
//! destroy behavior exactly once.
//!
//! # Cursor Validity
//!
//! A cursor is tied to the set that issued it and to one stored element. It
//! keeps referring to that element while other elements are added or
//! removed. Once its element is removed, or the set is cleared, it
//! dereferences to `None` and advances to end.
//!
//! ```rust
//! use ordset::engine::{Callbacks, RawSet};
//! use std::rc::Rc;
//!
//! let callbacks = Callbacks::new(
//!     Some(Rc::new(|element: &u8| Some(*element))),
//!     Some(Rc::new(drop::<u8>)),
//!     Some(Rc::new(|left: &u8, right: &u8| left.cmp(right))),
//! )
//! .unwrap();
//! let mut set = RawSet::create(callbacks);
//! set.add(&1).unwrap();
//!
//! let cursor = set.first();
//! assert_eq!(set.element(cursor), Some(&1));
//!
//! set.add(&0).unwrap();
//! assert_eq!(set.element(cursor), Some(&1));
//!
//! set.remove(&1).unwrap();
//! assert_eq!(set.element(cursor), None);
//! ```

mod behavior;
mod cursor;
pub mod handle;
mod raw_set;
mod status;

pub use behavior::Callbacks;
pub use behavior::CompareFn;
pub use behavior::CopyFn;
pub use behavior::DestroyFn;
pub use behavior::ElementBehavior;
pub use cursor::Cursor;
pub use raw_set::Elements;
pub use raw_set::INLINE_CAPACITY;
pub use raw_set::RawSet;
pub use status::EngineError;
pub use status::SetStatus;
