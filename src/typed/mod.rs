//! Type-safe ordered set built on the ordered engine.
//!
//! - [`OrderedSet`]: an ordered, duplicate-free set of `T`
//! - [`Position`]: a read-only, non-borrowing position within a set
//! - [`Iter`]: a borrowing iterator in ascending order
//! - [`Comparator`]: the strict weak order a set sorts by, with
//!   [`NaturalOrder`] and [`ReverseOrder`] provided
//! - [`SetError`]: allocation failure, missing element, invalid position
//!
//! # Positions and Mutation
//!
//! Positions are plain values and do not hold a borrow, so they survive
//! mutation of the set. A position stays on its element while other
//! elements are inserted or erased. Dereferencing a position whose element
//! was erased reports [`SetError::InvalidIterator`]:
//!
//! ```rust
//! use ordset::typed::{OrderedSet, SetError};
//!
//! let mut set: OrderedSet<i32> = [1, 2].into_iter().collect();
//! let position = set.find(&2).unwrap();
//! set.insert(&0).unwrap();
//! set.erase(&1).unwrap();
//! assert_eq!(set.get(position), Ok(&2));
//!
//! set.erase(&2).unwrap();
//! assert_eq!(set.get(position), Err(SetError::InvalidIterator));
//! ```
//!
//! # Errors
//!
//! ```rust
//! use ordset::typed::{OrderedSet, SetError};
//!
//! let mut set: OrderedSet<i32> = [1, 2].into_iter().collect();
//! assert_eq!(set.find(&3), Err(SetError::ElementNotFound));
//! assert_eq!(set.erase(&3), Err(SetError::ElementNotFound));
//! assert_eq!(set.erase_at(set.end()), Err(SetError::InvalidIterator));
//! ```

mod comparator;
mod error;
mod iter;
mod set;

pub use comparator::Comparator;
pub use comparator::NaturalOrder;
pub use comparator::ReverseOrder;
pub use error::SetError;
pub use iter::Iter;
pub use iter::Position;
pub use set::OrderedSet;
