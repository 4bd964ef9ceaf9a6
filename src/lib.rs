//! # ordset
//!
//! An ordered, duplicate-free set container, exposed at two levels.
//!
//! ## Overview
//!
//! - **Engine**: [`engine::RawSet`] keeps owned elements in ascending order
//!   using three bound behaviors (copy, destroy, three-way compare), with a
//!   cursor protocol for traversal and an opaque-handle API
//!   ([`engine::handle`]) reporting flat status codes.
//! - **Typed facade**: [`typed::OrderedSet`] binds an element type and a
//!   comparator to the engine and reports failures as [`typed::SetError`].
//!
//! ## Feature Flags
//!
//! - `typed`: The typed facade (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for `OrderedSet`
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Mutations, rejected duplicates and allocation failures are reported as
//! `tracing` events under the `ordset` target. No subscriber is installed.
//!
//! ## Example
//!
//! ```rust
//! use ordset::prelude::*;
//!
//! let mut set: OrderedSet<i32> = OrderedSet::new();
//! let (_, inserted) = set.insert(&2).unwrap();
//! assert!(inserted);
//! set.insert(&1).unwrap();
//!
//! let elements: Vec<i32> = set.iter().copied().collect();
//! assert_eq!(elements, vec![1, 2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ordset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::engine::{Callbacks, Cursor, ElementBehavior, EngineError, RawSet, SetStatus};

    #[cfg(feature = "typed")]
    pub use crate::typed::*;
}

pub mod engine;

#[cfg(feature = "typed")]
pub mod typed;
