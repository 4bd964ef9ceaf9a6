//! Result codes for the ordered engine.
//!
//! The engine's methods return [`EngineError`] through `Result`, while the
//! opaque-handle API reports a flat [`SetStatus`] code. The two convert into
//! each other without losing information.

/// Errors reported by the ordered engine.
///
/// `ItemAlreadyExists` is a non-mutating outcome rather than a failure: the
/// set is left exactly as it was. Callers that only care about success may
/// treat it as an error, the typed facade turns it into `inserted == false`.
///
/// # Examples
///
/// ```rust
/// use ordset::engine::EngineError;
///
/// assert_eq!(EngineError::ItemDoesNotExist.to_string(), "item does not exist");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EngineError {
    /// An allocation, or the copy behavior, failed.
    #[error("out of memory")]
    OutOfMemory,
    /// No set was supplied.
    #[error("null argument")]
    NullArgument,
    /// An element comparing equal to the one being added is already stored.
    #[error("item already exists")]
    ItemAlreadyExists,
    /// No stored element compares equal to the probe.
    #[error("item does not exist")]
    ItemDoesNotExist,
}

/// Flat result code returned by the opaque-handle API.
///
/// # Examples
///
/// ```rust
/// use ordset::engine::{EngineError, SetStatus};
///
/// assert_eq!(SetStatus::from(Ok(())), SetStatus::Success);
/// assert_eq!(
///     SetStatus::from(Err(EngineError::ItemAlreadyExists)),
///     SetStatus::ItemAlreadyExists
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetStatus {
    /// The operation completed.
    Success,
    /// An allocation, or the copy behavior, failed.
    OutOfMemory,
    /// No set was supplied.
    NullArgument,
    /// An equal element is already stored.
    ItemAlreadyExists,
    /// No equal element is stored.
    ItemDoesNotExist,
}

impl SetStatus {
    /// Returns `true` for [`SetStatus::Success`].
    #[inline]
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Converts the code back into the engine's `Result` form.
    ///
    /// # Errors
    ///
    /// Returns the matching [`EngineError`] for every code other than
    /// [`SetStatus::Success`].
    pub const fn into_result(self) -> Result<(), EngineError> {
        match self {
            Self::Success => Ok(()),
            Self::OutOfMemory => Err(EngineError::OutOfMemory),
            Self::NullArgument => Err(EngineError::NullArgument),
            Self::ItemAlreadyExists => Err(EngineError::ItemAlreadyExists),
            Self::ItemDoesNotExist => Err(EngineError::ItemDoesNotExist),
        }
    }
}

impl From<EngineError> for SetStatus {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::OutOfMemory => Self::OutOfMemory,
            EngineError::NullArgument => Self::NullArgument,
            EngineError::ItemAlreadyExists => Self::ItemAlreadyExists,
            EngineError::ItemDoesNotExist => Self::ItemDoesNotExist,
        }
    }
}

impl From<Result<(), EngineError>> for SetStatus {
    fn from(result: Result<(), EngineError>) -> Self {
        result.map_or_else(Self::from, |()| Self::Success)
    }
}

// =============================================================================
// Tests
// =============================================================================
