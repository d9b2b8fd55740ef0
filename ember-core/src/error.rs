//! Error types for Ember.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`EmberError`] - Top-level error type for all Ember operations
//! - [`CapacityError`] - Rejected queue capacities
//! - [`TableError`] - Malformed dispatch tables
//! - [`DispatchError`] - Errors starting a dispatch loop
//! - [`Full`] - A non-blocking enqueue found the queue at capacity

use std::fmt;
use thiserror::Error;

/// Top-level error type for all Ember operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmberError {
    /// A queue capacity was rejected.
    #[error("capacity error: {0}")]
    Capacity(#[from] CapacityError),

    /// A dispatch table could not be built.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// A dispatch loop could not be started.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Errors for queue capacities.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// Capacity must be at least one slot.
    #[error("queue capacity must be at least 1")]
    Zero,
}

/// Errors that can occur while building a dispatch table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A dense table must hold exactly one handler per event kind.
    #[error("dispatch table needs {expected} handlers, got {actual}")]
    LengthMismatch {
        /// Number of event kinds.
        expected: usize,
        /// Number of handlers supplied.
        actual: usize,
    },

    /// The same event was registered twice.
    #[error("handler already registered for event: {0}")]
    DuplicateKey(String),

    /// An exhaustive table has no handler for this event kind.
    #[error("no handler registered for event kind: {0}")]
    MissingKind(&'static str),
}

/// Errors that can occur when entering the dispatch loop.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// Another thread is already running this dispatcher's loop.
    #[error("dispatcher is already running on another thread")]
    AlreadyRunning,
}

/// Returned by a non-blocking enqueue when the queue is at capacity.
///
/// The rejected item is handed back unchanged.
#[derive(Error, Clone, Copy, PartialEq, Eq)]
#[error("queue is full")]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Recovers the item that could not be enqueued.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Full(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_hands_item_back() {
        let err = Full(String::from("late"));
        assert_eq!(err.to_string(), "queue is full");
        assert_eq!(format!("{err:?}"), "Full(..)");
        assert_eq!(err.into_inner(), "late");
    }

    #[test]
    fn test_top_level_conversions() {
        let err: EmberError = CapacityError::Zero.into();
        assert_eq!(
            err.to_string(),
            "capacity error: queue capacity must be at least 1"
        );

        let err: EmberError = TableError::LengthMismatch {
            expected: 3,
            actual: 2,
        }
        .into();
        assert!(matches!(err, EmberError::Table(_)));
        assert_eq!(
            err.to_string(),
            "table error: dispatch table needs 3 handlers, got 2"
        );

        let err: EmberError = TableError::MissingKind("Resize").into();
        assert_eq!(
            err.to_string(),
            "table error: no handler registered for event kind: Resize"
        );

        let err: EmberError = DispatchError::AlreadyRunning.into();
        assert_eq!(err, EmberError::Dispatch(DispatchError::AlreadyRunning));
    }
}
