//! # Dispatch Tables
//!
//! A table maps an event to the handler responsible for it. The dispatch loop
//! only ever reads a table; ownership stays with the caller for the length of
//! a run.
//!
//! Implementations live in `ember-std`:
//!
//! - `DispatchTable`: array-backed and indexed by [`EventKind`] ordinal, O(1).
//! - `HashTable`: keyed by any `Hash + Eq` event, for kinds that are not
//!   contiguous, at the cost of hashing every dispatch.
//!
//! [`EventKind`]: crate::EventKind

/// Lookup from an event to its handler.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot look up handlers for events of type `{E}`",
    label = "missing `HandlerTable<{E}>` implementation",
    note = "Use `DispatchTable` for `EventKind` enums or `HashTable` for sparse keys."
)]
pub trait HandlerTable<E> {
    /// The handler type stored in the table.
    type Handler;

    /// Returns the handler for `event`, or `None` if the table has no entry.
    ///
    /// A missing entry is a caller contract violation: the event type's range
    /// must match the table exactly.
    fn handler(&self, event: &E) -> Option<&Self::Handler>;

    /// Number of entries in the table.
    fn len(&self) -> usize;

    /// Whether the table has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E, T: HandlerTable<E> + ?Sized> HandlerTable<E> for &T {
    type Handler = T::Handler;

    #[inline]
    fn handler(&self, event: &E) -> Option<&Self::Handler> {
        (**self).handler(event)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
