//! Dispatch tables and the adapters that turn them into run-loop targets.
//!
//! - [`DispatchTable`]: dense, array-backed, indexed by [`EventKind`] ordinal.
//! - [`HashTable`]: sparse fallback keyed by any `Hash + Eq` event.
//! - [`WithIdle`] / [`Bound`]: attach an idle hook or a receiver.
//!
//! [`EventKind`]: ember_core::EventKind

pub mod adapters;
pub mod dense;
pub mod hashed;

pub use adapters::{Bound, WithIdle};
pub use dense::DispatchTable;
pub use hashed::{HashTable, HashTableBuilder};

use ember_core::{Handler, HandlerTable};

/// Dispatch `event` through a table of zero-argument handlers.
#[inline]
fn dispatch_free<E, T>(table: &T, event: E)
where
    T: HandlerTable<E> + ?Sized,
    T::Handler: Handler,
{
    match table.handler(&event) {
        Some(handler) => handler.call(),
        None => adapters::missing_handler::<E>(table.len()),
    }
}
