//! # ember-core
//!
//! Core traits for the Ember bounded event dispatch loop.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that defines events or handlers without needing the queue and loop
//! implementations in `ember-std`.
//!
//! # Layers
//!
//! ## Events ([`Message`], [`EventKind`])
//!
//! Anything queued must be a [`Message`]. Enumerations that map onto dense
//! ordinals implement [`EventKind`] so they can index an array-backed table.
//!
//! ## Handlers ([`Handler`], [`BoundHandler`])
//!
//! The code that runs for one event kind: either a zero-argument callable, or
//! a callable invoked against a receiver supplied once per run.
//!
//! ## Tables ([`HandlerTable`])
//!
//! Lookup from an event to its handler. Owned by the caller and borrowed by
//! the loop for the length of a run.
//!
//! ## Dispatch ([`Dispatch`])
//!
//! What the run loop actually drives: a table combined with an optional idle
//! hook and, for bound handlers, the receiver.
//!
//! # Error Types
//!
//! - [`EmberError`] - Top-level error type
//! - [`CapacityError`] - Rejected queue capacities
//! - [`TableError`] - Malformed dispatch tables
//! - [`DispatchError`] - Loop start failures
//! - [`Full`] - Non-blocking enqueue on a full queue

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;
mod error;
mod handler;
mod kind;
mod message;
mod table;

// Re-exports
pub use dispatcher::Dispatch;
pub use error::{CapacityError, DispatchError, EmberError, Full, TableError};
pub use handler::{BoundHandler, Handler, NoIdle};
pub use kind::EventKind;
pub use message::Message;
pub use table::HandlerTable;
