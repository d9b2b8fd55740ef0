//! # ember-std
//!
//! Standard implementations for the Ember bounded event dispatch loop.
//!
//! This crate provides:
//! - **Queue**: [`BoundedQueue`], a blocking FIFO with a wake latch
//! - **Engine**: [`EventDispatcher`] with its [`Emitter`] and [`StopHandle`]
//! - **Tables**: [`DispatchTable`] (dense), [`HashTable`] (sparse)
//! - **Adapters**: [`WithIdle`], [`Bound`]
//! - **Standard hooks**: Logging
//! - **Testing utilities**: [`testing`]
//!
//! [`BoundedQueue`]: queue::BoundedQueue
//! [`EventDispatcher`]: engine::EventDispatcher
//! [`Emitter`]: engine::Emitter
//! [`StopHandle`]: engine::StopHandle
//! [`DispatchTable`]: table::DispatchTable
//! [`HashTable`]: table::HashTable
//! [`WithIdle`]: table::WithIdle
//! [`Bound`]: table::Bound

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use ember_core;

// Modules
pub mod engine;
pub mod hooks;
pub mod queue;
pub mod table;
pub mod testing;
