//! # ember - Bounded Event Dispatch Loop
//!
//! `ember` couples a fixed-capacity, thread-safe FIFO with a single consumer
//! loop. Any number of producer threads [`emit`](EventDispatcher::emit)
//! events; one thread [`run`](EventDispatcher::run)s the loop, which drains
//! the queue, looks each event up in a caller-owned handler table, invokes
//! an optional idle hook once the queue is empty, and then sleeps until more
//! events arrive or a [`stop`](EventDispatcher::stop) wakes it.
//!
//! ## Quick Start
//!
//! ```rust
//! use ember::{DispatchTable, EventDispatcher, EventKind, Message};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! #[derive(Clone, Copy, Debug)]
//! enum Key { Up, Down }
//!
//! impl Message for Key {}
//! impl EventKind for Key {
//!     const COUNT: usize = 2;
//!     fn ordinal(self) -> usize { self as usize }
//!     fn from_ordinal(n: usize) -> Option<Self> { [Key::Up, Key::Down].get(n).copied() }
//! }
//!
//! let presses = AtomicUsize::new(0);
//! let on_key = || { presses.fetch_add(1, Ordering::SeqCst); };
//! let table = DispatchTable::<Key, _>::from_fn(|_| &on_key);
//!
//! let dispatcher = EventDispatcher::<Key>::new(8).unwrap();
//! dispatcher.emit(Key::Up);
//! dispatcher.emit(Key::Down);
//!
//! std::thread::scope(|scope| {
//!     let consumer = scope.spawn(|| dispatcher.run(&table));
//!     while dispatcher.pending() > 0 {
//!         std::thread::yield_now();
//!     }
//!     dispatcher.stop();
//!     consumer.join().unwrap().unwrap();
//! });
//! assert_eq!(presses.load(Ordering::SeqCst), 2);
//! ```
//!
//! ## Handler conventions
//!
//! - Free handlers: a [`DispatchTable`] of [`Handler`]s (any `Fn()`), with an
//!   optional idle hook attached through [`DispatchTable::with_idle`].
//! - Bound handlers: a table of [`BoundHandler`]s (any `Fn(&mut S)`, which
//!   includes plain method paths like `Player::jump`), bound to a receiver
//!   for the length of a run with [`DispatchTable::bind`].
//!
//! ## Features
//!
//! - `macros`: `#[derive(Message)]` and `#[derive(EventKind)]`
//! - `tracing`: structured log output from the loop and [`hooks`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use ember_core::{
    // Handlers
    BoundHandler,
    // Errors
    CapacityError,
    // Loop target
    Dispatch,
    DispatchError,
    EmberError,
    // Events
    EventKind,
    Full,
    Handler,
    // Tables
    HandlerTable,
    Message,
    NoIdle,
    TableError,
};

// Queue
pub use ember_std::queue::{BoundedQueue, Wakeup};

// Engine
pub use ember_std::engine::{
    DEFAULT_CAPACITY, DispatcherBuilder, Emitter, EventDispatcher, RunStats, StopHandle,
};

// Tables
pub use ember_std::table::{Bound, DispatchTable, HashTable, HashTableBuilder, WithIdle};

/// Standard handler wrappers.
pub mod hooks {
    pub use ember_std::hooks::LoggingHandler;
}

/// Testing utilities.
pub mod testing {
    pub use ember_std::testing::{CountingHandler, Recorder, RecordingHandler};
}

/// Prelude module - common imports for Ember.
///
/// # Usage
///
/// ```rust
/// use ember::prelude::*;
///
/// let dispatcher = EventDispatcher::<u8>::new(4).unwrap();
/// assert_eq!(dispatcher.capacity(), 4);
/// ```
pub mod prelude {
    pub use crate::{
        BoundHandler, Dispatch, DispatchTable, EventDispatcher, EventKind, Handler, HashTable,
        Message,
    };
}

#[cfg(feature = "macros")]
pub use ember_macros::{EventKind, Message};
