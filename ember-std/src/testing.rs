//! Testing utilities for Ember.
//!
//! This module provides utilities to make testing dispatch loops easier.
//!
//! # Features
//!
//! - [`Recorder`]: Records which handlers ran, in order, across threads
//! - [`CountingHandler`]: A handler that counts invocations

use ember_core::{BoundHandler, Handler};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recorder
// ============================================================================

/// A shared, ordered log of handler invocations.
///
/// Hand out [`Recorder::handler`] closures as table entries; each pushes its
/// value when invoked. Clones share the same log, so the test thread can
/// inspect what the consumer thread did.
///
/// # Example
///
/// ```rust
/// use ember_core::Handler;
/// use ember_std::testing::Recorder;
///
/// let recorder = Recorder::new();
/// let on_a = recorder.handler('a');
/// let on_b = recorder.handler('b');
///
/// Handler::call(&on_b);
/// Handler::call(&on_a);
/// assert_eq!(recorder.entries(), vec!['b', 'a']);
/// ```
pub struct Recorder<T> {
    entries: Arc<Mutex<Vec<T>>>,
}

impl<T> Recorder<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append `value` to the log.
    pub fn record(&self, value: T) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
    }

    /// Get the number of recorded entries.
    pub fn count(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Clear all recorded entries.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<T: Clone> Recorder<T> {
    /// A zero-argument handler that records `value` each time it runs.
    pub fn handler(&self, value: T) -> impl Fn() + Send + Sync + 'static
    where
        T: Send + Sync + 'static,
    {
        let recorder = self.clone();
        move || recorder.record(value.clone())
    }

    /// A handler invoked against any receiver that records `value` each time
    /// it runs.
    pub fn bound_handler(&self, value: T) -> RecordingHandler<T> {
        RecordingHandler {
            recorder: self.clone(),
            value,
        }
    }

    /// Get a clone of the recorded entries.
    pub fn entries(&self) -> Vec<T> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

/// A handler that appends a fixed value to a [`Recorder`].
///
/// Implements both [`Handler`] and [`BoundHandler`] for any receiver.
pub struct RecordingHandler<T> {
    recorder: Recorder<T>,
    value: T,
}

impl<T: Clone> Handler for RecordingHandler<T> {
    fn call(&self) {
        self.recorder.record(self.value.clone());
    }
}

impl<S: ?Sized, T: Clone> BoundHandler<S> for RecordingHandler<T> {
    fn call(&self, _receiver: &mut S) {
        self.recorder.record(self.value.clone());
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
///
/// # Example
///
/// ```rust
/// use ember_core::Handler;
/// use ember_std::testing::CountingHandler;
///
/// let counter = CountingHandler::new();
/// let counter_clone = counter.clone();
///
/// counter.call();
///
/// assert_eq!(counter_clone.count(), 1);
/// ```
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingHandler {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl Handler for CountingHandler {
    fn call(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

impl<S: ?Sized> BoundHandler<S> for CountingHandler {
    fn call(&self, _receiver: &mut S) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
