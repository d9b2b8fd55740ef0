//! Builder for [`EventDispatcher`].

use super::EventDispatcher;
use crate::queue::BoundedQueue;
use ember_core::{CapacityError, Message};
use std::marker::PhantomData;

/// Queue capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 64;

const DEFAULT_NAME: &str = "dispatcher";

/// Builder for constructing an [`EventDispatcher`].
///
/// # Example
///
/// ```rust
/// use ember_std::engine::{EventDispatcher, DEFAULT_CAPACITY};
///
/// let dispatcher = EventDispatcher::<u8>::builder()
///     .name("keyboard")
///     .build()
///     .unwrap();
/// assert_eq!(dispatcher.capacity(), DEFAULT_CAPACITY);
/// assert_eq!(dispatcher.name(), "keyboard");
/// ```
#[derive(Debug, Clone)]
pub struct DispatcherBuilder<E> {
    capacity: usize,
    name: String,
    _event: PhantomData<fn() -> E>,
}

impl<E> Default for DispatcherBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> DispatcherBuilder<E> {
    /// Create a builder with the default capacity and name.
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            name: DEFAULT_NAME.to_string(),
            _event: PhantomData,
        }
    }

    /// Maximum number of queued events before `emit` blocks.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Label used in log output.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<E: Message> DispatcherBuilder<E> {
    /// Build the dispatcher, consuming the builder.
    ///
    /// Fails with [`CapacityError::Zero`] if the capacity is zero.
    pub fn build(self) -> Result<EventDispatcher<E>, CapacityError> {
        let queue = BoundedQueue::new(self.capacity)?;
        Ok(EventDispatcher::from_parts(queue, self.name))
    }
}
