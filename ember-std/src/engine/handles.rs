//! Cloneable handles onto a dispatcher's shared state.
//!
//! Both handles keep the queue alive on their own, so they can outlive the
//! [`EventDispatcher`](super::EventDispatcher) that created them. An
//! [`Emitter`] whose dispatcher is gone still enqueues, and will block once
//! the queue fills up.

use super::Shared;
use ember_core::{Full, Message};
use std::{fmt, sync::Arc};

/// A producer handle: emits events into a dispatcher's queue.
pub struct Emitter<E> {
    shared: Arc<Shared<E>>,
}

impl<E: Message> Emitter<E> {
    pub(crate) fn new(shared: Arc<Shared<E>>) -> Self {
        Self { shared }
    }

    /// Queue `event`, blocking while the queue is full.
    pub fn emit(&self, event: E) {
        self.shared.queue.enqueue(event);
    }

    /// Queue `event` if there is room, handing it back otherwise.
    pub fn try_emit(&self, event: E) -> Result<(), Full<E>> {
        self.shared.queue.try_enqueue(event)
    }
}

impl<E> Clone for Emitter<E> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("queue", &self.shared.queue)
            .finish()
    }
}

/// A cancellation handle for a dispatcher's run loop.
///
/// [`stop`](StopHandle::stop) raises a stop request and wakes the queue in one
/// step, so the consumer leaves its wait even when no events are pending. The
/// request stays pending until a run observes it, so stopping a consumer that
/// is still starting up is not lost.
pub struct StopHandle<E> {
    shared: Arc<Shared<E>>,
}

impl<E> StopHandle<E> {
    pub(crate) fn new(shared: Arc<Shared<E>>) -> Self {
        Self { shared }
    }

    /// Ask the loop to exit, now or as soon as the next run has drained once.
    /// Does not wait for it to do so.
    pub fn stop(&self) {
        self.shared.stop();
    }

    /// Whether the loop is running and no stop has been requested.
    pub fn is_running(&self) -> bool {
        self.shared.is_running()
    }
}

impl<E> Clone for StopHandle<E> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<E> fmt::Debug for StopHandle<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopHandle")
            .field("running", &self.is_running())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::EventDispatcher;
    use std::thread;

    #[test]
    fn test_emitter_feeds_queue_from_other_threads() {
        let dispatcher = EventDispatcher::<u32>::new(64).unwrap();
        let emitter = dispatcher.emitter();

        let producers: Vec<_> = (0..4)
            .map(|i| {
                let emitter = emitter.clone();
                thread::spawn(move || {
                    for j in 0..10 {
                        emitter.emit(i * 10 + j);
                    }
                })
            })
            .collect();
        for producer in producers {
            producer.join().unwrap();
        }

        assert_eq!(dispatcher.pending(), 40);
    }

    #[test]
    fn test_emitter_try_emit_when_full() {
        let dispatcher = EventDispatcher::<u32>::new(1).unwrap();
        let emitter = dispatcher.emitter();
        assert!(emitter.try_emit(1).is_ok());
        assert_eq!(emitter.try_emit(2).unwrap_err().into_inner(), 2);
        assert!(dispatcher.try_emit(3).is_err());
    }

    #[test]
    fn test_emitter_outlives_dispatcher() {
        let dispatcher = EventDispatcher::<u32>::new(2).unwrap();
        let emitter = dispatcher.emitter();
        drop(dispatcher);
        emitter.emit(1);
        assert!(emitter.try_emit(2).is_ok());
        assert!(emitter.try_emit(3).is_err());
    }

    #[test]
    fn test_stop_handle_is_idempotent_when_idle() {
        let dispatcher = EventDispatcher::<u32>::new(2).unwrap();
        let handle = dispatcher.stop_handle();
        assert!(!handle.is_running());
        handle.stop();
        handle.clone().stop();
        assert!(!dispatcher.is_running());
        assert_eq!(dispatcher.pending(), 0);
    }
}
