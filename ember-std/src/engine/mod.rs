//! # Event Dispatcher
//!
//! [`EventDispatcher`] couples a [`BoundedQueue`] of events with a
//! single-consumer loop. Producers on any thread call
//! [`emit`](EventDispatcher::emit); one dedicated thread calls
//! [`run`](EventDispatcher::run), which repeatedly:
//!
//! 1. drains every queued event, dispatching each in FIFO order;
//! 2. exits if a stop has been observed;
//! 3. invokes the idle hook;
//! 4. sleeps until more events arrive or a stop wakes it.
//!
//! [`stop`](EventDispatcher::stop) raises a stop request and wakes the queue, so
//! a consumer blocked on an empty queue still gets to observe it. Once a stop
//! is observed after a drain, the loop exits without calling the idle hook
//! again; nothing is dispatched after that observation.
//!
//! A stop request stays pending until a run observes it. Stopping a dispatcher
//! whose consumer thread has been spawned but has not yet entered `run` still
//! ends that run after its first drain pass.
//!
//! # Example
//!
//! ```rust
//! use ember_core::{EventKind, Message};
//! use ember_std::{engine::EventDispatcher, table::DispatchTable};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! #[derive(Clone, Copy, Debug)]
//! enum Tick { Fast, Slow }
//!
//! impl Message for Tick {}
//! impl EventKind for Tick {
//!     const COUNT: usize = 2;
//!     fn ordinal(self) -> usize { self as usize }
//!     fn from_ordinal(n: usize) -> Option<Self> { [Tick::Fast, Tick::Slow].get(n).copied() }
//! }
//!
//! let dispatcher = EventDispatcher::<Tick>::new(16).unwrap();
//! let fast = AtomicUsize::new(0);
//! let table = DispatchTable::<Tick, _>::from_fn(|tick| {
//!     let fast = &fast;
//!     move || if matches!(tick, Tick::Fast) { fast.fetch_add(1, Ordering::SeqCst); }
//! });
//!
//! dispatcher.emit(Tick::Fast);
//! dispatcher.emit(Tick::Slow);
//! dispatcher.emit(Tick::Fast);
//!
//! std::thread::scope(|scope| {
//!     let stats = scope.spawn(|| dispatcher.run(&table));
//!     while dispatcher.pending() > 0 {
//!         std::thread::yield_now();
//!     }
//!     dispatcher.stop();
//!     assert_eq!(stats.join().unwrap().unwrap().dispatched, 3);
//! });
//! assert_eq!(fast.load(Ordering::SeqCst), 2);
//! ```

pub mod builder;
pub mod handles;

pub use builder::{DEFAULT_CAPACITY, DispatcherBuilder};
pub use handles::{Emitter, StopHandle};

use crate::queue::BoundedQueue;
use ember_core::{CapacityError, Dispatch, DispatchError, Full, Message};
use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

/// Counters for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Events handed to the dispatch target.
    pub dispatched: u64,
    /// Drain passes performed, including the final one.
    pub passes: u64,
}

/// State shared between the dispatcher and its handles.
pub(crate) struct Shared<E> {
    pub(crate) queue: BoundedQueue<E>,
    stop_requested: AtomicBool,
    consumer: AtomicBool,
    name: String,
}

impl<E> Shared<E> {
    pub(crate) fn stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
        self.queue.wake();
        #[cfg(feature = "tracing")]
        tracing::debug!(dispatcher = %self.name, "stop requested");
    }

    pub(crate) fn is_running(&self) -> bool {
        self.consumer.load(Ordering::Acquire) && !self.stop_requested()
    }

    fn stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }
}

/// Marks the consumer slot taken for the life of a run.
struct ConsumerGuard<'a, E> {
    shared: &'a Shared<E>,
}

impl<'a, E> ConsumerGuard<'a, E> {
    fn acquire(shared: &'a Shared<E>) -> Result<Self, DispatchError> {
        if shared.consumer.swap(true, Ordering::AcqRel) {
            return Err(DispatchError::AlreadyRunning);
        }
        Ok(Self { shared })
    }
}

impl<E> Drop for ConsumerGuard<'_, E> {
    // Also runs when a handler panics. The run that observed a stop consumes
    // it, along with the wake latch it left behind when it skipped the wait.
    fn drop(&mut self) {
        self.shared.stop_requested.store(false, Ordering::Release);
        self.shared.queue.clear_wake();
        self.shared.consumer.store(false, Ordering::Release);
    }
}

/// A bounded event queue drained by a single consumer loop.
///
/// The dispatcher is `Sync`: share it by reference (e.g. with
/// [`std::thread::scope`]) or hand out [`Emitter`] and [`StopHandle`] clones
/// to threads that should not hold the dispatcher itself.
///
/// # Single consumer
///
/// Only one thread may be inside [`run`](Self::run) at a time. A second
/// concurrent call fails with [`DispatchError::AlreadyRunning`] instead of
/// racing the first.
///
/// # Liveness
///
/// [`emit`](Self::emit) blocks while the queue is full. Emitting into a
/// saturated dispatcher that no thread is running blocks forever; use
/// [`try_emit`](Self::try_emit) where that matters.
pub struct EventDispatcher<E> {
    shared: Arc<Shared<E>>,
}

impl<E: Message> EventDispatcher<E> {
    /// Create a dispatcher whose queue holds at most `capacity` events.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        Self::builder().capacity(capacity).build()
    }

    /// Start configuring a dispatcher.
    pub fn builder() -> DispatcherBuilder<E> {
        DispatcherBuilder::new()
    }

    pub(crate) fn from_parts(queue: BoundedQueue<E>, name: String) -> Self {
        Self {
            shared: Arc::new(Shared {
                queue,
                stop_requested: AtomicBool::new(false),
                consumer: AtomicBool::new(false),
                name,
            }),
        }
    }

    /// Queue `event` for dispatch, blocking while the queue is full.
    ///
    /// Callable from any thread, before or during a run.
    pub fn emit(&self, event: E) {
        self.shared.queue.enqueue(event);
    }

    /// Queue `event` if there is room, handing it back otherwise.
    pub fn try_emit(&self, event: E) -> Result<(), Full<E>> {
        self.shared.queue.try_enqueue(event)
    }

    /// Run the dispatch loop on the calling thread until stopped.
    ///
    /// `dispatch` is borrowed or owned for the whole run; see the adapters in
    /// [`crate::table`] for combining a table with an idle hook or a bound
    /// receiver.
    pub fn run<D: Dispatch<E>>(&self, mut dispatch: D) -> Result<RunStats, DispatchError> {
        let shared = &*self.shared;
        let _guard = ConsumerGuard::acquire(shared)?;
        let mut stats = RunStats::default();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            dispatcher = %shared.name,
            capacity = shared.queue.capacity(),
            "dispatch loop started"
        );

        loop {
            let mut drained = 0u64;
            while let Some(event) = shared.queue.try_dequeue() {
                dispatch.dispatch(event);
                drained += 1;
            }
            stats.dispatched += drained;
            stats.passes += 1;

            #[cfg(feature = "tracing")]
            tracing::trace!(dispatcher = %shared.name, drained, "drain pass complete");

            if shared.stop_requested() {
                break;
            }
            dispatch.on_idle();
            shared.queue.wait();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            dispatcher = %shared.name,
            dispatched = stats.dispatched,
            passes = stats.passes,
            "dispatch loop stopped"
        );

        Ok(stats)
    }

    /// Ask the running loop to exit.
    ///
    /// Returns immediately; join the consumer thread to know the loop has
    /// finished. Events already drained are dispatched; anything still queued
    /// stays queued for the next run. Repeated calls are no-ops.
    ///
    /// With no run in progress the request stays pending, and the next run
    /// exits after a single drain pass.
    pub fn stop(&self) {
        self.shared.stop();
    }

    /// Whether a run is in progress and no stop has been requested.
    pub fn is_running(&self) -> bool {
        self.shared.is_running()
    }

    /// A cloneable producer handle.
    pub fn emitter(&self) -> Emitter<E> {
        Emitter::new(self.shared.clone())
    }

    /// A cloneable cancellation handle.
    pub fn stop_handle(&self) -> StopHandle<E> {
        StopHandle::new(self.shared.clone())
    }

    /// Number of events waiting to be dispatched.
    pub fn pending(&self) -> usize {
        self.shared.queue.len()
    }

    /// The queue's current capacity.
    pub fn capacity(&self) -> usize {
        self.shared.queue.capacity()
    }

    /// Change the queue capacity; queued events are kept.
    pub fn resize(&self, capacity: usize) -> Result<(), CapacityError> {
        self.shared.queue.resize(capacity)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(dispatcher = %self.shared.name, capacity, "queue resized");
        Ok(())
    }

    /// The name given at construction.
    pub fn name(&self) -> &str {
        &self.shared.name
    }
}

impl<E> fmt::Debug for EventDispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("name", &self.shared.name)
            .field("queue", &self.shared.queue)
            .field("running", &self.shared.is_running())
            .finish()
    }
}
