//! Bounded blocking FIFO queue.
//!
//! [`BoundedQueue`] is a fixed-capacity FIFO shared between any number of
//! producers and a single consumer-side waiter. Every operation takes the one
//! internal mutex; two condition variables separate the "not empty" and
//! "not full" transitions so producers and consumers never wake each other
//! needlessly.
//!
//! Besides blocking and non-blocking enqueue/dequeue, the queue carries a wake
//! latch: [`wait`](BoundedQueue::wait) blocks until there is data *or* the latch
//! is set by [`wake`](BoundedQueue::wake), and removes nothing. The dispatch
//! loop uses this pair to sleep on "work or stop" with a single wait.
//!
//! # Liveness
//!
//! Blocking is the overflow policy. A producer calling
//! [`enqueue`](BoundedQueue::enqueue) on a full queue that nobody drains blocks
//! forever: memory stays bounded, liveness is the caller's responsibility.

use ember_core::{CapacityError, Full};
use std::{
    collections::VecDeque,
    num::NonZeroUsize,
    sync::{Condvar, Mutex, MutexGuard, PoisonError},
};

/// Why [`BoundedQueue::wait`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wakeup {
    /// Items are available and no wake was pending.
    Ready,
    /// A pending wake was consumed. The queue may still be empty.
    Woken,
}

impl Wakeup {
    /// Whether a wake latch was consumed.
    pub fn is_woken(self) -> bool {
        matches!(self, Wakeup::Woken)
    }
}

struct State<T> {
    items: VecDeque<T>,
    capacity: usize,
    woken: bool,
}

impl<T> State<T> {
    fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}

/// A bounded, thread-safe FIFO with blocking and non-blocking operations and
/// an explicit wake latch.
///
/// # Example
///
/// ```rust
/// use ember_std::queue::BoundedQueue;
///
/// let queue = BoundedQueue::new(2).unwrap();
/// queue.enqueue('a');
/// assert!(queue.try_enqueue('b').is_ok());
/// assert!(queue.try_enqueue('c').is_err());
///
/// assert_eq!(queue.dequeue(), 'a');
/// assert_eq!(queue.try_dequeue(), Some('b'));
/// assert_eq!(queue.try_dequeue(), None);
/// ```
pub struct BoundedQueue<T> {
    state: Mutex<State<T>>,
    not_empty: Condvar,
    not_full: Condvar,
}

impl<T> BoundedQueue<T> {
    /// Create a queue holding at most `capacity` items.
    ///
    /// Fails with [`CapacityError::Zero`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(CapacityError::Zero)?;
        Ok(Self::with_capacity(capacity))
    }

    /// Create a queue holding at most `capacity` items.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            state: Mutex::new(State {
                items: VecDeque::with_capacity(capacity.get()),
                capacity: capacity.get(),
                woken: false,
            }),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
        }
    }

    // No operation panics while holding the lock, so a poisoned state is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append `item` at the tail, blocking while the queue is full.
    pub fn enqueue(&self, item: T) {
        let mut state = self
            .not_full
            .wait_while(self.lock(), |state| state.is_full())
            .unwrap_or_else(PoisonError::into_inner);
        state.items.push_back(item);
        drop(state);
        self.not_empty.notify_one();
    }

    /// Append `item` at the tail if there is room.
    ///
    /// Never blocks. On a full queue the item is handed back in [`Full`] and
    /// the queue is left untouched.
    pub fn try_enqueue(&self, item: T) -> Result<(), Full<T>> {
        let mut state = self.lock();
        if state.is_full() {
            return Err(Full(item));
        }
        state.items.push_back(item);
        drop(state);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Remove and return the head item, blocking while the queue is empty.
    ///
    /// A pending wake does not release this call; see [`wait`](Self::wait).
    pub fn dequeue(&self) -> T {
        let mut state = self.lock();
        loop {
            if let Some(item) = state.items.pop_front() {
                drop(state);
                self.not_full.notify_one();
                return item;
            }
            state = self
                .not_empty
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Remove and return the head item, or `None` if the queue is empty.
    pub fn try_dequeue(&self) -> Option<T> {
        let item = self.lock().items.pop_front()?;
        self.not_full.notify_one();
        Some(item)
    }

    /// Block until the queue holds an item or a wake is pending.
    ///
    /// Removes nothing. Any pending wake is consumed, so a single
    /// [`wake`](Self::wake) releases exactly one `wait`.
    pub fn wait(&self) -> Wakeup {
        let mut state = self
            .not_empty
            .wait_while(self.lock(), |state| {
                state.items.is_empty() && !state.woken
            })
            .unwrap_or_else(PoisonError::into_inner);
        if std::mem::take(&mut state.woken) {
            Wakeup::Woken
        } else {
            Wakeup::Ready
        }
    }

    /// Release the current or next [`wait`](Self::wait), whether or not the
    /// queue holds anything.
    ///
    /// Idempotent: the latch is a flag, not a counter.
    pub fn wake(&self) {
        self.lock().woken = true;
        // A blocked `dequeue` shares the condition; make sure the waiter sees it.
        self.not_empty.notify_all();
    }

    /// Drop a pending wake without waiting.
    pub(crate) fn clear_wake(&self) {
        self.lock().woken = false;
    }

    /// Change the capacity used by future enqueue decisions.
    ///
    /// Existing items are never evicted; a queue shrunk below its current
    /// length stays over capacity until it drains.
    pub fn resize(&self, capacity: usize) -> Result<(), CapacityError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(CapacityError::Zero)?;
        let grew = {
            let mut state = self.lock();
            let grew = capacity.get() > state.capacity;
            state.capacity = capacity.get();
            grew
        };
        if grew {
            self.not_full.notify_all();
        }
        Ok(())
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    /// Whether a non-blocking enqueue would be rejected right now.
    pub fn is_full(&self) -> bool {
        self.lock().is_full()
    }

    /// The current capacity bound.
    pub fn capacity(&self) -> usize {
        self.lock().capacity
    }
}

impl<T> std::fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("BoundedQueue")
            .field("len", &state.items.len())
            .field("capacity", &state.capacity)
            .field("woken", &state.woken)
            .finish()
    }
}
