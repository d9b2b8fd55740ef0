#![allow(dead_code)]

use ember::{EventDispatcher, EventKind, Message};
use std::thread;

// ============================================================================
// Test Event Types
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    Zero,
    One,
    Two,
}

impl Message for Signal {}

impl EventKind for Signal {
    const COUNT: usize = 3;

    fn ordinal(self) -> usize {
        self as usize
    }

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        match ordinal {
            0 => Some(Signal::Zero),
            1 => Some(Signal::One),
            2 => Some(Signal::Two),
            _ => None,
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Spin until `condition` holds.
pub fn wait_until(condition: impl Fn() -> bool) {
    while !condition() {
        thread::yield_now();
    }
}

/// Spin until a consumer has entered `run`.
pub fn wait_until_running<E: Message>(dispatcher: &EventDispatcher<E>) {
    wait_until(|| dispatcher.is_running());
}
