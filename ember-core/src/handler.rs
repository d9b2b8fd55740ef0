//! # Handlers
//!
//! The terminal point of dispatch: the code that runs for one event kind.
//!
//! Two calling conventions are supported:
//!
//! - [`Handler`]: invocable with no arguments. Plain functions (`fn()`) and
//!   closures (`|| ...`) qualify automatically.
//! - [`BoundHandler<S>`]: invoked against a receiver `&mut S` supplied once per
//!   run. Method paths such as `Counter::on_tick` (a `fn(&mut Counter)`)
//!   qualify automatically, as do closures taking `&mut S`.
//!
//! A table holds handlers of one of the two kinds; the idle hook uses the same
//! convention as the table it accompanies.
//!
//! Handlers run on the consumer thread only and are borrowed for the length of
//! a run, so neither trait requires `Send` or `Sync`.

/// A zero-argument handler.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an event handler",
    label = "missing `Handler` implementation",
    note = "Handlers are functions or closures taking no arguments: `fn()` or `|| ...`."
)]
pub trait Handler {
    /// Runs the handler.
    fn call(&self);
}

// Blanket impl for closures and function items
impl<F> Handler for F
where
    F: Fn(),
{
    #[inline]
    fn call(&self) {
        (self)()
    }
}

/// A handler invoked against a caller-supplied receiver.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be invoked against a receiver of type `{S}`",
    label = "missing `BoundHandler<{S}>` implementation",
    note = "Bound handlers take the receiver mutably: `fn(&mut {S})` or `|receiver: &mut {S}| ...`."
)]
pub trait BoundHandler<S: ?Sized> {
    /// Runs the handler against `receiver`.
    fn call(&self, receiver: &mut S);
}

impl<S, F> BoundHandler<S> for F
where
    S: ?Sized,
    F: Fn(&mut S),
{
    #[inline]
    fn call(&self, receiver: &mut S) {
        (self)(receiver)
    }
}

/// A handler that does nothing.
///
/// This is the idle hook used when none is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoIdle;

impl Handler for NoIdle {
    #[inline]
    fn call(&self) {}
}

impl<S: ?Sized> BoundHandler<S> for NoIdle {
    #[inline]
    fn call(&self, _receiver: &mut S) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counter {
        hits: u32,
    }

    impl Counter {
        fn bump(&mut self) {
            self.hits += 1;
        }
    }

    #[test]
    fn test_closure_is_handler() {
        let hits = Cell::new(0);
        let handler = || hits.set(hits.get() + 1);
        Handler::call(&handler);
        Handler::call(&handler);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_method_path_is_bound_handler() {
        let mut counter = Counter { hits: 0 };
        BoundHandler::call(&Counter::bump, &mut counter);
        assert_eq!(counter.hits, 1);
    }

    #[test]
    fn test_no_idle_does_nothing() {
        let mut counter = Counter { hits: 0 };
        Handler::call(&NoIdle);
        BoundHandler::call(&NoIdle, &mut counter);
        assert_eq!(counter.hits, 0);
    }
}
