//! Dispatch core trait.

/// The consumer-side view of a dispatch target.
///
/// The run loop hands every dequeued event to [`dispatch`](Dispatch::dispatch)
/// in FIFO order and calls [`on_idle`](Dispatch::on_idle) once after each
/// drain pass, while it is still running.
///
/// Tables, idle hooks and bound receivers are composed into one `Dispatch`
/// value by the adapters in `ember-std`:
///
/// | variant                      | value passed to `run`                       |
/// |------------------------------|---------------------------------------------|
/// | plain table                  | `&table`                                    |
/// | table + idle hook            | `table.with_idle(hook)`                     |
/// | bound table + receiver       | `table.bind(&mut receiver)`                 |
/// | bound table + bound idle     | `table.bind(&mut receiver).with_idle(hook)` |
///
/// Implementing the trait by hand is also fine; a `match` over the event is a
/// perfectly good dispatch table.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch events of type `{E}`",
    label = "missing `Dispatch` implementation",
    note = "Pass `&table`, `table.with_idle(..)` or `table.bind(&mut receiver)`, or implement `Dispatch<{E}>`."
)]
pub trait Dispatch<E> {
    /// Invokes the handler for `event`.
    fn dispatch(&mut self, event: E);

    /// Called once after every drain pass. Does nothing by default.
    fn on_idle(&mut self) {}
}

impl<E, D: Dispatch<E> + ?Sized> Dispatch<E> for &mut D {
    #[inline]
    fn dispatch(&mut self, event: E) {
        (**self).dispatch(event)
    }

    #[inline]
    fn on_idle(&mut self) {
        (**self).on_idle()
    }
}

impl<E, D: Dispatch<E> + ?Sized> Dispatch<E> for Box<D> {
    #[inline]
    fn dispatch(&mut self, event: E) {
        (**self).dispatch(event)
    }

    #[inline]
    fn on_idle(&mut self) {
        (**self).on_idle()
    }
}
