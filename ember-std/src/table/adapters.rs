//! Adapters composing tables, idle hooks and receivers into a [`Dispatch`].
//!
//! The run loop accepts one `Dispatch` value. These wrappers build it from the
//! pieces a caller has:
//!
//! - [`WithIdle`]: any dispatch target plus a zero-argument idle hook.
//! - [`Bound`]: a table of [`BoundHandler`]s plus the receiver they run
//!   against, optionally with a bound idle hook.

use ember_core::{BoundHandler, Dispatch, Handler, HandlerTable, NoIdle};
use std::{any::type_name, fmt};

/// Reports an event with no table entry.
///
/// This is a caller contract violation: it asserts in debug builds and is
/// logged and dropped otherwise.
#[cold]
pub(crate) fn missing_handler<E>(table_len: usize) {
    debug_assert!(
        false,
        "no handler registered for `{}` event (table holds {} entries)",
        type_name::<E>(),
        table_len
    );
    #[cfg(feature = "tracing")]
    {
        tracing::warn!(
            event_type = type_name::<E>(),
            table_len,
            "dropping event with no registered handler"
        );
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = table_len;
    }
}

/// A dispatch target followed by an idle hook.
///
/// The hook runs once after every drain pass, after any idle hook of the
/// wrapped target.
pub struct WithIdle<D, I> {
    inner: D,
    idle: I,
}

impl<D, I> WithIdle<D, I> {
    /// Wrap `inner`, running `idle` after each drain pass.
    pub fn new(inner: D, idle: I) -> Self {
        Self { inner, idle }
    }

    /// Unwrap into the target and the hook.
    pub fn into_parts(self) -> (D, I) {
        (self.inner, self.idle)
    }
}

impl<E, D, I> Dispatch<E> for WithIdle<D, I>
where
    D: Dispatch<E>,
    I: Handler,
{
    #[inline]
    fn dispatch(&mut self, event: E) {
        self.inner.dispatch(event)
    }

    fn on_idle(&mut self) {
        self.inner.on_idle();
        self.idle.call();
    }
}

impl<D: fmt::Debug, I> fmt::Debug for WithIdle<D, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithIdle")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// A table of bound handlers tied to the receiver they are invoked against.
///
/// Both the table and the receiver are borrowed for the life of the adapter,
/// which therefore covers a whole run. The receiver is borrowed mutably, so
/// nothing else can touch it while the loop is dispatching.
///
/// # Example
///
/// ```rust
/// use ember_core::Dispatch;
/// use ember_std::table::HashTable;
///
/// #[derive(Default)]
/// struct Score { points: u32, rounds: u32 }
///
/// impl Score {
///     fn hit(&mut self) { self.points += 10; }
///     fn miss(&mut self) {}
///     fn end_round(&mut self) { self.rounds += 1; }
/// }
///
/// let table = HashTable::builder()
///     .on('h', Score::hit as fn(&mut Score))
///     .on('m', Score::miss)
///     .build()
///     .unwrap();
///
/// let mut score = Score::default();
/// let mut target = table.bind(&mut score).with_idle(Score::end_round);
/// target.dispatch('h');
/// target.dispatch('m');
/// Dispatch::<char>::on_idle(&mut target);
/// drop(target);
///
/// assert_eq!(score.points, 10);
/// assert_eq!(score.rounds, 1);
/// ```
pub struct Bound<'a, T: ?Sized, S: ?Sized, I = NoIdle> {
    table: &'a T,
    receiver: &'a mut S,
    idle: I,
}

impl<'a, T: ?Sized, S: ?Sized> Bound<'a, T, S> {
    /// Bind `table` to `receiver`, with no idle hook.
    pub fn new(table: &'a T, receiver: &'a mut S) -> Self {
        Self {
            table,
            receiver,
            idle: NoIdle,
        }
    }
}

impl<'a, T: ?Sized, S: ?Sized, I> Bound<'a, T, S, I> {
    /// Replace the idle hook with one invoked against the receiver after each
    /// drain pass.
    pub fn with_idle<J: BoundHandler<S>>(self, idle: J) -> Bound<'a, T, S, J> {
        Bound {
            table: self.table,
            receiver: self.receiver,
            idle,
        }
    }

    /// The bound receiver.
    pub fn receiver(&mut self) -> &mut S {
        self.receiver
    }
}

impl<E, T, S, I> Dispatch<E> for Bound<'_, T, S, I>
where
    T: HandlerTable<E> + ?Sized,
    T::Handler: BoundHandler<S>,
    S: ?Sized,
    I: BoundHandler<S>,
{
    #[inline]
    fn dispatch(&mut self, event: E) {
        match self.table.handler(&event) {
            Some(handler) => handler.call(self.receiver),
            None => missing_handler::<E>(self.table.len()),
        }
    }

    fn on_idle(&mut self) {
        self.idle.call(self.receiver);
    }
}

impl<T: ?Sized, S: ?Sized, I> fmt::Debug for Bound<'_, T, S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bound")
            .field("receiver", &type_name::<S>())
            .finish_non_exhaustive()
    }
}
