//! Array-backed dispatch table indexed by event ordinal.

use super::{
    adapters::{Bound, WithIdle, missing_handler},
    dispatch_free,
};
use ember_core::{Dispatch, EventKind, Handler, HandlerTable, TableError};
use std::{fmt, marker::PhantomData, ops::Index};

/// A dispatch table holding exactly one handler per [`EventKind`] value.
///
/// Handlers are stored in ordinal order, so lookup is a single bounds-checked
/// index. The length is validated against `E::COUNT` at construction; after
/// that, every value of `E` has an entry.
///
/// All handlers share one type `H`. Plain functions coerce to `fn()`;
/// closures capturing different state can be boxed as `Box<dyn Fn()>`.
///
/// # Example
///
/// ```rust
/// use ember_core::{EventKind, Message};
/// use ember_std::table::DispatchTable;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Key { Up, Down }
///
/// impl Message for Key {}
/// impl EventKind for Key {
///     const COUNT: usize = 2;
///     fn ordinal(self) -> usize { self as usize }
///     fn from_ordinal(n: usize) -> Option<Self> {
///         [Key::Up, Key::Down].get(n).copied()
///     }
/// }
///
/// fn up() {}
/// fn down() {}
///
/// let table: DispatchTable<Key, fn()> = DispatchTable::new([up as fn(), down]).unwrap();
/// assert_eq!(table.len(), 2);
///
/// assert!(DispatchTable::<Key, fn()>::new([up as fn()]).is_err());
/// ```
pub struct DispatchTable<E, H> {
    handlers: Box<[H]>,
    _event: PhantomData<fn(E)>,
}

impl<E: EventKind, H> DispatchTable<E, H> {
    /// Build a table from handlers listed in ordinal order.
    ///
    /// Fails with [`TableError::LengthMismatch`] unless exactly `E::COUNT`
    /// handlers are supplied.
    pub fn new(handlers: impl IntoIterator<Item = H>) -> Result<Self, TableError> {
        let handlers: Box<[H]> = handlers.into_iter().collect();
        if handlers.len() != E::COUNT {
            return Err(TableError::LengthMismatch {
                expected: E::COUNT,
                actual: handlers.len(),
            });
        }
        Ok(Self {
            handlers,
            _event: PhantomData,
        })
    }

    /// Build a table by mapping every event kind to its handler.
    pub fn from_fn(f: impl FnMut(E) -> H) -> Self {
        let handlers: Box<[H]> = E::all().map(f).collect();
        debug_assert_eq!(
            handlers.len(),
            E::COUNT,
            "EventKind::from_ordinal does not cover 0..COUNT"
        );
        Self {
            handlers,
            _event: PhantomData,
        }
    }

    /// The handler for `event`.
    #[inline]
    pub fn get(&self, event: E) -> Option<&H> {
        self.handlers.get(event.ordinal())
    }

    /// Handlers paired with their event kinds, in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (E, &H)> {
        E::all().zip(self.handlers.iter())
    }

    /// Number of handlers, always `E::COUNT`.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the table is empty, which only happens for an uninhabited `E`.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Pair the table with an idle hook run once per drain pass.
    pub fn with_idle<I: Handler>(&self, idle: I) -> WithIdle<&Self, I> {
        WithIdle::new(self, idle)
    }

    /// Bind the table to the receiver its handlers are invoked against.
    pub fn bind<'a, S: ?Sized>(&'a self, receiver: &'a mut S) -> Bound<'a, Self, S> {
        Bound::new(self, receiver)
    }
}

impl<E: EventKind, H> HandlerTable<E> for DispatchTable<E, H> {
    type Handler = H;

    #[inline]
    fn handler(&self, event: &E) -> Option<&H> {
        self.get(*event)
    }

    fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl<E: EventKind, H: Handler> Dispatch<E> for &DispatchTable<E, H> {
    #[inline]
    fn dispatch(&mut self, event: E) {
        dispatch_free(*self, event)
    }
}

impl<E: EventKind, H> Index<E> for DispatchTable<E, H> {
    type Output = H;

    fn index(&self, event: E) -> &H {
        match self.get(event) {
            Some(handler) => handler,
            None => {
                missing_handler::<E>(self.handlers.len());
                panic!("no handler at ordinal {}", event.ordinal())
            }
        }
    }
}

impl<E: EventKind, H> TryFrom<Vec<H>> for DispatchTable<E, H> {
    type Error = TableError;

    fn try_from(handlers: Vec<H>) -> Result<Self, Self::Error> {
        Self::new(handlers)
    }
}

impl<E, H> fmt::Debug for DispatchTable<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("event", &std::any::type_name::<E>())
            .field("len", &self.handlers.len())
            .finish()
    }
}
