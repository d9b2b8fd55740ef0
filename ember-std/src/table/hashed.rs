//! HashMap-backed dispatch table.
//!
//! The fallback for event types that are not densely indexed: any
//! `Hash + Eq` value can be a key. Every dispatch pays for a hash and a probe
//! instead of the single index of [`DispatchTable`](super::DispatchTable).

use super::{
    adapters::{Bound, WithIdle},
    dispatch_free,
};
use ember_core::{Dispatch, EventKind, Handler, HandlerTable, TableError};
use std::{
    collections::{HashMap, hash_map::Entry},
    fmt,
    hash::Hash,
};

/// A dispatch table keyed by event value.
///
/// Unlike a dense table, nothing guarantees every event has an entry; a
/// missing one is a caller contract violation reported at dispatch time.
pub struct HashTable<K, H> {
    map: HashMap<K, H>,
}

impl<K, H> HashTable<K, H> {
    /// Start building a table.
    pub fn builder() -> HashTableBuilder<K, H> {
        HashTableBuilder::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
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

impl<K: Hash + Eq, H> HashTable<K, H> {
    /// Create a table from an existing map.
    pub fn from_map(map: HashMap<K, H>) -> Self {
        Self { map }
    }

    /// The handler registered for `event`.
    pub fn get(&self, event: &K) -> Option<&H> {
        self.map.get(event)
    }
}

impl<K: Hash + Eq, H> HandlerTable<K> for HashTable<K, H> {
    type Handler = H;

    #[inline]
    fn handler(&self, event: &K) -> Option<&H> {
        self.map.get(event)
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

impl<K: Hash + Eq, H: Handler> Dispatch<K> for &HashTable<K, H> {
    #[inline]
    fn dispatch(&mut self, event: K) {
        dispatch_free(*self, event)
    }
}

impl<K, H> fmt::Debug for HashTable<K, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("len", &self.map.len())
            .finish()
    }
}

/// Builder for [`HashTable`].
///
/// Registrations chain; a conflicting registration is remembered and reported
/// by [`build`](Self::build), so a table is never half-built from a list with
/// a typo in it.
///
/// # Example
///
/// ```rust
/// use ember_std::table::HashTable;
///
/// fn save() {}
/// fn quit() {}
///
/// let table = HashTable::builder()
///     .on("save", save as fn())
///     .on("quit", quit)
///     .build()
///     .unwrap();
/// assert_eq!(table.len(), 2);
///
/// let clash = HashTable::builder().on("save", save as fn()).on("save", quit).build();
/// assert!(clash.is_err());
/// ```
pub struct HashTableBuilder<K, H> {
    map: HashMap<K, H>,
    conflict: Option<String>,
}

impl<K, H> Default for HashTableBuilder<K, H> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            conflict: None,
        }
    }
}

impl<K, H> HashTableBuilder<K, H>
where
    K: Hash + Eq + fmt::Debug,
{
    /// Register `handler` for `event`.
    ///
    /// The first handler registered for an event wins; any later one is a
    /// conflict that [`build`](Self::build) reports.
    pub fn on(mut self, event: K, handler: H) -> Self {
        match self.map.entry(event) {
            Entry::Occupied(entry) => {
                self.conflict
                    .get_or_insert_with(|| format!("{:?}", entry.key()));
            }
            Entry::Vacant(entry) => {
                entry.insert(handler);
            }
        }
        self
    }

    /// Register `handler` for `event`, replacing any earlier registration.
    pub fn replace(mut self, event: K, handler: H) -> Self {
        self.map.insert(event, handler);
        self
    }

    /// Build the table.
    ///
    /// Fails with [`TableError::DuplicateKey`] naming the first event that
    /// was registered twice through [`on`](Self::on).
    pub fn build(self) -> Result<HashTable<K, H>, TableError> {
        match self.conflict {
            Some(event) => Err(TableError::DuplicateKey(event)),
            None => Ok(HashTable { map: self.map }),
        }
    }
}

impl<E, H> HashTableBuilder<E, H>
where
    E: EventKind + Hash + Eq + fmt::Debug,
{
    /// Build the table, also requiring a handler for every kind of `E`.
    ///
    /// Fails with [`TableError::MissingKind`] naming the first uncovered kind
    /// in ordinal order.
    pub fn build_exhaustive(self) -> Result<HashTable<E, H>, TableError> {
        let table = self.build()?;
        match E::all().find(|kind| !table.map.contains_key(kind)) {
            Some(kind) => Err(TableError::MissingKind(kind.name())),
            None => Ok(table),
        }
    }
}
