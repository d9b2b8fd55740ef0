//! Densely indexed event kinds.

use crate::message::Message;

/// An enumerated event type whose members map onto the contiguous ordinals
/// `0..COUNT`.
///
/// The ordinal is what a dense `DispatchTable` indexes by, so an implementation
/// must satisfy:
///
/// - `kind.ordinal() < Self::COUNT` for every value;
/// - `Self::from_ordinal(kind.ordinal()) == Some(kind)`;
/// - `Self::from_ordinal(n)` is `None` for every `n >= Self::COUNT`.
///
/// With the `macros` feature, `#[derive(EventKind)]` generates all of this for
/// fieldless enums, numbering variants in declaration order.
///
/// # Example
///
/// ```rust
/// use ember_core::{EventKind, Message};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Signal { Start, Stop }
///
/// impl Message for Signal {}
///
/// impl EventKind for Signal {
///     const COUNT: usize = 2;
///
///     fn ordinal(self) -> usize {
///         self as usize
///     }
///
///     fn from_ordinal(ordinal: usize) -> Option<Self> {
///         match ordinal {
///             0 => Some(Signal::Start),
///             1 => Some(Signal::Stop),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Signal::Stop.ordinal(), 1);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a densely indexed event kind",
    label = "missing `EventKind` implementation",
    note = "Derive `EventKind` on a fieldless enum, or implement `ordinal`/`from_ordinal` by hand."
)]
pub trait EventKind: Message + Copy {
    /// Number of distinct kinds, which is also the required dispatch table length.
    const COUNT: usize;

    /// The dense index of this kind.
    fn ordinal(self) -> usize;

    /// The kind with the given index, if there is one.
    fn from_ordinal(ordinal: usize) -> Option<Self>;

    /// Every kind in ordinal order.
    fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).filter_map(Self::from_ordinal)
    }

    /// A short label for log output.
    ///
    /// Defaults to the type name; the derive returns the variant name.
    fn name(self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl EventKind for bool {
    const COUNT: usize = 2;

    fn ordinal(self) -> usize {
        self as usize
    }

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        match ordinal {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        }
    }
}
