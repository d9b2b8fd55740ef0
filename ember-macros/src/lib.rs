//! Derive macros for Ember.
//!
//! - `#[derive(Message)]` - marks a type as queueable
//! - `#[derive(EventKind)]` - numbers the variants of a fieldless enum so it
//!   can index a `DispatchTable`

use proc_macro::TokenStream;

mod kind;
mod message;

/// Derive macro for implementing the `Message` trait.
#[proc_macro_derive(Message)]
pub fn derive_message(input: TokenStream) -> TokenStream {
    message::derive_message_impl(input)
}

/// Derive macro for implementing the `EventKind` trait on a fieldless enum.
///
/// Variants are numbered `0..COUNT` in declaration order, independent of any
/// explicit discriminants, so the ordinals are always dense. The enum must
/// also be `Copy` and implement `Message`.
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Debug, ember::Message, ember::EventKind)]
/// enum Input {
///     Key,
///     Mouse,
///     Resize,
/// }
///
/// assert_eq!(Input::COUNT, 3);
/// assert_eq!(Input::Mouse.ordinal(), 1);
/// assert_eq!(Input::Resize.name(), "Resize");
/// ```
#[proc_macro_derive(EventKind)]
pub fn derive_event_kind(input: TokenStream) -> TokenStream {
    kind::derive_event_kind_impl(input)
}
