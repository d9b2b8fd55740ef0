//! Message trait for event types.

/// A marker trait for values that travel through an event queue.
///
/// Messages cross from producer threads to the consumer thread, so they must
/// be `Send + 'static`.
///
/// # Example
///
/// ```rust
/// use ember_core::Message;
///
/// #[derive(Clone, Copy, Debug)]
/// enum Input { Key, Mouse }
///
/// impl Message for Input {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + 'static`",
    note = "Events queued for dispatch must be movable across threads."
)]
pub trait Message: Send + 'static {}

// Common Message implementations
impl Message for () {}
impl Message for bool {}
impl Message for u8 {}
impl Message for u16 {}
impl Message for u32 {}
impl Message for u64 {}
impl Message for usize {}
impl Message for char {}
impl Message for String {}
impl Message for &'static str {}
impl<T: Message> Message for Box<T> {}
impl<T: Message> Message for Option<T> {}
