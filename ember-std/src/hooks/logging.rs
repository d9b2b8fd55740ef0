//! Logging wrapper for handler observation.

use ember_core::{BoundHandler, Handler};

/// A handler wrapper that logs each invocation before delegating.
///
/// Works for both calling conventions, so it can wrap table entries and idle
/// hooks alike. Without the `tracing` feature it only delegates.
///
/// # Example
///
/// ```rust
/// use ember_core::Handler;
/// use ember_std::hooks::LoggingHandler;
///
/// let handler = LoggingHandler::new("on_key", || {});
/// handler.call();
/// assert_eq!(handler.label(), "on_key");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoggingHandler<H> {
    inner: H,
    label: &'static str,
}

impl<H> LoggingHandler<H> {
    /// Wrap `inner`, logging under `label`.
    pub const fn new(label: &'static str, inner: H) -> Self {
        Self { inner, label }
    }

    /// The label used in log output.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Unwrap the inner handler.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: Handler> Handler for LoggingHandler<H> {
    fn call(&self) {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(handler = self.label, "handling event");
        }
        self.inner.call();
    }
}

impl<S: ?Sized, H: BoundHandler<S>> BoundHandler<S> for LoggingHandler<H> {
    fn call(&self, receiver: &mut S) {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(
                handler = self.label,
                receiver = std::any::type_name::<S>(),
                "handling event"
            );
        }
        self.inner.call(receiver);
    }
}
