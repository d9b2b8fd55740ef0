//! Standard handler wrappers.

pub mod logging;

pub use logging::LoggingHandler;
