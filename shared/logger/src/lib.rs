//! Non-blocking logger shared by the stage workspace.
//!
//! Messages are filtered by [`LogLevel`], tagged with an optional component
//! and handed to a sink: a dedicated file writer thread, or an in-memory
//! capture buffer that tests and embedders can inspect.

pub mod error;
mod log_level;
mod log_message;
mod logger;
mod sink;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
