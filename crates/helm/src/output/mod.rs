//! Line-oriented output for command handlers.
//!
//! Handlers write through an [`OutputSink`]: plain lines end with a newline,
//! error lines additionally carry the [`ERROR_PREFIX`]. Structured payloads go
//! through a [`Formatter`] first.

use std::io;

mod format;
mod writer;

pub use format::{FormatError, Formatter, JsonFormatter};
pub use writer::{ERROR_PREFIX, LineWriter};

/// Destination for command output.
pub trait OutputSink {
    /// Writes `message` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error when the write fails.
    fn write_line(&mut self, message: &str) -> io::Result<()>;

    /// Writes `message` as an error line.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error when the write fails.
    fn write_error(&mut self, message: &str) -> io::Result<()>;
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn write_line(&mut self, message: &str) -> io::Result<()> {
        (**self).write_line(message)
    }

    fn write_error(&mut self, message: &str) -> io::Result<()> {
        (**self).write_error(message)
    }
}
