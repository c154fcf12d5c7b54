//! [`OutputSink`] over any byte writer.

use std::io::{self, Write};

use super::OutputSink;

/// Prefix written before every error line.
pub const ERROR_PREFIX: &str = "ERROR: ";

/// Writes each message as one newline-terminated line and flushes it.
///
/// Flushing per line keeps interactive output in step with input when the
/// writer is buffered.
#[derive(Debug)]
pub struct LineWriter<W> {
    writer: W,
}

impl<W: Write> LineWriter<W> {
    /// Wraps a byte writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the wrapped writer.
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for LineWriter<W> {
    fn write_line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()
    }

    fn write_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{ERROR_PREFIX}{message}")?;
        self.writer.flush()
    }
}
