//! Bounded line reading.
//!
//! A [`LineSource`] yields one raw line per call. [`ReaderSource`] never holds
//! more than the configured bound in memory: an oversized line is drained up
//! to its terminator and reported as [`LineRead::Oversized`].

use std::io::{self, BufRead, ErrorKind, Read};

/// One result from a [`LineSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRead {
    /// A complete line, terminator included when one was present.
    Line(Vec<u8>),
    /// A line longer than the bound; its bytes were discarded.
    Oversized {
        /// Bytes consumed for the line, terminator included.
        size: usize,
        /// The configured bound.
        limit: usize,
    },
    /// No more bytes are available right now.
    EndOfStream,
}

/// Supplies raw input lines.
pub trait LineSource {
    /// Reads the next line.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error when reading fails.
    fn next_line(&mut self) -> io::Result<LineRead>;
}

/// [`LineSource`] over a buffered reader.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    max_line_bytes: usize,
}

impl<R: BufRead> ReaderSource<R> {
    /// Reads lines from `reader`, each at most `max_line_bytes` long
    /// including its terminator.
    pub const fn new(reader: R, max_line_bytes: usize) -> Self {
        Self {
            reader,
            max_line_bytes,
        }
    }

    /// The per-line bound in bytes.
    pub const fn max_line_bytes(&self) -> usize {
        self.max_line_bytes
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<LineRead> {
        let limit = u64::try_from(self.max_line_bytes).unwrap_or(u64::MAX);
        let mut buffer = Vec::new();
        let read = (&mut self.reader)
            .take(limit)
            .read_until(b'\n', &mut buffer)?;

        if read == 0 {
            return Ok(LineRead::EndOfStream);
        }
        if buffer.ends_with(b"\n") || read < self.max_line_bytes {
            return Ok(LineRead::Line(buffer));
        }

        let discarded = discard_line(&mut self.reader)?;
        if discarded == 0 {
            // Exactly at the bound with nothing left: a final unterminated line.
            return Ok(LineRead::Line(buffer));
        }
        Ok(LineRead::Oversized {
            size: read.saturating_add(discarded),
            limit: self.max_line_bytes,
        })
    }
}

/// Consumes bytes up to and including the next newline or end of stream.
fn discard_line<R: BufRead>(reader: &mut R) -> io::Result<usize> {
    let mut discarded = 0_usize;
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        };
        if available.is_empty() {
            return Ok(discarded);
        }
        let (used, finished) = match available.iter().position(|byte| *byte == b'\n') {
            Some(index) => (index + 1, true),
            None => (available.len(), false),
        };
        reader.consume(used);
        discarded = discarded.saturating_add(used);
        if finished {
            return Ok(discarded);
        }
    }
}
