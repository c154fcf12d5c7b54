//! The read-parse-dispatch loop.
//!
//! A [`Session`] pulls lines from a [`LineSource`], parses each one, and hands
//! the chain to the [`Router`]. Per-line failures are written to the sink as
//! error lines and never end the session; only input and output failures do.

use std::io;
use std::thread;
use std::time::Duration;

use helm_config::{Config, EofBehaviour};
use helm_syntax::Parser;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::dispatch::Router;
use crate::input::{LineRead, LineSource};
use crate::output::OutputSink;

const SESSION_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::session");

/// How the loop reacts to end of stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Stop at end of stream or keep polling.
    pub eof: EofBehaviour,
    /// Wait between reads while polling.
    pub poll_interval: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl SessionOptions {
    /// Takes the loop settings from a resolved configuration.
    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self {
            eof: config.eof_behaviour(),
            poll_interval: config.poll_interval(),
        }
    }
}

/// What happened to one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// A handler ran to completion.
    Dispatched,
    /// The line was reported as an error and skipped.
    Rejected,
}

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines read, oversized lines included.
    pub lines: usize,
    /// Lines whose handler completed.
    pub dispatched: usize,
    /// Lines reported as errors.
    pub rejected: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: LineOutcome) {
        self.lines += 1;
        match outcome {
            LineOutcome::Dispatched => self.dispatched += 1,
            LineOutcome::Rejected => self.rejected += 1,
        }
    }
}

/// Failures that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The line source failed.
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),
    /// The output sink failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Interactive command session over one source and one sink.
#[derive(Debug)]
pub struct Session<S, O> {
    source: S,
    sink: O,
    parser: Parser,
    router: Router,
    options: SessionOptions,
}

impl<S: LineSource, O: OutputSink> Session<S, O> {
    /// Creates a session with the default parser and options.
    pub fn new(source: S, sink: O, router: Router) -> Self {
        Self {
            source,
            sink,
            parser: Parser::default(),
            router,
            options: SessionOptions::default(),
        }
    }

    /// Replaces the line parser.
    #[must_use]
    pub const fn with_parser(mut self, parser: Parser) -> Self {
        self.parser = parser;
        self
    }

    /// Replaces the loop options.
    #[must_use]
    pub const fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// Consumes the session, returning the output sink.
    pub fn into_sink(self) -> O {
        self.sink
    }

    /// Runs until end of stream, or forever when polling.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the source or the sink fails. Parse and
    /// dispatch failures are reported on the sink and do not end the loop.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        let mut summary = SessionSummary::default();
        loop {
            match self.source.next_line().map_err(SessionError::Input)? {
                LineRead::Line(raw) => summary.record(self.handle_line(&raw)?),
                LineRead::Oversized { size, limit } => {
                    warn!(target: SESSION_TARGET, size, limit, "skipping oversized line");
                    let message = format!("line too long: {size} bytes exceeds the {limit} byte limit");
                    summary.record(self.reject(&message)?);
                }
                LineRead::EndOfStream => match self.options.eof {
                    EofBehaviour::Stop => {
                        info!(
                            target: SESSION_TARGET,
                            lines = summary.lines,
                            dispatched = summary.dispatched,
                            rejected = summary.rejected,
                            "input closed"
                        );
                        return Ok(summary);
                    }
                    EofBehaviour::Poll => thread::sleep(self.options.poll_interval),
                },
            }
        }
    }

    /// Parses and dispatches one raw line.
    ///
    /// Tolerated format problems are written as `warning:` lines before the
    /// handler runs.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Output`] when the sink fails.
    pub fn handle_line(&mut self, raw: &[u8]) -> Result<LineOutcome, SessionError> {
        let parsed = match self.parser.parse(raw) {
            Ok(parsed) => parsed,
            Err(error) => {
                warn!(target: SESSION_TARGET, %error, "rejected malformed line");
                return self.reject(&error.to_string());
            }
        };

        let (command, diagnostics) = parsed.into_parts();
        for diagnostic in &diagnostics {
            self.sink
                .write_line(&format!("warning: {diagnostic}"))
                .map_err(SessionError::Output)?;
        }

        match self.router.route(&command, &mut self.sink) {
            Ok(outcome) => {
                debug!(target: SESSION_TARGET, path = %outcome.path.join(" "), "command completed");
                Ok(LineOutcome::Dispatched)
            }
            Err(error) => match error.into_output_failure() {
                Ok(broken) => Err(SessionError::Output(broken)),
                Err(error) => {
                    warn!(target: SESSION_TARGET, %error, "command failed");
                    self.reject(&error.to_string())
                }
            },
        }
    }

    fn reject(&mut self, message: &str) -> Result<LineOutcome, SessionError> {
        self.sink
            .write_error(message)
            .map_err(SessionError::Output)?;
        Ok(LineOutcome::Rejected)
    }
}
