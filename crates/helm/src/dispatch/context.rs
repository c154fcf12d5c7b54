//! Per-invocation view handed to route handlers.

use helm_syntax::ParsedCommand;

use super::errors::HandlerError;
use crate::output::{Formatter, OutputSink};

/// What a handler sees while it runs.
///
/// The context exposes both the whole parsed line and the node whose name
/// selected the handler, so handlers read their own flags and arguments by
/// default while still reaching the rest of the chain when needed.
pub struct CommandContext<'a> {
    command: &'a ParsedCommand,
    node: &'a ParsedCommand,
    path: &'a [String],
    output: &'a mut dyn OutputSink,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(
        command: &'a ParsedCommand,
        node: &'a ParsedCommand,
        path: &'a [String],
        output: &'a mut dyn OutputSink,
    ) -> Self {
        Self {
            command,
            node,
            path,
            output,
        }
    }

    /// Root of the parsed chain.
    #[must_use]
    pub const fn command(&self) -> &'a ParsedCommand {
        self.command
    }

    /// The node that selected this handler.
    #[must_use]
    pub const fn node(&self) -> &'a ParsedCommand {
        self.node
    }

    /// Route names from the root to this handler.
    #[must_use]
    pub const fn path(&self) -> &'a [String] {
        self.path
    }

    /// Reports whether `flag` was given on this handler's node.
    #[must_use]
    pub fn flag(&self, flag: u8) -> bool {
        self.node.has_flag(flag)
    }

    /// Values given for `key` on this handler's node.
    #[must_use]
    pub fn arg(&self, key: &str) -> Option<&'a [String]> {
        self.node.arg(key)
    }

    /// Values given for `key`, or a [`HandlerError::MissingArgument`].
    ///
    /// # Errors
    ///
    /// Fails when `key` is absent from this handler's node.
    pub fn require_arg(&self, key: &str) -> Result<&'a [String], HandlerError> {
        self.arg(key)
            .ok_or_else(|| HandlerError::missing_argument(key))
    }

    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Output`] when the sink rejects the write.
    pub fn write_line(&mut self, message: &str) -> Result<(), HandlerError> {
        self.output.write_line(message).map_err(HandlerError::from)
    }

    /// Writes one error line.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Output`] when the sink rejects the write.
    pub fn write_error(&mut self, message: &str) -> Result<(), HandlerError> {
        self.output.write_error(message).map_err(HandlerError::from)
    }

    /// Renders `raw` through `formatter` and writes the result as a line.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Format`] when `raw` cannot be rendered and
    /// [`HandlerError::Output`] when the sink rejects the write.
    pub fn write_formatted(
        &mut self,
        raw: &[u8],
        formatter: &dyn Formatter,
    ) -> Result<(), HandlerError> {
        let rendered = formatter.format(raw)?;
        self.write_line(&rendered)
    }
}
