//! Error types for route registration and command dispatch.
//!
//! Registration errors happen once, while the route tree is built. Dispatch
//! errors are per line: the session writes them to the output sink and keeps
//! reading. Only [`HandlerError::Output`] signals a broken output sink.

use std::io;

use thiserror::Error;

use crate::output::FormatError;

/// Errors surfaced while building the route tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A route with this name already exists at the same level.
    #[error("a route with name '{name}' already exists")]
    DuplicateRoute { name: String },

    /// The name can never be produced as a bare word by the parser.
    #[error("invalid route name '{name}': names must be non-empty, contain no spaces or '=', and not start with '-'")]
    InvalidName { name: String },
}

impl RegistrationError {
    /// Creates a duplicate route error.
    pub fn duplicate_route(name: impl Into<String>) -> Self {
        Self::DuplicateRoute { name: name.into() }
    }

    /// Creates an invalid name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }
}

/// Failure returned by a route handler.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The handler failed for a reason of its own.
    #[error("{message}")]
    Failed { message: String },

    /// A required argument was not given on the executed node.
    #[error("missing required arg: {name}")]
    MissingArgument { name: String },

    /// Output could not be rendered by a formatter.
    #[error("failed to format output: {0}")]
    Format(#[from] FormatError),

    /// The output sink rejected a write.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl HandlerError {
    /// Creates a generic handler failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Creates a missing argument error.
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }
}

/// Errors surfaced while resolving or executing a parsed command.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The top-level name is not registered.
    #[error("unknown command: '{name}'")]
    UnknownCommand { name: String },

    /// The top-level name matched but a nested name did not.
    #[error("unknown sub-command '{name}' for '{}'", path.join(" "))]
    UnknownSubCommand {
        /// Names matched so far, root first.
        path: Vec<String>,
        /// The unmatched sub-command name.
        name: String,
    },

    /// The matched handler returned a failure.
    #[error("{source}")]
    Handler {
        /// Names of the executed route, root first.
        path: Vec<String>,
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    /// Creates an unknown command error.
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Creates an unknown sub-command error.
    pub fn unknown_sub_command(path: Vec<String>, name: impl Into<String>) -> Self {
        Self::UnknownSubCommand {
            path,
            name: name.into(),
        }
    }

    /// Wraps a handler failure with the executed route path.
    pub fn handler(path: Vec<String>, source: HandlerError) -> Self {
        Self::Handler { path, source }
    }

    /// Extracts the IO error when the output sink is broken.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged for every per-line failure.
    pub fn into_output_failure(self) -> Result<io::Error, Self> {
        match self {
            Self::Handler {
                source: HandlerError::Output(error),
                ..
            } => Ok(error),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sub_command_names_the_matched_path() {
        let error = DispatchError::unknown_sub_command(
            vec!["hello".to_owned(), "one".to_owned()],
            "dos",
        );
        assert_eq!(error.to_string(), "unknown sub-command 'dos' for 'hello one'");
    }

    #[test]
    fn handler_errors_display_the_handler_message() {
        let error = DispatchError::handler(
            vec!["greet".to_owned()],
            HandlerError::missing_argument("names"),
        );
        assert_eq!(error.to_string(), "missing required arg: names");
        assert!(error.into_output_failure().is_err());
    }

    #[test]
    fn output_failures_are_flagged() {
        let error = DispatchError::handler(
            vec!["hello".to_owned()],
            HandlerError::from(io::Error::from(io::ErrorKind::BrokenPipe)),
        );
        let broken = error.into_output_failure().expect("output failure");
        assert_eq!(broken.kind(), io::ErrorKind::BrokenPipe);
    }
}
