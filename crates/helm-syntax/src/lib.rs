//! Line parser for the Helm command interpreter.
//!
//! This crate turns one line of raw text into a [`ParsedCommand`]: a command
//! name, a set of single-byte flags, `key=value` arguments, and an optional
//! chain of nested sub-commands. It knows nothing about routing; the `helm`
//! crate walks the resulting chain against its registered routes.
//!
//! # Grammar
//!
//! The line is split on single spaces and each token is classified:
//!
//! - `-abc` adds the flags `a`, `b` and `c` to the current node
//! - `key=1,2,3` stores the values `["1", "2", "3"]` under `key` on the
//!   current node
//! - any other token is a bare word: the first one names the current node,
//!   every later one starts a new chained sub-command
//!
//! There is no quoting, escaping, or expansion.
//!
//! # Example
//!
//! ```
//! use helm_syntax::parse;
//!
//! let parsed = parse(b"top mid=1 leaf -x\n")?;
//! let root = parsed.command();
//! assert_eq!(root.name(), "top");
//! assert_eq!(root.arg("mid"), Some(&["1".to_owned()][..]));
//!
//! let leaf = root.sub_command().expect("leaf is chained");
//! assert_eq!(leaf.name(), "leaf");
//! assert!(leaf.has_flag(b'x'));
//! # Ok::<(), helm_syntax::ParseError>(())
//! ```

mod command;
mod error;
mod parser;

pub use command::{Chain, ParsedCommand};
pub use error::{FormatPolicy, FormatPolicyParseError, ParseDiagnostic, ParseError};
pub use parser::{PARSER_TARGET, Parsed, Parser, parse};

#[cfg(test)]
mod tests;
