//! Single-pass parser from a raw line to a command chain.
//!
//! Tokens are consumed left to right against an explicit [`ChainBuilder`]
//! state. The state, not the token's shape alone, decides whether a bare word
//! names the current node or starts a new chained node.

use std::mem;

use tracing::{debug, warn};

use crate::command::ParsedCommand;
use crate::error::{FormatPolicy, ParseDiagnostic, ParseError};

/// Tracing target for parser diagnostics.
pub const PARSER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::parser");

/// A successfully parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    command: ParsedCommand,
    diagnostics: Vec<ParseDiagnostic>,
}

impl Parsed {
    /// Returns the root of the command chain.
    #[must_use]
    pub const fn command(&self) -> &ParsedCommand {
        &self.command
    }

    /// Returns the format problems tolerated while parsing.
    #[must_use]
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    /// Consumes the result, keeping only the command chain.
    #[must_use]
    pub fn into_command(self) -> ParsedCommand {
        self.command
    }

    /// Consumes the result, returning the chain and its diagnostics.
    #[must_use]
    pub fn into_parts(self) -> (ParsedCommand, Vec<ParseDiagnostic>) {
        (self.command, self.diagnostics)
    }
}

/// Line parser configured with a fixed [`FormatPolicy`].
///
/// The parser holds no per-line state, so one instance can parse any number
/// of lines and parsing the same line twice yields equal results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    policy: FormatPolicy,
}

impl Parser {
    /// Creates a parser with the given policy for malformed tokens.
    #[must_use]
    pub const fn new(policy: FormatPolicy) -> Self {
        Self { policy }
    }

    /// Parses one raw line into a command chain.
    ///
    /// Trailing `\r` and `\n` bytes are stripped, the remainder is split on
    /// single spaces, and zero-length tokens are skipped. Invalid UTF-8 is
    /// replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for a malformed token when the policy is
    /// [`FormatPolicy::Reject`]. The default policy never fails.
    pub fn parse(&self, raw: &[u8]) -> Result<Parsed, ParseError> {
        let text = String::from_utf8_lossy(raw);
        let line = text.trim_end_matches(['\r', '\n']);

        let mut builder = ChainBuilder::new(self.policy);
        for token in line.split(' ').filter(|token| !token.is_empty()) {
            builder.push(token)?;
        }

        let parsed = builder.finish();
        debug!(
            target: PARSER_TARGET,
            command = %parsed.command,
            depth = parsed.command.depth(),
            diagnostics = parsed.diagnostics.len(),
            "parsed line"
        );
        Ok(parsed)
    }
}

/// Parses a line with the default [`FormatPolicy::Warn`] policy.
///
/// # Errors
///
/// Never fails under the default policy; the signature matches
/// [`Parser::parse`].
pub fn parse(raw: &[u8]) -> Result<Parsed, ParseError> {
    Parser::default().parse(raw)
}

/// Lexical class of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// Everything after a leading `-`.
    Flags(&'a str),
    /// A `key=values` pair split on the first `=`.
    Argument { key: &'a str, values: &'a str },
    /// Anything else.
    Word(&'a str),
}

fn classify(token: &str) -> Token<'_> {
    if let Some(flags) = token.strip_prefix('-') {
        return Token::Flags(flags);
    }
    match token.split_once('=') {
        Some((key, values)) => Token::Argument { key, values },
        None => Token::Word(token),
    }
}

/// Parser state for one line.
///
/// `current` is the node flags and arguments bind to. `ancestors` holds the
/// nodes above it, root first; they are linked into owned children when the
/// line ends.
struct ChainBuilder {
    policy: FormatPolicy,
    ancestors: Vec<ParsedCommand>,
    current: ParsedCommand,
    name_consumed: bool,
    diagnostics: Vec<ParseDiagnostic>,
}

impl ChainBuilder {
    fn new(policy: FormatPolicy) -> Self {
        Self {
            policy,
            ancestors: Vec::new(),
            current: ParsedCommand::default(),
            name_consumed: false,
            diagnostics: Vec::new(),
        }
    }

    fn push(&mut self, token: &str) -> Result<(), ParseError> {
        match classify(token) {
            Token::Flags(flags) => self.add_flags(token, flags),
            Token::Argument { key, values } => self.add_argument(token, key, values),
            Token::Word(word) => {
                self.add_word(word);
                Ok(())
            }
        }
    }

    fn add_flags(&mut self, token: &str, flags: &str) -> Result<(), ParseError> {
        for flag in flags.chars() {
            match u8::try_from(flag) {
                Ok(byte) if byte.is_ascii() => self.current.insert_flag(byte),
                _ => self.report(ParseDiagnostic::NonAsciiFlag {
                    token: token.to_owned(),
                    flag,
                })?,
            }
        }
        Ok(())
    }

    fn add_argument(&mut self, token: &str, key: &str, values: &str) -> Result<(), ParseError> {
        if key.is_empty() {
            self.report(ParseDiagnostic::EmptyArgumentKey {
                token: token.to_owned(),
            })?;
        }
        let list = values.split(',').map(str::to_owned).collect();
        self.current.insert_arg(key, list);
        Ok(())
    }

    fn add_word(&mut self, word: &str) {
        if self.name_consumed {
            let parent = mem::replace(&mut self.current, ParsedCommand::named(word));
            self.ancestors.push(parent);
        } else {
            self.current.set_name(word);
            self.name_consumed = true;
        }
    }

    fn report(&mut self, diagnostic: ParseDiagnostic) -> Result<(), ParseError> {
        match self.policy {
            FormatPolicy::Warn => {
                warn!(target: PARSER_TARGET, %diagnostic, "tolerating malformed token");
                self.diagnostics.push(diagnostic);
                Ok(())
            }
            FormatPolicy::Reject => Err(diagnostic.into()),
        }
    }

    fn finish(self) -> Parsed {
        let command = self
            .ancestors
            .into_iter()
            .rev()
            .fold(self.current, |child, mut parent| {
                parent.attach(child);
                parent
            });
        Parsed {
            command,
            diagnostics: self.diagnostics,
        }
    }
}
