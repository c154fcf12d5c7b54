//! Error and diagnostic types for line parsing.
//!
//! A malformed token is either reported as a [`ParseDiagnostic`] and skipped
//! past, or turned into a [`ParseError`] that fails the whole line. Which one
//! happens is decided by the parser's [`FormatPolicy`].

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

/// Errors that fail the parse of a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// An argument token had nothing before its `=`.
    #[error("invalid argument format '{token}': write arguments as key=value with no spaces")]
    InvalidArgumentFormat {
        /// The offending token.
        token: String,
    },

    /// A flag token contained a character outside ASCII.
    #[error("invalid flag '{flag}' in '{token}': flags are single ASCII characters")]
    InvalidFlag {
        /// The offending token.
        token: String,
        /// The rejected character.
        flag: char,
    },
}

/// Non-fatal format problems recorded while parsing leniently.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseDiagnostic {
    /// An argument token had nothing before its `=`; its values were stored
    /// under the empty key.
    EmptyArgumentKey {
        /// The offending token.
        token: String,
    },

    /// A flag token contained a character outside ASCII; the character was
    /// dropped.
    NonAsciiFlag {
        /// The offending token.
        token: String,
        /// The dropped character.
        flag: char,
    },
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyArgumentKey { token } => write!(
                f,
                "invalid argument format '{token}': write arguments as key=value with no spaces"
            ),
            Self::NonAsciiFlag { token, flag } => {
                write!(f, "ignored non-ASCII flag '{flag}' in '{token}'")
            }
        }
    }
}

impl From<ParseDiagnostic> for ParseError {
    fn from(diagnostic: ParseDiagnostic) -> Self {
        match diagnostic {
            ParseDiagnostic::EmptyArgumentKey { token } => Self::InvalidArgumentFormat { token },
            ParseDiagnostic::NonAsciiFlag { token, flag } => Self::InvalidFlag { token, flag },
        }
    }
}

/// How the parser treats malformed tokens.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FormatPolicy {
    /// Record a diagnostic, log a warning, and keep parsing.
    #[default]
    Warn,
    /// Fail the line with a [`ParseError`].
    Reject,
}

/// Errors encountered while parsing a [`FormatPolicy`] from text.
pub type FormatPolicyParseError = strum::ParseError;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("warn", FormatPolicy::Warn)]
    #[case("REJECT", FormatPolicy::Reject)]
    #[case("Reject", FormatPolicy::Reject)]
    fn policy_parses_case_insensitively(#[case] input: &str, #[case] expected: FormatPolicy) {
        assert_eq!(FormatPolicy::from_str(input).expect("policy"), expected);
    }

    #[test]
    fn policy_rejects_unknown_names() {
        assert!(FormatPolicy::from_str("ignore").is_err());
    }

    #[test]
    fn diagnostic_converts_to_matching_error() {
        let diagnostic = ParseDiagnostic::EmptyArgumentKey {
            token: "=1".to_owned(),
        };
        let error = ParseError::from(diagnostic);
        assert!(matches!(error, ParseError::InvalidArgumentFormat { ref token } if token == "=1"));
    }
}
