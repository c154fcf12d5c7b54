//! Log record formats for the interpreter's stderr telemetry.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How log records are rendered on stderr.
///
/// Command output owns stdout, so both formats only ever reach stderr.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per record, fields flattened.
    Json,
    /// Terse single-line records for interactive use.
    #[default]
    Compact,
}

/// Errors encountered while parsing a [`LogFormat`] from text.
pub type LogFormatParseError = strum::ParseError;
