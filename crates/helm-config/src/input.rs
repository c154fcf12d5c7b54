//! Settings for the line input loop.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What the line loop does when its input reports end of stream.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EofBehaviour {
    /// Finish the session.
    #[default]
    Stop,
    /// Treat end of stream as "no data yet": wait and read again.
    Poll,
}

/// Errors encountered while parsing an [`EofBehaviour`] from text.
pub type EofBehaviourParseError = strum::ParseError;
