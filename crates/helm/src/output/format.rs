//! Formatters that render raw payloads as display text.

use thiserror::Error;

/// Errors raised while rendering a payload.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The payload was not valid JSON.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders raw bytes into text suitable for [`super::OutputSink::write_line`].
pub trait Formatter {
    /// Renders `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when `raw` is not in the expected shape.
    fn format(&self, raw: &[u8]) -> Result<String, FormatError>;
}

/// Pretty-prints JSON documents with two-space indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, raw: &[u8]) -> Result<String, FormatError> {
        let value: serde_json::Value = serde_json::from_slice(raw)?;
        Ok(serde_json::to_string_pretty(&value)?)
    }
}
