use helm_syntax::FormatPolicy;

use crate::input::EofBehaviour;
use crate::logging::LogFormat;

/// Default log filter expression used by the binary.
///
/// Logs share the terminal with command output, so only warnings and errors
/// are shown unless configured otherwise.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default upper bound on the size of one input line, in bytes.
pub const DEFAULT_MAX_LINE_BYTES: usize = 64 * 1024;

/// Default wait between reads after end of stream when polling.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Default log filter expression used by the binary.
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Default logging format for the binary.
pub fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

/// Default treatment of malformed `key=value` and flag tokens.
pub fn default_format_policy() -> FormatPolicy {
    FormatPolicy::Warn
}

/// Default line size bound.
pub fn default_max_line_bytes() -> usize {
    DEFAULT_MAX_LINE_BYTES
}

/// Default end-of-stream behaviour.
pub fn default_eof_behaviour() -> EofBehaviour {
    EofBehaviour::Stop
}

/// Default poll interval in milliseconds.
pub fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}
