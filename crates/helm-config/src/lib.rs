//! Shared configuration for the Helm command interpreter.
//!
//! Configuration is layered by `ortho_config`: built-in defaults, then a
//! TOML file (`--config-path` or `HELM_CONFIG_PATH`), then `HELM_*`
//! environment variables, then command-line flags. Later layers win.
//!
//! ```toml
//! log_filter = "helm=debug"
//! log_format = "json"
//! format_policy = "reject"
//! max_line_bytes = 4096
//! eof_behaviour = "poll"
//! poll_interval_ms = 250
//! ```

use std::time::Duration;

use helm_syntax::FormatPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod defaults;
mod input;
mod logging;

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_MAX_LINE_BYTES, DEFAULT_POLL_INTERVAL_MS, default_eof_behaviour,
    default_format_policy, default_log_filter, default_log_filter_string, default_log_format,
    default_max_line_bytes, default_poll_interval_ms,
};
pub use input::{EofBehaviour, EofBehaviourParseError};
pub use logging::{LogFormat, LogFormatParseError};
pub use ortho_config::OrthoConfig;

/// Resolved interpreter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "HELM")]
pub struct Config {
    /// Tracing filter expression, in `EnvFilter` syntax.
    #[serde(default = "default_log_filter_string")]
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,

    /// Output format for log records.
    #[serde(default = "default_log_format")]
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,

    /// Treatment of malformed `key=value` and flag tokens.
    #[serde(default = "default_format_policy")]
    #[ortho_config(default = default_format_policy())]
    pub format_policy: FormatPolicy,

    /// Upper bound on the size of one input line, in bytes.
    #[serde(default = "default_max_line_bytes")]
    #[ortho_config(default = default_max_line_bytes())]
    pub max_line_bytes: usize,

    /// What the line loop does at end of stream.
    #[serde(default = "default_eof_behaviour")]
    #[ortho_config(default = default_eof_behaviour())]
    pub eof_behaviour: EofBehaviour,

    /// Wait between reads after end of stream when polling, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    #[ortho_config(default = default_poll_interval_ms())]
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            format_policy: default_format_policy(),
            max_line_bytes: default_max_line_bytes(),
            eof_behaviour: default_eof_behaviour(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Config {
    /// Tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Log record format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Policy for malformed tokens.
    #[must_use]
    pub const fn format_policy(&self) -> FormatPolicy {
        self.format_policy
    }

    /// Line size bound in bytes.
    #[must_use]
    pub const fn max_line_bytes(&self) -> usize {
        self.max_line_bytes
    }

    /// End-of-stream behaviour.
    #[must_use]
    pub const fn eof_behaviour(&self) -> EofBehaviour {
        self.eof_behaviour
    }

    /// Wait between reads after end of stream when polling.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Checks values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the line bound or the poll interval is
    /// zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_line_bytes == 0 {
            return Err(ConfigError::ZeroLineLimit);
        }
        if self.eof_behaviour == EofBehaviour::Poll && self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

/// Semantic errors in an otherwise well-formed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_line_bytes` was zero.
    #[error("max_line_bytes must be greater than zero")]
    ZeroLineLimit,
    /// Polling was requested with a zero interval.
    #[error("poll_interval_ms must be greater than zero when eof_behaviour is poll")]
    ZeroPollInterval,
}
