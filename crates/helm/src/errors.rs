//! Errors that stop the interpreter before or during its session.

use std::sync::Arc;

use helm_config::ConfigError;
use thiserror::Error;

use crate::dispatch::RegistrationError;
use crate::session::SessionError;
use crate::telemetry::TelemetryError;

/// Top-level failure of [`crate::run`].
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration layers could not be loaded or merged.
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    /// Configuration loaded but holds unusable values.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// Logging could not be set up.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    /// The route tree is inconsistent.
    #[error("failed to register routes: {0}")]
    Registration(#[from] RegistrationError),
    /// The session ended on an IO failure.
    #[error(transparent)]
    Session(#[from] SessionError),
}
