use std::io;

use thiserror::Error;

/// Library-wide error type for shipgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file missing (strict loading only; `generate` falls
    /// back to defaults instead).
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration rejected by the validator.
    #[error("Configuration validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// Template file missing for an artifact.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// One or more artifacts could not be generated.
    #[error("Failed to generate some configuration files")]
    GenerationFailed,

    /// Generated deployment script missing at the expected path.
    #[error("Deployment script not found: {0}")]
    ScriptNotFound(String),

    /// The deployment script exited with a non-zero status.
    #[error("Deployment failed with exit status {0}")]
    ScriptFailed(i32),

    /// External command could not be executed.
    #[error("Error running '{command}': {details}")]
    CommandFailed { command: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
