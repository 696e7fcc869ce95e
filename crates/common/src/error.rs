use thiserror::Error;

use crate::types::{Step, StepPosition};

/// Core error type for assessment failures
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExposureError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition { from: StepPosition, to: StepPosition },

    #[error("Incomplete profile: missing {}", format_missing(.missing))]
    IncompleteProfile { missing: Vec<Step> },

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Session limit reached ({limit} active sessions)")]
    SessionLimit { limit: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration validation failed: {details}")]
    ConfigValidation { details: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlError(#[from] toml::de::Error),
}

fn format_missing(missing: &[Step]) -> String {
    missing
        .iter()
        .map(|step| step.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ExposureError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration validation error
    pub fn config_validation(details: impl Into<String>) -> Self {
        Self::ConfigValidation {
            details: details.into(),
        }
    }

    pub fn invalid_transition(from: StepPosition, to: StepPosition) -> Self {
        Self::InvalidTransition { from, to }
    }

    /// Check if the caller can recover by re-prompting or ignoring the request.
    ///
    /// `IncompleteProfile` is a contract violation by the driving shell and
    /// must surface as a hard failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidTransition { .. } | Self::SessionNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ExposureError>;
