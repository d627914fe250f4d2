//! Error types for LifeStyleCheck.

use crate::interview::SessionPhase;

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors talking to the completion endpoint (relay or provider).
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Request to {endpoint} failed: {reason}")]
    RequestFailed { endpoint: String, reason: String },

    #[error("Invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
}

/// Caller misuse of the conversation controller.
///
/// Network trouble never shows up here; it is absorbed into fallback text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Cannot {action} while session is {phase}")]
    InvalidPhase {
        phase: SessionPhase,
        action: &'static str,
    },

    #[error("A completion request is already in flight")]
    Busy,

    #[error("Reply text is empty")]
    EmptyInput,
}

/// Relay proxy errors.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Failed to build upstream client: {0}")]
    Client(String),

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
