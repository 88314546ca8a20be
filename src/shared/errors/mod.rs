//! Error Types
//!
//! Client- and use-case-level error types for the networking API.

use thiserror::Error;

/// Client-level errors for a single request/response round trip
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("{resource} '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ClientError {
    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InvalidUrl { .. } => "INVALID_URL",
        }
    }

    /// Whether the server reported the resource as missing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        // field_errors() is a HashMap
        messages.sort();
        ClientError::Validation(messages)
    }
}

/// Use case-level errors for name-based workflows
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{resource} named '{name}' not found")]
    NotFound { resource: String, name: String },

    #[error("Name '{name}' is ambiguous: {matches} networks match")]
    Ambiguous { name: String, matches: usize },

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl UseCaseError {
    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Ambiguous { .. } => "AMBIGUOUS_NAME",
            Self::Client(client_error) => client_error.error_code(),
        }
    }
}
