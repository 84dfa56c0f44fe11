use thiserror::Error;

pub type Res<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    // === CONVERSION ERRORS ===
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    // === BACKEND ERRORS ===
    /// Non-2xx response that is not one of the specially classified statuses.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// 401 from the backend: the credential was rejected.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// 422 from the backend: input rejected, message is display-ready.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// The backend-provided message, when one exists. Transport failures
    /// carry none, so callers fall back to a per-operation generic string.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Transport(_) => None,
            ApiError::Http { message, .. } => (!message.is_empty()).then_some(message.as_str()),
            ApiError::Auth(message) | ApiError::Validation(message) => {
                (!message.is_empty()).then_some(message.as_str())
            }
        }
    }

    /// The HTTP status this error was classified from, when it came from a
    /// response rather than the transport.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Auth(_) => Some(401),
            ApiError::Validation(_) => Some(422),
        }
    }
}

/// Display-ready error surfaced by the account and subscription stores: the
/// backend message when present, otherwise the operation's fallback string.
/// Callers show it, they do not branch on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn from_api(err: &ApiError, fallback: &str) -> Self {
        StoreError(err.backend_message().unwrap_or(fallback).to_string())
    }
}
