use thiserror::Error;

use crate::services::client::ClientError;

/// Message carried back to the login view for every OAuth failure
pub const AUTH_FAILED_MESSAGE: &str = "Authentication failed";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Location data unavailable for {scope}: {source}")]
    LocationData { scope: String, source: ClientError },

    #[error("Unknown OAuth provider: {name}")]
    UnknownProvider { name: String },

    #[error("No authorization code received from {provider}")]
    MissingCode {
        provider: String,
        reason: Option<String>,
    },

    #[error("Code exchange with {provider} failed: {source}")]
    Exchange {
        provider: String,
        source: ClientError,
    },

    #[error("Backend request failed: {source}")]
    Backend { source: ClientError },

    #[error("Configuration error: {field} - {message}")]
    Configuration { field: String, message: String },

    #[error("Session storage error: {message}")]
    SessionStorage { message: String },
}

pub type AuthResult<T> = Result<T, AuthError>;

impl From<ClientError> for AuthError {
    fn from(source: ClientError) -> Self {
        AuthError::Backend { source }
    }
}

impl From<gloo_storage::errors::StorageError> for AuthError {
    fn from(error: gloo_storage::errors::StorageError) -> Self {
        AuthError::SessionStorage {
            message: error.to_string(),
        }
    }
}

impl AuthError {
    /// Whether this belongs to the OAuth handshake failure class
    pub fn is_oauth(&self) -> bool {
        matches!(
            self,
            AuthError::UnknownProvider { .. }
                | AuthError::MissingCode { .. }
                | AuthError::Exchange { .. }
        )
    }

    /// Text shown to the user; OAuth failures collapse to a single message
    pub fn user_message(&self) -> String {
        match self {
            AuthError::UnknownProvider { .. }
            | AuthError::MissingCode { .. }
            | AuthError::Exchange { .. }
            | AuthError::SessionStorage { .. } => AUTH_FAILED_MESSAGE.to_string(),
            AuthError::Validation { message, .. } => message.clone(),
            AuthError::LocationData { scope, .. } => {
                format!("Could not load {} right now", scope)
            }
            AuthError::Backend { source } => match source {
                ClientError::HttpStatus { status, .. } if *status == 401 || *status == 403 => {
                    "Invalid email or password".to_string()
                }
                ClientError::Timeout { .. } => {
                    "The server took too long to respond, please try again".to_string()
                }
                _ => "Something went wrong, please try again".to_string(),
            },
            AuthError::Configuration { message, .. } => message.clone(),
        }
    }

    /// Get error severity for logging purposes
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AuthError::Validation { .. } => ErrorSeverity::Low,
            AuthError::LocationData { .. } => ErrorSeverity::Low,
            AuthError::MissingCode { .. } => ErrorSeverity::Medium,
            AuthError::UnknownProvider { .. } => ErrorSeverity::Medium,
            AuthError::Exchange { source, .. } | AuthError::Backend { source } => {
                if source.is_transport() {
                    ErrorSeverity::Medium
                } else {
                    ErrorSeverity::High
                }
            }
            AuthError::Configuration { .. } => ErrorSeverity::High,
            AuthError::SessionStorage { .. } => ErrorSeverity::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}
