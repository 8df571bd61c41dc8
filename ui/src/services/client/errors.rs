use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport-level errors raised by the HTTP client and data sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClientError {
    /// Request could not be sent or the connection dropped
    NetworkError {
        message: String,
    },
    /// Server answered with a non-success status
    HttpStatus {
        status: u16,
        body: String,
    },
    /// Request did not complete before the client-side deadline
    Timeout {
        operation: String,
        after_ms: u64,
    },
    /// Response body could not be decoded
    SerializationError {
        message: String,
    },
    /// Endpoint or redirect URL could not be built
    InvalidUrl {
        url: String,
        message: String,
    },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::NetworkError { message } => {
                write!(f, "Network error: {}", message)
            }
            ClientError::HttpStatus { status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP error: status {}", status)
                } else {
                    write!(f, "HTTP error: status {} - {}", status, body)
                }
            }
            ClientError::Timeout { operation, after_ms } => {
                write!(f, "Operation timed out after {}ms: {}", after_ms, operation)
            }
            ClientError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
            ClientError::InvalidUrl { url, message } => {
                write!(f, "Invalid URL '{}': {}", url, message)
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl ClientError {
    /// Whether the failure happened before any response arrived
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::NetworkError { .. } | ClientError::Timeout { .. }
        )
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::SerializationError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::SerializationError {
                message: err.to_string(),
            }
        } else {
            ClientError::NetworkError {
                message: err.to_string(),
            }
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl {
            url: String::new(),
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
