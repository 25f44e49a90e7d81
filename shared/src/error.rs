use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum SharedError {
    /// Transport failure: the request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status and (usually) an `{ error }` body.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The response decoded but carried an unexpected status marker.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Not signed in: {0}")]
    Unauthenticated(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

impl SharedError {
    /// Message suitable for a toast or inline error banner.
    ///
    /// Server-reported failures are surfaced verbatim; everything else keeps
    /// its category prefix.
    pub fn user_message(&self) -> String {
        match self {
            SharedError::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        match self {
            SharedError::Unauthenticated(_) => true,
            SharedError::Server { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_server_error_is_surfaced_verbatim() {
        let err = SharedError::Server {
            status: 400,
            message: "Draw time already closed".to_string(),
        };
        assert_eq!(err.user_message(), "Draw time already closed");
        assert_eq!(err.to_string(), "Draw time already closed");
    }

    #[test]
    fn test_network_error_keeps_category() {
        let err = SharedError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "Network error: connection refused");
    }

    #[test]
    fn test_unauthenticated_detection() {
        assert!(SharedError::Unauthenticated("no token".into()).is_unauthenticated());
        assert!(SharedError::Server { status: 401, message: "expired".into() }.is_unauthenticated());
        assert!(!SharedError::Server { status: 500, message: "boom".into() }.is_unauthenticated());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: SharedError = json_err.into();
        assert!(matches!(err, SharedError::Conversion(_)));
    }
}
