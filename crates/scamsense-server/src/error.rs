//! Error types for the ScamSense server
//!
//! Startup, configuration and CLI failures. Errors returned to HTTP clients
//! live in [`crate::handler::ApiError`].

use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Main error type for server and CLI operations
#[derive(Error, Debug)]
pub enum ServerError {
    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    FileError(String),

    /// Configuration or payload parsing error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error while rendering output
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Telemetry setup failure
    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    /// Listener failure
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ServerError::InvalidInput(msg.into())
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        ServerError::ParseError(msg.into())
    }

    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ServerError::InvalidInput(_)
                | ServerError::FileError(_)
                | ServerError::ParseError(_)
                | ServerError::InvalidConfig(_)
        )
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::ParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for ServerError {
    fn from(err: serde_yaml::Error) -> Self {
        ServerError::ParseError(format!("YAML error: {}", err))
    }
}

impl From<toml::de::Error> for ServerError {
    fn from(err: toml::de::Error) -> Self {
        ServerError::ParseError(format!("TOML error: {}", err))
    }
}

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServerError::InvalidConfig("port must be greater than zero".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: port must be greater than zero"
        );
    }

    #[test]
    fn test_is_user_error() {
        assert!(ServerError::invalid_input("bad").is_user_error());
        assert!(ServerError::parse_error("bad").is_user_error());
        assert!(!ServerError::SerializationError("bad".to_string()).is_user_error());
    }

    #[test]
    fn test_from_json_error() {
        let err: ServerError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ServerError::ParseError(msg) if msg.starts_with("JSON error")));
    }
}
