//! Rejection reasons produced by the submission validator

use serde::Serialize;
use thiserror::Error;

/// Why a submission failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A required field is absent
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    /// A field is present but not of the expected type
    #[error("Field '{0}' must be a string")]
    InvalidType(String),

    /// A text field is empty or whitespace-only
    #[error("Field '{0}' must not be empty")]
    EmptyValue(String),
}

impl Rejection {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Rejection::MissingField(field.into())
    }

    pub fn invalid_type(field: impl Into<String>) -> Self {
        Rejection::InvalidType(field.into())
    }

    pub fn empty_value(field: impl Into<String>) -> Self {
        Rejection::EmptyValue(field.into())
    }

    /// The tag identifying this rejection
    pub fn kind(&self) -> RejectionKind {
        match self {
            Rejection::MissingField(_) => RejectionKind::MissingField,
            Rejection::InvalidType(_) => RejectionKind::InvalidType,
            Rejection::EmptyValue(_) => RejectionKind::EmptyValue,
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Rejection::MissingField(field)
            | Rejection::InvalidType(field)
            | Rejection::EmptyValue(field) => field,
        }
    }
}

/// Machine-readable rejection tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    MissingField,
    InvalidType,
    EmptyValue,
}

impl RejectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionKind::MissingField => "missing_field",
            RejectionKind::InvalidType => "invalid_type",
            RejectionKind::EmptyValue => "empty_value",
        }
    }
}

impl std::fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
