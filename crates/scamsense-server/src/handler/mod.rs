//! HTTP handlers for the ScamSense service
//!
//! - `routes`: route table, handlers and [`ApiError`]
//! - `middleware`: request ids, request logging and HTTP metrics
//!
//! Every request is handled independently. The only state shared between
//! requests is read-only configuration plus metric counters.

pub mod middleware;
pub mod routes;

pub use middleware::{
    metrics_middleware, request_id_middleware, request_logging_middleware, RequestId,
    REQUEST_ID_HEADER,
};
pub use routes::{create_router, ApiError};

use scamsense_core::{Rejection, SubmissionValidator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::telemetry::{self, ServiceMetricsRegistry};

/// State shared by all handlers
pub struct AppState {
    pub config: ServerConfig,
    pub validator: SubmissionValidator,
    pub metrics: ServiceMetricsRegistry,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> telemetry::Result<Self> {
        Ok(Self {
            config,
            validator: SubmissionValidator::new(),
            metrics: ServiceMetricsRegistry::new()?,
            start_time: Instant::now(),
        })
    }

    pub fn shared(config: ServerConfig) -> telemetry::Result<Arc<Self>> {
        Self::new(config).map(Arc::new)
    }
}

/// Standard JSON response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the submission was accepted
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error information (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
    /// Request identifier, also sent as the `x-request-id` header
    pub request_id: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, request_id: String) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            request_id,
        }
    }

    pub fn error(error: ErrorInfo, request_id: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(error),
            request_id,
        }
    }
}

/// Error details for API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Rejection or error kind, e.g. `missing_field` or `malformed_body`
    pub kind: String,
    /// Offending field, for validation rejections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            field: None,
            message: message.into(),
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl From<&Rejection> for ErrorInfo {
    fn from(rejection: &Rejection) -> Self {
        ErrorInfo::new(rejection.kind().as_str(), rejection.to_string()).with_field(rejection.field())
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}
