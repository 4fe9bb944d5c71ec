//! Route definitions for the ScamSense service
//!
//! - GET /, GET /about, POST /submit - fixed text responses
//! - POST /scamsense - validate a scam report and echo the normalized record
//! - GET /scamsense/schema - fields accepted by /scamsense
//! - GET /health - health check
//! - GET /metrics - Prometheus metrics

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Extension, State},
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use scamsense_core::{FieldSpec, Rejection, SubmissionPayload, ValidationResult};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use super::{
    metrics_middleware, request_id_middleware, request_logging_middleware, ApiResponse, AppState,
    ErrorInfo, HealthResponse, HealthStatus, RequestId,
};

/// Errors returned to HTTP clients
#[derive(Debug)]
pub enum ApiError {
    /// The payload decoded but failed validation
    Rejected(Rejection),
    /// The body is not a decodable JSON object
    MalformedBody(String),
    UnsupportedMediaType(String),
    PayloadTooLarge(String),
    InternalError(String),
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Rejected(rejection) => rejection.kind().as_str(),
            ApiError::MalformedBody(_) => "malformed_body",
            ApiError::UnsupportedMediaType(_) => "unsupported_media_type",
            ApiError::PayloadTooLarge(_) => "payload_too_large",
            ApiError::InternalError(_) => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Rejected(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_info(&self) -> ErrorInfo {
        match self {
            ApiError::Rejected(rejection) => ErrorInfo::from(rejection),
            ApiError::MalformedBody(msg)
            | ApiError::UnsupportedMediaType(msg)
            | ApiError::PayloadTooLarge(msg)
            | ApiError::InternalError(msg) => ErrorInfo::new(self.error_code(), msg.clone()),
        }
    }

    /// Build the JSON error response for a known request id
    pub fn into_response_with_id(self, request_id: String) -> Response {
        let response = ApiResponse::<()>::error(self.error_info(), request_id);
        (self.status_code(), Json(response)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::UNSUPPORTED_MEDIA_TYPE => {
                ApiError::UnsupportedMediaType(rejection.body_text())
            }
            StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge(rejection.body_text()),
            _ => ApiError::MalformedBody(rejection.body_text()),
        }
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_body_size = state.config.max_body_size;
    let cors_enabled = state.config.cors_enabled;

    let router = Router::new()
        // Fixed text endpoints
        .route("/", get(root))
        .route("/about", get(about))
        .route("/submit", post(submit_form))
        // Scam report endpoints
        .route("/scamsense", post(submit_report))
        .route("/scamsense/schema", get(submission_schema))
        // Operational endpoints
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            metrics_middleware,
        ))
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state);

    if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// GET /
pub async fn root() -> &'static str {
    "Hello from ScamSense!"
}

/// GET /about
pub async fn about() -> &'static str {
    "About page"
}

/// POST /submit
pub async fn submit_form() -> &'static str {
    "Form submitted"
}

/// POST /scamsense - Validate a scam report
///
/// Responds 200 with the normalized record, or 400 naming the rejection kind
/// and field. Bodies that are not a JSON object are `malformed_body`.
pub async fn submit_report(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<SubmissionPayload>, JsonRejection>,
) -> Response {
    let metrics = state.metrics.service();

    let payload = match body {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            let error = ApiError::from(rejection);
            if matches!(error, ApiError::MalformedBody(_)) {
                metrics.record_malformed_body();
            }
            tracing::debug!(
                request_id = %request_id.as_str(),
                error = error.error_code(),
                "Submission body rejected"
            );
            return error.into_response_with_id(request_id.0);
        }
    };

    match state.validator.validate(&payload) {
        ValidationResult::Accepted(record) => {
            metrics.record_accepted();
            tracing::info!(
                request_id = %request_id.as_str(),
                content_length = record.content.len(),
                category = record.category.as_deref().unwrap_or("none"),
                "Submission accepted"
            );
            (StatusCode::OK, Json(ApiResponse::success(record, request_id.0))).into_response()
        }
        ValidationResult::Rejected(rejection) => {
            metrics.record_rejected(&rejection);
            tracing::info!(
                request_id = %request_id.as_str(),
                kind = %rejection.kind(),
                field = %rejection.field(),
                "Submission rejected"
            );
            ApiError::Rejected(rejection).into_response_with_id(request_id.0)
        }
    }
}

/// GET /scamsense/schema - Fields accepted by the report endpoint
pub async fn submission_schema(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> Json<ApiResponse<&'static [FieldSpec]>> {
    Json(ApiResponse::success(state.validator.schema(), request_id.0))
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        service: "scamsense".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> Response {
    match state.metrics.encode_text() {
        Ok(text) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(
                request_id = %request_id.as_str(),
                error = %e,
                "Failed to encode metrics"
            );
            ApiError::InternalError(e.to_string()).into_response_with_id(request_id.0)
        }
    }
}
