//! Prometheus metrics for the ScamSense server
//!
//! - `scamsense_submissions_total` (counter) - Submissions by outcome
//! - `scamsense_rejections_total` (counter) - Rejections by kind and field
//! - `scamsense_malformed_bodies_total` (counter) - Undecodable request bodies
//! - `scamsense_http_requests_total` (counter) - Requests by method, route and status
//! - `scamsense_http_request_duration_seconds` (histogram) - Request latency

use prometheus::{Counter, CounterVec, HistogramOpts, HistogramVec, Opts, Registry};
use std::sync::Arc;

use scamsense_core::Rejection;

use super::{Result, TelemetryError};

const NAMESPACE: &str = "scamsense";

/// Submission and HTTP metrics
pub struct ServiceMetrics {
    /// Submissions by outcome (accepted, rejected)
    submissions_total: CounterVec,

    /// Rejections by kind and field
    rejections_total: CounterVec,

    /// Bodies that could not be decoded as a JSON object
    malformed_bodies_total: Counter,

    /// HTTP requests by method, route and status
    http_requests_total: CounterVec,

    /// HTTP request duration in seconds by method and route
    http_request_duration_seconds: HistogramVec,
}

impl ServiceMetrics {
    /// Create the metrics and register them with the provided registry
    pub fn new(registry: Arc<Registry>) -> Result<Self> {
        let submissions_total = CounterVec::new(
            Opts::new("submissions_total", "Total number of scam report submissions")
                .namespace(NAMESPACE),
            &["outcome"],
        )?;

        let rejections_total = CounterVec::new(
            Opts::new("rejections_total", "Rejected submissions by kind and field")
                .namespace(NAMESPACE),
            &["kind", "field"],
        )?;

        let malformed_bodies_total = Counter::with_opts(
            Opts::new(
                "malformed_bodies_total",
                "Request bodies that were not a decodable JSON object",
            )
            .namespace(NAMESPACE),
        )?;

        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests")
                .namespace(NAMESPACE),
            &["method", "route", "status"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .namespace(NAMESPACE)
            .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
            &["method", "route"],
        )?;

        registry.register(Box::new(submissions_total.clone()))?;
        registry.register(Box::new(rejections_total.clone()))?;
        registry.register(Box::new(malformed_bodies_total.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            submissions_total,
            rejections_total,
            malformed_bodies_total,
            http_requests_total,
            http_request_duration_seconds,
        })
    }

    pub fn record_accepted(&self) {
        self.submissions_total.with_label_values(&["accepted"]).inc();
    }

    pub fn record_rejected(&self, rejection: &Rejection) {
        self.submissions_total.with_label_values(&["rejected"]).inc();
        self.rejections_total
            .with_label_values(&[rejection.kind().as_str(), rejection.field()])
            .inc();
    }

    pub fn record_malformed_body(&self) {
        self.malformed_bodies_total.inc();
    }

    /// Record a completed HTTP request
    pub fn record_http_request(&self, method: &str, route: &str, status: u16, duration_secs: f64) {
        self.http_requests_total
            .with_label_values(&[method, route, &status.to_string()])
            .inc();
        self.http_request_duration_seconds
            .with_label_values(&[method, route])
            .observe(duration_secs);
    }

    pub fn submissions(&self, outcome: &str) -> f64 {
        self.submissions_total.with_label_values(&[outcome]).get()
    }
}

/// Registry owning all service metrics
pub struct ServiceMetricsRegistry {
    registry: Arc<Registry>,
    service: ServiceMetrics,
}

impl ServiceMetricsRegistry {
    /// Create a new metrics registry
    pub fn new() -> Result<Self> {
        Self::with_registry(Arc::new(Registry::new()))
    }

    /// Create with an existing Prometheus registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let service = ServiceMetrics::new(Arc::clone(&registry))?;
        Ok(Self { registry, service })
    }

    pub fn service(&self) -> &ServiceMetrics {
        &self.service
    }

    /// Gather all metrics in Prometheus format
    pub fn gather(&self) -> Vec<prometheus::proto::MetricFamily> {
        self.registry.gather()
    }

    /// Encode metrics as text for scraping
    pub fn encode_text(&self) -> Result<String> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.gather(), &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| TelemetryError::MetricsError(prometheus::Error::Msg(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_submissions() {
        let registry = ServiceMetricsRegistry::new().unwrap();
        let metrics = registry.service();

        metrics.record_accepted();
        metrics.record_accepted();
        metrics.record_rejected(&Rejection::missing_field("content"));

        assert_eq!(metrics.submissions("accepted"), 2.0);
        assert_eq!(metrics.submissions("rejected"), 1.0);
    }

    #[test]
    fn test_encode_text() {
        let registry = ServiceMetricsRegistry::new().unwrap();
        let metrics = registry.service();

        metrics.record_rejected(&Rejection::empty_value("content"));
        metrics.record_malformed_body();
        metrics.record_http_request("POST", "/scamsense", 400, 0.002);

        let text = registry.encode_text().unwrap();
        assert!(text.contains("scamsense_submissions_total"));
        assert!(text.contains("kind=\"empty_value\""));
        assert!(text.contains("scamsense_malformed_bodies_total 1"));
        assert!(text.contains("scamsense_http_request_duration_seconds"));
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let registry = Arc::new(Registry::new());
        assert!(ServiceMetricsRegistry::with_registry(Arc::clone(&registry)).is_ok());
        assert!(ServiceMetricsRegistry::with_registry(registry).is_err());
    }
}
