//! Metrics for inference gateway calls.
//!
//! OpenTelemetry instruments labeled with provider, model and operation
//! (`chat`, `text_to_image`, `whoami`). Nothing is exported unless the host
//! application installs a meter provider.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<GatewayMetrics> = OnceLock::new();

/// Request, error and latency instruments for gateway calls.
#[derive(Clone)]
pub struct GatewayMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Successful gateway requests
    pub requests: Counter<u64>,
    /// Failed gateway requests
    pub errors: Counter<u64>,
    /// Gateway call duration in seconds
    pub duration: Histogram<f64>,
}

impl GatewayMetrics {
    fn init() -> Self {
        let meter = global::meter("moodcanvas_gateway");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("gateway.requests")
                .with_description("Successful inference gateway requests")
                .build(),
            errors: meter
                .u64_counter("gateway.errors")
                .with_description("Failed inference gateway requests")
                .build(),
            duration: meter
                .f64_histogram("gateway.duration")
                .with_unit("seconds")
                .with_description("Inference gateway call duration")
                .build(),
        }
    }

    /// Get the global gateway metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful request.
    pub fn record_request(&self, provider: &str, model: &str, operation: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("operation", operation.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed request.
    pub fn record_error(&self, provider: &str, model: &str, operation: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("operation", operation.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.errors.add(1, labels);
    }
}
