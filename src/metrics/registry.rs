// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec, Encoder,
    HistogramVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // REQUEST METRICS
    // ============================================================================

    /// Total /translate requests by outcome
    pub static ref TRANSLATE_REQUESTS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("translate_requests_total", "Total translate requests"),
        &["outcome"], // outcome: success, validation_error, provider_error, internal_error
        REGISTRY
    ).expect("translate_requests_total registers once");

    // ============================================================================
    // PROVIDER METRICS
    // ============================================================================

    /// Total calls to the upstream provider
    pub static ref PROVIDER_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("provider_calls_total", "Total translation provider calls"),
        &["operation", "status"], // operation: detect, translate; status: ok, error
        REGISTRY
    ).expect("provider_calls_total registers once");

    /// Upstream call duration
    pub static ref PROVIDER_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new(
            "provider_call_duration_seconds",
            "Translation provider call duration"
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["operation"],
        REGISTRY
    ).expect("provider_call_duration_seconds registers once");
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!("Failed to encode metrics: {}", e);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
