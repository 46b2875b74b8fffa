// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{gather_metrics, PROVIDER_CALLS, PROVIDER_DURATION, TRANSLATE_REQUESTS};

/// Helper to record the outcome of a /translate request
pub fn record_request(outcome: &str) {
    TRANSLATE_REQUESTS.with_label_values(&[outcome]).inc();
}

/// Helper to record an upstream provider call
pub fn record_provider_call(operation: &str, success: bool, duration_secs: f64) {
    let status = if success { "ok" } else { "error" };
    PROVIDER_CALLS.with_label_values(&[operation, status]).inc();

    PROVIDER_DURATION
        .with_label_values(&[operation])
        .observe(duration_secs);
}
