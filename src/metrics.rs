//! Request counters for the gated route groups.

use metrics::{counter, describe_counter};
use tracing::debug;

// === Metric Name Constants ===

/// Requests served by the typeone group counter metric name.
pub const METRIC_TYPEONE_REQUESTS: &str = "typeone_requests_total";
/// Requests served by the typetwo group counter metric name.
pub const METRIC_TYPETWO_REQUESTS: &str = "typetwo_requests_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_TYPEONE_REQUESTS,
        "Total requests served by the typeone route group"
    );
    describe_counter!(
        METRIC_TYPETWO_REQUESTS,
        "Total requests served by the typetwo route group"
    );

    debug!("Metrics initialized");
}

/// Increment the typeone request counter for the given endpoint.
pub fn inc_typeone_requests(endpoint: &'static str) {
    counter!(METRIC_TYPEONE_REQUESTS, "endpoint" => endpoint).increment(1);
}

/// Increment the typetwo request counter for the given endpoint.
pub fn inc_typetwo_requests(endpoint: &'static str) {
    counter!(METRIC_TYPETWO_REQUESTS, "endpoint" => endpoint).increment(1);
}
