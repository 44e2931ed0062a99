//! HTTP API handlers.
//!
//! Each handler returns a constant string; there is no shared state,
//! no extractors, and no side effect beyond a request counter.

use crate::metrics;

/// `GET /typeone/message` handler.
pub async fn typeone_message() -> &'static str {
    metrics::inc_typeone_requests("message");
    "Hello from TypeOne Controller!"
}

/// `GET /typeone/info` handler.
pub async fn typeone_info() -> &'static str {
    metrics::inc_typeone_requests("info");
    "TypeOne Controller provides general information."
}

/// `GET /typetwo/message` handler.
pub async fn typetwo_message() -> &'static str {
    metrics::inc_typetwo_requests("message");
    "Hello from TypeTwo Controller!"
}

/// `GET /typetwo/info` handler.
pub async fn typetwo_info() -> &'static str {
    metrics::inc_typetwo_requests("info");
    "TypeTwo Controller provides general information."
}
