//! Prometheus metrics for the starred restaurants resource (default registry).

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

pub static OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "starred_restaurants_operations_total",
        "Starred restaurant operations by name and outcome",
        &["operation", "outcome"]
    )
    .expect("register operations_total")
});

/// Count one finished operation. `outcome` is `ok` or a short error kind.
pub fn record_operation(operation: &str, outcome: &str) {
    OPERATIONS_TOTAL.with_label_values(&[operation, outcome]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    // touch the counter so the family shows up before the first request
    Lazy::force(&OPERATIONS_TOTAL);
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_operation_is_exported() {
        record_operation("create", "ok");
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("starred_restaurants_operations_total"));
        assert!(body.contains(r#"operation="create""#));
    }
}
