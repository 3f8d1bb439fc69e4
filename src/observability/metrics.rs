//! Metrics collection and exposition.
//!
//! # Metrics
//! - `layoutml_requests_total` (counter): requests by response kind and status
//! - `layoutml_request_duration_seconds` (histogram): handling latency
//! - `layoutml_stylesheets_generated_total` (counter): CSS files written
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - The Prometheus endpoint is optional and off by default

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUESTS_TOTAL: &str = "layoutml_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "layoutml_request_duration_seconds";
pub const STYLESHEETS_GENERATED_TOTAL: &str = "layoutml_stylesheets_generated_total";

/// Install the Prometheus recorder and its HTTP listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Record one handled request.
pub fn record_request(kind: &str, status: u16, start: Instant) {
    metrics::counter!(
        REQUESTS_TOTAL,
        "kind" => kind.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(REQUEST_DURATION_SECONDS, "kind" => kind.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_stylesheet_written() {
    metrics::counter!(STYLESHEETS_GENERATED_TOTAL).increment(1);
}
