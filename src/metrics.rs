//! Prometheus metrics for HTTP request tracking.
//!
//! Every request is counted and timed by [`track_requests`]. Nothing is
//! exported over the service's own HTTP surface; when a metrics port is
//! configured, [`install_exporter`] starts a separate scrape listener.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::debug;

use crate::error::Result;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";

/// Endpoint label for requests that matched no route.
pub const UNMATCHED_ENDPOINT: &str = "unmatched";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total number of HTTP requests served"
    );

    debug!("Metrics initialized");
}

/// Install the global Prometheus recorder with its own scrape listener.
pub fn install_exporter(addr: SocketAddr) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    Ok(())
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, method: &str, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string()
    )
    .record(latency_ms);
}

/// Increment HTTP requests counter.
pub fn inc_http_requests(method: &str, endpoint: &str, status: u16) {
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Label for a request's endpoint: the route template, never the raw path.
pub fn endpoint_label(matched: Option<&MatchedPath>) -> &str {
    matched.map_or(UNMATCHED_ENDPOINT, MatchedPath::as_str)
}

/// Middleware recording request count and latency.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let endpoint = endpoint_label(request.extensions().get::<MatchedPath>()).to_owned();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    record_http_latency(start, method.as_str(), &endpoint);
    inc_http_requests(method.as_str(), &endpoint, status);

    response
}
