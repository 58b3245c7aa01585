//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define service metrics (request counts, latency)
//! - Expose a Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `http_requests_total` (counter): total requests by method, status
//! - `http_request_duration_seconds` (histogram): latency by method
//!
//! # Design Decisions
//! - The exporter runs its own listener, separate from the service port
//! - Labels stay low-cardinality (method and status only)

use std::net::SocketAddr;
use std::time::Instant;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exporter on its own address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(error) => {
            tracing::error!(address = %addr, error = %error, "Failed to start metrics exporter");
        }
    }
}

/// Record one finished request.
pub fn record_request(method: &str, status: u16, start_time: Instant) {
    metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(start_time.elapsed().as_secs_f64());
}

/// Middleware that times every request and records its outcome.
pub async fn track_requests(req: Request<Body>, next: Next) -> Response {
    let start_time = Instant::now();
    let method = req.method().to_string();

    let response = next.run(req).await;

    record_request(&method, response.status().as_u16(), start_time);
    response
}
