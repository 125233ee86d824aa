//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): resolutions by mode (`path`, `ids`)
//!   and outcome (`matched`, `not_found`)
//! - `router_redirects_total` (counter): redirects applied before resolution
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - The Prometheus exporter is only started by the long-running watch mode

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter. Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_resolution(mode: &'static str, matched: bool) {
    let outcome = if matched { "matched" } else { "not_found" };
    counter!("router_resolutions_total", "mode" => mode, "outcome" => outcome).increment(1);
}

pub fn record_redirect() {
    counter!("router_redirects_total").increment(1);
}
