//! Metrics collection and exposition.
//!
//! # Metrics
//! - `shell_page_renders_total` (counter): pages served by view, status
//! - `shell_page_render_duration_seconds` (histogram): compose + respond time
//! - `shell_config_reloads_total` (counter): reload attempts by outcome
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Labels are low-cardinality (three views, few statuses)

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::shell::View;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_page(view: View, status: u16, start: Instant) {
    metrics::counter!(
        "shell_page_renders_total",
        "view" => view.as_str(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("shell_page_render_duration_seconds", "view" => view.as_str())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_reload(outcome: &'static str) {
    metrics::counter!("shell_config_reloads_total", "outcome" => outcome).increment(1);
}
