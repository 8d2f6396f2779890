//! Prometheus metrics for the inspector.
//!
//! All metrics are aggregated in the [`Metrics`] struct for easy tracking and management.

use metrics::{counter, describe_counter, describe_gauge, gauge};
use protocol::L1State;

/// Aggregated metrics for the inspector.
///
/// Metrics are registered with the global metrics registry on creation.
#[derive(Debug, Clone)]
pub struct Metrics {
    _private: (),
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics instance and register all metric descriptions.
    pub fn new() -> Self {
        Self::register_descriptions();
        Self { _private: () }
    }

    fn register_descriptions() {
        describe_counter!(
            "inspector_events_total",
            "Total number of decoded contract events by event name"
        );
        describe_counter!(
            "inspector_rpc_failures_total",
            "Total number of failed RPC reads by operation"
        );

        describe_gauge!(
            "inspector_next_block_id",
            "Next block id to be proposed on TaikoL1"
        );
        describe_gauge!(
            "inspector_latest_verified_id",
            "Latest verified block id on TaikoL1"
        );
        describe_gauge!(
            "inspector_latest_verified_height",
            "L2 height of the latest verified block"
        );
        describe_gauge!(
            "inspector_pending_blocks",
            "Number of proposed blocks not yet verified"
        );
    }

    /// Record a decoded event.
    pub fn record_event(&self, event: &str) {
        counter!("inspector_events_total", "event" => event.to_string()).increment(1);
    }

    /// Record a failed RPC read.
    pub fn record_rpc_failure(&self, operation: &str) {
        counter!("inspector_rpc_failures_total", "operation" => operation.to_string())
            .increment(1);
    }

    /// Publish the latest L1 sync state.
    pub fn set_l1_state(&self, state: &L1State) {
        gauge!("inspector_next_block_id").set(state.next_block_id as f64);
        gauge!("inspector_latest_verified_id").set(state.latest_verified_id as f64);
        gauge!("inspector_latest_verified_height").set(state.latest_verified_height as f64);
        gauge!("inspector_pending_blocks").set(state.num_pending_blocks() as f64);
    }
}

/// Install the Prometheus metrics exporter and start the HTTP server.
///
/// Returns an error if the server fails to bind to the specified port.
pub fn install_prometheus_exporter(port: u16) -> eyre::Result<()> {
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::net::SocketAddr;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| eyre::eyre!("Failed to install Prometheus exporter: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_recorded_metrics_are_rendered() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            let metrics = Metrics::new();
            metrics.record_event("BlockProposed");
            metrics.record_event("BlockProposed");
            metrics.set_l1_state(&L1State {
                genesis_height: 0,
                latest_verified_height: 90,
                latest_verified_id: 10,
                next_block_id: 15,
            });
        });

        let rendered = handle.render();
        assert!(rendered.contains("inspector_events_total{event=\"BlockProposed\"} 2"));
        assert!(rendered.contains("inspector_pending_blocks 4"));
    }
}
