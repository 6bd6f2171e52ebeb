//! Metrics collection and registry.

use crate::error::{ErrorClass, SamplingError};
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Registration or encoding failed inside prometheus.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// Prometheus metrics registry for sequence generation.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Registry,
    requests_total: IntCounter,
    samples_total: IntCounter,
    client_errors_total: IntCounter,
    server_errors_total: IntCounter,
}

impl MetricsRegistry {
    /// Creates a new metrics registry with all counters registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let requests_total = IntCounter::new(
            "distribution_sequence_requests_total",
            "Total number of sequence requests handled",
        )?;
        let samples_total = IntCounter::new(
            "distribution_sequence_samples_total",
            "Total number of samples returned",
        )?;
        let client_errors_total = IntCounter::new(
            "distribution_sequence_client_errors_total",
            "Requests rejected because of invalid input",
        )?;
        let server_errors_total = IntCounter::new(
            "distribution_sequence_server_errors_total",
            "Requests that failed inside the sampling engine",
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(samples_total.clone()))?;
        registry.register(Box::new(client_errors_total.clone()))?;
        registry.register(Box::new(server_errors_total.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            samples_total,
            client_errors_total,
            server_errors_total,
        })
    }

    /// Records a successful request that returned `count` samples.
    pub fn record_success(&self, count: usize) {
        self.requests_total.inc();
        self.samples_total.inc_by(count as u64);
    }

    /// Records a failed request.
    pub fn record_failure(&self, error: &SamplingError) {
        self.requests_total.inc();
        match error.class() {
            ErrorClass::ClientError => self.client_errors_total.inc(),
            ErrorClass::ServerError => self.server_errors_total.inc(),
        }
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
