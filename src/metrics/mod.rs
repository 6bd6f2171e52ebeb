//! Prometheus metrics for sequence generation.
//!
//! # Metrics Exposed
//!
//! - `distribution_sequence_requests_total` - Requests handled
//! - `distribution_sequence_samples_total` - Samples returned
//! - `distribution_sequence_client_errors_total` - Requests rejected for invalid input
//! - `distribution_sequence_server_errors_total` - Requests failed internally
//!
//! # Example
//!
//! ```
//! use distribution_sequence::metrics::MetricsRegistry;
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! registry.record_success(100);
//! assert!(registry.encode().unwrap().contains("distribution_sequence_samples_total 100"));
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry};
