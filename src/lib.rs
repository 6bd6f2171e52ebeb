//! Distribution Sequence Library
//!
//! Generates ordered sequences of samples drawn from a caller-selected
//! statistical distribution over a caller-selected random source.
//!
//! # Architecture
//!
//! Each request flows through freshly built components:
//!
//! ```text
//! request → SequenceService → BaseSource ─seed→ SecondarySource
//!                  │                 └────┬────────┘
//!                  └──→ SamplerRegistry → Sampler ×count → SampleSequence
//! ```
//!
//! # Design Principles
//!
//! - **Fail-fast validation**: parameters are defaulted and checked once,
//!   before any sampling
//! - **One entropy root per request**: the secondary source is seeded from a
//!   single draw off the base source
//! - **No shared mutable state**: sources and samplers never outlive a request
//!
//! # Example
//!
//! ```
//! use distribution_sequence::{SampleRequest, SequenceService};
//!
//! let service = SequenceService::default();
//! let request = SampleRequest::new(5, "general", "gaussian", Some(10.0), Some(2.0));
//!
//! let response = service.generate(&request).unwrap();
//! assert_eq!(response.sequence.len(), 5);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod sampler;
#[cfg(feature = "server")]
pub mod server;
pub mod service;
pub mod source;

// Re-export commonly used types at crate root
pub use config::{FileConfig, ServerConfig, ServiceConfig};
pub use error::{ErrorClass, SamplingError};
pub use sampler::{Distribution, ResolvedParameters, Sampler, SamplerRegistry};
pub use service::{SampleRequest, SampleSequence, SequenceResponse, SequenceService};
pub use source::{BaseSource, RandomSource, SecondarySource, SourceBridge, SourceType};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
