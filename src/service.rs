//! Sequence generation service.
//!
//! [`SequenceService`] holds only immutable startup configuration. Every
//! request builds its own base source, secondary source and sampler, and
//! drops them once the sequence is produced.

use crate::config::ServiceConfig;
use crate::error::SamplingError;
use crate::sampler::{Distribution, SamplerRegistry};
use crate::source::{BaseSource, SourceBridge, SourceType};
use serde::{Deserialize, Serialize};

/// One request for a sample sequence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SampleRequest {
    count: i64,
    #[serde(rename = "type")]
    source_type: String,
    distribution: String,
    #[serde(default)]
    param1: Option<f64>,
    #[serde(default)]
    param2: Option<f64>,
}

impl SampleRequest {
    /// Creates a request. Parameters left as `None` take the family default.
    pub fn new(
        count: i64,
        source_type: impl Into<String>,
        distribution: impl Into<String>,
        param1: Option<f64>,
        param2: Option<f64>,
    ) -> Self {
        Self {
            count,
            source_type: source_type.into(),
            distribution: distribution.into(),
            param1,
            param2,
        }
    }

    /// Requested number of samples.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Requested base source type, as supplied.
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    /// Requested distribution name, as supplied.
    pub fn distribution(&self) -> &str {
        &self.distribution
    }

    /// First distribution parameter.
    pub fn param1(&self) -> Option<f64> {
        self.param1
    }

    /// Second distribution parameter.
    pub fn param2(&self) -> Option<f64> {
        self.param2
    }
}

/// Samples in generation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SampleSequence(Vec<f64>);

impl SampleSequence {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the sequence holds no samples.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Samples as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the sequence, returning the samples.
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

/// Successful generation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceResponse {
    /// Base source type used.
    #[serde(rename = "type")]
    pub source_type: SourceType,
    /// Number of samples produced.
    pub count: usize,
    /// Distribution family sampled.
    pub distribution: Distribution,
    /// The samples.
    pub sequence: SampleSequence,
}

/// Orchestrates sequence generation.
#[derive(Debug, Clone)]
pub struct SequenceService {
    max_count: u64,
    registry: SamplerRegistry,
}

impl SequenceService {
    /// Creates a service from startup configuration.
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            max_count: config.max_count,
            registry: SamplerRegistry::new(config.distributions.clone()),
        }
    }

    /// Returns the sampler registry.
    pub fn registry(&self) -> &SamplerRegistry {
        &self.registry
    }

    /// Generates a sequence using a freshly seeded base source.
    pub fn generate(&self, request: &SampleRequest) -> Result<SequenceResponse, SamplingError> {
        let result = self.validate_count(request.count()).and_then(|count| {
            let source_type: SourceType = request.source_type().parse()?;
            let base = BaseSource::from_os_entropy(source_type)?;
            self.run(count, request, base)
        });
        log_outcome(request, &result);
        result
    }

    /// Generates a sequence drawing from the supplied base source.
    ///
    /// The request's `type` field is not consulted; the response reports the
    /// type of `base`. Used for replay and deterministic testing.
    pub fn generate_with_source(
        &self,
        request: &SampleRequest,
        base: BaseSource,
    ) -> Result<SequenceResponse, SamplingError> {
        let result = self
            .validate_count(request.count())
            .and_then(|count| self.run(count, request, base));
        log_outcome(request, &result);
        result
    }

    fn validate_count(&self, count: i64) -> Result<usize, SamplingError> {
        match u64::try_from(count) {
            Ok(n) if n >= 1 && n <= self.max_count => usize::try_from(n).map_err(|_| {
                SamplingError::InvalidCount {
                    count,
                    max: self.max_count,
                }
            }),
            _ => Err(SamplingError::InvalidCount {
                count,
                max: self.max_count,
            }),
        }
    }

    fn run(
        &self,
        count: usize,
        request: &SampleRequest,
        base: BaseSource,
    ) -> Result<SequenceResponse, SamplingError> {
        // The secondary seed is drawn even for base-bound families.
        let mut bridge = SourceBridge::new(base);
        let source_type = bridge.base().source_type();
        tracing::debug!(
            count,
            source_type = %source_type,
            distribution = request.distribution(),
            "Generating sequence"
        );

        let mut sampler = self.registry.create(
            request.distribution(),
            request.param1(),
            request.param2(),
            &mut bridge,
        )?;
        let distribution = sampler.parameters().distribution();

        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            samples.push(sampler.sample()?);
        }

        Ok(SequenceResponse {
            source_type,
            count,
            distribution,
            sequence: SampleSequence(samples),
        })
    }
}

impl Default for SequenceService {
    fn default() -> Self {
        Self::new(&ServiceConfig::default())
    }
}

fn log_outcome(request: &SampleRequest, result: &Result<SequenceResponse, SamplingError>) {
    match result {
        Ok(response) => tracing::info!(
            count = response.count,
            distribution = %response.distribution,
            source_type = %response.source_type,
            "Sequence generated"
        ),
        Err(error) if error.is_client_error() => tracing::warn!(
            error = %error,
            distribution = request.distribution(),
            "Rejected sequence request"
        ),
        Err(error) => tracing::error!(
            error = %error,
            distribution = request.distribution(),
            "Sequence generation failed"
        ),
    }
}
