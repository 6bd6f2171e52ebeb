//! Name-to-sampler dispatch.

use super::{Distribution, Sampler};
use crate::error::SamplingError;
use crate::source::SourceBridge;
use std::str::FromStr;

/// Maps distribution names onto bound samplers.
///
/// The registry holds only the set of enabled families, fixed at startup.
#[derive(Debug, Clone)]
pub struct SamplerRegistry {
    enabled: Vec<Distribution>,
}

impl SamplerRegistry {
    /// Creates a registry restricted to `enabled`.
    pub fn new(enabled: Vec<Distribution>) -> Self {
        Self { enabled }
    }

    /// Enabled families, in configuration order.
    pub fn supported(&self) -> &[Distribution] {
        &self.enabled
    }

    /// Looks up a family by case-insensitive name.
    pub fn lookup(&self, name: &str) -> Result<Distribution, SamplingError> {
        Distribution::from_str(name)
            .ok()
            .filter(|d| self.enabled.contains(d))
            .ok_or_else(|| SamplingError::UnknownDistribution {
                name: name.to_string(),
                supported: Distribution::names(&self.enabled),
            })
    }

    /// Resolves `name`, validates the parameters and binds a sampler to the
    /// bridged source the family requires.
    pub fn create<'a>(
        &self,
        name: &str,
        param1: Option<f64>,
        param2: Option<f64>,
        bridge: &'a mut SourceBridge,
    ) -> Result<Sampler<'a>, SamplingError> {
        let distribution = self.lookup(name)?;
        let source = bridge.source_mut(distribution.bound_source());
        Sampler::create(distribution, param1, param2, source)
    }
}

impl Default for SamplerRegistry {
    fn default() -> Self {
        Self::new(Distribution::ALL.to_vec())
    }
}
