//! Parameter defaulting and validation.
//!
//! Each parameter is resolved independently against its family's default
//! table, then the family's constraints are checked. Validation happens once
//! per request, before any sampler exists.

use super::distribution::{Distribution, ParameterSpec};
use crate::error::SamplingError;
use serde::Serialize;

/// Largest trial count that is exactly representable as an `f64` integer.
const MAX_TRIALS: f64 = 9_007_199_254_740_992.0;

/// Validated parameter set for one distribution family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "distribution", rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum ResolvedParameters {
    Uniform { min: f64, max: f64 },
    Gaussian { mean: f64, std_dev: f64 },
    Exponential { rate: f64 },
    Gamma { shape: f64, scale: f64 },
    LogNormal { mu: f64, sigma: f64 },
    Beta { alpha: f64, beta: f64 },
    Weibull { shape: f64, scale: f64 },
    Cauchy { location: f64, scale: f64 },
    #[serde(rename = "t-student")]
    StudentT { dof: f64 },
    Binomial { trials: u64, probability: f64 },
}

impl ParameterSpec {
    /// Applies the default when `value` is omitted and rejects non-finite input.
    fn resolve(self, value: Option<f64>) -> Result<f64, SamplingError> {
        let value = value.unwrap_or(self.default);
        if !value.is_finite() {
            return Err(SamplingError::invalid_parameter(
                self.name,
                format!("must be a finite number (got {value})"),
            ));
        }
        Ok(value)
    }
}

fn positive(spec: ParameterSpec, value: f64) -> Result<f64, SamplingError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SamplingError::invalid_parameter(
            spec.name,
            format!("must be greater than 0 (got {value})"),
        ))
    }
}

impl ResolvedParameters {
    /// Resolves and validates the raw request parameters for `distribution`.
    pub fn resolve(
        distribution: Distribution,
        param1: Option<f64>,
        param2: Option<f64>,
    ) -> Result<Self, SamplingError> {
        let (first, second) = distribution.parameters();
        let p1 = first.resolve(param1)?;
        let (second, p2) = match second {
            Some(spec) => (spec, spec.resolve(param2)?),
            // Single-parameter families ignore param2; neither value is read.
            None => (first, p1),
        };

        let resolved = match distribution {
            Distribution::Uniform => {
                if p1 >= p2 {
                    return Err(SamplingError::invalid_parameter(
                        second.name,
                        format!("must be greater than min (got min={p1}, max={p2})"),
                    ));
                }
                Self::Uniform { min: p1, max: p2 }
            }
            Distribution::Gaussian => Self::Gaussian {
                mean: p1,
                std_dev: positive(second, p2)?,
            },
            Distribution::Exponential => Self::Exponential {
                rate: positive(first, p1)?,
            },
            Distribution::Gamma => Self::Gamma {
                shape: positive(first, p1)?,
                scale: positive(second, p2)?,
            },
            Distribution::LogNormal => Self::LogNormal {
                mu: p1,
                sigma: positive(second, p2)?,
            },
            Distribution::Beta => Self::Beta {
                alpha: positive(first, p1)?,
                beta: positive(second, p2)?,
            },
            Distribution::Weibull => Self::Weibull {
                shape: positive(first, p1)?,
                scale: positive(second, p2)?,
            },
            Distribution::Cauchy => Self::Cauchy {
                location: p1,
                scale: positive(second, p2)?,
            },
            Distribution::StudentT => Self::StudentT {
                dof: positive(first, p1)?,
            },
            Distribution::Binomial => Self::Binomial {
                trials: trials(first, p1)?,
                probability: probability(second, p2)?,
            },
        };

        Ok(resolved)
    }

    /// The family these parameters belong to.
    pub fn distribution(&self) -> Distribution {
        match self {
            Self::Uniform { .. } => Distribution::Uniform,
            Self::Gaussian { .. } => Distribution::Gaussian,
            Self::Exponential { .. } => Distribution::Exponential,
            Self::Gamma { .. } => Distribution::Gamma,
            Self::LogNormal { .. } => Distribution::LogNormal,
            Self::Beta { .. } => Distribution::Beta,
            Self::Weibull { .. } => Distribution::Weibull,
            Self::Cauchy { .. } => Distribution::Cauchy,
            Self::StudentT { .. } => Distribution::StudentT,
            Self::Binomial { .. } => Distribution::Binomial,
        }
    }
}

fn trials(spec: ParameterSpec, value: f64) -> Result<u64, SamplingError> {
    if value.fract() != 0.0 || value < 1.0 {
        return Err(SamplingError::invalid_parameter(
            spec.name,
            format!("must be a positive integer (got {value})"),
        ));
    }
    if value > MAX_TRIALS {
        return Err(SamplingError::invalid_parameter(
            spec.name,
            format!("must not exceed {MAX_TRIALS} (got {value})"),
        ));
    }
    Ok(value as u64)
}

fn probability(spec: ParameterSpec, value: f64) -> Result<f64, SamplingError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SamplingError::invalid_parameter(
            spec.name,
            format!("must be between 0 and 1 (got {value})"),
        ))
    }
}
