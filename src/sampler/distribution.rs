//! Supported distribution families and their parameter tables.

use crate::error::SamplingError;
use crate::source::BoundSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported distribution family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    /// Continuous uniform on `[min, max)`.
    Uniform,
    /// Normal with mean and standard deviation.
    Gaussian,
    /// Exponential with rate λ.
    Exponential,
    /// Gamma with shape k and scale θ.
    Gamma,
    /// Log-normal with log-mean μ and log-deviation σ.
    LogNormal,
    /// Beta with shapes α and β.
    Beta,
    /// Weibull with shape k and scale λ.
    Weibull,
    /// Cauchy with location x₀ and scale γ.
    Cauchy,
    /// Student's t with ν degrees of freedom.
    #[serde(rename = "t-student")]
    StudentT,
    /// Binomial with n trials and success probability p.
    Binomial,
}

/// Name and default value of one distribution parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    /// Parameter name used in error messages.
    pub name: &'static str,
    /// Value applied when the caller omits the parameter.
    pub default: f64,
}

const fn spec(name: &'static str, default: f64) -> ParameterSpec {
    ParameterSpec { name, default }
}

impl Distribution {
    /// Every supported family, in canonical order.
    pub const ALL: [Distribution; 10] = [
        Self::Uniform,
        Self::Gaussian,
        Self::Exponential,
        Self::Gamma,
        Self::LogNormal,
        Self::Beta,
        Self::Weibull,
        Self::Cauchy,
        Self::StudentT,
        Self::Binomial,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Gaussian => "gaussian",
            Self::Exponential => "exponential",
            Self::Gamma => "gamma",
            Self::LogNormal => "lognormal",
            Self::Beta => "beta",
            Self::Weibull => "weibull",
            Self::Cauchy => "cauchy",
            Self::StudentT => "t-student",
            Self::Binomial => "binomial",
        }
    }

    /// Parameter table: `param1` and, when used, `param2`.
    pub fn parameters(self) -> (ParameterSpec, Option<ParameterSpec>) {
        match self {
            Self::Uniform => (spec("min", 0.0), Some(spec("max", 1.0))),
            Self::Gaussian => (spec("mean", 0.0), Some(spec("stddev", 1.0))),
            Self::Exponential => (spec("rate", 1.0), None),
            Self::Gamma => (spec("shape", 1.0), Some(spec("scale", 1.0))),
            Self::LogNormal => (spec("mu", 0.0), Some(spec("sigma", 1.0))),
            Self::Beta => (spec("alpha", 1.0), Some(spec("beta", 1.0))),
            Self::Weibull => (spec("shape", 1.0), Some(spec("scale", 1.0))),
            Self::Cauchy => (spec("location", 0.0), Some(spec("scale", 1.0))),
            Self::StudentT => (spec("dof", 10.0), None),
            Self::Binomial => (spec("trials", 10.0), Some(spec("probability", 0.5))),
        }
    }

    /// Which bridged source samplers of this family draw from.
    pub fn bound_source(self) -> BoundSource {
        match self {
            Self::Uniform | Self::Gaussian | Self::Exponential => BoundSource::Base,
            _ => BoundSource::Secondary,
        }
    }

    /// Canonical names of the given families.
    pub fn names(distributions: &[Distribution]) -> Vec<String> {
        distributions.iter().map(|d| d.name().to_string()).collect()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SamplingError::UnknownDistribution {
                name: s.to_string(),
                supported: Self::names(&Self::ALL),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for distribution in Distribution::ALL {
            assert_eq!(distribution.name().parse::<Distribution>(), Ok(distribution));
        }
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!("GAUSSIAN".parse::<Distribution>(), Ok(Distribution::Gaussian));
        assert_eq!("T-Student".parse::<Distribution>(), Ok(Distribution::StudentT));
        assert_eq!("LogNormal".parse::<Distribution>(), Ok(Distribution::LogNormal));
    }

    #[test]
    fn test_unknown_name() {
        match "poisson".parse::<Distribution>() {
            Err(SamplingError::UnknownDistribution { name, supported }) => {
                assert_eq!(name, "poisson");
                assert_eq!(supported.len(), 10);
                assert!(supported.contains(&"t-student".to_string()));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_bound_sources() {
        assert_eq!(Distribution::Uniform.bound_source(), BoundSource::Base);
        assert_eq!(Distribution::Exponential.bound_source(), BoundSource::Base);
        assert_eq!(Distribution::Beta.bound_source(), BoundSource::Secondary);
        assert_eq!(Distribution::Binomial.bound_source(), BoundSource::Secondary);
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&Distribution::StudentT).unwrap();
        assert_eq!(json, "\"t-student\"");
        let json = serde_json::to_string(&Distribution::LogNormal).unwrap();
        assert_eq!(json, "\"lognormal\"");
    }
}
