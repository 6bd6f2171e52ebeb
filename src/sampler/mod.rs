//! Distribution samplers.
//!
//! A [`Sampler`] binds one validated parameter set to exactly one random
//! source and produces one value per [`Sampler::sample`] call. Uniform,
//! gaussian and exponential use closed-form rules over the base source
//! primitives; the remaining families delegate to `rand_distr` over the
//! secondary source.

mod distribution;
mod params;
mod registry;

pub use distribution::{Distribution, ParameterSpec};
pub use params::ResolvedParameters;
pub use registry::SamplerRegistry;

use crate::error::SamplingError;
use crate::source::RandomSource;
use rand_distr::{Beta, Binomial, Cauchy, Distribution as _, Gamma, LogNormal, StudentT, Weibull};
use std::fmt;

enum SamplerKind {
    Uniform { min: f64, max: f64 },
    Gaussian { mean: f64, std_dev: f64 },
    Exponential { rate: f64 },
    Gamma(Gamma<f64>),
    LogNormal(LogNormal<f64>),
    Beta(Beta<f64>),
    Weibull(Weibull<f64>),
    Cauchy(Cauchy<f64>),
    StudentT(StudentT<f64>),
    Binomial(Binomial),
}

/// Maps a `rand_distr` constructor error. Parameters are validated first, so
/// any failure here is internal.
fn library<T, E: fmt::Display>(
    distribution: Distribution,
    built: Result<T, E>,
) -> Result<T, SamplingError> {
    built.map_err(|e| SamplingError::Internal(format!("{distribution} sampler rejected parameters: {e}")))
}

impl SamplerKind {
    fn build(params: ResolvedParameters) -> Result<Self, SamplingError> {
        use ResolvedParameters as P;

        let distribution = params.distribution();
        let kind = match params {
            P::Uniform { min, max } => Self::Uniform { min, max },
            P::Gaussian { mean, std_dev } => Self::Gaussian { mean, std_dev },
            P::Exponential { rate } => Self::Exponential { rate },
            P::Gamma { shape, scale } => {
                Self::Gamma(library(distribution, Gamma::new(shape, scale))?)
            }
            P::LogNormal { mu, sigma } => {
                Self::LogNormal(library(distribution, LogNormal::new(mu, sigma))?)
            }
            P::Beta { alpha, beta } => Self::Beta(library(distribution, Beta::new(alpha, beta))?),
            // rand_distr takes scale before shape.
            P::Weibull { shape, scale } => {
                Self::Weibull(library(distribution, Weibull::new(scale, shape))?)
            }
            P::Cauchy { location, scale } => {
                Self::Cauchy(library(distribution, Cauchy::new(location, scale))?)
            }
            P::StudentT { dof } => Self::StudentT(library(distribution, StudentT::new(dof))?),
            P::Binomial {
                trials,
                probability,
            } => Self::Binomial(library(distribution, Binomial::new(trials, probability))?),
        };
        Ok(kind)
    }
}

/// A bound sampler for one request.
pub struct Sampler<'a> {
    source: &'a mut dyn RandomSource,
    params: ResolvedParameters,
    kind: SamplerKind,
}

impl<'a> Sampler<'a> {
    /// Resolves `param1`/`param2` for `distribution` and binds the sampler to
    /// `source`.
    ///
    /// The caller is responsible for passing the source matching
    /// [`Distribution::bound_source`]; [`SamplerRegistry`] does this.
    pub fn create(
        distribution: Distribution,
        param1: Option<f64>,
        param2: Option<f64>,
        source: &'a mut dyn RandomSource,
    ) -> Result<Self, SamplingError> {
        let params = ResolvedParameters::resolve(distribution, param1, param2)?;
        Self::bind(params, source)
    }

    /// Binds already-resolved parameters to `source`.
    pub fn bind(
        params: ResolvedParameters,
        source: &'a mut dyn RandomSource,
    ) -> Result<Self, SamplingError> {
        Ok(Self {
            source,
            params,
            kind: SamplerKind::build(params)?,
        })
    }

    /// The parameters this sampler was built with.
    pub fn parameters(&self) -> &ResolvedParameters {
        &self.params
    }

    /// Draws one sample.
    ///
    /// Returns [`SamplingError::Internal`] if the algorithm produces a
    /// non-finite value.
    pub fn sample(&mut self) -> Result<f64, SamplingError> {
        let source = &mut *self.source;
        let value = match &self.kind {
            SamplerKind::Uniform { min, max } => {
                let u = source.next_uniform();
                let span = max - min;
                if span.is_finite() {
                    min + span * u
                } else {
                    // Range wider than f64::MAX; interpolate without forming the span.
                    min * (1.0 - u) + max * u
                }
            }
            SamplerKind::Gaussian { mean, std_dev } => mean + std_dev * source.next_gaussian(),
            // Inverse CDF; 1 - U lies in (0, 1] so the log is finite.
            SamplerKind::Exponential { rate } => -(1.0 / rate) * (1.0 - source.next_uniform()).ln(),
            SamplerKind::Gamma(d) => d.sample(source),
            SamplerKind::LogNormal(d) => d.sample(source),
            SamplerKind::Beta(d) => d.sample(source),
            SamplerKind::Weibull(d) => d.sample(source),
            SamplerKind::Cauchy(d) => d.sample(source),
            SamplerKind::StudentT(d) => d.sample(source),
            SamplerKind::Binomial(d) => d.sample(source) as f64,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(SamplingError::Internal(format!(
                "{} sampler produced non-finite value {value}",
                self.params.distribution()
            )))
        }
    }
}

impl fmt::Debug for Sampler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sampler")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::FixedSource;
    use crate::source::SecondarySource;
    use approx::assert_relative_eq;

    fn draw(
        distribution: Distribution,
        param1: Option<f64>,
        param2: Option<f64>,
        seed: u64,
        n: usize,
    ) -> Vec<f64> {
        let mut source = SecondarySource::new(seed);
        let mut sampler = Sampler::create(distribution, param1, param2, &mut source).unwrap();
        (0..n).map(|_| sampler.sample().unwrap()).collect()
    }

    fn mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }

    #[test]
    fn test_uniform_fixed_draw() {
        let mut source = FixedSource::uniforms(&[0.5]);
        let mut sampler =
            Sampler::create(Distribution::Uniform, Some(5.0), Some(15.0), &mut source).unwrap();
        assert_eq!(sampler.sample(), Ok(10.0));
    }

    #[test]
    fn test_uniform_range_wider_than_f64_max() {
        let mut source = FixedSource::uniforms(&[0.0, 0.5, 0.999]);
        let mut sampler =
            Sampler::create(Distribution::Uniform, Some(-1e308), Some(1e308), &mut source)
                .unwrap();

        assert_eq!(sampler.sample(), Ok(-1e308));
        assert_eq!(sampler.sample(), Ok(0.0));
        let upper = sampler.sample().unwrap();
        assert!(upper.is_finite() && upper > 0.0 && upper <= 1e308);
    }

    #[test]
    fn test_gaussian_fixed_draw() {
        let mut source = FixedSource::gaussians(&[1.0]);
        let mut sampler =
            Sampler::create(Distribution::Gaussian, Some(10.0), Some(5.0), &mut source).unwrap();
        assert_eq!(sampler.sample(), Ok(15.0));
    }

    #[test]
    fn test_exponential_fixed_draw() {
        let mut source = FixedSource::uniforms(&[0.5]);
        let mut sampler =
            Sampler::create(Distribution::Exponential, Some(2.0), None, &mut source).unwrap();
        assert_relative_eq!(sampler.sample().unwrap(), -0.5 * 0.5f64.ln());
    }

    #[test]
    fn test_exponential_zero_draw_is_zero() {
        let mut source = FixedSource::uniforms(&[0.0]);
        let mut sampler =
            Sampler::create(Distribution::Exponential, None, None, &mut source).unwrap();
        assert_eq!(sampler.sample(), Ok(0.0));
    }

    #[test]
    fn test_rejection_builds_no_sampler() {
        let mut source = FixedSource::default();
        let result = Sampler::create(Distribution::Gaussian, None, Some(0.0), &mut source);
        assert!(matches!(result, Err(SamplingError::InvalidParameter { .. })));
    }

    #[test]
    fn test_beta_defaults_match_explicit() {
        let defaulted = draw(Distribution::Beta, None, None, 21, 256);
        let explicit = draw(Distribution::Beta, Some(1.0), Some(1.0), 21, 256);
        assert_eq!(defaulted, explicit);
    }

    #[test]
    fn test_beta_one_one_is_unit_uniform() {
        let values = draw(Distribution::Beta, None, None, 4, 20_000);
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
        assert!((mean(&values) - 0.5).abs() < 0.02);
    }

    #[test]
    fn test_gamma_unit_matches_exponential_mean() {
        let gamma = draw(Distribution::Gamma, Some(1.0), Some(1.0), 6, 20_000);
        let exponential = draw(Distribution::Exponential, Some(1.0), None, 6, 20_000);
        assert!(gamma.iter().all(|v| *v >= 0.0));
        assert!((mean(&gamma) - 1.0).abs() < 0.05);
        assert!((mean(&exponential) - 1.0).abs() < 0.05);
    }

    #[test]
    fn test_lognormal_positive() {
        let values = draw(Distribution::LogNormal, Some(0.0), Some(0.5), 8, 1_000);
        assert!(values.iter().all(|v| *v > 0.0));
    }

    #[test]
    fn test_weibull_argument_order() {
        // Mean of Weibull(k=1, λ) is λ.
        let values = draw(Distribution::Weibull, Some(1.0), Some(3.0), 10, 20_000);
        assert!((mean(&values) - 3.0).abs() < 0.15);
    }

    #[test]
    fn test_cauchy_median_near_location() {
        let mut values = draw(Distribution::Cauchy, Some(4.0), Some(1.0), 12, 10_001);
        values.sort_by(f64::total_cmp);
        assert!((values[5_000] - 4.0).abs() < 0.1);
    }

    #[test]
    fn test_student_t_default_dof() {
        let mut source = SecondarySource::new(1);
        let sampler = Sampler::create(Distribution::StudentT, None, None, &mut source).unwrap();
        assert_eq!(sampler.parameters(), &ResolvedParameters::StudentT { dof: 10.0 });
    }

    #[test]
    fn test_binomial_integral_and_bounded() {
        let values = draw(Distribution::Binomial, Some(20.0), Some(0.25), 14, 5_000);
        assert!(values.iter().all(|v| v.fract() == 0.0 && (0.0..=20.0).contains(v)));
        assert!((mean(&values) - 5.0).abs() < 0.2);
    }

    #[test]
    fn test_binomial_degenerate_probability() {
        let values = draw(Distribution::Binomial, Some(7.0), Some(1.0), 2, 100);
        assert!(values.iter().all(|v| *v == 7.0));
    }
}
