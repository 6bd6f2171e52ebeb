//! Base random provider.
//!
//! `general` is a fast non-cryptographic generator (`SmallRng`); `secure` is
//! ChaCha20. Both are seeded from OS entropy. The uniform and gaussian
//! primitives are computed natively from the 64-bit stream so the base
//! source stays independent of the `rand_distr` algorithm suite used by the
//! secondary source.

use super::RandomSource;
use crate::error::SamplingError;
use rand::rngs::SmallRng;
use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 2^-53, the spacing of doubles in `[0.5, 1)`.
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Which generator backs the base source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Fast, non-cryptographic.
    General,
    /// Cryptographically strong.
    Secure,
}

impl SourceType {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Secure => "secure",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::General, Self::Secure]
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SamplingError::UnknownSourceType(s.to_string()))
    }
}

enum Generator {
    General(SmallRng),
    Secure(ChaCha20Rng),
}

/// The caller-selected primary source for one request.
pub struct BaseSource {
    source_type: SourceType,
    generator: Generator,
    /// Second value produced by the polar method, returned on the next call.
    spare_gaussian: Option<f64>,
}

impl BaseSource {
    /// Creates a base source seeded from the OS entropy source.
    pub fn from_os_entropy(source_type: SourceType) -> Result<Self, SamplingError> {
        let generator = match source_type {
            SourceType::General => SmallRng::from_rng(OsRng).map(Generator::General),
            SourceType::Secure => {
                let mut seed = [0u8; 32];
                OsRng.try_fill_bytes(&mut seed).map(|()| {
                    Generator::Secure(ChaCha20Rng::from_seed(seed))
                })
            }
        }
        .map_err(|e| SamplingError::Internal(format!("OS entropy unavailable: {e}")))?;

        Ok(Self::with_generator(source_type, generator))
    }

    /// Creates a base source from a fixed seed, for replay and tests.
    pub fn from_seed(source_type: SourceType, seed: u64) -> Self {
        let generator = match source_type {
            SourceType::General => Generator::General(SmallRng::seed_from_u64(seed)),
            SourceType::Secure => Generator::Secure(ChaCha20Rng::seed_from_u64(seed)),
        };
        Self::with_generator(source_type, generator)
    }

    fn with_generator(source_type: SourceType, generator: Generator) -> Self {
        Self {
            source_type,
            generator,
            spare_gaussian: None,
        }
    }

    /// Returns the generator type backing this source.
    pub fn source_type(&self) -> SourceType {
        self.source_type
    }
}

impl RandomSource for BaseSource {
    fn next_uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * UNIT_SCALE
    }

    /// Marsaglia polar method; each accepted pair yields two values.
    fn next_gaussian(&mut self) -> f64 {
        if let Some(spare) = self.spare_gaussian.take() {
            return spare;
        }

        loop {
            let v1 = 2.0 * self.next_uniform() - 1.0;
            let v2 = 2.0 * self.next_uniform() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s > 0.0 && s < 1.0 {
                let multiplier = (-2.0 * s.ln() / s).sqrt();
                self.spare_gaussian = Some(v2 * multiplier);
                return v1 * multiplier;
            }
        }
    }
}

impl RngCore for BaseSource {
    fn next_u32(&mut self) -> u32 {
        match &mut self.generator {
            Generator::General(rng) => rng.next_u32(),
            Generator::Secure(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match &mut self.generator {
            Generator::General(rng) => rng.next_u64(),
            Generator::Secure(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match &mut self.generator {
            Generator::General(rng) => rng.fill_bytes(dest),
            Generator::Secure(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        match &mut self.generator {
            Generator::General(rng) => rng.try_fill_bytes(dest),
            Generator::Secure(rng) => rng.try_fill_bytes(dest),
        }
    }
}

impl fmt::Debug for BaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Generator state is not printed.
        f.debug_struct("BaseSource")
            .field("source_type", &self.source_type)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_case_insensitive() {
        assert_eq!("general".parse::<SourceType>(), Ok(SourceType::General));
        assert_eq!("SECURE".parse::<SourceType>(), Ok(SourceType::Secure));
        assert_eq!("Secure".parse::<SourceType>(), Ok(SourceType::Secure));
    }

    #[test]
    fn test_unknown_source_type_rejected() {
        assert_eq!(
            "fast".parse::<SourceType>(),
            Err(SamplingError::UnknownSourceType("fast".into()))
        );
    }

    #[test]
    fn test_uniform_in_unit_interval() {
        for source_type in [SourceType::General, SourceType::Secure] {
            let mut source = BaseSource::from_seed(source_type, 7);
            for _ in 0..10_000 {
                let u = source.next_uniform();
                assert!((0.0..1.0).contains(&u));
            }
        }
    }

    #[test]
    fn test_gaussian_moments() {
        let mut source = BaseSource::from_seed(SourceType::General, 11);
        let n = 50_000;
        let draws: Vec<f64> = (0..n).map(|_| source.next_gaussian()).collect();
        let mean = draws.iter().sum::<f64>() / n as f64;
        let variance = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.03, "mean {mean}");
        assert!((variance - 1.0).abs() < 0.05, "variance {variance}");
    }

    #[test]
    fn test_seeded_sources_replay() {
        let mut a = BaseSource::from_seed(SourceType::Secure, 99);
        let mut b = BaseSource::from_seed(SourceType::Secure, 99);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_os_entropy_sources_differ() {
        let mut a = BaseSource::from_os_entropy(SourceType::Secure).unwrap();
        let mut b = BaseSource::from_os_entropy(SourceType::Secure).unwrap();
        assert_ne!(a.next_u64(), b.next_u64());
    }
}
