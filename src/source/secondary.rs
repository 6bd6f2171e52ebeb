//! Secondary random adapter.
//!
//! A deterministic `StdRng` whose primitives come from the `rand` /
//! `rand_distr` algorithm suite (`Standard` for uniforms, Ziggurat
//! `StandardNormal` for gaussians). Identical seeds yield identical streams.

use super::RandomSource;
use rand::rngs::StdRng;
use rand::Rng;
use rand_core::{RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use std::fmt;

/// Seeded source backing the library samplers.
pub struct SecondarySource {
    inner: StdRng,
    seed: u64,
}

impl SecondarySource {
    /// Creates a secondary source from a 64-bit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed this source was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SecondarySource {
    fn next_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    fn next_gaussian(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }
}

impl RngCore for SecondarySource {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

impl fmt::Debug for SecondarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecondarySource")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SecondarySource::new(0xDEAD_BEEF);
        let mut b = SecondarySource::new(0xDEAD_BEEF);

        for _ in 0..32 {
            assert_eq!(a.next_uniform(), b.next_uniform());
            assert_eq!(a.next_gaussian(), b.next_gaussian());
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_different_seed_different_stream() {
        let mut a = SecondarySource::new(1);
        let mut b = SecondarySource::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_seed_retained() {
        assert_eq!(SecondarySource::new(42).seed(), 42);
    }
}
