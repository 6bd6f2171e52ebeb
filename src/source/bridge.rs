//! Per-request pairing of base and secondary sources.

use super::{BaseSource, RandomSource, SecondarySource};
use rand_core::RngCore;
use serde::Serialize;

/// Which of the two bridged sources a sampler draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundSource {
    /// The caller-selected base source.
    Base,
    /// The secondary source seeded from the base source.
    Secondary,
}

/// Owns both random sources for exactly one request.
///
/// The secondary seed is always exactly one 64-bit draw off the base source,
/// taken at construction whether or not the request ends up using it.
#[derive(Debug)]
pub struct SourceBridge {
    base: BaseSource,
    secondary: SecondarySource,
}

impl SourceBridge {
    /// Consumes one draw from `base` and seeds the secondary source with it.
    pub fn new(mut base: BaseSource) -> Self {
        let seed = base.next_u64();
        tracing::trace!(
            source_type = %base.source_type(),
            "Seeded secondary source from base draw"
        );

        Self {
            base,
            secondary: SecondarySource::new(seed),
        }
    }

    /// Returns the seed the secondary source was built from.
    pub fn secondary_seed(&self) -> u64 {
        self.secondary.seed()
    }

    /// Returns the base source.
    pub fn base(&self) -> &BaseSource {
        &self.base
    }

    /// Returns the source a sampler should bind to.
    pub fn source_mut(&mut self, bound: BoundSource) -> &mut dyn RandomSource {
        match bound {
            BoundSource::Base => &mut self.base,
            BoundSource::Secondary => &mut self.secondary,
        }
    }
}
