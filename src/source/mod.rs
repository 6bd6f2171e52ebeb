//! Random sources and the per-request bridge between them.
//!
//! Two structurally different generators share one entropy source per
//! request: the base source is chosen by the caller (`general` or `secure`),
//! and the secondary source is seeded from a single 64-bit draw off the base
//! source. Selecting `secure` therefore propagates unpredictability into every
//! distribution, whichever source ends up backing it.
//!
//! ```text
//! BaseSource ──next_u64──▶ SecondarySource
//!     │                          │
//!     └──── closed-form ─────────┴──── rand_distr samplers
//! ```

mod base;
mod bridge;
mod secondary;

pub use base::{BaseSource, SourceType};
pub use bridge::{BoundSource, SourceBridge};
pub use secondary::SecondarySource;

use rand_core::RngCore;

/// Narrow interface shared by every random source.
///
/// The 64-bit primitive is [`RngCore::next_u64`]; being an [`RngCore`] also
/// lets any source drive `rand_distr` samplers directly.
pub trait RandomSource: RngCore {
    /// Draws a uniform value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Draws a standard normal value (mean 0, standard deviation 1).
    fn next_gaussian(&mut self) -> f64;
}
