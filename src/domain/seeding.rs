//! Random streams for expansion
//!
//! Every expansion owns its generator. A batch draws one seed per item and
//! hands the same seed to each of that item's prompt variants, so identical
//! directives in the same position expand identically across variants.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generator for one expansion: seeded if a seed is given, else from OS entropy
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Source of per-item seeds for a batch
#[derive(Debug, Clone)]
pub struct SeedSequence {
    rng: StdRng,
}

impl SeedSequence {
    /// `seed` fixes the whole batch; `None` makes every run different
    pub fn new(seed: Option<u64>) -> Self {
        SeedSequence { rng: rng_for(seed) }
    }

    /// Seed for the next batch item
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}

impl Iterator for SeedSequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_seed())
    }
}
