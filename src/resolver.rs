//! Plausibility verdicts for domains outside the known-provider list

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of plausibility verdicts for unknown domains.
///
/// Implement this to plug in a real DNS/MX lookup.
pub trait DomainResolver: Send + Sync {
    fn is_plausible(&self, domain: &str) -> bool;
}

/// Same verdict for every domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticResolver {
    verdict: bool,
}

impl StaticResolver {
    #[must_use]
    pub const fn new(verdict: bool) -> Self {
        Self { verdict }
    }
}

impl Default for StaticResolver {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DomainResolver for StaticResolver {
    fn is_plausible(&self, _domain: &str) -> bool {
        self.verdict
    }
}

/// Accepts each queried domain with a fixed probability, drawn from a seeded
/// generator. Same seed and same query order give the same verdicts.
#[derive(Debug)]
pub struct SeededResolver {
    rng: Mutex<StdRng>,
    probability: f64,
}

impl SeededResolver {
    /// `probability` is clamped to `0.0..=1.0`; NaN rejects everything
    #[must_use]
    pub fn new(seed: u64, probability: f64) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            probability,
        }
    }
}

impl DomainResolver for SeededResolver {
    fn is_plausible(&self, _domain: &str) -> bool {
        self.rng.lock().gen_bool(self.probability)
    }
}

impl<F> DomainResolver for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_plausible(&self, domain: &str) -> bool {
        self(domain)
    }
}
