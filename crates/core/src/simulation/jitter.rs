//! Random sources for crypto volatility jitter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

/// Resolution of sampled jitter: six decimal places.
const JITTER_STEPS: i64 = 1_000_000;
const JITTER_SCALE: u32 = 6;

/// A source of symmetric noise in `[-1, 1]`.
pub trait JitterSource {
    /// Returns the next sample in `[-1, 1]`.
    fn symmetric_unit(&mut self) -> Decimal;
}

/// Jitter backed by a seedable PRNG.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    /// Creates a reproducible source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a non-reproducible source seeded by the OS.
    #[must_use]
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl JitterSource for SeededJitter {
    fn symmetric_unit(&mut self) -> Decimal {
        Decimal::new(self.rng.gen_range(-JITTER_STEPS..=JITTER_STEPS), JITTER_SCALE)
    }
}

/// Jitter that never moves the rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn symmetric_unit(&mut self) -> Decimal {
        Decimal::ZERO
    }
}
