use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the jitter added to tiered confidence bases.
pub trait ConfidenceSource {
    /// Returns an offset in `[0, span)`.
    fn offset(&mut self, span: f64) -> f64;
}

#[derive(Debug)]
pub struct RandomConfidence {
    rng: StdRng,
}

impl RandomConfidence {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl ConfidenceSource for RandomConfidence {
    fn offset(&mut self, span: f64) -> f64 {
        if span <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(0.0..span)
    }
}

/// Pins the jitter to a fraction of the span, clamped below 1.
#[derive(Debug, Clone, Copy)]
pub struct FixedConfidence(pub f64);

impl ConfidenceSource for FixedConfidence {
    fn offset(&mut self, span: f64) -> f64 {
        if !self.0.is_finite() {
            return 0.0;
        }
        let frac = self.0.clamp(0.0, 1.0);
        if frac >= 1.0 {
            return span * (1.0 - f64::EPSILON);
        }
        span * frac
    }
}
