use crate::models::{Individual, RandomSource};
use serde::{Deserialize, Serialize};

// Perturbation steps come from [-1, 2), i.e. one of {-1, 0, 1}.
const STEP_LO: i64 = -1;
const STEP_HI: i64 = 2;

const DEFAULT_RATE: f64 = 0.1;

// ============================================================
// PerturbationRate
// ============================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerturbationRate {
    value: f64,
}

#[derive(Debug, thiserror::Error)]
#[error("perturbation rate must be between 0.0 and 1.0, got: {0}")]
pub struct RateOutOfRange(f64);

impl PerturbationRate {
    pub fn new(value: f64) -> Result<Self, RateOutOfRange> {
        if !(0.0..=1.0).contains(&value) {
            return Err(RateOutOfRange(value));
        }

        Ok(Self { value })
    }

    fn get(&self) -> f64 {
        self.value
    }
}

// ============================================================
// Perturbation
// ============================================================
/// Mutation operator applied to each offspring copy independently:
/// with probability `rate`, shift the speed trait by a step from
/// `{-1, 0, 1}` and clamp back into bounds. The step draw only happens
/// when the perturbation fires, so one uniform draw is consumed per
/// offspring and an extra integer draw per hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Perturbation {
    rate: PerturbationRate,
}

impl Default for Perturbation {
    fn default() -> Self {
        Self {
            rate: PerturbationRate {
                value: DEFAULT_RATE,
            },
        }
    }
}

impl Perturbation {
    pub fn new(rate: PerturbationRate) -> Self {
        Self { rate }
    }

    pub(crate) fn perturb(&self, rng: &mut impl RandomSource, individual: &mut Individual) {
        // Should we perturb this copy?
        if rng.unit() < self.rate.get() {
            individual.nudge(rng.int_in_range(STEP_LO, STEP_HI));
        }
    }
}
