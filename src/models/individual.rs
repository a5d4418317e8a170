use crate::models::RandomSource;

pub type Speed = i64;

/// Inclusive bounds the speed trait is clamped into after creation.
pub const SPEED_MIN: Speed = 1;
pub const SPEED_MAX: Speed = 10;

// Seeding draws from [1, 5), so fresh individuals start at 1..=4.
const SEED_SPEED_LO: Speed = 1;
const SEED_SPEED_HI: Speed = 5;

/// One member of the population. The speed trait is the whole genome;
/// individuals have no identity beyond it and copy freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Individual {
    speed: Speed,
}

impl Individual {
    /// Creates an individual with the given speed, clamped into
    /// `[SPEED_MIN, SPEED_MAX]`.
    pub fn new(speed: Speed) -> Self {
        Self {
            speed: speed.clamp(SPEED_MIN, SPEED_MAX),
        }
    }

    /// Draws a fresh individual for the initial population.
    pub(crate) fn random(rng: &mut impl RandomSource) -> Self {
        Self {
            speed: rng.int_in_range(SEED_SPEED_LO, SEED_SPEED_HI),
        }
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Shifts the speed trait by `delta`, clamped back into bounds.
    pub(crate) fn nudge(&mut self, delta: Speed) {
        self.speed = (self.speed + delta).clamp(SPEED_MIN, SPEED_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScriptedRandom;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn random_individuals_start_in_seed_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let individual = Individual::random(&mut rng);
            assert!((1..5).contains(&individual.speed()));
        }
    }

    #[test]
    fn random_uses_the_seed_draw() {
        let mut rng = ScriptedRandom::new([3], []);

        assert_eq!(Individual::random(&mut rng).speed(), 3);
    }

    #[test]
    fn new_clamps_into_bounds() {
        assert_eq!(Individual::new(0).speed(), 1);
        assert_eq!(Individual::new(11).speed(), 10);
        assert_eq!(Individual::new(7).speed(), 7);
    }

    #[test]
    fn nudge_clamps_at_upper_bound() {
        let mut individual = Individual::new(10);
        individual.nudge(1);

        assert_eq!(individual.speed(), 10);
    }

    #[test]
    fn nudge_clamps_at_lower_bound() {
        let mut individual = Individual::new(1);
        individual.nudge(-1);

        assert_eq!(individual.speed(), 1);
    }

    #[test]
    fn nudge_moves_interior_values() {
        let mut individual = Individual::new(5);
        individual.nudge(1);
        assert_eq!(individual.speed(), 6);

        individual.nudge(-1);
        assert_eq!(individual.speed(), 5);

        individual.nudge(0);
        assert_eq!(individual.speed(), 5);
    }
}
