mod fitness;
mod individual;
mod perturbation;
mod population;
mod random;
mod strategy;

pub use fitness::{Fitness, FitnessFunction, SpeedFitness};
pub use individual::{Individual, SPEED_MAX, SPEED_MIN, Speed};
pub use perturbation::{Perturbation, PerturbationRate, RateOutOfRange};
pub use random::RandomSource;
pub use strategy::{InvalidConfiguration, Strategy};

pub(crate) use population::Population;

#[cfg(test)]
pub(crate) use random::testing::ScriptedRandom;
