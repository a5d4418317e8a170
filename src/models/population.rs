use crate::models::{Fitness, FitnessFunction, Individual, RandomSource, Strategy};
use std::cmp::Reverse;

/// Ordered collection of individuals, owned exclusively by the engine.
/// Order is insertion order except where a step reshuffles or re-ranks
/// it; nothing outside the engine may rely on order between phases.
#[derive(Debug)]
pub(crate) struct Population {
    members: Vec<Individual>,
}

impl Population {
    /// Seeds `mu + lambda` fresh individuals.
    pub(crate) fn seed(strategy: &Strategy, rng: &mut impl RandomSource) -> Self {
        let members = (0..strategy.initial_size())
            .map(|_| Individual::random(rng))
            .collect();

        Self { members }
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    pub(crate) fn members(&self) -> &[Individual] {
        &self.members
    }

    /// Uniform random permutation, so that the later ranking breaks
    /// ties by chance rather than by position. Swap-down Fisher-Yates:
    /// index `i` trades places with a uniform index in `[i, len)`.
    pub(crate) fn shuffle(&mut self, rng: &mut impl RandomSource) {
        for i in 0..self.members.len() {
            let j = rng.int_in_range(i as i64, self.members.len() as i64) as usize;
            self.members.swap(i, j);
        }
    }

    /// Stable descending sort by fitness; equal scores keep whatever
    /// order the shuffle left them in.
    pub(crate) fn rank(&mut self, fitness: &dyn FitnessFunction) {
        self.members
            .sort_by_key(|individual| Reverse(fitness.evaluate(individual)));
    }

    /// Elitist truncation: keep only the first `mu` members when the
    /// population is larger.
    pub(crate) fn keep_elites(&mut self, mu: usize) {
        if self.members.len() > mu {
            self.members.truncate(mu);
        }
    }

    /// Copies of the first `mu` members, the reproduction base. The
    /// offspring count equals the elite count, not lambda; lambda only
    /// sizes the seeded population.
    pub(crate) fn elite_copies(&self, mu: usize) -> Vec<Individual> {
        self.members.iter().take(mu).copied().collect()
    }

    pub(crate) fn extend(&mut self, offspring: Vec<Individual>) {
        self.members.extend(offspring);
    }

    pub(crate) fn best_fitness(&self, fitness: &dyn FitnessFunction) -> Option<Fitness> {
        self.members
            .iter()
            .map(|individual| fitness.evaluate(individual))
            .max()
    }
}
