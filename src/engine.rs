use crate::models::{
    Fitness, FitnessFunction, Perturbation, Population, RandomSource, SpeedFitness, Strategy,
};
use crate::reporting::{GenerationReport, ReportSink};
use serde::Serialize;
use tracing::instrument;

/// Why a driving loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TerminationReason {
    /// The generation counter reached the configured cap.
    GenerationLimitReached,
    /// The best fitness in the population reached the ceiling.
    FitnessTargetReached,
}

/// Handle for one cooperative driving loop. Issued by [`EvolutionEngine::begin`]
/// and invalidated by [`EvolutionEngine::restart`]: a tick presented
/// with a token from before the restart observes [`TickOutcome::Superseded`]
/// instead of resuming the discarded run.
#[derive(Debug, Clone, Copy)]
pub struct RunToken {
    epoch: u64,
    max_generations: u32,
    max_fitness: Fitness,
}

/// Outcome of a single cooperative tick.
#[derive(Debug)]
pub enum TickOutcome {
    /// One generation was stepped; keep ticking.
    Stepped(GenerationReport),
    /// A termination condition held before stepping; the run is done.
    Terminated(TerminationReason),
    /// The engine was restarted after this token was issued; the old
    /// loop must not continue.
    Superseded,
}

/// (μ+λ) evolution engine: owns the population and generation counter
/// and advances them one generation per [`step`](Self::step).
///
/// Stepping can be driven three ways: synchronously to completion with
/// [`run`](Self::run), cooperatively one tick per host callback with
/// [`begin`](Self::begin)/[`tick`](Self::tick), or manually with
/// [`step`](Self::step). All of them are single-threaded; a step either
/// completes in full or never starts, so no intermediate population
/// state is observable.
pub struct EvolutionEngine<R: RandomSource> {
    strategy: Strategy,
    population: Population,
    generation: u32,
    epoch: u64,
    rng: R,
    perturbation: Perturbation,
    fitness: Box<dyn FitnessFunction>,
    sink: Option<Box<dyn ReportSink>>,
}

pub struct EvolutionEngineBuilder<R: RandomSource> {
    strategy: Strategy,
    rng: R,
    perturbation: Perturbation,
    fitness: Box<dyn FitnessFunction>,
    sink: Option<Box<dyn ReportSink>>,
}

impl<R: RandomSource> EvolutionEngineBuilder<R> {
    /// Replaces the default identity-on-speed fitness policy.
    pub fn fitness(mut self, fitness: Box<dyn FitnessFunction>) -> Self {
        self.fitness = fitness;
        self
    }

    /// Replaces the default perturbation (rate 0.1).
    pub fn perturbation(mut self, perturbation: Perturbation) -> Self {
        self.perturbation = perturbation;
        self
    }

    /// Attaches a sink receiving one report per completed generation.
    pub fn sink(mut self, sink: Box<dyn ReportSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Seeds the initial population and hands over the engine.
    pub fn build(mut self) -> EvolutionEngine<R> {
        let population = Population::seed(&self.strategy, &mut self.rng);
        tracing::info!(
            population_size = population.len(),
            "Seeded initial population"
        );

        EvolutionEngine {
            strategy: self.strategy,
            population,
            generation: 0,
            epoch: 0,
            rng: self.rng,
            perturbation: self.perturbation,
            fitness: self.fitness,
            sink: self.sink,
        }
    }
}

impl<R: RandomSource> EvolutionEngine<R> {
    pub fn builder(strategy: Strategy, rng: R) -> EvolutionEngineBuilder<R> {
        EvolutionEngineBuilder {
            strategy,
            rng,
            perturbation: Perturbation::default(),
            fitness: Box::new(SpeedFitness),
            sink: None,
        }
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn population_size(&self) -> usize {
        self.population.len()
    }

    /// Highest fitness in the current population, recomputed on demand.
    pub fn best_fitness(&self) -> Option<Fitness> {
        self.population.best_fitness(self.fitness.as_ref())
    }

    /// Performs one full generation transition:
    /// shuffle, rank, truncate to the elites, append perturbed elite
    /// copies, then report. The offspring count equals the elite count.
    #[instrument(level = "debug", skip(self), fields(generation = self.generation))]
    pub fn step(&mut self) -> GenerationReport {
        self.population.shuffle(&mut self.rng);
        self.population.rank(self.fitness.as_ref());
        self.population.keep_elites(self.strategy.mu());

        let mut offspring = self.population.elite_copies(self.strategy.mu());
        for individual in &mut offspring {
            self.perturbation.perturb(&mut self.rng, individual);
        }
        self.population.extend(offspring);

        self.generation += 1;

        let report = GenerationReport::new(
            self.generation,
            self.population.members(),
            self.fitness.as_ref(),
        );
        tracing::info!(
            generation = report.generation,
            best_fitness = ?report.best_fitness,
            "Generation completed"
        );

        if let Some(sink) = self.sink.as_mut() {
            if let Err(error) = sink.publish(&report) {
                // Reporting is best-effort; evolution continues.
                tracing::error!(
                    error = %error,
                    generation = report.generation,
                    "Failed to publish generation report"
                );
            }
        }

        report
    }

    /// Drives the loop to completion: the termination condition is
    /// evaluated before every step, including the first, with the
    /// generation cap checked ahead of the fitness ceiling.
    #[instrument(level = "info", skip(self))]
    pub fn run(&mut self, max_generations: u32, max_fitness: Fitness) -> TerminationReason {
        tracing::info!(
            population_size = self.population.len(),
            "Starting evolutionary run"
        );

        loop {
            if let Some(reason) = self.termination(max_generations, max_fitness) {
                tracing::info!(
                    reason = ?reason,
                    generation = self.generation,
                    "Run terminated"
                );
                return reason;
            }

            self.step();
        }
    }

    /// Starts a cooperative run: the caller holds the token and calls
    /// [`tick`](Self::tick) once per scheduling slot.
    pub fn begin(&self, max_generations: u32, max_fitness: Fitness) -> RunToken {
        tracing::info!(
            population_size = self.population.len(),
            max_generations = max_generations,
            max_fitness = max_fitness,
            "Starting evolutionary run"
        );

        RunToken {
            epoch: self.epoch,
            max_generations,
            max_fitness,
        }
    }

    /// Advances a cooperative run by at most one generation. Same
    /// termination check as [`run`](Self::run); a token issued before
    /// the last restart is refused.
    pub fn tick(&mut self, token: &RunToken) -> TickOutcome {
        if token.epoch != self.epoch {
            return TickOutcome::Superseded;
        }

        if let Some(reason) = self.termination(token.max_generations, token.max_fitness) {
            tracing::info!(
                reason = ?reason,
                generation = self.generation,
                "Run terminated"
            );
            return TickOutcome::Terminated(reason);
        }

        TickOutcome::Stepped(self.step())
    }

    /// Discards the population and generation counter, reseeds from the
    /// engine's random source and invalidates every outstanding
    /// [`RunToken`]. Safe to call between any two ticks.
    #[instrument(level = "info", skip(self))]
    pub fn restart(&mut self) {
        self.epoch += 1;
        self.generation = 0;
        self.population = Population::seed(&self.strategy, &mut self.rng);

        tracing::info!(
            population_size = self.population.len(),
            "Engine restarted"
        );
    }

    fn termination(
        &self,
        max_generations: u32,
        max_fitness: Fitness,
    ) -> Option<TerminationReason> {
        if self.generation >= max_generations {
            return Some(TerminationReason::GenerationLimitReached);
        }

        if self
            .best_fitness()
            .is_some_and(|best| best >= max_fitness)
        {
            return Some(TerminationReason::FitnessTargetReached);
        }

        None
    }
}
