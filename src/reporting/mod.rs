mod log_file;

pub use log_file::FileReportWriter;

use crate::models::{Fitness, FitnessFunction, Individual, Speed};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;

/// One individual's place in a generation snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedIndividual {
    pub speed: Speed,
    pub fitness: Fitness,
}

/// Immutable snapshot emitted once per completed generation,
/// descending by fitness.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub generation: u32,
    pub recorded_at: DateTime<Utc>,
    pub ranked: Vec<RankedIndividual>,
    pub best_fitness: Option<Fitness>,
}

impl GenerationReport {
    pub(crate) fn new(
        generation: u32,
        members: &[Individual],
        fitness: &dyn FitnessFunction,
    ) -> Self {
        let mut ranked: Vec<RankedIndividual> = members
            .iter()
            .map(|individual| RankedIndividual {
                speed: individual.speed(),
                fitness: fitness.evaluate(individual),
            })
            .collect();

        // Sorted copy; the population itself keeps its reproduction order.
        ranked.sort_by_key(|entry| Reverse(entry.fitness));
        let best_fitness = ranked.first().map(|entry| entry.fitness);

        Self {
            generation,
            recorded_at: Utc::now(),
            ranked,
            best_fitness,
        }
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation: {}", self.generation)?;
        for (position, entry) in self.ranked.iter().enumerate() {
            writeln!(
                f,
                "Individual {}: speed = {}, fitness = {}",
                position + 1,
                entry.speed,
                entry.fitness
            )?;
        }
        writeln!(f)
    }
}

/// Destination for generation reports: receives one ordered report per
/// completed generation. Publishing is best-effort by contract; a
/// failed publish is surfaced by the engine but never stops evolution.
pub trait ReportSink {
    fn publish(&mut self, report: &GenerationReport) -> Result<(), anyhow::Error>;
}
