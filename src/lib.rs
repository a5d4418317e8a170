pub mod engine;
pub mod models;
pub mod reporting;

pub use engine::{EvolutionEngine, TerminationReason};
