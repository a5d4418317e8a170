use mu_lambda::EvolutionEngine;
use mu_lambda::models::Strategy;
use mu_lambda::reporting::FileReportWriter;
use tracing::Level;

// Demo driver: runs the engine with the editor defaults, overridable
// through MU, LAMBDA, MAX_GENERATIONS, MAX_FITNESS and LOG_PATH.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::INFO)
        .init();

    let mu = env_or("MU", 50)?;
    let lambda = env_or("LAMBDA", 50)?;
    let max_generations = env_or("MAX_GENERATIONS", 5)?;
    let max_fitness = env_or("MAX_FITNESS", 10)?;
    let log_path = std::env::var("LOG_PATH").unwrap_or_else(|_| "generation_log.txt".to_string());

    let strategy = Strategy::new(mu, lambda)?;
    let mut engine = EvolutionEngine::builder(strategy, rand::rng())
        .sink(Box::new(FileReportWriter::new(log_path.clone())))
        .build();

    let reason = engine.run(max_generations, max_fitness);

    tracing::info!(
        reason = ?reason,
        generation = engine.generation(),
        log_path = %log_path,
        "Evolution finished"
    );

    Ok(())
}

fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => Ok(value.parse()?),
        Err(_) => Ok(default),
    }
}
