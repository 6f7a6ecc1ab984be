//! Conway's Game of Life engine
//!
//! A fixed-size, non-wrapping grid advanced one generation at a time under
//! the B3/S23 rule, with lifecycle bookkeeping and a plain text grid format.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::{FormatError, LifeError, LifeResult};
pub use game_of_life::{Cell, EngineState, GameOfLifeRules, Grid, RunReport, StopPolicy};

use anyhow::{Context, Result};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build an engine from settings: load the configured grid file, or create
/// a grid of the configured shape
pub fn build_engine(settings: &Settings) -> Result<EngineState> {
    let engine = match &settings.input.grid_file {
        Some(path) => game_of_life::load(path)
            .with_context(|| format!("Failed to load grid from {}", path.display()))?,
        None => {
            let seed = settings.grid.seed.unwrap_or_else(rand::random);
            info!(
                "Creating {}x{} grid (randomize: {}, seed: {})",
                settings.grid.rows, settings.grid.cols, settings.grid.randomize, seed
            );
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            EngineState::new(
                settings.grid.rows,
                settings.grid.cols,
                settings.grid.randomize,
                &mut rng,
            )
            .context("Failed to create grid")?
        }
    };

    match settings.simulation.max_generations {
        Some(max) => Ok(engine.with_max_generations(max)?),
        None => Ok(engine),
    }
}

/// Main entry point for running a simulation to completion
pub fn run_simulation(settings: &Settings) -> Result<RunReport> {
    run_simulation_with(settings, |_| {})
}

/// Run a simulation, handing every generation to `observer`, then save the
/// final grid if an output file is configured
pub fn run_simulation_with<F>(settings: &Settings, observer: F) -> Result<RunReport>
where
    F: FnMut(&EngineState),
{
    settings.validate().context("Configuration validation failed")?;

    let mut engine = build_engine(settings)?;
    let policy = StopPolicy {
        stop_on_quiescence: settings.simulation.stop_on_quiescence,
    };
    let report = engine.run_with(policy, observer)?;

    if let Some(path) = &settings.output.save_file {
        game_of_life::save(&engine, path)
            .with_context(|| format!("Failed to save grid to {}", path.display()))?;
    }

    Ok(report)
}
