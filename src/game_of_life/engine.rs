//! Lifecycle controller: owns the two generation buffers and the counters
//! that decide when a simulation is over.

use super::grid::{create_grid, Cell, Grid};
use super::rules::GameOfLifeRules;
use crate::error::{LifeError, LifeResult};
use log::{debug, info};
use rand::Rng;
use serde::Serialize;

/// Operational state of an engine. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Running,
    Stopped,
}

/// Why an engine left the running state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    CeilingReached,
    Quiescent,
    Requested,
}

/// Caller policy applied by [`EngineState::run`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StopPolicy {
    pub stop_on_quiescence: bool,
}

/// Summary of where a simulation ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub generations: u64,
    pub rows: usize,
    pub cols: usize,
    pub living_cells: usize,
    pub extinct: bool,
    pub quiescent: bool,
    pub stop_reason: Option<StopReason>,
}

/// A running Game of Life simulation.
///
/// Holds exactly two generations. `step` computes the next generation into
/// the retired buffer and swaps, so no cell is ever read after it has been
/// overwritten.
#[derive(Debug, Clone)]
pub struct EngineState {
    previous: Grid,
    current: Grid,
    generation_count: u64,
    max_generations: Option<u64>,
    status: Status,
    stop_reason: Option<StopReason>,
}

impl EngineState {
    /// Create an engine over a fresh grid, randomized from `rng` or all dead
    pub fn new<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        randomize: bool,
        rng: &mut R,
    ) -> LifeResult<Self> {
        Ok(Self::from_grid(create_grid(rows, cols, randomize, rng)?))
    }

    /// Create an engine whose current generation is `current`
    pub fn from_grid(current: Grid) -> Self {
        Self {
            previous: current.blank_like(),
            current,
            generation_count: 0,
            max_generations: None,
            status: Status::Running,
            stop_reason: None,
        }
    }

    /// Limit the number of steps the engine will take
    pub fn with_max_generations(mut self, max_generations: u64) -> LifeResult<Self> {
        if max_generations == 0 {
            return Err(LifeError::ZeroGenerationCeiling);
        }
        self.max_generations = Some(max_generations);
        if self.is_max_generations_exceeded() {
            self.halt(StopReason::CeilingReached);
        }
        Ok(self)
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn previous(&self) -> &Grid {
        &self.previous
    }

    /// Number of completed steps
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    pub fn max_generations(&self) -> Option<u64> {
        self.max_generations
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// Advance one generation.
    ///
    /// Reaching the generation ceiling moves the engine to `Stopped`; any
    /// further call fails with [`LifeError::Stopped`].
    pub fn step(&mut self) -> LifeResult<()> {
        if !self.is_running() {
            return Err(LifeError::Stopped {
                generation: self.generation_count,
            });
        }

        GameOfLifeRules::evolve_into(&self.current, &mut self.previous);
        std::mem::swap(&mut self.previous, &mut self.current);
        self.generation_count += 1;

        debug!(
            "Generation {}: {} living cells",
            self.generation_count,
            self.current.living_count()
        );

        if self.is_max_generations_exceeded() {
            self.halt(StopReason::CeilingReached);
        }
        Ok(())
    }

    /// Whether the step counter has reached the ceiling. Never true when
    /// the engine is unbounded.
    pub fn is_max_generations_exceeded(&self) -> bool {
        self.max_generations
            .is_some_and(|max| self.generation_count >= max)
    }

    /// Whether the last step left every cell unchanged
    pub fn is_quiescent(&self) -> bool {
        self.previous == self.current
    }

    /// Stop the engine at the caller's request
    pub fn stop(&mut self) {
        self.halt(StopReason::Requested);
    }

    fn halt(&mut self, reason: StopReason) {
        if self.is_running() {
            info!(
                "Stopping at generation {} ({:?})",
                self.generation_count, reason
            );
            self.status = Status::Stopped;
            self.stop_reason = Some(reason);
        }
    }

    /// Flip a single cell in the current generation, bypassing the rules.
    /// Returns the new value of the cell.
    pub fn toggle_cell(&mut self, cell: impl Into<Cell>) -> LifeResult<bool> {
        self.current.toggle(cell)
    }

    /// Overwrite a single cell in the current generation
    pub fn set_cell(&mut self, cell: impl Into<Cell>, value: bool) -> LifeResult<()> {
        self.current.set(cell, value)
    }

    /// Step until the engine stops, see [`EngineState::run_with`]
    pub fn run(&mut self, policy: StopPolicy) -> LifeResult<RunReport> {
        self.run_with(policy, |_| {})
    }

    /// Step until the ceiling is reached, or until the population settles
    /// when the policy asks for it. `observer` sees the starting generation
    /// and every generation after it.
    ///
    /// An unbounded engine is rejected: an oscillator would never settle.
    pub fn run_with<F>(&mut self, policy: StopPolicy, mut observer: F) -> LifeResult<RunReport>
    where
        F: FnMut(&Self),
    {
        if self.max_generations.is_none() {
            return Err(LifeError::Unbounded);
        }

        observer(self);
        while self.is_running() {
            self.step()?;
            observer(self);
            if policy.stop_on_quiescence && self.is_quiescent() {
                self.halt(StopReason::Quiescent);
            }
        }

        Ok(self.report())
    }

    /// Snapshot of the engine's progress
    pub fn report(&self) -> RunReport {
        RunReport {
            generations: self.generation_count,
            rows: self.current.rows(),
            cols: self.current.cols(),
            living_cells: self.current.living_count(),
            extinct: self.current.is_empty(),
            quiescent: self.is_quiescent(),
            stop_reason: self.stop_reason,
        }
    }
}
