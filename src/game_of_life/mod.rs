//! Game of Life core functionality

pub mod engine;
pub mod grid;
pub mod io;
pub mod rules;

pub use engine::{EngineState, RunReport, Status, StopPolicy, StopReason};
pub use grid::{create_grid, Cell, Grid};
pub use io::{create_example_grids, load, load_grid, parse_grid, save, save_grid};
pub use rules::GameOfLifeRules;
