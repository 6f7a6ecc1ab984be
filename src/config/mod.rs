//! Configuration management for Game of Life simulations

pub mod settings;

pub use settings::{
    CliOverrides, GridConfig, InputConfig, OutputConfig, OutputFormat, Settings, SimulationConfig,
};
