//! Configuration settings for Game of Life simulations

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Shape of a freshly created grid. Ignored when a grid file is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub randomize: bool,
    /// Seed for the random fill; a random seed is drawn when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub max_generations: Option<u64>,
    pub stop_on_quiescence: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub grid_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_evolution: bool,
    pub save_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 24,
            cols: 48,
            randomize: true,
            seed: None,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_generations: Some(100),
            stop_on_quiescence: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_evolution: false,
            save_file: None,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        match &self.input.grid_file {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Grid file does not exist: {}", path.display());
                }
            }
            None => {
                if self.grid.rows == 0 || self.grid.cols == 0 {
                    anyhow::bail!(
                        "Grid dimensions must be positive, got {}x{}",
                        self.grid.rows,
                        self.grid.cols
                    );
                }
            }
        }

        match self.simulation.max_generations {
            None => anyhow::bail!("A generation ceiling is required to run a simulation"),
            Some(0) => anyhow::bail!("Maximum generations must be positive"),
            Some(_) => {}
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref input) = cli_overrides.input {
            self.input.grid_file = Some(input.clone());
        }
        if let Some(ref output) = cli_overrides.output {
            self.output.save_file = Some(output.clone());
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.max_generations = Some(generations);
        }
        if let Some(seed) = cli_overrides.seed {
            self.grid.seed = Some(seed);
        }
        if let Some(rows) = cli_overrides.rows {
            self.grid.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.grid.cols = cols;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.show_evolution {
            self.output.show_evolution = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub generations: Option<u64>,
    pub seed: Option<u64>,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub format: Option<OutputFormat>,
    pub show_evolution: bool,
}
