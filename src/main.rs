//! Headless command line front end for the Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_grids, load_grid},
    run_simulation_with,
    utils::{GridFormatter, Tone},
};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation until it stops
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid file to start from (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// File to save the final grid to (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generation ceiling (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Seed for the random grid (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Rows of a generated grid (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Columns of a generated grid (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Report format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Print every generation
        #[arg(long)]
        show_evolution: bool,
    },

    /// Create example configuration and grid files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Print a grid file with coordinates and statistics
    Show {
        /// Grid file to display
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_micros()
        .init();

    match cli.command {
        Commands::Run {
            config,
            input,
            output,
            generations,
            seed,
            rows,
            cols,
            format,
            show_evolution,
        } => {
            let overrides = CliOverrides {
                input,
                output,
                generations,
                seed,
                rows,
                cols,
                format,
                show_evolution,
            };
            run_command(&config, &overrides)
        }
        Commands::Setup { directory, force } => setup_command(&directory, force),
        Commands::Show { file } => show_command(&file),
    }
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        warn!(
            "Config file {} not found, using defaults",
            config_path.display()
        );
        Ok(Settings::default())
    }
}

fn run_command(config_path: &Path, overrides: &CliOverrides) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    debug!("Effective settings: {:?}", settings);

    let show_evolution = settings.output.show_evolution;
    let start_time = Instant::now();

    let report = run_simulation_with(&settings, |engine| {
        if show_evolution {
            println!(
                "{}",
                GridFormatter::format_generation(engine.generation_count(), engine.current())
            );
        }
    })?;

    let elapsed = start_time.elapsed();

    match settings.output.format {
        OutputFormat::Json => {
            println!("{}", GridFormatter::format_report(&report, OutputFormat::Json)?);
        }
        OutputFormat::Text => {
            println!("{}", GridFormatter::format_report(&report, OutputFormat::Text)?);
            println!(
                "{}",
                Tone::Success.paint(&format!(
                    "Finished {} generation(s) in {:.3}s",
                    report.generations,
                    elapsed.as_secs_f64()
                ))
            );
            if let Some(path) = &settings.output.save_file {
                println!("Final grid saved to {}", path.display());
            }
        }
    }

    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    println!("{}", Tone::Info.paint("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    write_config(&config_dir.join("default.yaml"), &Settings::default(), force)
        .context("Failed to create default configuration")?;

    create_example_grids(&patterns_dir, force).context("Failed to create example grids")?;
    println!("Example patterns are in: {}", patterns_dir.display());

    // A configuration that replays the glider from its file
    let mut glider = Settings::default();
    glider.input.grid_file = Some(patterns_dir.join("glider.txt"));
    glider.simulation.max_generations = Some(20);
    glider.output.show_evolution = true;
    write_config(&config_dir.join("glider.yaml"), &glider, force)
        .context("Failed to create glider configuration")?;

    println!("\n{}", Tone::Success.paint("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: game_of_life run --config {}", config_dir.join("glider.yaml").display());

    Ok(())
}

/// Write `settings` to `path` unless the file exists and `force` is unset
fn write_config(path: &Path, settings: &Settings, force: bool) -> Result<()> {
    if path.exists() && !force {
        warn!("Skipping existing config file {}", path.display());
        println!(
            "{}",
            Tone::Warning.paint(&format!("Skipped: {} (already exists)", path.display()))
        );
        return Ok(());
    }

    settings.to_file(path)?;
    println!("Created: {}", path.display());
    Ok(())
}

fn show_command(file: &Path) -> Result<()> {
    let grid = match load_grid(file) {
        Ok(grid) => grid,
        Err(e) if e.is_not_found() => {
            println!("{}", Tone::Error.paint(&format!("No such grid file: {}", file.display())));
            return Err(e.into());
        }
        Err(e) => {
            println!("{}", Tone::Error.paint("Grid file is malformed"));
            return Err(e.into());
        }
    };

    println!("{}", GridFormatter::format_grid_with_coords(&grid));
    println!("{}", GridFormatter::format_statistics(&grid));

    Ok(())
}
