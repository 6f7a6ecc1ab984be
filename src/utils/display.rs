//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{Grid, RunReport, StopReason};
use anyhow::Result;

/// Format grids and run reports for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.rows() * (grid.cols() * 3 + 1));
        for row in grid.iter_rows() {
            output.extend(row.iter().map(|&cell| if cell { '█' } else { '·' }));
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.cols() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for (y, row) in grid.iter_rows().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for &cell in row {
                output.push_str(if cell { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Format one generation with a short heading
    pub fn format_generation(generation: u64, grid: &Grid) -> String {
        format!(
            "Generation {} (Living: {}):\n{}",
            generation,
            grid.living_count(),
            Self::format_grid_compact(grid)
        )
    }

    /// Basic statistics for a grid
    pub fn format_statistics(grid: &Grid) -> String {
        let total = grid.rows() * grid.cols();
        format!(
            "Grid Statistics:\n  Size: {}x{}\n  Living cells: {}\n  Density: {:.1}%\n",
            grid.rows(),
            grid.cols(),
            grid.living_count(),
            grid.living_count() as f64 / total as f64 * 100.0
        )
    }

    /// Format a run report in the requested output format
    pub fn format_report(report: &RunReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_report_text(report)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }

    fn format_report_text(report: &RunReport) -> String {
        let reason = match report.stop_reason {
            Some(StopReason::CeilingReached) => "generation ceiling reached",
            Some(StopReason::Quiescent) if report.extinct => "population died out",
            Some(StopReason::Quiescent) => "population became stable",
            Some(StopReason::Requested) => "stopped on request",
            None => "still running",
        };

        let mut output = String::new();
        output.push_str("Run Summary:\n");
        output.push_str(&format!("  Grid: {}x{}\n", report.rows, report.cols));
        output.push_str(&format!("  Generations: {}\n", report.generations));
        output.push_str(&format!("  Living cells: {}\n", report.living_cells));
        output.push_str(&format!("  Stopped: {}\n", reason));
        output
    }
}

/// Console message styles, rendered with ANSI colors unless `NO_COLOR` is
/// set or the terminal is dumb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    pub fn paint(self, text: &str) -> String {
        let plain = std::env::var_os("NO_COLOR").is_some()
            || std::env::var("TERM").is_ok_and(|term| term == "dumb");
        if plain {
            return text.to_string();
        }

        let code = match self {
            Tone::Error => 31,
            Tone::Success => 32,
            Tone::Warning => 33,
            Tone::Info => 34,
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}
