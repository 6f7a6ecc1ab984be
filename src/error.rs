//! Error types for the Game of Life engine

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the engine, the grid model and the persistence layer
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("Invalid grid dimensions {rows}x{cols}: rows and columns must be positive")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Row {row} has length {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Generation ceiling must be at least 1")]
    ZeroGenerationCeiling,

    #[error("Cell ({row}, {col}) is out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Engine is stopped at generation {generation}")]
    Stopped { generation: u64 },

    #[error("Refusing to run without a generation ceiling")]
    Unbounded,

    #[error("Failed to read grid file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write grid file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed grid file {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

impl LifeError {
    /// True when the error was caused by a missing file, as opposed to a
    /// file that exists but could not be parsed
    pub fn is_not_found(&self) -> bool {
        match self {
            LifeError::Read { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// True for content errors in a persisted grid
    pub fn is_format(&self) -> bool {
        matches!(self, LifeError::Format { .. })
    }
}

/// Problems found while parsing the text grid format.
///
/// Line and column numbers are 1-based so they match what an editor shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("grid contains no rows")]
    Empty,

    #[error("line {line} is not valid UTF-8 text")]
    NotUtf8 { line: usize },

    #[error("line {line} is empty")]
    EmptyRow { line: usize },

    #[error("invalid character {found:?} at line {line}, column {column}; only '0' and '1' are allowed")]
    InvalidCharacter {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("line {line} has length {found}, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

pub type LifeResult<T> = Result<T, LifeError>;
