//! File I/O operations for Game of Life grids
//!
//! Format: each line is a row, `1` for an alive cell and `0` for a dead
//! one. Lines end in `\n` (a `\r\n` ending is also accepted on load), and
//! the empty line after the final terminator is ignored.

use super::engine::EngineState;
use super::grid::Grid;
use crate::error::{FormatError, LifeError, LifeResult};
use log::{info, warn};
use std::path::Path;

/// Load a grid file and start an engine from it
pub fn load<P: AsRef<Path>>(path: P) -> LifeResult<EngineState> {
    load_grid(path).map(EngineState::from_grid)
}

/// Save the current generation of an engine
pub fn save<P: AsRef<Path>>(state: &EngineState, path: P) -> LifeResult<()> {
    save_grid(state.current(), path)
}

/// Load a grid from a text file
pub fn load_grid<P: AsRef<Path>>(path: P) -> LifeResult<Grid> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LifeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = decode_text(bytes)
        .and_then(|content| parse_grid(&content))
        .map_err(|source| LifeError::Format {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        "Loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

/// Invalid UTF-8 is reported as a format error with the offending line
fn decode_text(bytes: Vec<u8>) -> Result<String, FormatError> {
    String::from_utf8(bytes).map_err(|err| {
        let valid = &err.as_bytes()[..err.utf8_error().valid_up_to()];
        FormatError::NotUtf8 {
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
        }
    })
}

/// Parse a grid from its string representation.
///
/// Every row is validated before the grid is built, so a malformed input
/// never produces a partial grid.
pub fn parse_grid(content: &str) -> Result<Grid, FormatError> {
    let mut lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.last() == Some(&"") {
        lines.pop();
    }

    let width = match lines.first() {
        None => return Err(FormatError::Empty),
        Some(first) => first.chars().count(),
    };

    let mut cells = Vec::with_capacity(lines.len() * width);

    for (row_idx, line) in lines.iter().enumerate() {
        let line_no = row_idx + 1;
        if line.is_empty() {
            return Err(FormatError::EmptyRow { line: line_no });
        }

        let mut found = 0;
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => cells.push(false),
                '1' => cells.push(true),
                _ => {
                    return Err(FormatError::InvalidCharacter {
                        line: line_no,
                        column: col_idx + 1,
                        found: ch,
                    })
                }
            }
            found += 1;
        }

        if found != width {
            return Err(FormatError::RaggedRow {
                line: line_no,
                expected: width,
                found,
            });
        }
    }

    Ok(Grid::from_parts(lines.len(), width, cells))
}

/// Save a grid to a text file
pub fn save_grid<P: AsRef<Path>>(grid: &Grid, path: P) -> LifeResult<()> {
    let path = path.as_ref();
    let write_err = |source| LifeError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    std::fs::write(path, grid_to_string(grid)).map_err(write_err)?;

    info!(
        "Saved {}x{} grid to {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(())
}

/// Convert a grid to string representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.rows() * (grid.cols() + 1));

    for row in grid.iter_rows() {
        result.extend(row.iter().map(|&cell| if cell { '1' } else { '0' }));
        result.push('\n');
    }

    result
}

/// Named patterns written by [`create_example_grids`]
pub const EXAMPLE_PATTERNS: &[(&str, &str)] = &[
    ("glider", "00100\n10100\n01100\n00000\n00000\n"),
    ("blinker", "00000\n00000\n01110\n00000\n00000\n"),
    ("block", "0000\n0110\n0110\n0000\n"),
    ("beacon", "110000\n110000\n001100\n001100\n000000\n000000\n"),
];

/// Create example grid files in `output_dir`. Existing files are kept
/// unless `force` is set.
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P, force: bool) -> LifeResult<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| LifeError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    for (name, content) in EXAMPLE_PATTERNS {
        let path = dir.join(format!("{name}.txt"));
        if path.exists() && !force {
            warn!("Skipping existing pattern file {}", path.display());
            continue;
        }
        std::fs::write(&path, content).map_err(|source| LifeError::Write { path, source })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid() {
        let grid = parse_grid("010\n101\n010\n").unwrap();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);

        assert_eq!(grid.living_count(), 4);
        assert!(grid.get((0, 1)));
        assert!(grid.get((1, 0)));
        assert!(grid.get((1, 2)));
        assert!(grid.get((2, 1)));
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        let grid = parse_grid("0110\n1001").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 4));
    }

    #[test]
    fn test_parse_crlf() {
        let grid = parse_grid("01\r\n10\r\n").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert!(grid.get((1, 0)));
    }

    #[test]
    fn test_grid_to_string() {
        let grid = parse_grid("010\n101\n").unwrap();
        assert_eq!(grid_to_string(&grid), "010\n101\n");
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            parse_grid("010\n1X1\n010\n").unwrap_err(),
            FormatError::InvalidCharacter { line: 2, column: 2, found: 'X' }
        );
        // Whitespace is not silently trimmed
        assert!(matches!(
            parse_grid("010 \n101 \n"),
            Err(FormatError::InvalidCharacter { found: ' ', .. })
        ));
    }

    #[test]
    fn test_ragged_rows() {
        assert_eq!(
            parse_grid("010\n11\n010\n").unwrap_err(),
            FormatError::RaggedRow { line: 2, expected: 3, found: 2 }
        );
        assert_eq!(
            parse_grid("01\n011\n").unwrap_err(),
            FormatError::RaggedRow { line: 2, expected: 2, found: 3 }
        );
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(parse_grid("").unwrap_err(), FormatError::Empty);
        assert_eq!(parse_grid("\n").unwrap_err(), FormatError::EmptyRow { line: 1 });
        // Only one trailing blank line is forgiven
        assert_eq!(
            parse_grid("01\n\n").unwrap_err(),
            FormatError::EmptyRow { line: 2 }
        );
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/test_grid.txt");

        let original = parse_grid("101\n010\n").unwrap();
        save_grid(&original, &file_path).unwrap();

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "101\n010\n");
        assert_eq!(load_grid(&file_path).unwrap(), original);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        let err = load(temp_dir.path().join("absent.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.txt");
        std::fs::write(&path, "012\n").unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.is_format());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_non_utf8_file_is_malformed() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("binary.txt");
        std::fs::write(&path, b"01\n0\xff\n").unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.is_format());
        assert!(!err.is_not_found());
        assert!(matches!(
            err,
            LifeError::Format { source: FormatError::NotUtf8 { line: 2 }, .. }
        ));
    }

    #[test]
    fn test_save_to_unwritable_destination() {
        let temp_dir = tempdir().unwrap();
        let grid = parse_grid("1\n").unwrap();
        // A directory cannot be overwritten by a file
        let err = save_grid(&grid, temp_dir.path()).unwrap_err();
        assert!(matches!(err, LifeError::Write { .. }));
    }

    #[test]
    fn test_create_example_grids() {
        let temp_dir = tempdir().unwrap();
        create_example_grids(temp_dir.path(), false).unwrap();

        for (name, _) in EXAMPLE_PATTERNS {
            assert!(temp_dir.path().join(format!("{name}.txt")).exists());
        }

        let glider = load_grid(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.rows(), 5);
        assert_eq!(glider.cols(), 5);
        assert_eq!(glider.living_count(), 5); // Glider has 5 living cells
    }

    #[test]
    fn test_create_example_grids_keeps_edits() {
        let temp_dir = tempdir().unwrap();
        let block = temp_dir.path().join("block.txt");
        create_example_grids(temp_dir.path(), false).unwrap();
        std::fs::write(&block, "1\n").unwrap();

        create_example_grids(temp_dir.path(), false).unwrap();
        assert_eq!(std::fs::read_to_string(&block).unwrap(), "1\n");

        create_example_grids(temp_dir.path(), true).unwrap();
        assert_eq!(std::fs::read_to_string(&block).unwrap(), "0000\n0110\n0110\n0000\n");
    }
}
