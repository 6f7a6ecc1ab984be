//! Game of Life rules implementation (B3/S23)

use super::grid::{Cell, Grid};
use rayon::prelude::*;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Apply Game of Life rules to evolve the grid one generation forward
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = current.clone();
        Self::evolve_into(current, &mut next);
        next
    }

    /// Write the generation after `current` into `next`.
    ///
    /// Every output cell is computed from `current` alone, so `next` may hold
    /// stale data on entry.
    ///
    /// # Panics
    ///
    /// Panics if the two grids differ in dimensions.
    pub(crate) fn evolve_into(current: &Grid, next: &mut Grid) {
        assert_eq!(
            (current.rows(), current.cols()),
            (next.rows(), next.cols()),
            "generation buffers must share dimensions"
        );

        // Rows are disjoint chunks of the output, so they can be filled in parallel
        next.cells
            .par_chunks_mut(current.cols())
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    let pos = Cell::new(row, col);
                    *cell = Self::should_be_alive(current.get(pos), current.count_neighbors(pos));
                }
            });
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(grid: Grid, generations: usize) -> Grid {
        let mut current = grid;
        let mut next = current.clone();
        for _ in 0..generations {
            Self::evolve_into(&current, &mut next);
            std::mem::swap(&mut current, &mut next);
        }
        current
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        let cells = rows
            .iter()
            .map(|row| row.chars().map(|c| c == '1').collect())
            .collect();
        Grid::from_cells(cells).unwrap()
    }

    #[test]
    fn test_still_life_block() {
        // 2x2 block should remain stable
        let block = grid(&["0000", "0110", "0110", "0000"]);
        let evolved = GameOfLifeRules::evolve(&block);
        assert_eq!(block, evolved);
        assert_eq!(GameOfLifeRules::evolve_generations(block.clone(), 10), block);
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = grid(&["00000", "00000", "01110", "00000", "00000"]);
        let vertical = grid(&["00000", "00100", "00100", "00100", "00000"]);

        let evolved = GameOfLifeRules::evolve(&horizontal);
        assert_eq!(evolved, vertical);

        // Evolve again should return to original
        let evolved_twice = GameOfLifeRules::evolve(&evolved);
        assert_eq!(evolved_twice, horizontal);
    }

    #[test]
    fn test_blinker_against_top_edge() {
        // A row-0 blinker loses the cell that would be born above the grid
        let edge = grid(&["111", "000", "000"]);
        let evolved = GameOfLifeRules::evolve(&edge);
        assert_eq!(evolved, grid(&["010", "010", "000"]));
    }

    #[test]
    fn test_extinction() {
        let lonely = grid(&["000", "010", "000"]);
        let evolved = GameOfLifeRules::evolve(&lonely);
        assert!(evolved.is_empty());
        assert!(GameOfLifeRules::evolve(&evolved).is_empty());
    }

    #[test]
    fn test_birth_rule() {
        // Centre cell is dead in every case
        let three = grid(&["110", "100", "000"]);
        assert!(GameOfLifeRules::evolve(&three).get((1, 1)));

        let two = grid(&["110", "000", "000"]);
        assert!(!GameOfLifeRules::evolve(&two).get((1, 1)));

        let four = grid(&["110", "101", "000"]);
        assert!(!GameOfLifeRules::evolve(&four).get((1, 1)));
    }

    #[test]
    fn test_survival_rule() {
        let two = grid(&["100", "010", "001"]);
        assert!(GameOfLifeRules::evolve(&two).get((1, 1)));

        let three = grid(&["101", "010", "001"]);
        assert!(GameOfLifeRules::evolve(&three).get((1, 1)));

        let one = grid(&["100", "010", "000"]);
        assert!(!GameOfLifeRules::evolve(&one).get((1, 1)));

        let four = grid(&["101", "010", "101"]);
        assert!(!GameOfLifeRules::evolve(&four).get((1, 1)));
    }

    #[test]
    fn test_evolve_does_not_mutate_input() {
        let original = grid(&["000", "111", "000"]);
        let snapshot = original.clone();
        let _ = GameOfLifeRules::evolve(&original);
        assert_eq!(original, snapshot);
    }

    #[test]
    fn test_evolve_into_ignores_stale_buffer() {
        let current = grid(&["000", "111", "000"]);
        let mut next = grid(&["111", "111", "111"]);
        GameOfLifeRules::evolve_into(&current, &mut next);
        assert_eq!(next, grid(&["010", "010", "010"]));
    }

    #[test]
    #[should_panic(expected = "generation buffers must share dimensions")]
    fn test_evolve_into_rejects_mismatched_buffers() {
        let current = grid(&["000", "111", "000"]);
        let mut next = grid(&["00", "00"]);
        GameOfLifeRules::evolve_into(&current, &mut next);
    }

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2)); // Survival with 2 neighbors
        assert!(GameOfLifeRules::should_be_alive(true, 3)); // Survival with 3 neighbors
        assert!(GameOfLifeRules::should_be_alive(false, 3)); // Birth with 3 neighbors
        assert!(!GameOfLifeRules::should_be_alive(true, 0));
        assert!(!GameOfLifeRules::should_be_alive(true, 1)); // Death with 1 neighbor
        assert!(!GameOfLifeRules::should_be_alive(true, 4)); // Death with 4 neighbors
        assert!(!GameOfLifeRules::should_be_alive(true, 8));
        assert!(!GameOfLifeRules::should_be_alive(false, 2)); // No birth with 2 neighbors
        assert!(!GameOfLifeRules::should_be_alive(false, 4));
    }
}
