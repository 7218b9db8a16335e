use std::collections::HashMap;

use crate::engine::errors::EngineError;

/// A board grid as supplied by the caller: rows of cell values.
pub type BoardGrid = Vec<Vec<i64>>;

/// Single NxN bingo board with its own mark state.
///
/// Win detection is incremental: per-row and per-column mark counts are
/// updated on every mark, so a completed line is recognized without
/// rescanning the grid.
#[derive(Debug, Clone)]
pub struct Board {
    grid: BoardGrid,
    size: usize,
    marked: Vec<Vec<bool>>,
    row_counts: Vec<usize>,
    col_counts: Vec<usize>,
    number_index: HashMap<i64, Vec<(usize, usize)>>,
    has_won: bool,
}

impl Board {
    /// Build a board from `grid`, validating it is exactly `size` x `size`.
    pub fn new(grid: BoardGrid, size: usize) -> Result<Self, EngineError> {
        if grid.len() != size || grid.iter().any(|row| row.len() != size) {
            return Err(EngineError::BoardShape { expected: size });
        }

        // One entry per occurrence, so duplicate values within a board are
        // marked per cell rather than collapsing into one position.
        let mut number_index: HashMap<i64, Vec<(usize, usize)>> = HashMap::new();
        for (row, cells) in grid.iter().enumerate() {
            for (col, &number) in cells.iter().enumerate() {
                number_index.entry(number).or_default().push((row, col));
            }
        }

        Ok(Self {
            marked: vec![vec![false; size]; size],
            row_counts: vec![0; size],
            col_counts: vec![0; size],
            number_index,
            has_won: false,
            grid,
            size,
        })
    }

    /// Mark `number` on this board.
    ///
    /// Returns true only on the call that completes the board's first full
    /// row or column. A board that has already won ignores further marks.
    pub fn mark(&mut self, number: i64) -> bool {
        if self.has_won {
            return false;
        }

        let positions = match self.number_index.get(&number) {
            Some(positions) => positions,
            None => return false,
        };

        for &(row, col) in positions {
            if self.marked[row][col] {
                continue;
            }

            self.marked[row][col] = true;
            self.row_counts[row] += 1;
            self.col_counts[col] += 1;

            if self.row_counts[row] == self.size || self.col_counts[col] == self.size {
                self.has_won = true;
                return true;
            }
        }

        false
    }

    /// Sum of all numbers that are not yet marked on this board.
    pub fn unmarked_sum(&self) -> i64 {
        let mut sum = 0;
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, &number) in cells.iter().enumerate() {
                if !self.marked[row][col] {
                    sum += number;
                }
            }
        }
        sum
    }

    /// Whether some full row or column has been completely marked.
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    /// Distinct numbers present on this board, in arbitrary order.
    pub(super) fn numbers(&self) -> impl Iterator<Item = i64> + '_ {
        self.number_index.keys().copied()
    }
}
