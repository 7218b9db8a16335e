use std::collections::HashMap;

use crate::engine::board::{Board, BoardGrid};
use crate::engine::errors::EngineError;

/// Identifier of a board within one game: its zero-based input position.
pub type BoardId = usize;

/// Owns all boards plus the global number index and runs the game.
#[derive(Debug, Clone)]
pub struct GameManager {
    boards: Vec<Board>,
    global_index: HashMap<i64, Vec<BoardId>>,
}

impl GameManager {
    /// Build one board per grid plus the global number -> board-ids index.
    ///
    /// Identifiers are assigned in input order and appended to the index in
    /// that same order, so per-number lookups visit boards by ascending id.
    /// The index is keyed at board granularity: a board holding the same
    /// number twice still appears once under that number.
    pub fn new(grids: Vec<BoardGrid>, size: usize) -> Result<Self, EngineError> {
        let mut boards = Vec::with_capacity(grids.len());
        let mut global_index: HashMap<i64, Vec<BoardId>> = HashMap::new();

        for (board_id, grid) in grids.into_iter().enumerate() {
            let board = Board::new(grid, size)?;
            for number in board.numbers() {
                global_index.entry(number).or_default().push(board_id);
            }
            boards.push(board);
        }

        Ok(Self {
            boards,
            global_index,
        })
    }

    /// Ids of the boards containing `number`, in ascending order.
    pub fn boards_containing(&self, number: i64) -> &[BoardId] {
        self.global_index
            .get(&number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replay `numbers` in order until the first board wins.
    ///
    /// Score = unmarked sum of the winning board times the drawn number that
    /// completed its line. When several boards would complete on the same
    /// number, the lowest id wins. Fails with `NoWinner` if the sequence is
    /// exhausted first.
    pub fn play_until_first_win(&mut self, numbers: &[i64]) -> Result<i64, EngineError> {
        for &number in numbers {
            let board_ids = match self.global_index.get(&number) {
                Some(ids) => ids,
                None => continue,
            };

            for &board_id in board_ids {
                if self.boards[board_id].mark(number) {
                    return Ok(self.boards[board_id].unmarked_sum() * number);
                }
            }
        }

        Err(EngineError::NoWinner)
    }

    /// Replay the whole sequence and score the last board to win.
    ///
    /// Marking is identical to first-win mode, but every win transition
    /// overwrites the recorded (board, number) pair, so ties on the final
    /// winning number resolve to the highest id among the boards that
    /// completed on it. Replay stops early once every board has won, since
    /// no further transitions are possible.
    pub fn play_until_last_win(&mut self, numbers: &[i64]) -> Result<i64, EngineError> {
        let mut last_win: Option<(BoardId, i64)> = None;
        let mut boards_left = self.boards.len();

        'draws: for &number in numbers {
            let board_ids = match self.global_index.get(&number) {
                Some(ids) => ids,
                None => continue,
            };

            for &board_id in board_ids {
                if self.boards[board_id].mark(number) {
                    last_win = Some((board_id, number));
                    boards_left -= 1;
                    if boards_left == 0 {
                        break 'draws;
                    }
                }
            }
        }

        match last_win {
            Some((board_id, number)) => Ok(self.boards[board_id].unmarked_sum() * number),
            None => Err(EngineError::NoWinner),
        }
    }
}

/// Score of the first board to win `numbers` over `grids`.
pub fn solve_first(numbers: &[i64], grids: Vec<BoardGrid>, size: usize) -> Result<i64, EngineError> {
    let mut manager = GameManager::new(grids, size)?;
    manager.play_until_first_win(numbers)
}

/// Score of the last board to win `numbers` over `grids`.
pub fn solve_last(numbers: &[i64], grids: Vec<BoardGrid>, size: usize) -> Result<i64, EngineError> {
    let mut manager = GameManager::new(grids, size)?;
    manager.play_until_last_win(numbers)
}
