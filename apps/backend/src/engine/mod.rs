//! Engine layer: pure bingo simulation logic.
//!
//! No HTTP, no I/O, no async. Handlers call [`solve_first`] / [`solve_last`]
//! and convert any [`EngineError`] into `crate::error::AppError`.

pub mod board;
pub mod errors;
pub mod manager;

#[cfg(test)]
mod tests_manager;

// Re-exports for ergonomics
pub use board::{Board, BoardGrid};
pub use errors::EngineError;
pub use manager::{solve_first, solve_last, BoardId, GameManager};
