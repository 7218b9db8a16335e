//! Engine-level error type used by the board and game manager.
//!
//! This error type is HTTP-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `EngineError`
//! using the provided `From<EngineError> for AppError` implementation.
//! Display output doubles as the user-facing detail message.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Central engine error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A supplied grid is not the configured square size
    BoardShape { expected: usize },
    /// The draw sequence was exhausted with no board completing a line
    NoWinner,
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            EngineError::BoardShape { expected } => {
                write!(f, "Board must be {expected}x{expected} square")
            }
            EngineError::NoWinner => write!(f, "No winning board found."),
        }
    }
}

impl Error for EngineError {}
