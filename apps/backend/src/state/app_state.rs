/// Application state containing shared resources
///
/// Carries read-only configuration only: each solve request builds its own
/// game state, so nothing here is mutated after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Side length of every accepted board grid
    pub board_size: usize,
}

impl AppState {
    /// Create a new AppState with the given board size
    pub fn new(board_size: usize) -> Self {
        Self { board_size }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            board_size: crate::config::DEFAULT_BOARD_SIZE,
        }
    }
}
