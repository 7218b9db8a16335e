use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::engine::{self, BoardGrid};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

/// Which winning board decides the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveMode {
    #[default]
    First,
    Last,
}

impl SolveMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolveMode::First => "first",
            SolveMode::Last => "last",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub mode: SolveMode,
    pub numbers: Vec<i64>,
    pub boards: Vec<BoardGrid>,
}

#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub score: i64,
}

/// Request-level checks that run before any board is constructed, so an
/// empty grid reports "Board N is empty." rather than a shape mismatch.
fn validate_boards(boards: &[BoardGrid]) -> Result<(), AppError> {
    if boards.is_empty() {
        return Err(AppError::validation(
            ErrorCode::ValidationError,
            "At least one board must be provided.",
        ));
    }

    for (idx, board) in boards.iter().enumerate() {
        if board.is_empty() {
            return Err(AppError::validation(
                ErrorCode::ValidationError,
                format!("Board {idx} is empty."),
            ));
        }
    }

    Ok(())
}

async fn solve(
    app_state: web::Data<AppState>,
    body: ValidatedJson<SolveRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();

    validate_boards(&payload.boards)?;

    tracing::info!(
        mode = payload.mode.as_str(),
        board_count = payload.boards.len(),
        number_count = payload.numbers.len(),
        "bingo.solve_requested"
    );

    let board_size = app_state.board_size;
    let score = match payload.mode {
        SolveMode::First => engine::solve_first(&payload.numbers, payload.boards, board_size)?,
        SolveMode::Last => engine::solve_last(&payload.numbers, payload.boards, board_size)?,
    };

    Ok(HttpResponse::Ok().json(SolveResponse { score }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/solve", web::post().to(solve));
}
