//! Game rules: win, draw, and outcome evaluation.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{check_winner, LINES};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the board into a game status.
///
/// Pure query with no side effects: a line fully occupied by one player
/// yields `Won`, a full board with no winner yields `Draw`, anything else
/// is `InProgress`. The caller latches a terminal result onto the game
/// state once observed.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }
    if is_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}
