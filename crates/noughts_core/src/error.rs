//! Error types for move validation.

use crate::position::Position;
use crate::types::Player;

/// Error that can occur when validating or applying a move.
///
/// Every variant is raised before any mutation, so a rejected move
/// leaves the game state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The raw cell index is outside 0-8.
    #[display("Cell index {} is out of range", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
