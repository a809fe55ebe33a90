//! Game state and first-class move actions.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A move in tic-tac-toe: a player placing their mark at a position.
///
/// Moves are first-class domain events that can be validated before
/// application, serialized for replay, and logged for debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Complete game state.
///
/// Turn ownership is an explicit field checked by [`GameState::apply_move`],
/// so callers cannot drive the game out of turn. Once a terminal status has
/// been latched the state is immutable except through [`GameState::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Latched game status.
    status: GameStatus,
    /// Move history.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the latched game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies a move after validating it.
    ///
    /// Checks, in order: the game has not ended, it is the player's turn,
    /// and the square is empty. A rejected move changes nothing. On success
    /// the square is set, the move is appended to history, and the turn
    /// flips to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`], [`MoveError::WrongPlayer`], or
    /// [`MoveError::SquareOccupied`].
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn apply_move(&mut self, mov: Move) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if mov.player != self.current_player {
            return Err(MoveError::WrongPlayer(mov.player));
        }
        if !self.board.is_empty(mov.position) {
            return Err(MoveError::SquareOccupied(mov.position));
        }

        self.board.set(mov.position, Square::Occupied(mov.player));
        self.history.push(mov);
        self.current_player = mov.player.opponent();
        debug!(%mov, "Move applied");
        Ok(())
    }

    /// Re-evaluates the board and latches the result as the game status.
    ///
    /// [`rules::evaluate`] itself is a pure query; the caller decides when
    /// an observed outcome becomes final by invoking this.
    pub fn latch_status(&mut self) -> GameStatus {
        self.status = rules::evaluate(&self.board);
        self.status
    }

    /// Resets to the starting state: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Rebuilds a game state by applying a recorded move history.
    ///
    /// Terminal outcomes are latched as they occur, so a history that
    /// continues past a finished game is rejected with
    /// [`MoveError::GameOver`].
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut state = Self::new();
        for &mov in moves {
            state.apply_move(mov)?;
            state.latch_status();
        }
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
