//! UI-agnostic game controller.
//!
//! Any front-end (terminal, test harness, web) binds to this interface:
//! it forwards a raw cell index for the human's move and reads back the
//! board, the latched status, and a display message.

use crate::error::MoveError;
use crate::policy;
use crate::position::Position;
use crate::state::{GameState, Move};
use crate::types::{Board, GameStatus, Player};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Drives a single game of human (X) versus the heuristic computer (O).
///
/// Each call to [`GameController::handle_human_move`] runs the full
/// move-handling sequence to completion: apply the human move, check the
/// outcome, and if the game continues let the policy reply for O. The
/// reply delay is a cosmetic pacing device, zero by default so tests run
/// instantly.
#[derive(Debug)]
pub struct GameController {
    state: GameState,
    rng: SmallRng,
    reply_delay: Duration,
}

impl GameController {
    /// Creates a controller with an entropy-seeded RNG and no reply delay.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            rng: SmallRng::from_entropy(),
            reply_delay: Duration::ZERO,
        }
    }

    /// Sets the pause between the human's move and the computer's reply.
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// Seeds the RNG, making corner selection deterministic.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the latched game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the message a UI should show for the current status.
    pub fn message(&self) -> &'static str {
        match self.state.status() {
            GameStatus::InProgress => "Your turn!",
            GameStatus::Won(Player::X) => "You win!",
            GameStatus::Won(Player::O) => "Computer wins!",
            GameStatus::Draw => "It's a tie!",
        }
    }

    /// Handles the human selecting cell `index` (0-8).
    ///
    /// Applies the move as X, latches the outcome, and if the game
    /// continues waits the configured delay and plays the computer's
    /// reply. Returns the computer's position, or `None` when the game
    /// ended before the computer could move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the index is out of range, the square is
    /// occupied, or the game is over. Rejected moves change nothing; a UI
    /// may treat them as silent no-ops.
    #[instrument(skip(self))]
    pub fn handle_human_move(&mut self, index: usize) -> Result<Option<Position>, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        self.state.apply_move(Move::new(Player::X, pos))?;

        if self.state.latch_status().is_terminal() {
            info!(status = ?self.state.status(), "Game over");
            return Ok(None);
        }

        if !self.reply_delay.is_zero() {
            std::thread::sleep(self.reply_delay);
        }

        let reply = self.computer_move()?;
        Ok(reply)
    }

    /// Plays the computer's move, if one exists, and latches the outcome.
    fn computer_move(&mut self) -> Result<Option<Position>, MoveError> {
        let Some(pos) = policy::choose_move(self.state.board(), &mut self.rng) else {
            // Full board: a tie would already have been latched before we
            // got here, so this is a terminal signal, not an error.
            debug!("No move available");
            return Ok(None);
        };
        self.state.apply_move(Move::new(Player::O, pos))?;

        if self.state.latch_status().is_terminal() {
            info!(status = ?self.state.status(), "Game over");
        }
        Ok(Some(pos))
    }

    /// Resets the game to its starting state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.reset();
        info!("Game reset");
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
