//! Noughts core - tic-tac-toe against a heuristic computer opponent.
//!
//! The crate has three parts:
//!
//! - **Board state**: [`Board`], [`GameState`], and the pure rules in
//!   [`rules`] that evaluate a board into a [`GameStatus`].
//! - **Move policy**: the fixed priority heuristic in [`policy`]
//!   (win > block > center > random corner > first available) that picks
//!   the computer's move. It is not a game-tree search, so it is beatable.
//! - **Controller**: [`GameController`], the UI-agnostic surface a
//!   front-end drives with raw cell indices.
//!
//! # Example
//!
//! ```
//! use noughts_core::GameController;
//!
//! let mut game = GameController::new().with_rng_seed(7);
//! // Human plays the top-left corner; the computer replies.
//! let reply = game.handle_human_move(0)?;
//! assert!(reply.is_some());
//! assert_eq!(game.message(), "Your turn!");
//! # Ok::<(), noughts_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
pub mod policy;
mod position;
pub mod rules;
mod state;
mod types;

pub use controller::GameController;
pub use error::MoveError;
pub use position::Position;
pub use state::{GameState, Move};
pub use types::{Board, GameStatus, Player, Square};
