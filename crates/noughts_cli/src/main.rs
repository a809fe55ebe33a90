//! Terminal front-end for noughts.
//!
//! A thin collaborator over [`noughts_core::GameController`]: it prints
//! the board and the controller's message, reads a square number, and
//! forwards the index. Invalid input is ignored silently, matching the
//! reference UI behavior.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts_core::GameController;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe against the computer.
#[derive(Debug, Parser)]
#[command(name = "noughts", version, about)]
struct Cli {
    /// Pause before the computer replies, in milliseconds.
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Seed for the computer's corner choices (random if omitted).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut game = GameController::new().with_reply_delay(Duration::from_millis(cli.delay_ms));
    if let Some(seed) = cli.seed {
        game = game.with_rng_seed(seed);
    }

    println!("You are X. Enter a square number (1-9), r to reset, q to quit.");
    let stdin = io::stdin();
    let mut out = io::stdout();

    loop {
        println!("\n{}", game.board().display());
        println!("{}", game.message());
        print!("> ");
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "q" => break,
            "r" => game.reset(),
            input => {
                // Squares are shown 1-based; the controller takes 0-8.
                let Some(index) = input.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
                else {
                    debug!(input, "Ignoring unrecognized input");
                    continue;
                };
                if let Err(err) = game.handle_human_move(index) {
                    // Rejected moves are silent no-ops for the player.
                    debug!(%err, "Ignoring invalid move");
                }
            }
        }
    }

    Ok(())
}
