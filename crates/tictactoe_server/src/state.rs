//! Shared game state for the HTTP service.

use std::sync::{Arc, Mutex};
use tictactoe_core::{Game, MoveError};
use tracing::{debug, info, instrument, warn};

use crate::wire::GameResponse;

/// The one global game behind the HTTP API.
///
/// Every client shares this state; there is no session concept. The
/// mutex serializes engine access so concurrent requests cannot race,
/// preserving the single-global-game semantics the browser expects.
#[derive(Debug, Clone)]
pub struct SharedGame {
    game: Arc<Mutex<Game>>,
}

impl SharedGame {
    /// Creates the shared game in its initial state.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating shared game state");
        Self {
            game: Arc::new(Mutex::new(Game::new())),
        }
    }

    /// Returns a wire snapshot of the current state.
    pub fn snapshot(&self) -> GameResponse {
        let game = self.game.lock().unwrap();
        GameResponse::from(&*game)
    }

    /// Applies a move and returns the resulting snapshot.
    ///
    /// A rejected move leaves the game unchanged; the snapshot is
    /// returned either way and the rejection reason is logged.
    #[instrument(skip(self))]
    pub fn play(&self, row: i64, col: i64) -> GameResponse {
        let mut game = self.game.lock().unwrap();
        match game.play(row, col) {
            Ok(()) => {
                info!(row, col, status = ?game.status(), "Move applied");
            }
            Err(err @ (MoveError::OutOfRange { .. } | MoveError::SquareOccupied(_))) => {
                warn!(row, col, error = %err, "Move rejected");
            }
            Err(err @ MoveError::GameOver) => {
                debug!(row, col, error = %err, "Move after game over ignored");
            }
        }
        GameResponse::from(&*game)
    }

    /// Starts a fresh game, keeping the scores.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameResponse {
        let mut game = self.game.lock().unwrap();
        game.reset();
        info!("Game reset");
        GameResponse::from(&*game)
    }

    /// Zeroes the scoreboard.
    #[instrument(skip(self))]
    pub fn reset_scores(&self) -> GameResponse {
        let mut game = self.game.lock().unwrap();
        game.reset_scores();
        info!("Scores reset");
        GameResponse::from(&*game)
    }
}

impl Default for SharedGame {
    fn default() -> Self {
        Self::new()
    }
}
