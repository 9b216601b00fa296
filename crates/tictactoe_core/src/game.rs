//! The game engine: state transitions, scoring, and move validation.

use crate::position::Position;
use crate::rules::{WinLine, check_winner, is_full};
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error returned when a move is rejected.
///
/// The engine rejects explicitly; shells decide how to surface it (the
/// console re-prompts, the HTTP service returns the unchanged state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates are outside the 3x3 grid.
    #[display("Move ({row}, {col}) is outside the board")]
    OutOfRange {
        /// Requested 0-based row.
        row: i64,
        /// Requested 0-based column.
        col: i64,
    },

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Cumulative win/tie tally across games within one process run.
///
/// Survives board resets; zeroed only by [`Game::reset_scores`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Games won by X.
    pub x: u32,
    /// Games won by O.
    pub o: u32,
    /// Tied games.
    pub ties: u32,
}

impl ScoreBoard {
    fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }

    fn record_tie(&mut self) {
        self.ties += 1;
    }
}

/// A tic-tac-toe game with cross-game scoring.
///
/// The board, turn, status, and winning line reset together; the
/// scoreboard persists until explicitly cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<WinLine>,
    scores: ScoreBoard,
}

impl Game {
    /// Creates a new game: empty board, X to move, zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            scores: ScoreBoard::default(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// Meaningful only while the game is in progress; after a win it
    /// remains the winner, matching the observable wire behavior.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winning line, if the game has been won.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Returns the cumulative scores.
    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    /// Applies a move at 0-based (row, col) coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has ended,
    /// [`MoveError::OutOfRange`] for coordinates outside the grid, and
    /// [`MoveError::SquareOccupied`] for a non-empty target square.
    /// On error the game is unchanged.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, row: i64, col: i64) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        let pos = usize::try_from(row)
            .ok()
            .zip(usize::try_from(col).ok())
            .and_then(|(r, c)| Position::from_row_col(r, c))
            .ok_or(MoveError::OutOfRange { row, col })?;
        self.play_at(pos)
    }

    /// Applies a move at an in-range position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] or [`MoveError::SquareOccupied`];
    /// on error the game is unchanged.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_at(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mover = self.current_player;
        self.board.set(pos, Square::Occupied(mover));

        if let Some((winner, line)) = check_winner(&self.board) {
            debug!(%winner, ?line, "game won");
            self.status = GameStatus::Won(winner);
            self.winning_line = Some(line);
            self.scores.record_win(winner);
        } else if is_full(&self.board) {
            debug!("board full, game tied");
            self.status = GameStatus::Draw;
            self.scores.record_tie();
        } else {
            self.current_player = mover.opponent();
        }

        Ok(())
    }

    /// Starts a fresh game, keeping the scoreboard.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
    }

    /// Zeroes the scoreboard, leaving the game in play untouched.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores = ScoreBoard::default();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.scores(), ScoreBoard::default());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        game.play(0, 0).unwrap();
        assert_eq!(game.current_player(), Player::O);
        game.play(1, 1).unwrap();
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new();
        game.play(0, 0).unwrap();
        let before = game.clone();
        assert_eq!(
            game.play(0, 0),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = Game::new();
        let before = game.clone();
        assert_eq!(
            game.play(3, 0),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            game.play(0, -1),
            Err(MoveError::OutOfRange { row: 0, col: -1 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_win_records_line_and_score() {
        let mut game = Game::new();
        game.play(0, 0).unwrap(); // X
        game.play(1, 1).unwrap(); // O
        game.play(0, 1).unwrap(); // X
        game.play(2, 2).unwrap(); // O
        game.play(0, 2).unwrap(); // X wins top row
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(game.scores().x, 1);
        // No toggle after the winning move.
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            game.play(row, col).unwrap();
        }
        let before = game.clone();
        assert_eq!(game.play(1, 0), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_draw_counts_tie() {
        let mut game = Game::new();
        // X O X / X O O / O X X - no three in a row
        for (row, col) in [
            (0, 0), // X
            (0, 1), // O
            (0, 2), // X
            (1, 1), // O
            (1, 0), // X
            (1, 2), // O
            (2, 1), // X
            (2, 0), // O
            (2, 2), // X
        ] {
            game.play(row, col).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.board().is_full());
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.scores().ties, 1);
    }

    #[test]
    fn test_reset_keeps_scores() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            game.play(row, col).unwrap();
        }
        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.winning_line(), None);
        assert!(!game.board().is_full());
        assert_eq!(game.scores().x, 1);
    }

    #[test]
    fn test_reset_scores_keeps_board() {
        let mut game = Game::new();
        // O wins the top row.
        for (row, col) in [(1, 1), (0, 0), (1, 0), (0, 1), (2, 2), (0, 2)] {
            game.play(row, col).unwrap();
        }
        assert_eq!(game.scores().o, 1);
        game.reset_scores();
        assert_eq!(game.scores(), ScoreBoard::default());
        assert_eq!(game.status(), GameStatus::Won(Player::O));
    }
}
