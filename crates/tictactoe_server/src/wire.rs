//! JSON wire types for the HTTP API.
//!
//! The response shape (field order included) matches what the browser
//! client expects: cells as single-character strings, `winner` a space
//! until somebody wins, `winningLine` as flattened 0-8 indices.

use serde::{Deserialize, Serialize};
use tictactoe_core::{Game, GameStatus};

/// Body of `POST /api/move`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveRequest {
    /// 0-based row.
    pub row: i64,
    /// 0-based column.
    pub col: i64,
}

/// Cumulative scores as the client renders them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoresBody {
    /// Games won by X.
    #[serde(rename = "X")]
    pub x: u32,
    /// Games won by O.
    #[serde(rename = "O")]
    pub o: u32,
    /// Tied games.
    pub ties: u32,
}

/// Full game snapshot returned by every endpoint.
///
/// Field declaration order is the serialization order; keep it stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// 3x3 grid of `'X'`, `'O'`, or `' '`.
    pub board: [[char; 3]; 3],
    /// Player to move (the winner, once the game is over).
    pub current_player: char,
    /// Whether the game has ended.
    pub game_over: bool,
    /// `'X'` or `'O'` after a win, `' '` otherwise.
    pub winner: char,
    /// Flattened indices of the winning triple, empty while unwon.
    pub winning_line: Vec<usize>,
    /// Cross-game tally.
    pub scores: ScoresBody,
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        let squares = game.board().squares();
        let mut board = [[' '; 3]; 3];
        for (i, square) in squares.iter().enumerate() {
            board[i / 3][i % 3] = square.symbol();
        }

        let winner = match game.status() {
            GameStatus::Won(player) => player.symbol(),
            GameStatus::InProgress | GameStatus::Draw => ' ',
        };

        let winning_line = game
            .winning_line()
            .map(|line| line.iter().map(|p| p.to_index()).collect())
            .unwrap_or_default();

        let scores = game.scores();

        Self {
            board,
            current_player: game.current_player().symbol(),
            game_over: game.status().is_over(),
            winner,
            winning_line,
            scores: ScoresBody {
                x: scores.x,
                o: scores.o,
                ties: scores.ties,
            },
        }
    }
}
