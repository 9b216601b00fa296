//! Pure tic-tac-toe game logic.
//!
//! This crate owns the rules: board representation, alternating turns,
//! win and draw detection over the eight fixed lines, and cross-game
//! scoring. It performs no I/O; the console and HTTP shells in
//! `tictactoe_server` drive it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
mod rules;
mod types;

pub use game::{Game, MoveError, ScoreBoard};
pub use position::Position;
pub use rules::{LINES, WinLine, check_winner, is_full};
pub use types::{Board, GameStatus, Player, Square};
