//! Tic-tac-toe shells: console game and HTTP service.
//!
//! Both shells drive the same rules core from `tictactoe_core`. The
//! console shell is a stdin read-eval loop; the HTTP shell exposes the
//! game as four JSON endpoints plus static files for a browser client.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod console;
pub mod routes;
pub mod state;
pub mod static_files;
pub mod wire;

pub use routes::{AppState, router};
pub use state::SharedGame;
pub use wire::{GameResponse, MoveRequest, ScoresBody};
