//! Game rules: win and draw detection.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, WinLine, check_winner};
