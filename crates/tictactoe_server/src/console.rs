//! Interactive console shell: a read-eval loop over stdin.

use std::io::{BufRead, Write};
use tictactoe_core::{Game, GameStatus, MoveError};
use tracing::{debug, instrument};

/// Runs one interactive game against stdin/stdout.
#[instrument]
pub fn run() -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play_game(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Plays a single game, reading moves from `input` and rendering to
/// `output`. Returns once the game ends or the input is exhausted.
pub fn play_game<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<()> {
    writeln!(output, "Welcome to Tic-Tac-Toe!")?;
    writeln!(
        output,
        "Players take turns. Enter row and column (1-3) to make a move."
    )?;
    writeln!(output, "Player X goes first.")?;

    let mut game = Game::new();

    while game.status() == GameStatus::InProgress {
        writeln!(output, "\n{}", game.board().display())?;

        // Re-prompt until a move lands.
        loop {
            write!(
                output,
                "Player {}, enter your move (row col): ",
                game.current_player()
            )?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!("Input closed before the game finished");
                return Ok(());
            }

            let Some((row, col)) = parse_move(&line) else {
                writeln!(output, "Invalid input! Please enter two numbers.")?;
                continue;
            };

            // 1-based on the prompt, 0-based in the engine.
            match game.play(row - 1, col - 1) {
                Ok(()) => break,
                Err(MoveError::OutOfRange { .. }) => {
                    writeln!(output, "Invalid move! Please enter numbers between 1 and 3.")?;
                }
                Err(MoveError::SquareOccupied(_)) => {
                    writeln!(output, "That cell is already occupied! Try again.")?;
                }
                Err(MoveError::GameOver) => unreachable!("loop runs only while in progress"),
            }
        }
    }

    writeln!(output, "\n{}", game.board().display())?;
    match game.status() {
        GameStatus::Won(winner) => {
            writeln!(output, "Congratulations! Player {winner} wins!")?;
        }
        GameStatus::Draw => {
            writeln!(output, "It's a tie! The board is full.")?;
        }
        GameStatus::InProgress => unreachable!("loop exits only on a terminal status"),
    }
    writeln!(output, "\nThanks for playing!")?;

    Ok(())
}

/// Parses a move line as two whitespace-separated integers.
fn parse_move(line: &str) -> Option<(i64, i64)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some((row, col))
}
