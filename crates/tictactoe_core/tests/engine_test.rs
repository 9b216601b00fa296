//! Integration tests for the game engine across full games.

use tictactoe_core::{Game, GameStatus, LINES, Player, Position, ScoreBoard};

/// Plays a winning game for the given line, with the opponent filling
/// non-interfering squares. Returns the finished game.
fn play_line_win(line: [Position; 3]) -> Game {
    let mut game = Game::new();
    let line_set: Vec<usize> = line.iter().map(|p| p.to_index()).collect();
    // Opponent squares: any empty squares off the line, taken in order.
    let mut fillers = Position::ALL
        .into_iter()
        .filter(|p| !line_set.contains(&p.to_index()));

    for (i, pos) in line.into_iter().enumerate() {
        game.play_at(pos).expect("winning-line move");
        if i < 2 {
            let filler = fillers.next().expect("filler square");
            game.play_at(filler).expect("filler move");
        }
    }
    game
}

#[test]
fn every_line_wins_for_x() {
    for line in LINES {
        let game = play_line_win(line);
        assert_eq!(game.status(), GameStatus::Won(Player::X), "line {line:?}");
        assert_eq!(game.winning_line(), Some(line));
        assert_eq!(game.scores().x, 1);
        assert_eq!(game.scores().o, 0);
        assert_eq!(game.scores().ties, 0);
    }
}

#[test]
fn scores_accumulate_across_games() {
    let mut game = Game::new();

    // Game 1: X wins the left column.
    for (row, col) in [(0, 0), (0, 1), (1, 0), (0, 2)] {
        game.play(row, col).unwrap();
    }
    game.play(2, 0).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    game.reset();

    // Game 2: O wins the top row.
    for (row, col) in [(1, 1), (0, 0), (1, 0), (0, 1), (2, 2), (0, 2)] {
        game.play(row, col).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Won(Player::O));
    game.reset();

    // Game 3: a tie.
    for (row, col) in [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ] {
        game.play(row, col).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Draw);

    assert_eq!(game.scores(), ScoreBoard { x: 1, o: 1, ties: 1 });

    game.reset_scores();
    assert_eq!(game.scores(), ScoreBoard::default());
    // Clearing scores does not disturb the finished game.
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn end_to_end_top_row_win() {
    let mut game = Game::new();
    game.play(0, 0).unwrap(); // X
    game.play(1, 1).unwrap(); // O
    game.play(0, 1).unwrap(); // X
    game.play(2, 2).unwrap(); // O
    game.play(0, 2).unwrap(); // X completes the top row

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    let indices: Vec<usize> = game
        .winning_line()
        .expect("winning line")
        .iter()
        .map(|p| p.to_index())
        .collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(game.scores().x, 1);
}

#[test]
fn rejected_moves_never_mutate() {
    let mut game = Game::new();
    game.play(1, 1).unwrap();
    let snapshot = game.clone();

    assert!(game.play(1, 1).is_err());
    assert!(game.play(5, 5).is_err());
    assert!(game.play(-1, 0).is_err());
    assert_eq!(game, snapshot);
}
