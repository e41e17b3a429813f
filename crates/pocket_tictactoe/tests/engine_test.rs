//! Integration tests for the sliding-window game engine.

use pocket_tictactoe::{Game, GameMode, Player, Position, Square};

fn pos(i: usize) -> Position {
    Position::from_index(i).expect("index in range")
}

fn play_all(game: &mut Game, indices: &[usize]) {
    for &i in indices {
        game.play(pos(i));
    }
}

#[test]
fn test_top_row_win_end_to_end() {
    let mut game = Game::new(GameMode::VsHuman);
    // X takes the top row while O answers in the middle row.
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );

    // Terminal: any further attempt is a no-op.
    let frozen = game.clone();
    game.play(pos(5));
    assert_eq!(game, frozen);
    game.apply_bot_move(pos(5));
    assert_eq!(game, frozen);
}

#[test]
fn test_rejection_is_idempotent() {
    let mut game = Game::new(GameMode::VsHuman);
    play_all(&mut game, &[4, 0]);

    let before = game.clone();
    game.play(pos(4)); // occupied by X
    assert_eq!(game, before);
    game.play(pos(0)); // occupied by O
    assert_eq!(game, before);
}

#[test]
fn test_eviction_ordering_follows_sequence() {
    let mut game = Game::new(GameMode::VsHuman);
    // Six quiet moves: X 0,3,7 / O 1,2,5. No line is complete.
    play_all(&mut game, &[0, 1, 3, 2, 7, 5]);

    // The blocked cell is the lowest-sequence active move.
    let blocked = game.blocked().expect("six active moves force a block");
    let oldest = game.history().iter().min_by_key(|m| m.sequence).unwrap();
    assert_eq!(blocked.position, oldest.position);
    assert_eq!(blocked.position, Position::TopLeft);

    // The next commit evicts exactly the cell that was blocked.
    game.play(pos(4));
    assert_eq!(game.board().get(Position::TopLeft), Square::Empty);
    assert!(game
        .history()
        .iter()
        .all(|m| m.position != Position::TopLeft));
    // ... and blocks the new oldest.
    assert_eq!(game.blocked().map(|b| b.position), Some(Position::TopCenter));
}

#[test]
fn test_win_takes_precedence_over_blocking() {
    let mut game = Game::new(GameMode::VsHuman);
    // Sixth move completes O's middle row exactly as the block threshold
    // is reached: the win lands and no block is recorded.
    play_all(&mut game, &[0, 3, 1, 4, 8, 5]);

    assert_eq!(game.winner(), Some(Player::O));
    assert_eq!(
        game.winning_line(),
        Some([
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight
        ])
    );
    assert_eq!(game.blocked(), None);
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_partition_once_window_is_full() {
    let mut game = Game::new(GameMode::VsHuman);
    play_all(&mut game, &[0, 1, 3, 2, 7, 5, 4, 0, 8]);
    assert_eq!(game.winner(), None);

    // Steady state: six marks on the board (one of them blocked) and
    // three empty squares, all of them playable. Unblocked marks plus
    // the blocked one plus the empties partition the nine squares.
    let snap = game.snapshot();
    assert_eq!(snap.active_moves, 6);
    assert_eq!(snap.blocked_cells, 1);
    assert_eq!(snap.available_cells, 3);
    assert_eq!(
        (snap.active_moves - snap.blocked_cells) + snap.blocked_cells + snap.available_cells,
        9
    );
    assert_eq!(game.board().occupied_count(), snap.active_moves);
    // A playable square therefore always exists.
    assert!(snap.available_cells >= 1);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = Game::new(GameMode::VsHuman);
    play_all(&mut game, &[0, 1, 3, 2, 7, 5, 4]);
    game.reset(None);

    let snap = game.snapshot();
    assert_eq!(game.board().occupied_count(), 0);
    assert!(game.history().is_empty());
    assert_eq!(game.blocked(), None);
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.winner(), None);
    assert_eq!(snap.available_cells, 9);

    // Sequence numbering restarts with the session.
    game.play(pos(4));
    assert_eq!(game.history()[0].sequence, 1);
}

#[test]
fn test_next_to_block_warning_appears_at_five_active() {
    let mut game = Game::new(GameMode::VsHuman);
    play_all(&mut game, &[0, 1, 3, 2]);
    assert_eq!(game.snapshot().next_to_block, None);

    game.play(pos(7));
    let hint = game.snapshot().next_to_block.expect("five active moves");
    assert_eq!(hint.position, Position::TopLeft);
    assert_eq!(hint.player, Player::X);
}

#[test]
fn test_mode_switch_then_reset() {
    let mut game = Game::new(GameMode::VsBot);
    game.play(pos(0));
    game.set_mode(GameMode::VsHuman);
    game.reset(None);
    assert_eq!(game.mode(), GameMode::VsHuman);
    // O is a human now: direct play on O's turn is accepted.
    play_all(&mut game, &[4, 0]);
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
}

#[test]
fn test_state_survives_serde_round_trip() {
    let mut game = Game::new(GameMode::VsHuman);
    play_all(&mut game, &[0, 1, 3, 2, 7, 5, 4]);

    let json = serde_json::to_string(&game).unwrap();
    let back: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(game, back);
}
