//! Heuristic bot opponent.
//!
//! Not a search AI: a fixed rule ladder with uniform random tie-breaking.
//! The decision function is pure (no timing, no hidden state) so it can
//! be tested without waiting on the scheduler that drives it.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, instrument};

/// Chooses the bot's move from the available (empty, unblocked) squares.
///
/// Rule ladder, first match wins:
/// 1. complete one of `bot`'s own lines;
/// 2. occupy a square where the opponent would complete a line;
/// 3. take the center;
/// 4. take a corner, uniformly at random among the open ones;
/// 5. take any remaining square, uniformly at random.
///
/// Returns `None` when `available` is empty. That can only happen
/// transiently before the sliding window kicks in; callers treat it as
/// "no move this turn".
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    available: &[Position],
    bot: Player,
    rng: &mut R,
) -> Option<Position> {
    if available.is_empty() {
        debug!("no available squares");
        return None;
    }

    // 1. Win now.
    if let Some(pos) = winning_square(board, available, bot) {
        debug!(%pos, "winning move");
        return Some(pos);
    }

    // 2. Block the opponent.
    if let Some(pos) = winning_square(board, available, bot.opponent()) {
        debug!(%pos, "blocking move");
        return Some(pos);
    }

    // 3. Center.
    if available.contains(&Position::Center) {
        return Some(Position::Center);
    }

    // 4. Corners.
    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|c| available.contains(c))
        .collect();
    if let Some(pos) = corners.choose(rng) {
        return Some(*pos);
    }

    // 5. Whatever is left.
    available.choose(rng).copied()
}

/// First available square that completes a line for `player`, if any.
fn winning_square(board: &Board, available: &[Position], player: Player) -> Option<Position> {
    available.iter().copied().find(|pos| {
        let mut probe = board.clone();
        probe.set(*pos, Square::Occupied(player));
        rules::check_winner(&probe).is_some_and(|(winner, _)| winner == player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn board_from(marks: [Option<Player>; 9]) -> Board {
        let mut board = Board::new();
        for (i, mark) in marks.iter().enumerate() {
            if let Some(player) = mark {
                board.set(Position::from_index(i).unwrap(), Square::Occupied(*player));
            }
        }
        board
    }

    fn open_squares(board: &Board) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|p| board.is_empty(*p))
            .collect()
    }

    #[test]
    fn test_bot_takes_the_win() {
        use Player::{O, X};
        // O,O,_ / X,X,_ / _,_,_ - O to move completes the top row at 2.
        let board = board_from([
            Some(O),
            Some(O),
            None,
            Some(X),
            Some(X),
            None,
            None,
            None,
            None,
        ]);
        let choice = choose_move(&board, &open_squares(&board), O, &mut rng());
        assert_eq!(choice, Some(Position::TopRight));
    }

    #[test]
    fn test_bot_blocks_the_opponent() {
        use Player::{O, X};
        // X,X,_ / O,_,_ / _,_,_ - O must take 2 to stop X's row.
        let board = board_from([
            Some(X),
            Some(X),
            None,
            Some(O),
            None,
            None,
            None,
            None,
            None,
        ]);
        let choice = choose_move(&board, &open_squares(&board), O, &mut rng());
        assert_eq!(choice, Some(Position::TopRight));
    }

    #[test]
    fn test_bot_prefers_center_on_empty_board() {
        let board = Board::new();
        let choice = choose_move(&board, &open_squares(&board), Player::O, &mut rng());
        assert_eq!(choice, Some(Position::Center));
    }

    #[test]
    fn test_bot_falls_back_to_a_corner() {
        use Player::{O, X};
        // Center taken, no immediate threats: any corner is acceptable.
        let board = board_from([
            None,
            None,
            None,
            None,
            Some(X),
            None,
            None,
            None,
            Some(O),
        ]);
        let choice = choose_move(&board, &open_squares(&board), O, &mut rng()).unwrap();
        assert!(Position::CORNERS.contains(&choice));
    }

    #[test]
    fn test_bot_respects_the_available_list() {
        // Only one square offered: the bot must take it or pass.
        let board = Board::new();
        let available = [Position::BottomCenter];
        let choice = choose_move(&board, &available, Player::O, &mut rng());
        assert_eq!(choice, Some(Position::BottomCenter));
        assert_eq!(choose_move(&board, &[], Player::O, &mut rng()), None);
    }
}
