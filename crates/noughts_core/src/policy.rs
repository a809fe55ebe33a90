//! Heuristic move policy for the computer player.
//!
//! A fixed priority chain, not a game-tree search: win > block > center >
//! random corner > first available. The scan order inside each rule is part
//! of the observable behavior, so the policy is deterministic except for
//! the corner rule.

use crate::position::Position;
use crate::rules::LINES;
use crate::types::{Board, Player, Square};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

/// Finds a move that completes a line for `player`, if one exists.
///
/// Scans [`LINES`] in table order; within a line `(a, b, c)` the sub-cases
/// are checked in the order a/b -> c, a/c -> b, b/c -> a. The first match
/// across the whole scan wins, which decides the outcome when several
/// opportunities coexist. Called with the opponent, this doubles as the
/// block rule, answering only immediate two-in-a-row threats, never forks.
#[instrument(skip(board))]
pub fn find_winning_move(board: &Board, player: Player) -> Option<Position> {
    let mark = Square::Occupied(player);
    for [a, b, c] in LINES {
        if board.get(a) == mark && board.get(b) == mark && board.is_empty(c) {
            return Some(c);
        }
        if board.get(a) == mark && board.get(c) == mark && board.is_empty(b) {
            return Some(b);
        }
        if board.get(b) == mark && board.get(c) == mark && board.is_empty(a) {
            return Some(a);
        }
    }
    None
}

/// Chooses the computer's move for player O.
///
/// Priority order, first applicable rule wins:
///
/// 1. Complete a line for O.
/// 2. Block X's immediate two-in-a-row threat.
/// 3. Take the center.
/// 4. Take a uniformly random empty corner.
/// 5. Take the lowest-index empty square.
///
/// Returns `None` only when the board is full, which the caller treats as
/// a terminal signal rather than an error.
#[instrument(skip(board, rng))]
pub fn choose_move(board: &Board, rng: &mut impl Rng) -> Option<Position> {
    if let Some(pos) = find_winning_move(board, Player::O) {
        debug!(%pos, "Winning move");
        return Some(pos);
    }
    if let Some(pos) = find_winning_move(board, Player::X) {
        debug!(%pos, "Blocking move");
        return Some(pos);
    }
    if board.is_empty(Position::Center) {
        debug!("Taking center");
        return Some(Position::Center);
    }

    let empty_corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    if let Some(&pos) = empty_corners.choose(rng) {
        debug!(%pos, "Taking corner");
        return Some(pos);
    }

    Position::ALL.iter().copied().find(|&pos| board.is_empty(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0)
    }

    fn board_from(marks: [Option<Player>; 9]) -> Board {
        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            if let Some(player) = mark {
                let pos = Position::from_index(index).unwrap();
                board.set(pos, Square::Occupied(player));
            }
        }
        board
    }

    const X: Option<Player> = Some(Player::X);
    const O: Option<Player> = Some(Player::O);
    const E: Option<Player> = None;

    #[test]
    fn test_win_over_block() {
        // O can win at 2; X threatens at 5. Winning takes priority.
        let board = board_from([O, O, E, X, X, E, E, E, E]);
        assert_eq!(choose_move(&board, &mut rng()), Some(Position::TopRight));
    }

    #[test]
    fn test_block_when_no_win() {
        let board = board_from([X, X, E, E, E, E, E, E, E]);
        assert_eq!(choose_move(&board, &mut rng()), Some(Position::TopRight));
    }

    #[test]
    fn test_center_when_no_threat() {
        let board = Board::new();
        assert_eq!(choose_move(&board, &mut rng()), Some(Position::Center));
    }

    #[test]
    fn test_corner_when_center_taken() {
        let board = board_from([E, E, E, E, X, E, E, E, E]);
        let pos = choose_move(&board, &mut rng()).unwrap();
        assert!(Position::CORNERS.contains(&pos));
    }

    #[test]
    fn test_corner_choice_is_an_empty_corner() {
        // Only two corners remain; any seed must pick one of them.
        let board = board_from([X, E, O, E, X, E, E, O, E]);
        for seed in 0..32 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let pos = choose_move(&board, &mut rng).unwrap();
            assert!(
                pos == Position::BottomLeft || pos == Position::BottomRight,
                "seed {seed} chose occupied or non-corner square {pos}"
            );
        }
    }

    #[test]
    fn test_first_available_when_no_corner() {
        // Center and all corners taken with no open two-in-a-row for
        // either side (the main diagonal is already complete, so nothing
        // for the win/block scans to match). The final rule picks the
        // lowest-index empty square.
        let board = board_from([X, E, O, E, X, E, O, E, X]);
        assert_eq!(find_winning_move(&board, Player::O), None);
        assert_eq!(find_winning_move(&board, Player::X), None);
        assert_eq!(choose_move(&board, &mut rng()), Some(Position::TopCenter));
    }

    #[test]
    fn test_full_board_returns_none() {
        let board = board_from([X, O, X, X, O, O, O, X, X]);
        assert_eq!(choose_move(&board, &mut rng()), None);
    }

    #[test]
    fn test_sub_case_order_within_line() {
        // Top row holds X at a and c; the gap at b is found via the a/c
        // sub-case, not a later line.
        let board = board_from([X, E, X, E, E, E, E, E, E]);
        assert_eq!(
            find_winning_move(&board, Player::X),
            Some(Position::TopCenter)
        );
        // Gap at a via the b/c sub-case.
        let board = board_from([E, X, X, E, E, E, E, E, E]);
        assert_eq!(
            find_winning_move(&board, Player::X),
            Some(Position::TopLeft)
        );
    }

    #[test]
    fn test_first_line_in_table_order_wins() {
        // X threatens both the top row (gap 2) and the left column (gap 6);
        // the row comes first in the table.
        let board = board_from([X, X, E, X, E, E, E, E, E]);
        assert_eq!(
            find_winning_move(&board, Player::X),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_never_returns_occupied() {
        let board = board_from([X, O, X, E, O, E, E, X, E]);
        for seed in 0..16 {
            let mut rng = SmallRng::seed_from_u64(seed);
            if let Some(pos) = choose_move(&board, &mut rng) {
                assert!(board.is_empty(pos));
            }
        }
    }
}
