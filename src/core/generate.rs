//! Board generation - random boards with no matches and at least one move
//!
//! A board handed to the player must be at rest (no run of three anywhere)
//! and playable (some adjacent swap produces a match). Generation retries
//! until both hold; the retry loop is intentional and bounded.

use crate::core::board::Board;
use crate::core::bot::has_any_possible_move;
use crate::core::matching::find_matches;
use crate::core::rng::SimpleRng;
use crate::types::{GameError, GENERATE_CAP};

/// Construct a fresh fully populated, match-free, solvable board.
pub fn new_board(size: u8, color_count: u8, rng: &mut SimpleRng) -> Result<Board, GameError> {
    for _ in 0..GENERATE_CAP {
        let mut board = Board::new(size, color_count);
        board.refill(rng);
        if find_matches(&board).is_empty() && has_any_possible_move(&board) {
            return Ok(board);
        }
    }
    Err(GameError::GenerationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_rest_and_playable() {
        for seed in [1u32, 2, 3, 500, 123456] {
            let mut rng = SimpleRng::new(seed);
            let board = new_board(8, 5, &mut rng).unwrap();

            assert!(board.is_full());
            assert!(find_matches(&board).is_empty(), "initial match for seed {seed}");
            assert!(has_any_possible_move(&board), "stuck board for seed {seed}");
        }
    }

    #[test]
    fn test_new_board_is_seed_deterministic() {
        let mut rng1 = SimpleRng::new(314);
        let mut rng2 = SimpleRng::new(314);

        let a = new_board(8, 5, &mut rng1).unwrap();
        let b = new_board(8, 5, &mut rng2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_board_respects_color_count() {
        let mut rng = SimpleRng::new(8);
        let board = new_board(8, 4, &mut rng).unwrap();
        for pos in board.positions() {
            let color = board.tile(pos).map(|t| t.base_color().index());
            assert!(color.is_some_and(|c| c < 4));
        }
    }
}
