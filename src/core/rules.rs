//! Special-tile rules - pure mappings from runs to power tiles and back
//!
//! Creation: a run of 4 produces a striped tile (random orientation), a run
//! of 5 or more produces a color bomb, a run of 3 produces nothing.
//! Activation: a striped tile cleared by a match additionally clears its row
//! or column; color bombs never activate through the ordinary match path.

use crate::core::rng::SimpleRng;
use crate::types::{Pos, SpecialKind};

/// Per-cell score rate for a run of the given length.
///
/// Rates are strictly monotonic in run length: 3 → 1, 4 → 2, ≥5 → 3.
pub fn score_rate(run_len: u8) -> u32 {
    if run_len >= 5 {
        3
    } else if run_len == 4 {
        2
    } else if run_len == 3 {
        1
    } else {
        0
    }
}

/// Power tile produced by resolving a run of the given length, if any.
///
/// Striped orientation is a fair coin flip on the supplied generator.
pub fn special_for_run(run_len: u8, rng: &mut SimpleRng) -> Option<SpecialKind> {
    if run_len >= 5 {
        Some(SpecialKind::ColorBomb)
    } else if run_len == 4 {
        Some(if rng.coin_flip() {
            SpecialKind::StripedH
        } else {
            SpecialKind::StripedV
        })
    } else {
        None
    }
}

/// Cells additionally cleared when a striped tile at `pos` activates.
///
/// Color bombs return nothing here; their blast is driven by explicit
/// activation with a target color, not by matching.
pub fn activation_cells(kind: SpecialKind, pos: Pos, size: u8) -> Vec<Pos> {
    match kind {
        SpecialKind::StripedH => (0..size).map(|x| Pos::new(x, pos.y)).collect(),
        SpecialKind::StripedV => (0..size).map(|y| Pos::new(pos.x, y)).collect(),
        SpecialKind::ColorBomb => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_rates_monotonic() {
        assert_eq!(score_rate(3), 1);
        assert_eq!(score_rate(4), 2);
        assert_eq!(score_rate(5), 3);
        assert_eq!(score_rate(8), 3);
        assert!(score_rate(5) > score_rate(4));
        assert!(score_rate(4) > score_rate(3));
        assert_eq!(score_rate(2), 0);
    }

    #[test]
    fn test_run_of_three_makes_nothing() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(special_for_run(3, &mut rng), None);
    }

    #[test]
    fn test_run_of_four_makes_striped() {
        let mut rng = SimpleRng::new(1);
        for _ in 0..20 {
            let kind = special_for_run(4, &mut rng);
            assert!(matches!(
                kind,
                Some(SpecialKind::StripedH) | Some(SpecialKind::StripedV)
            ));
        }
    }

    #[test]
    fn test_run_of_five_or_more_makes_bomb() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(special_for_run(5, &mut rng), Some(SpecialKind::ColorBomb));
        assert_eq!(special_for_run(7, &mut rng), Some(SpecialKind::ColorBomb));
    }

    #[test]
    fn test_striped_orientation_is_seed_deterministic() {
        let mut a = SimpleRng::new(77);
        let mut b = SimpleRng::new(77);
        for _ in 0..32 {
            assert_eq!(special_for_run(4, &mut a), special_for_run(4, &mut b));
        }
    }

    #[test]
    fn test_activation_cells() {
        let row = activation_cells(SpecialKind::StripedH, Pos::new(2, 5), 8);
        assert_eq!(row.len(), 8);
        assert!(row.iter().all(|p| p.y == 5));

        let col = activation_cells(SpecialKind::StripedV, Pos::new(2, 5), 8);
        assert_eq!(col.len(), 8);
        assert!(col.iter().all(|p| p.x == 2));

        assert!(activation_cells(SpecialKind::ColorBomb, Pos::new(2, 5), 8).is_empty());
    }
}
