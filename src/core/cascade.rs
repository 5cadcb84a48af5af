//! Cascade resolver - drives match/clear/drop/refill to a stable board
//!
//! One resolve call loops: detect matches, score them, decide power tiles,
//! clear, fire striped activations, place the new power tiles, apply gravity,
//! refill, and re-scan until no matches remain. The loop is iterative with a
//! hard cap.

use crate::core::board::Board;
use crate::core::matching::{find_matches, MatchSet};
use crate::core::rng::SimpleRng;
use crate::core::rules::{activation_cells, score_rate, special_for_run};
use crate::types::{GameError, Pos, SpecialKind, Tile, TileColor, CASCADE_CAP, COLOR_COUNT};

/// Per-color tally of cleared plain tiles, indexed by [`TileColor`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorCounts([u32; COLOR_COUNT as usize]);

impl ColorCounts {
    pub fn get(&self, color: TileColor) -> u32 {
        self.0[color.index()]
    }

    pub fn add(&mut self, color: TileColor, count: u32) {
        self.0[color.index()] += count;
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileColor, u32)> + '_ {
        TileColor::ALL.iter().map(|&color| (color, self.get(color)))
    }

    fn merge(&mut self, other: &ColorCounts) {
        for (slot, value) in self.0.iter_mut().zip(other.0.iter()) {
            *slot += value;
        }
    }
}

/// Aggregate outcome of a cascade (or one step of it)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeResult {
    pub score: u32,
    pub color_clears: ColorCounts,
}

impl CascadeResult {
    pub fn merge(&mut self, other: &CascadeResult) {
        self.score += other.score;
        self.color_clears.merge(&other.color_clears);
    }
}

/// Resolve one full cascade on the given board (live or cloned).
///
/// Returns the accumulated score and per-color clear counts. The board is
/// fully populated and match-free on success.
pub fn resolve_cascade(board: &mut Board, rng: &mut SimpleRng) -> Result<CascadeResult, GameError> {
    let mut result = CascadeResult::default();

    for _ in 0..CASCADE_CAP {
        let matches = find_matches(board);
        if matches.is_empty() {
            return Ok(result);
        }

        result.merge(&resolve_step(board, &matches, rng));
        board.apply_gravity();
        board.refill(rng);
    }

    // Refill randomness should never sustain matches this long.
    Err(GameError::UnresolvableCascade)
}

/// One clear pass over a matched board, without gravity or refill.
///
/// Scores matched cells, tallies cleared plain colors, fires striped tiles
/// that were themselves matched, and places newly earned power tiles at each
/// run's designated cell. Exposed so drivers can show the intermediate board
/// between the clear and the drop.
pub fn resolve_step(board: &mut Board, matches: &MatchSet, rng: &mut SimpleRng) -> CascadeResult {
    let mut step = CascadeResult::default();

    // Score and color tally read the board before anything is cleared.
    for (pos, len) in matches.cells() {
        step.score += score_rate(len);
        if let Some(Tile::Plain(color)) = board.tile(pos) {
            step.color_clears.add(color, 1);
        }
    }

    // Striped tiles cleared by this match set activate; bombs never do.
    let mut activations: Vec<(Pos, SpecialKind)> = Vec::new();
    for (pos, _) in matches.cells() {
        if let Some(Tile::Special(_, kind)) = board.tile(pos) {
            if kind != SpecialKind::ColorBomb {
                activations.push((pos, kind));
            }
        }
    }

    // Power tiles earned by this match set, one per distinct run.
    let mut created: Vec<(Pos, Tile)> = Vec::new();
    for run in matches.runs() {
        if let Some(kind) = special_for_run(run.len(), rng) {
            created.push((run.representative(), Tile::Special(run.color, kind)));
        }
    }

    for (pos, _) in matches.cells() {
        board.set(pos, None);
    }

    // Activation clears award no score and are not color-counted.
    for (pos, kind) in activations {
        for cleared in activation_cells(kind, pos, board.size()) {
            board.set(cleared, None);
        }
    }

    // Newly created power tiles survive the clear they were earned in.
    for (pos, tile) in created {
        board.set(pos, Some(tile));
    }

    step
}
