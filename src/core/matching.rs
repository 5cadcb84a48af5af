//! Match detector - scans rows and columns for runs of three or more
//!
//! Runs are maximal straight-line sequences of equal base color. Color bombs
//! never compare equal to anything (including other bombs), which keeps a
//! freshly created bomb from chain-matching before it is activated. A cell
//! that lies in both a horizontal and a vertical qualifying run records the
//! maximum of the two lengths.

use std::collections::HashMap;

use crate::core::board::Board;
use crate::types::{Pos, Tile, TileColor, MIN_RUN};

/// Run axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A maximal matched run of equal base color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub orientation: Orientation,
    pub color: TileColor,
    /// Cells in scan order (left to right / top to bottom).
    pub cells: Vec<Pos>,
}

impl Run {
    pub fn len(&self) -> u8 {
        self.cells.len() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The designated cell for power-tile placement (first scanned cell).
    pub fn representative(&self) -> Pos {
        self.cells[0]
    }
}

/// All matches found in one scan of the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    lengths: HashMap<Pos, u8>,
    runs: Vec<Run>,
}

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Number of distinct matched cells
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Run length recorded for a cell (max of its axes), if matched
    pub fn length_at(&self, pos: Pos) -> Option<u8> {
        self.lengths.get(&pos).copied()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.lengths.contains_key(&pos)
    }

    /// Iterate matched cells with their recorded lengths
    pub fn cells(&self) -> impl Iterator<Item = (Pos, u8)> + '_ {
        self.lengths.iter().map(|(&pos, &len)| (pos, len))
    }

    /// Distinct runs, horizontal scan order first, then vertical
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    fn record(&mut self, run: Run) {
        let len = run.len();
        for &pos in &run.cells {
            let entry = self.lengths.entry(pos).or_insert(0);
            *entry = (*entry).max(len);
        }
        self.runs.push(run);
    }
}

/// Base color a cell contributes to run detection.
///
/// Empty cells and color bombs contribute nothing and so break every run.
fn run_color(board: &Board, pos: Pos) -> Option<TileColor> {
    match board.tile(pos) {
        Some(tile) if tile.is_color_bomb() => None,
        Some(tile) => Some(tile.base_color()),
        None => None,
    }
}

/// Scan the whole board for matched runs. O(N²).
pub fn find_matches(board: &Board) -> MatchSet {
    let n = board.size();
    let mut matches = MatchSet::default();

    // Horizontal runs.
    for y in 0..n {
        let mut x = 0;
        while x < n {
            match run_color(board, Pos::new(x, y)) {
                None => x += 1,
                Some(color) => {
                    let start = x;
                    while x < n && run_color(board, Pos::new(x, y)) == Some(color) {
                        x += 1;
                    }
                    if x - start >= MIN_RUN {
                        matches.record(Run {
                            orientation: Orientation::Horizontal,
                            color,
                            cells: (start..x).map(|cx| Pos::new(cx, y)).collect(),
                        });
                    }
                }
            }
        }
    }

    // Vertical runs.
    for x in 0..n {
        let mut y = 0;
        while y < n {
            match run_color(board, Pos::new(x, y)) {
                None => y += 1,
                Some(color) => {
                    let start = y;
                    while y < n && run_color(board, Pos::new(x, y)) == Some(color) {
                        y += 1;
                    }
                    if y - start >= MIN_RUN {
                        matches.record(Run {
                            orientation: Orientation::Vertical,
                            color,
                            cells: (start..y).map(|cy| Pos::new(x, cy)).collect(),
                        });
                    }
                }
            }
        }
    }

    matches
}
