//! Board module - manages the game grid
//!
//! The board is a square N×N grid of colored tiles stored as a flat array
//! for cache locality. Coordinates: (x, y) with x left to right and y top to
//! bottom. Cells are `Option<Tile>`; `None` marks a cell awaiting refill and
//! never survives a completed public operation.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::{Cell, GameError, Pos, Tile, TileColor, COLOR_COUNT};

/// Largest supported board edge (bounds the gravity scratch buffer).
pub const MAX_BOARD: usize = 16;

/// The game board - size×size grid using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    color_count: u8,
    /// Flat array of cells, row-major order (y * size + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// `color_count` is clamped to `1..=COLOR_COUNT`. Panics if `size`
    /// exceeds [`MAX_BOARD`] or is zero (construction-time programmer error).
    pub fn new(size: u8, color_count: u8) -> Self {
        assert!(size > 0 && (size as usize) <= MAX_BOARD, "unsupported board size");
        let color_count = color_count.clamp(1, COLOR_COUNT);
        Self {
            size,
            color_count,
            cells: vec![None; (size as usize) * (size as usize)],
        }
    }

    /// Build a fully populated board from rows of tiles (fixture helper).
    ///
    /// Panics if the rows do not form a square of supported size.
    pub fn from_rows(color_count: u8, rows: &[Vec<Tile>]) -> Self {
        let size = rows.len();
        assert!(rows.iter().all(|row| row.len() == size), "rows must be square");
        let mut board = Self::new(size as u8, color_count);
        for (y, row) in rows.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                board.cells[y * size + x] = Some(tile);
            }
        }
        board
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.x >= self.size || pos.y >= self.size {
            return None;
        }
        Some((pos.y as usize) * (self.size as usize) + (pos.x as usize))
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn color_count(&self) -> u8 {
        self.color_count
    }

    /// Get cell at position
    /// Returns None if out of bounds
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Get the tile at position, flattening bounds and emptiness
    pub fn tile(&self, pos: Pos) -> Option<Tile> {
        self.get(pos).flatten()
    }

    /// Set cell at position
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Typed bounds check for public entry points
    pub fn check_bounds(&self, pos: Pos) -> Result<(), GameError> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds(pos))
        }
    }

    /// Check if position is a pending-refill cell (in bounds and empty)
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(None))
    }

    /// Swap two cells unconditionally (bounds-checked)
    pub fn swap(&mut self, a: Pos, b: Pos) -> Result<(), GameError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        self.swap_cells(a, b);
        Ok(())
    }

    /// Raw cell swap; callers guarantee both positions are in bounds.
    pub(crate) fn swap_cells(&mut self, a: Pos, b: Pos) {
        debug_assert!(self.in_bounds(a) && self.in_bounds(b));
        let ia = (a.y as usize) * (self.size as usize) + (a.x as usize);
        let ib = (b.y as usize) * (self.size as usize) + (b.x as usize);
        self.cells.swap(ia, ib);
    }

    /// Uniformly pick a plain tile from the colors in play
    pub fn random_plain(&self, rng: &mut SimpleRng) -> Tile {
        let index = rng.next_range(self.color_count as u32) as usize;
        // Index is < color_count <= COLOR_COUNT, so the lookup cannot miss.
        let color = TileColor::from_index(index).unwrap_or(TileColor::Red);
        Tile::Plain(color)
    }

    /// Gravity: compact each column's tiles downward (toward increasing y),
    /// preserving their relative order, leaving empties at the top.
    pub fn apply_gravity(&mut self) {
        let n = self.size as usize;
        for x in 0..n {
            let mut column: ArrayVec<Tile, MAX_BOARD> = ArrayVec::new();
            for y in 0..n {
                if let Some(tile) = self.cells[y * n + x] {
                    column.push(tile);
                }
            }
            let missing = n - column.len();
            for y in 0..n {
                self.cells[y * n + x] = if y < missing {
                    None
                } else {
                    Some(column[y - missing])
                };
            }
        }
    }

    /// Refill every empty cell with a freshly chosen plain tile
    pub fn refill(&mut self, rng: &mut SimpleRng) {
        for idx in 0..self.cells.len() {
            if self.cells[idx].is_none() {
                self.cells[idx] = Some(self.random_plain(rng));
            }
        }
    }

    /// Row-major iterator over all positions
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let n = self.size;
        (0..n).flat_map(move |y| (0..n).map(move |x| Pos::new(x, y)))
    }

    /// True if no cell is pending refill
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}
