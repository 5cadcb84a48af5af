//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use std::fmt;

/// Board edge length (the board is square).
pub const GRID_SIZE: u8 = 8;

/// Number of plain tile colors in play.
pub const COLOR_COUNT: u8 = 5;

/// Minimum run length that counts as a match.
pub const MIN_RUN: u8 = 3;

/// Score target for level 1.
pub const LEVEL_BASE_TARGET: u32 = 30;

/// Score target increase per level.
pub const LEVEL_TARGET_INCREMENT: u32 = 20;

/// Cascade iterations before the resolver gives up (invariant violation).
pub const CASCADE_CAP: u32 = 1000;

/// Board generation attempts before giving up (invariant violation).
pub const GENERATE_CAP: u32 = 10_000;

/// Main loop tick (milliseconds).
pub const TICK_MS: u64 = 16;

/// Delay between autoplay bot moves (milliseconds).
pub const BOT_MOVE_DELAY_MS: u64 = 200;

/// Plain tile colors (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl TileColor {
    pub const ALL: [TileColor; COLOR_COUNT as usize] = [
        TileColor::Red,
        TileColor::Blue,
        TileColor::Green,
        TileColor::Yellow,
        TileColor::Purple,
    ];

    /// Stable index into color-keyed tables.
    pub fn index(self) -> usize {
        match self {
            TileColor::Red => 0,
            TileColor::Blue => 1,
            TileColor::Green => 2,
            TileColor::Yellow => 3,
            TileColor::Purple => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Single-letter label used on the board display.
    pub fn letter(self) -> char {
        match self {
            TileColor::Red => 'A',
            TileColor::Blue => 'B',
            TileColor::Green => 'C',
            TileColor::Yellow => 'D',
            TileColor::Purple => 'E',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TileColor::Red => "red",
            TileColor::Blue => "blue",
            TileColor::Green => "green",
            TileColor::Yellow => "yellow",
            TileColor::Purple => "purple",
        }
    }
}

/// Power tile kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    /// Clears its whole row when matched.
    StripedH,
    /// Clears its whole column when matched.
    StripedV,
    /// Clears every tile of a chosen color when activated directly.
    ColorBomb,
}

impl SpecialKind {
    /// Marker glyph appended to the tile letter on the board display.
    pub fn marker(self) -> char {
        match self {
            SpecialKind::StripedH => '-',
            SpecialKind::StripedV => '|',
            SpecialKind::ColorBomb => '*',
        }
    }
}

/// A tile on the board.
///
/// Special tiles keep the base color of the run that created them; a color
/// bomb's base color only matters for bomb-blast color matching, never for
/// ordinary run detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Plain(TileColor),
    Special(TileColor, SpecialKind),
}

impl Tile {
    pub fn base_color(self) -> TileColor {
        match self {
            Tile::Plain(color) => color,
            Tile::Special(color, _) => color,
        }
    }

    pub fn special_kind(self) -> Option<SpecialKind> {
        match self {
            Tile::Plain(_) => None,
            Tile::Special(_, kind) => Some(kind),
        }
    }

    pub fn is_color_bomb(self) -> bool {
        matches!(self, Tile::Special(_, SpecialKind::ColorBomb))
    }
}

/// Cell on the board (None = pending refill during a cascade step)
pub type Cell = Option<Tile>;

/// Grid position, 0 <= x,y < board size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Session game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Score targets only.
    Endless,
    /// Additionally clear a quota of one goal color per level.
    Objective,
}

/// Game actions (driver input)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    Select,
    BotMove,
    ToggleAutoplay,
    Restart,
}

/// Core error taxonomy.
///
/// Empty match sets and absent moves are normal outcomes, not errors; only
/// caller mistakes and internal invariant violations surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Position outside the grid.
    OutOfBounds(Pos),
    /// Swap requested for non-adjacent positions.
    InvalidSwap(Pos, Pos),
    /// Cascade failed to stabilize within [`CASCADE_CAP`] iterations.
    UnresolvableCascade,
    /// Board generation exhausted [`GENERATE_CAP`] attempts.
    GenerationFailed,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds(pos) => write!(f, "position {pos} is outside the board"),
            GameError::InvalidSwap(a, b) => {
                write!(f, "positions {a} and {b} are not adjacent")
            }
            GameError::UnresolvableCascade => {
                write!(f, "cascade did not stabilize within {CASCADE_CAP} iterations")
            }
            GameError::GenerationFailed => {
                write!(f, "no playable board found in {GENERATE_CAP} attempts")
            }
        }
    }
}

impl std::error::Error for GameError {}
