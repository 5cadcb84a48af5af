//! GameView: maps a `Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Session;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameMode, Pos, SpecialKind, Tile, TileColor};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Driver-side cursor/selection state the view needs to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub cursor: Pos,
    pub selected: Option<Pos>,
    pub autoplay: bool,
}

/// A lightweight terminal renderer for the match-3 board.
pub struct GameView {
    /// Board cell width in terminal columns (letter + special marker).
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio and leaves
        // room for the power-tile marker next to the color letter.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current session into a framebuffer.
    pub fn render(&self, session: &Session, ui: UiState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        self.draw_hud(&mut fb, session, ui);

        let n = session.board().size() as u16;
        let board_px_w = n * self.cell_w;
        let board_px_h = n * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = 3;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..n {
            for x in 0..n {
                let pos = Pos::new(x as u8, y as u8);
                if let Some(tile) = session.board().tile(pos) {
                    let highlighted = ui.cursor == pos;
                    let selected = ui.selected == Some(pos);
                    self.draw_tile(&mut fb, start_x + 1, start_y + 1, x, y, tile, highlighted, selected);
                }
            }
        }

        self.draw_footer(&mut fb, session, ui, viewport);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, session: &Session, ui: UiState) {
        let bold = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let line = format!(
            "Score: {}   Level: {}   Target: {}   High: {}",
            session.score(),
            session.level(),
            session.target_score(),
            session.high_score()
        );
        fb.print_str(1, 0, &line, bold);

        let mode_line = match (session.mode(), session.objective()) {
            (GameMode::Objective, Some(objective)) => format!(
                "Objective: clear {} {} tiles ({}/{})",
                objective.target,
                objective.color.as_str(),
                objective.progress,
                objective.target
            ),
            _ => String::from("Endless mode"),
        };
        let mode_style = match session.objective() {
            Some(objective) => CellStyle {
                fg: tile_rgb(objective.color),
                ..CellStyle::default()
            },
            None => CellStyle::default(),
        };
        fb.print_str(1, 1, &mode_line, mode_style);

        if ui.autoplay {
            fb.print_str(1, 2, "[bot autoplay]", bold);
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, session: &Session, _ui: UiState, viewport: Viewport) {
        let y = viewport.height.saturating_sub(1);
        if session.game_over() {
            let style = CellStyle {
                fg: Rgb::new(255, 120, 80),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            };
            let line = format!(
                "No more possible moves! Final score: {}  (r: restart, q: quit)",
                session.score()
            );
            fb.print_str(1, y, &line, style);
        } else {
            let help = "arrows: move  enter/space: select  b: bot move  a: autoplay  r: restart  q: quit";
            fb.print_str(1, y, help, CellStyle::default());
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        tile: Tile,
        highlighted: bool,
        selected: bool,
    ) {
        let mut style = tile_style(tile);
        if selected {
            style.bg = Rgb::new(255, 165, 0);
            style.fg = Rgb::new(0, 0, 0);
            style.bold = true;
        } else if highlighted {
            style.bg = Rgb::new(255, 255, 255);
            style.fg = Rgb::new(0, 0, 0);
            style.bold = true;
        }

        let px = origin_x + x * self.cell_w;
        let py = origin_y + y * self.cell_h;
        let label = tile_label(tile);
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let ch = if dy == 0 {
                    *label.get(dx as usize).unwrap_or(&' ')
                } else {
                    ' '
                };
                fb.set(px + dx, py + dy, style.into_cell(ch));
            }
        }
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        for dx in 0..w {
            let ch = if dx == 0 {
                '┌'
            } else if dx == w - 1 {
                '┐'
            } else {
                '─'
            };
            fb.set(x + dx, y, style.into_cell(ch));
            let ch = if dx == 0 {
                '└'
            } else if dx == w - 1 {
                '┘'
            } else {
                '─'
            };
            fb.set(x + dx, y + h - 1, style.into_cell(ch));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, style.into_cell('│'));
            fb.set(x + w - 1, y + dy, style.into_cell('│'));
        }
    }
}

/// Display colors for plain tiles.
fn tile_rgb(color: TileColor) -> Rgb {
    match color {
        TileColor::Red => Rgb::new(220, 60, 60),
        TileColor::Blue => Rgb::new(70, 110, 240),
        TileColor::Green => Rgb::new(60, 180, 90),
        TileColor::Yellow => Rgb::new(220, 200, 50),
        TileColor::Purple => Rgb::new(170, 80, 220),
    }
}

fn tile_style(tile: Tile) -> CellStyle {
    match tile {
        Tile::Plain(color) => CellStyle {
            fg: Rgb::new(10, 10, 10),
            bg: tile_rgb(color),
            bold: false,
        },
        Tile::Special(_, SpecialKind::StripedH) => CellStyle {
            fg: Rgb::new(10, 10, 10),
            bg: Rgb::new(150, 200, 255),
            bold: true,
        },
        Tile::Special(_, SpecialKind::StripedV) => CellStyle {
            fg: Rgb::new(10, 10, 10),
            bg: Rgb::new(150, 255, 180),
            bold: true,
        },
        Tile::Special(_, SpecialKind::ColorBomb) => CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(20, 20, 20),
            bold: true,
        },
    }
}

/// Two-character cell label: color letter plus power marker.
fn tile_label(tile: Tile) -> [char; 2] {
    match tile {
        Tile::Plain(color) => [color.letter(), ' '],
        Tile::Special(_, SpecialKind::ColorBomb) => ['*', ' '],
        Tile::Special(color, kind) => [color.letter(), kind.marker()],
    }
}
