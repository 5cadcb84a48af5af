//! Session module - progression state around the core engine
//!
//! The engine itself is stateless between calls; the session owns the live
//! board, the RNG, and everything the driver shows the player: score, level,
//! score targets, the optional color objective, and the high score. One
//! player or bot move runs Idle → Validating → {Reverted | Cascading} → Idle;
//! cascades are atomic once started.

use crate::core::board::Board;
use crate::core::bot::{activate_color_bomb, choose_best_move, has_any_possible_move, is_adjacent};
use crate::core::cascade::{resolve_cascade, CascadeResult};
use crate::core::generate::new_board;
use crate::core::matching::find_matches;
use crate::core::rng::SimpleRng;
use crate::types::{
    GameError, GameMode, Pos, TileColor, COLOR_COUNT, GRID_SIZE, LEVEL_BASE_TARGET,
    LEVEL_TARGET_INCREMENT,
};

/// Per-level color-clear objective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Objective {
    pub color: TileColor,
    pub target: u32,
    pub progress: u32,
}

impl Objective {
    pub fn is_complete(&self) -> bool {
        self.progress >= self.target
    }
}

/// Outcome of one requested move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The swap produced no match and was undone.
    Reverted,
    /// The swap matched and the cascade ran to completion.
    Resolved(CascadeResult),
    /// One of the selected tiles was a color bomb; it was activated with the
    /// other tile's base color.
    BombActivated(CascadeResult),
}

/// A running game: live board plus progression state
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    rng: SimpleRng,
    mode: GameMode,
    score: u32,
    level: u32,
    target_score: u32,
    high_score: u32,
    objective: Option<Objective>,
    game_over: bool,
}

impl Session {
    /// Start a new game with the default board size and color set.
    pub fn new(mode: GameMode, seed: u32) -> Result<Self, GameError> {
        let mut rng = SimpleRng::new(seed);
        let board = new_board(GRID_SIZE, COLOR_COUNT, &mut rng)?;
        let mut session = Self {
            board,
            rng,
            mode,
            score: 0,
            level: 1,
            target_score: LEVEL_BASE_TARGET,
            high_score: 0,
            objective: None,
            game_over: false,
        };
        if mode == GameMode::Objective {
            session.objective = Some(session.roll_objective());
        }
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn objective(&self) -> Option<Objective> {
        self.objective
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Reset everything except the high score, reseeding the RNG.
    pub fn restart(&mut self, seed: u32) -> Result<(), GameError> {
        self.rng = SimpleRng::new(seed);
        self.board = new_board(self.board.size(), self.board.color_count(), &mut self.rng)?;
        self.score = 0;
        self.level = 1;
        self.target_score = LEVEL_BASE_TARGET;
        self.game_over = false;
        self.objective = match self.mode {
            GameMode::Objective => Some(self.roll_objective()),
            GameMode::Endless => None,
        };
        Ok(())
    }

    /// Handle a player selecting two tiles.
    ///
    /// Selecting a color bomb together with any other tile activates the
    /// bomb with the other tile's base color (adjacency is not required for
    /// that gesture). Otherwise the positions must be adjacent; a swap that
    /// produces no match is undone and reported as `Reverted`.
    pub fn try_swap(&mut self, a: Pos, b: Pos) -> Result<SwapOutcome, GameError> {
        self.board.check_bounds(a)?;
        self.board.check_bounds(b)?;
        if self.game_over {
            return Ok(SwapOutcome::Reverted);
        }

        let tile_a = self.board.tile(a);
        let tile_b = self.board.tile(b);
        if let (Some(ta), Some(tb)) = (tile_a, tile_b) {
            if ta.is_color_bomb() {
                return self.fire_bomb(a, tb.base_color());
            }
            if tb.is_color_bomb() {
                return self.fire_bomb(b, ta.base_color());
            }
        }

        if !is_adjacent(a, b) {
            return Err(GameError::InvalidSwap(a, b));
        }

        self.board.swap_cells(a, b);
        if find_matches(&self.board).is_empty() {
            self.board.swap_cells(a, b);
            return Ok(SwapOutcome::Reverted);
        }

        let result = resolve_cascade(&mut self.board, &mut self.rng)?;
        self.apply_result(&result)?;
        Ok(SwapOutcome::Resolved(result))
    }

    /// Run one bot move: pick the best swap and execute it.
    ///
    /// Returns the executed swap, or `None` when the bot found no scoring
    /// move (which ends the game). Autoplay drivers call this once per tick
    /// so a stop request is honored between moves, never mid-cascade.
    pub fn bot_step(&mut self) -> Result<Option<(Pos, Pos)>, GameError> {
        if self.game_over {
            return Ok(None);
        }

        match choose_best_move(&self.board, &self.rng)? {
            Some((a, b)) => {
                self.board.swap_cells(a, b);
                if find_matches(&self.board).is_empty() {
                    self.board.swap_cells(a, b);
                    return Ok(None);
                }
                let result = resolve_cascade(&mut self.board, &mut self.rng)?;
                self.apply_result(&result)?;
                Ok(Some((a, b)))
            }
            None => {
                self.end_game();
                Ok(None)
            }
        }
    }

    fn fire_bomb(&mut self, bomb_pos: Pos, target: TileColor) -> Result<SwapOutcome, GameError> {
        let result = activate_color_bomb(&mut self.board, bomb_pos, target, &mut self.rng)?;
        self.apply_result(&result)?;
        Ok(SwapOutcome::BombActivated(result))
    }

    /// Fold one cascade result into progression state.
    fn apply_result(&mut self, result: &CascadeResult) -> Result<(), GameError> {
        self.score += result.score;
        if let Some(objective) = &mut self.objective {
            objective.progress += result.color_clears.get(objective.color);
        }

        // Objective completion outranks the score target.
        if self.objective.is_some_and(|o| o.is_complete()) {
            return self.level_up(true);
        }
        if self.score >= self.target_score {
            return self.level_up(false);
        }
        if !has_any_possible_move(&self.board) {
            self.end_game();
        }
        Ok(())
    }

    fn level_up(&mut self, reroll_objective: bool) -> Result<(), GameError> {
        self.level += 1;
        self.target_score += LEVEL_TARGET_INCREMENT;
        self.board = new_board(self.board.size(), self.board.color_count(), &mut self.rng)?;
        if reroll_objective && self.mode == GameMode::Objective {
            self.objective = Some(self.roll_objective());
        }
        Ok(())
    }

    fn end_game(&mut self) {
        self.game_over = true;
        self.high_score = self.high_score.max(self.score);
    }

    fn roll_objective(&mut self) -> Objective {
        let color_index = self.rng.next_range(self.board.color_count() as u32) as usize;
        let color = TileColor::from_index(color_index).unwrap_or(TileColor::Red);
        Objective {
            color,
            // 12..=20 base quota plus a per-level ramp.
            target: 12 + self.rng.next_range(9) + self.level * 2,
            progress: 0,
        }
    }
}
