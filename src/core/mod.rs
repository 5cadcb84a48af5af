//! Core module - pure game rules with no I/O dependencies
//!
//! Everything here is deterministic given a seed and synchronous: match
//! detection, cascade resolution, power-tile rules, move simulation, board
//! generation, and the session progression layer. Simulation always works on
//! deep clones, so hypothetical moves never touch live state.
//!
//! - [`board`]: N×N grid storage, gravity, and refill
//! - [`rng`]: seedable LCG threaded through every random choice
//! - [`matching`]: run scanner producing per-cell lengths and distinct runs
//! - [`rules`]: pure power-tile creation/activation mappings and score rates
//! - [`cascade`]: the match → clear → drop → refill loop
//! - [`bot`]: adjacency, stuck check, swap simulation, best-move search
//! - [`generate`]: match-free, solvable board construction
//! - [`session`]: score/level/objective progression around the engine

pub mod board;
pub mod bot;
pub mod cascade;
pub mod generate;
pub mod matching;
pub mod rng;
pub mod rules;
pub mod session;

// Re-export commonly used items
pub use board::Board;
pub use bot::{
    activate_color_bomb, bomb_blast, choose_best_move, has_any_possible_move, is_adjacent,
    simulate_swap,
};
pub use cascade::{resolve_cascade, resolve_step, CascadeResult, ColorCounts};
pub use generate::new_board;
pub use matching::{find_matches, MatchSet, Orientation, Run};
pub use rng::SimpleRng;
pub use session::{Objective, Session, SwapOutcome};
