//! TUI Match-3.
//!
//! A terminal tile-matching puzzle: swap adjacent tiles to line up runs of
//! three or more, earn striped tiles and color bombs from longer runs, and
//! chase score targets through chained cascades. A brute-force bot can play
//! any board by simulating every adjacent swap to completion.
//!
//! The [`core`] module is pure and seed-deterministic; [`term`] and [`input`]
//! carry the crossterm driver.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
