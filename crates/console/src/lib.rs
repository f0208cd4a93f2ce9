//! Console driver for dexdle
//!
//! A boundary layer only: it owns the player identifier, turns input lines
//! into provider calls and renders the results. All game rules live in the
//! workflow and domain crates.

pub mod cli;
pub mod console;
pub mod render;
pub mod starter;
