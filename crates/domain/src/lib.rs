//! Domain layer for dexdle
//!
//! This crate contains the catalog entity model, the guess comparator, the
//! session state machine, player statistics and settings. Everything here is
//! a pure function or an immutable value; persistence and randomness live
//! behind the ports of `dexdle-workflow`.

pub mod catalog;
pub mod common;
pub mod comparison;
pub mod entity;
pub mod session;
pub mod settings;
pub mod stats;
