//! Workflow layer for dexdle
//!
//! This crate defines the game's use cases as plain functions over abstract
//! ports (traits). It contains no concrete storage or randomness; those are
//! supplied by `dexdle-infrastructure`.

pub mod errors;
pub mod ports;
pub mod workflows;
