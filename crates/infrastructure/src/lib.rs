//! Infrastructure layer for dexdle
//!
//! This crate provides concrete implementations of the ports defined in
//! `dexdle-workflow`: in-memory stores, random sources and the JSON catalog
//! snapshot loader. It also owns environment configuration and logging setup.

pub mod adapters;
pub mod config;
pub mod errors;
pub mod telemetry;
