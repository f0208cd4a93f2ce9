//! Normalisation helpers applied when a catalog snapshot is ingested.

mod evolution;
mod generation;

pub use evolution::{ChainError, EvolutionNode, MAX_CHAIN_DEPTH, chain_depth};
pub use generation::generation_for_rank;
