//! Error types for catalog loading.

use std::path::PathBuf;

use dexdle_domain::catalog::ChainError;
use dexdle_domain::common::ValidationError;
use thiserror::Error;

/// Why a catalog snapshot could not be turned into an in-memory catalog.
///
/// Record-level failures carry the rank of the offending record so a bad
/// snapshot can be fixed without bisecting it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog snapshot {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("catalog snapshot is not valid JSON: {message}")]
    Malformed { message: String },

    #[error("catalog record {rank} is invalid: {source}")]
    InvalidRecord {
        rank: u32,
        #[source]
        source: ValidationError,
    },

    #[error("catalog record {rank} has an invalid evolution chain: {source}")]
    InvalidChain {
        rank: u32,
        #[source]
        source: ChainError,
    },

    #[error("rank {rank} appears more than once in the catalog")]
    DuplicateRank { rank: u32 },
}

impl CatalogLoadError {
    /// The rank of the record that caused the failure, if any.
    #[must_use]
    pub const fn rank(&self) -> Option<u32> {
        match self {
            Self::InvalidRecord { rank, .. }
            | Self::InvalidChain { rank, .. }
            | Self::DuplicateRank { rank } => Some(*rank),
            Self::Io { .. } | Self::Malformed { .. } => None,
        }
    }
}
