//! JSON catalog snapshot loading.
//!
//! A snapshot is a JSON array of records:
//!
//! ```json
//! [
//!   {
//!     "rank": 25,
//!     "name": "ピカチュウ",
//!     "secondary_name": "pikachu",
//!     "categories": ["electric"],
//!     "size": 0.4,
//!     "mass": 6.0,
//!     "evolution_chain": {
//!       "species": "pichu",
//!       "evolves_to": [{ "species": "pikachu", "evolves_to": [{ "species": "raichu" }] }]
//!     }
//!   }
//! ]
//! ```
//!
//! `generation` is derived from the rank when absent. `depth` is taken from
//! the record when present, otherwise computed from `evolution_chain`, and
//! defaults to zero for a creature without one. A chain is always validated,
//! even when an explicit depth overrides it.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use dexdle_domain::catalog::{EvolutionNode, chain_depth};
use dexdle_domain::entity::{CategoryTag, Entity};

use super::memory::InMemoryCatalog;
use crate::errors::CatalogLoadError;

// =============================================================================
// Snapshot Record
// =============================================================================

#[derive(Debug, Deserialize)]
struct SnapshotRecord {
    rank: u32,
    name: String,
    #[serde(default)]
    secondary_name: Option<String>,
    categories: Vec<String>,
    size: f64,
    mass: f64,
    #[serde(default)]
    generation: Option<u8>,
    #[serde(default)]
    depth: Option<u32>,
    #[serde(default)]
    evolution_chain: Option<EvolutionNode>,
}

impl SnapshotRecord {
    fn into_entity(self) -> Result<Entity, CatalogLoadError> {
        let rank = self.rank;
        let invalid = |source| CatalogLoadError::InvalidRecord { rank, source };

        let categories = self
            .categories
            .iter()
            .map(|raw| CategoryTag::from_str(raw))
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;

        let computed_depth = self
            .evolution_chain
            .as_ref()
            .map(chain_depth)
            .transpose()
            .map_err(|source| CatalogLoadError::InvalidChain { rank, source })?;

        let mut builder = Entity::builder(rank, self.name)
            .categories(categories)
            .size(self.size)
            .mass(self.mass)
            .depth(self.depth.or(computed_depth).unwrap_or(0));
        if let Some(secondary_name) = self.secondary_name {
            builder = builder.secondary_name(secondary_name);
        }
        if let Some(generation) = self.generation {
            builder = builder.generation(generation);
        }
        builder.build().map_err(invalid)
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Parses snapshot JSON into an indexed catalog.
///
/// # Errors
///
/// Returns [`CatalogLoadError`] on malformed JSON, on the first invalid
/// record, or on a duplicated rank. Nothing is partially loaded.
pub fn parse_snapshot(json: &str) -> Result<InMemoryCatalog, CatalogLoadError> {
    let records: Vec<SnapshotRecord> =
        serde_json::from_str(json).map_err(|error| CatalogLoadError::Malformed {
            message: error.to_string(),
        })?;
    let entities = records
        .into_iter()
        .map(SnapshotRecord::into_entity)
        .collect::<Result<Vec<_>, _>>()?;
    InMemoryCatalog::new(entities)
}

/// Reads and parses the snapshot at `path`.
///
/// # Errors
///
/// Returns [`CatalogLoadError::Io`] if the file cannot be read, otherwise as
/// [`parse_snapshot`].
pub fn load_snapshot(path: &Path) -> Result<InMemoryCatalog, CatalogLoadError> {
    let json = fs::read_to_string(path).map_err(|error| CatalogLoadError::Io {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    let catalog = parse_snapshot(&json).inspect_err(|error| {
        tracing::error!(path = %path.display(), error = %error, "catalog snapshot rejected");
    })?;

    tracing::info!(
        path = %path.display(),
        entities = catalog.len(),
        "catalog snapshot loaded"
    );
    Ok(catalog)
}
