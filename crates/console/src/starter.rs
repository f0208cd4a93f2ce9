//! The catalog used when no snapshot path is configured.

use std::path::Path;

use dexdle_infrastructure::adapters::{InMemoryCatalog, load_snapshot, parse_snapshot};
use dexdle_infrastructure::errors::CatalogLoadError;

const STARTER_SNAPSHOT: &str = include_str!("../assets/starter_catalog.json");

/// A small first-and-second generation catalog bundled with the binary.
///
/// # Errors
///
/// Only if the bundled snapshot itself is invalid.
pub fn starter_catalog() -> Result<InMemoryCatalog, CatalogLoadError> {
    parse_snapshot(STARTER_SNAPSHOT)
}

/// Loads the snapshot at `path`, or the starter catalog without one.
///
/// # Errors
///
/// Returns [`CatalogLoadError`] if the snapshot cannot be read or parsed.
pub fn load_catalog(path: Option<&Path>) -> Result<InMemoryCatalog, CatalogLoadError> {
    match path {
        Some(path) => load_snapshot(path),
        None => {
            tracing::debug!("no catalog path configured, using the starter catalog");
            starter_catalog()
        }
    }
}
