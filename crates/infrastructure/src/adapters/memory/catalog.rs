use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use dexdle_domain::entity::{Entity, Rank};
use dexdle_workflow::ports::{Catalog, RepositoryResult};

use crate::errors::CatalogLoadError;

// =============================================================================
// Catalog Index
// =============================================================================

#[derive(Debug, Default)]
struct CatalogIndex {
    /// Sorted by rank.
    entities: Vec<Entity>,
    by_rank: HashMap<Rank, usize>,
    by_name: HashMap<String, usize>,
    /// Keys are lowercased.
    by_secondary_name: HashMap<String, usize>,
}

impl CatalogIndex {
    fn build(mut entities: Vec<Entity>) -> Result<Self, CatalogLoadError> {
        entities.sort_by_key(Entity::rank);

        let mut by_rank = HashMap::with_capacity(entities.len());
        let mut by_name = HashMap::with_capacity(entities.len());
        let mut by_secondary_name = HashMap::with_capacity(entities.len());

        for (index, entity) in entities.iter().enumerate() {
            if by_rank.insert(entity.rank(), index).is_some() {
                return Err(CatalogLoadError::DuplicateRank {
                    rank: entity.rank().value(),
                });
            }
            // The lowest rank owns a shared name.
            if let Entry::Vacant(slot) = by_name.entry(entity.name().as_str().to_string()) {
                slot.insert(index);
            }
            if let Some(secondary) = entity.secondary_name() {
                by_secondary_name
                    .entry(secondary.as_str().to_lowercase())
                    .or_insert(index);
            }
        }

        Ok(Self {
            entities,
            by_rank,
            by_name,
            by_secondary_name,
        })
    }

    fn resolve(&self, name: &str) -> Option<&Entity> {
        let name = name.trim();
        self.by_name
            .get(name)
            .or_else(|| self.by_secondary_name.get(&name.to_lowercase()))
            .and_then(|index| self.entities.get(*index))
    }
}

// =============================================================================
// InMemoryCatalog
// =============================================================================

/// Immutable catalog held entirely in memory.
///
/// Built once at startup; clones share the same index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    index: Arc<CatalogIndex>,
}

impl InMemoryCatalog {
    /// Indexes the entities by rank, primary name and secondary name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::DuplicateRank`] if two entities share a rank.
    pub fn new(entities: Vec<Entity>) -> Result<Self, CatalogLoadError> {
        Ok(Self {
            index: Arc::new(CatalogIndex::build(entities)?),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.entities.is_empty()
    }

    /// All entities in rank order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.index.entities.iter()
    }
}

impl Catalog for InMemoryCatalog {
    fn ranks(&self) -> RepositoryResult<Vec<Rank>> {
        Ok(self.index.entities.iter().map(Entity::rank).collect())
    }

    fn find_by_rank(&self, rank: Rank) -> RepositoryResult<Option<Entity>> {
        Ok(self
            .index
            .by_rank
            .get(&rank)
            .and_then(|index| self.index.entities.get(*index))
            .cloned())
    }

    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Entity>> {
        Ok(self.index.resolve(name).cloned())
    }

    fn count(&self) -> RepositoryResult<usize> {
        Ok(self.len())
    }

    fn names(&self) -> RepositoryResult<Vec<String>> {
        Ok(self
            .index
            .entities
            .iter()
            .map(|entity| entity.name().as_str().to_string())
            .collect())
    }
}
