//! The catalog entity record and its builder.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CategoryTag, CategoryTags, EntityName, Measurement, Rank};
use crate::catalog::generation_for_rank;
use crate::common::ValidationError;

// =============================================================================
// Generation
// =============================================================================

/// Release generation of an entity, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Generation(u8);

impl Generation {
    pub const FIRST: Self = Self(1);

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::out_of_range("generation", 1, u8::MAX, value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Generation {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Generation> for u8 {
    fn from(generation: Generation) -> Self {
        generation.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Entity
// =============================================================================

/// An immutable catalog record.
///
/// # Examples
///
/// ```
/// use dexdle_domain::entity::{CategoryTag, Entity};
///
/// let pikachu = Entity::builder(25, "Pikachu")
///     .category(CategoryTag::Electric)
///     .size(0.4)
///     .mass(6.0)
///     .depth(1)
///     .build()
///     .unwrap();
///
/// assert_eq!(pikachu.rank().value(), 25);
/// assert_eq!(pikachu.generation().value(), 1);
/// assert_eq!(pikachu.to_string(), "No.0025 Pikachu");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    rank: Rank,
    name: EntityName,
    secondary_name: Option<EntityName>,
    categories: CategoryTags,
    size: Measurement,
    mass: Measurement,
    generation: Generation,
    depth: u32,
}

impl Entity {
    /// Starts building an entity with the given rank and primary name.
    #[must_use]
    pub fn builder(rank: u32, name: impl Into<String>) -> EntityBuilder {
        EntityBuilder::new(rank, name)
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn name(&self) -> &EntityName {
        &self.name
    }

    #[must_use]
    pub const fn secondary_name(&self) -> Option<&EntityName> {
        self.secondary_name.as_ref()
    }

    #[must_use]
    pub const fn categories(&self) -> &CategoryTags {
        &self.categories
    }

    #[must_use]
    pub const fn size(&self) -> Measurement {
        self.size
    }

    #[must_use]
    pub const fn mass(&self) -> Measurement {
        self.mass
    }

    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Length of the longest evolution path in this entity's chain.
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Returns true if `candidate` names this entity.
    ///
    /// The primary name must match exactly; the secondary name matches
    /// case-insensitively.
    #[must_use]
    pub fn answers_to(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        self.name.as_str() == candidate
            || self
                .secondary_name
                .as_ref()
                .is_some_and(|secondary| secondary.matches_ignore_case(candidate))
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}", self.rank, self.name)
    }
}

// =============================================================================
// EntityBuilder
// =============================================================================

/// Collects raw attribute values and validates them all at [`build`](Self::build).
///
/// When no generation is given it is derived from the rank.
#[derive(Debug, Clone)]
pub struct EntityBuilder {
    rank: u32,
    name: String,
    secondary_name: Option<String>,
    categories: Vec<CategoryTag>,
    size: f64,
    mass: f64,
    generation: Option<u8>,
    depth: u32,
}

impl EntityBuilder {
    #[must_use]
    pub fn new(rank: u32, name: impl Into<String>) -> Self {
        Self {
            rank,
            name: name.into(),
            secondary_name: None,
            categories: Vec::new(),
            size: 0.0,
            mass: 0.0,
            generation: None,
            depth: 0,
        }
    }

    #[must_use]
    pub fn secondary_name(mut self, name: impl Into<String>) -> Self {
        self.secondary_name = Some(name.into());
        self
    }

    /// Appends one category tag.
    #[must_use]
    pub fn category(mut self, tag: CategoryTag) -> Self {
        self.categories.push(tag);
        self
    }

    /// Replaces all category tags.
    #[must_use]
    pub fn categories(mut self, tags: impl IntoIterator<Item = CategoryTag>) -> Self {
        self.categories = tags.into_iter().collect();
        self
    }

    #[must_use]
    pub const fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    #[must_use]
    pub const fn generation(mut self, generation: u8) -> Self {
        self.generation = Some(generation);
        self
    }

    #[must_use]
    pub const fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Validates every attribute and produces the entity.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn build(self) -> Result<Entity, ValidationError> {
        let rank = Rank::new(self.rank)?;
        let name = EntityName::new(self.name)?;
        let secondary_name = self.secondary_name.map(EntityName::new).transpose()?;
        let categories = CategoryTags::try_from(self.categories)?;
        let size = Measurement::new("size", self.size)?;
        let mass = Measurement::new("mass", self.mass)?;
        let generation = match self.generation {
            Some(value) => Generation::new(value)?,
            None => generation_for_rank(rank),
        };

        Ok(Entity {
            rank,
            name,
            secondary_name,
            categories,
            size,
            mass,
            generation,
            depth: self.depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn bulbasaur() -> Entity {
        Entity::builder(1, "Bulbasaur")
            .secondary_name("bulbasaur")
            .categories([CategoryTag::Grass, CategoryTag::Poison])
            .size(0.7)
            .mass(6.9)
            .generation(1)
            .depth(2)
            .build()
            .unwrap()
    }

    #[rstest]
    fn builder_keeps_every_attribute(bulbasaur: Entity) {
        assert_eq!(bulbasaur.rank().value(), 1);
        assert_eq!(bulbasaur.name().as_str(), "Bulbasaur");
        assert_eq!(bulbasaur.secondary_name().unwrap().as_str(), "bulbasaur");
        assert_eq!(bulbasaur.categories().primary(), CategoryTag::Grass);
        assert_eq!(bulbasaur.categories().secondary(), Some(CategoryTag::Poison));
        assert!((bulbasaur.size().value() - 0.7).abs() < f64::EPSILON);
        assert!((bulbasaur.mass().value() - 6.9).abs() < f64::EPSILON);
        assert_eq!(bulbasaur.generation().value(), 1);
        assert_eq!(bulbasaur.depth(), 2);
    }

    #[rstest]
    #[case(152, 2)]
    #[case(387, 4)]
    #[case(1000, 9)]
    fn missing_generation_is_derived_from_rank(#[case] rank: u32, #[case] expected: u8) {
        let entity = Entity::builder(rank, "Someone")
            .category(CategoryTag::Normal)
            .build()
            .unwrap();
        assert_eq!(entity.generation().value(), expected);
    }

    #[rstest]
    fn missing_categories_are_rejected() {
        let error = Entity::builder(1, "Nobody").build().unwrap_err();
        assert_eq!(error.field(), "categories");
    }

    #[rstest]
    fn invalid_mass_names_the_field() {
        let error = Entity::builder(1, "Heavy")
            .category(CategoryTag::Rock)
            .mass(f64::NAN)
            .build()
            .unwrap_err();
        assert_eq!(error.field(), "mass");
    }

    #[rstest]
    fn zero_generation_is_rejected() {
        let result = Entity::builder(1, "Ancient")
            .category(CategoryTag::Rock)
            .generation(0)
            .build();
        assert!(result.is_err());
    }

    #[rstest]
    fn answers_to_primary_exactly(bulbasaur: Entity) {
        assert!(bulbasaur.answers_to("Bulbasaur"));
        assert!(bulbasaur.answers_to(" Bulbasaur "));
    }

    #[rstest]
    fn answers_to_secondary_ignoring_case(bulbasaur: Entity) {
        assert!(bulbasaur.answers_to("BULBASAUR"));
        assert!(!bulbasaur.answers_to("Ivysaur"));
    }

    #[rstest]
    fn display_uses_rank_and_name(bulbasaur: Entity) {
        assert_eq!(bulbasaur.to_string(), "No.0001 Bulbasaur");
    }
}
