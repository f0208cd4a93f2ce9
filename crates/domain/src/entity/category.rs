//! Category tags and the one-or-two tag set carried by every entity.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::ValidationError;

// =============================================================================
// CategoryTag
// =============================================================================

/// The fixed set of creature types an entity can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTag {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl CategoryTag {
    /// Every tag, in canonical order.
    pub const ALL: [Self; 18] = [
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Grass,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];

    /// Lowercase identifier used in catalog snapshots.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Electric => "electric",
            Self::Grass => "grass",
            Self::Ice => "ice",
            Self::Fighting => "fighting",
            Self::Poison => "poison",
            Self::Ground => "ground",
            Self::Flying => "flying",
            Self::Psychic => "psychic",
            Self::Bug => "bug",
            Self::Rock => "rock",
            Self::Ghost => "ghost",
            Self::Dragon => "dragon",
            Self::Dark => "dark",
            Self::Steel => "steel",
            Self::Fairy => "fairy",
        }
    }

    /// Capitalised name used for display.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Electric => "Electric",
            Self::Grass => "Grass",
            Self::Ice => "Ice",
            Self::Fighting => "Fighting",
            Self::Poison => "Poison",
            Self::Ground => "Ground",
            Self::Flying => "Flying",
            Self::Psychic => "Psychic",
            Self::Bug => "Bug",
            Self::Rock => "Rock",
            Self::Ghost => "Ghost",
            Self::Dragon => "Dragon",
            Self::Dark => "Dark",
            Self::Steel => "Steel",
            Self::Fairy => "Fairy",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.display_name())
    }
}

impl FromStr for CategoryTag {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == normalized)
            .ok_or_else(|| ValidationError::invalid_format("category", "a known creature type"))
    }
}

// =============================================================================
// CategoryTags
// =============================================================================

/// The ordered one-or-two tags of an entity.
///
/// A second tag equal to the first collapses to a single tag, so the set view
/// never holds duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<CategoryTag>", into = "Vec<CategoryTag>")]
pub struct CategoryTags {
    primary: CategoryTag,
    secondary: Option<CategoryTag>,
}

impl CategoryTags {
    #[must_use]
    pub fn new(primary: CategoryTag, secondary: Option<CategoryTag>) -> Self {
        Self {
            primary,
            secondary: secondary.filter(|tag| *tag != primary),
        }
    }

    #[must_use]
    pub const fn single(primary: CategoryTag) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    #[must_use]
    pub const fn primary(&self) -> CategoryTag {
        self.primary
    }

    #[must_use]
    pub const fn secondary(&self) -> Option<CategoryTag> {
        self.secondary
    }

    #[must_use]
    pub fn contains(&self, tag: CategoryTag) -> bool {
        self.primary == tag || self.secondary == Some(tag)
    }

    /// Tags in their stored order.
    pub fn iter(&self) -> impl Iterator<Item = CategoryTag> + '_ {
        std::iter::once(self.primary).chain(self.secondary)
    }

    /// Unordered view used by the comparator.
    #[must_use]
    pub fn as_set(&self) -> BTreeSet<CategoryTag> {
        self.iter().collect()
    }
}

impl TryFrom<Vec<CategoryTag>> for CategoryTags {
    type Error = ValidationError;

    fn try_from(tags: Vec<CategoryTag>) -> Result<Self, Self::Error> {
        match tags.as_slice() {
            [] => Err(ValidationError::empty_value("categories")),
            [primary] => Ok(Self::single(*primary)),
            [primary, secondary] => Ok(Self::new(*primary, Some(*secondary))),
            _ => Err(ValidationError::constraint_violation(
                "categories",
                "at most two tags",
            )),
        }
    }
}

impl From<CategoryTags> for Vec<CategoryTag> {
    fn from(tags: CategoryTags) -> Self {
        tags.iter().collect()
    }
}

impl fmt::Display for CategoryTags {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(formatter, "{}/{}", self.primary, secondary),
            None => write!(formatter, "{}", self.primary),
        }
    }
}
