use serde::Serialize;

use super::verdict::{ExactVerdict, OrderedVerdict, SetVerdict, VerdictSet};
use crate::entity::{CategoryTag, Entity};

/// Scores `guessed` against `target`.
///
/// # Examples
///
/// ```
/// use dexdle_domain::comparison::{OrderedVerdict, SetVerdict, compare};
/// use dexdle_domain::entity::{CategoryTag, Entity};
///
/// let pikachu = Entity::builder(25, "Pikachu")
///     .category(CategoryTag::Electric)
///     .size(0.4)
///     .mass(6.0)
///     .depth(1)
///     .build()
///     .unwrap();
/// let raichu = Entity::builder(26, "Raichu")
///     .category(CategoryTag::Electric)
///     .size(0.8)
///     .mass(21.0)
///     .depth(1)
///     .build()
///     .unwrap();
///
/// let verdicts = compare(&raichu, &pikachu);
/// assert!(!verdicts.name_match);
/// assert_eq!(verdicts.rank, OrderedVerdict::Lower);
/// assert_eq!(verdicts.categories, SetVerdict::Match);
/// ```
#[must_use]
pub fn compare(guessed: &Entity, target: &Entity) -> VerdictSet {
    VerdictSet {
        name_match: guessed.name() == target.name(),
        rank: OrderedVerdict::compare(&guessed.rank(), &target.rank()),
        categories: SetVerdict::compare(
            &guessed.categories().as_set(),
            &target.categories().as_set(),
        ),
        size: OrderedVerdict::compare(&guessed.size(), &target.size()),
        mass: OrderedVerdict::compare(&guessed.mass(), &target.mass()),
        generation: ExactVerdict::compare(&guessed.generation(), &target.generation()),
        depth: ExactVerdict::compare(&guessed.depth(), &target.depth()),
    }
}

// =============================================================================
// GuessFeedback
// =============================================================================

/// The guessed entity's values shown next to their verdicts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessFeedback {
    pub name: String,
    pub rank: u32,
    pub categories: Vec<CategoryTag>,
    pub size: f64,
    pub mass: f64,
    pub generation: u8,
    pub depth: u32,
    pub verdicts: VerdictSet,
}

impl GuessFeedback {
    #[must_use]
    pub fn new(guessed: &Entity, target: &Entity) -> Self {
        Self {
            name: guessed.name().to_string(),
            rank: guessed.rank().value(),
            categories: guessed.categories().iter().collect(),
            size: guessed.size().value(),
            mass: guessed.mass().value(),
            generation: guessed.generation().value(),
            depth: guessed.depth(),
            verdicts: compare(guessed, target),
        }
    }

    #[must_use]
    pub const fn is_exact_hit(&self) -> bool {
        self.verdicts.is_exact_hit()
    }
}
