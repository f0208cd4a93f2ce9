use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

// =============================================================================
// OrderedVerdict
// =============================================================================

/// Outcome for a field with a natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderedVerdict {
    Match,
    /// The target is greater than the guess.
    Higher,
    /// The target is less than the guess.
    Lower,
}

impl OrderedVerdict {
    #[must_use]
    pub fn compare<T: Ord + ?Sized>(guessed: &T, target: &T) -> Self {
        match guessed.cmp(target) {
            Ordering::Equal => Self::Match,
            Ordering::Less => Self::Higher,
            Ordering::Greater => Self::Lower,
        }
    }

    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }

    /// The verdict seen from the other side of the comparison.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::Match => Self::Match,
            Self::Higher => Self::Lower,
            Self::Lower => Self::Higher,
        }
    }
}

impl fmt::Display for OrderedVerdict {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Match => "match",
            Self::Higher => "higher",
            Self::Lower => "lower",
        };
        write!(formatter, "{text}")
    }
}

// =============================================================================
// SetVerdict
// =============================================================================

/// Outcome for the category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SetVerdict {
    Match,
    Partial,
    Mismatch,
}

impl SetVerdict {
    #[must_use]
    pub fn compare<T: Ord>(guessed: &BTreeSet<T>, target: &BTreeSet<T>) -> Self {
        if guessed == target {
            Self::Match
        } else if guessed.is_disjoint(target) {
            Self::Mismatch
        } else {
            Self::Partial
        }
    }

    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

impl fmt::Display for SetVerdict {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Match => "match",
            Self::Partial => "partial",
            Self::Mismatch => "mismatch",
        };
        write!(formatter, "{text}")
    }
}

// =============================================================================
// ExactVerdict
// =============================================================================

/// Outcome for a field that is either equal or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExactVerdict {
    Match,
    Mismatch,
}

impl ExactVerdict {
    #[must_use]
    pub fn compare<T: PartialEq + ?Sized>(guessed: &T, target: &T) -> Self {
        if guessed == target {
            Self::Match
        } else {
            Self::Mismatch
        }
    }

    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

impl fmt::Display for ExactVerdict {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Match => "match",
            Self::Mismatch => "mismatch",
        };
        write!(formatter, "{text}")
    }
}

// =============================================================================
// VerdictSet
// =============================================================================

/// Per-field verdicts for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VerdictSet {
    pub name_match: bool,
    pub rank: OrderedVerdict,
    pub categories: SetVerdict,
    pub size: OrderedVerdict,
    pub mass: OrderedVerdict,
    pub generation: ExactVerdict,
    pub depth: ExactVerdict,
}

impl VerdictSet {
    /// Number of fields scored by a verdict set, the name included.
    pub const FIELD_COUNT: usize = 7;

    /// True when the guess named the target.
    #[must_use]
    pub const fn is_exact_hit(&self) -> bool {
        self.name_match
    }

    /// How many fields matched outright.
    #[must_use]
    pub fn matched_fields(&self) -> usize {
        [
            self.name_match,
            self.rank.is_match(),
            self.categories.is_match(),
            self.size.is_match(),
            self.mass.is_match(),
            self.generation.is_match(),
            self.depth.is_match(),
        ]
        .into_iter()
        .filter(|matched| *matched)
        .count()
    }
}
