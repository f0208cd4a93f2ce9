use crate::entity::{Generation, Rank};

/// Highest rank of each generation, in release order.
const GENERATION_BOUNDARIES: [u32; 8] = [151, 251, 386, 493, 649, 721, 809, 905];

/// Derives the release generation from a catalog rank.
///
/// Ranks past the last known boundary belong to the newest generation.
///
/// # Examples
///
/// ```
/// use dexdle_domain::catalog::generation_for_rank;
/// use dexdle_domain::entity::Rank;
///
/// assert_eq!(generation_for_rank(Rank::new(151).unwrap()).value(), 1);
/// assert_eq!(generation_for_rank(Rank::new(152).unwrap()).value(), 2);
/// assert_eq!(generation_for_rank(Rank::new(1010).unwrap()).value(), 9);
/// ```
#[must_use]
pub fn generation_for_rank(rank: Rank) -> Generation {
    let index = GENERATION_BOUNDARIES
        .iter()
        .position(|boundary| rank.value() <= *boundary)
        .unwrap_or(GENERATION_BOUNDARIES.len());
    u8::try_from(index + 1)
        .ok()
        .and_then(|value| Generation::new(value).ok())
        .unwrap_or(Generation::FIRST)
}
