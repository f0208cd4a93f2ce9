//! Random source adapters.
//!
//! This module provides implementations of the [`RandomSource`] port:
//!
//! - [`SystemRandomSource`]: a `StdRng` seeded from OS entropy, or from a
//!   fixed seed for reproducible runs
//! - [`ScriptedRandomSource`]: replays a fixed list of picks for tests
//!
//! # Examples
//!
//! ```
//! use dexdle_infrastructure::adapters::SystemRandomSource;
//! use dexdle_workflow::ports::RandomSource;
//!
//! let first = SystemRandomSource::seeded(42);
//! let second = SystemRandomSource::seeded(42);
//! assert_eq!(first.pick_index(151), second.pick_index(151));
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dexdle_workflow::ports::RandomSource;

// =============================================================================
// SystemRandomSource
// =============================================================================

/// Uniform index picker backed by a shared [`StdRng`].
///
/// Clones draw from the same generator, so a seeded source yields one
/// reproducible sequence no matter which clone is asked.
#[derive(Debug, Clone)]
pub struct SystemRandomSource {
    rng: Arc<Mutex<StdRng>>,
}

impl SystemRandomSource {
    /// Creates a source seeded from operating system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a source whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, OS entropy otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    fn pick_index(&self, length: usize) -> usize {
        if length <= 1 {
            return 0;
        }
        self.rng.lock().random_range(0..length)
    }
}

// =============================================================================
// ScriptedRandomSource
// =============================================================================

/// Replays a fixed list of picks, then keeps returning zero.
///
/// Each pick is reduced modulo the requested length so a script written for
/// one catalog never indexes out of range on a smaller one. Clones share the
/// remaining script.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandomSource {
    picks: Arc<Mutex<VecDeque<usize>>>,
}

impl ScriptedRandomSource {
    #[must_use]
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: Arc::new(Mutex::new(picks.into_iter().collect())),
        }
    }

    /// Picks not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.picks.lock().len()
    }
}

impl RandomSource for ScriptedRandomSource {
    fn pick_index(&self, length: usize) -> usize {
        let pick = self.picks.lock().pop_front().unwrap_or(0);
        pick.checked_rem(length).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod system_random_source {
        use super::*;

        #[rstest]
        fn satisfies_port_bounds() {
            fn assert_bounds<T: RandomSource>(_: &T) {}
            assert_bounds(&SystemRandomSource::new());
        }

        #[rstest]
        fn same_seed_same_sequence() {
            let first = SystemRandomSource::seeded(7);
            let second = SystemRandomSource::seeded(7);

            let left: Vec<usize> = (0..32).map(|_| first.pick_index(1025)).collect();
            let right: Vec<usize> = (0..32).map(|_| second.pick_index(1025)).collect();

            assert_eq!(left, right);
        }

        #[rstest]
        #[case(1)]
        #[case(2)]
        #[case(151)]
        fn picks_stay_in_range(#[case] length: usize) {
            let source = SystemRandomSource::seeded(99);
            for _ in 0..500 {
                assert!(source.pick_index(length) < length);
            }
        }

        #[rstest]
        fn every_index_is_reachable() {
            let source = SystemRandomSource::seeded(3);
            let mut seen = [false; 5];
            for _ in 0..1_000 {
                seen[source.pick_index(5)] = true;
            }
            assert!(seen.iter().all(|hit| *hit));
        }

        #[rstest]
        fn clones_share_one_sequence() {
            let original = SystemRandomSource::seeded(11);
            let reference = SystemRandomSource::seeded(11);
            let clone = original.clone();

            let interleaved = [original.pick_index(1000), clone.pick_index(1000)];
            let expected = [reference.pick_index(1000), reference.pick_index(1000)];

            assert_eq!(interleaved, expected);
        }
    }

    mod scripted_random_source {
        use super::*;

        #[rstest]
        fn replays_then_falls_back_to_zero() {
            let source = ScriptedRandomSource::new([2, 1]);

            assert_eq!(source.pick_index(3), 2);
            assert_eq!(source.pick_index(3), 1);
            assert_eq!(source.pick_index(3), 0);
            assert_eq!(source.remaining(), 0);
        }

        #[rstest]
        fn wraps_oversized_picks() {
            let source = ScriptedRandomSource::new([7]);
            assert_eq!(source.pick_index(3), 1);
        }
    }
}
