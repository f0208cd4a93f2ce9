//! The guess comparator.
//!
//! [`compare`] scores a guessed entity against the target field by field and
//! never fails. Ordered verdicts describe where the target lies relative to
//! the guess.

mod feedback;
mod verdict;

pub use feedback::{GuessFeedback, compare};
pub use verdict::{ExactVerdict, OrderedVerdict, SetVerdict, VerdictSet};
