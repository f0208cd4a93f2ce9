//! In-memory implementations of the storage ports.
//!
//! All three are cheap to clone; clones share the same underlying state.

mod catalog;
mod sessions;
mod stats;

pub use catalog::InMemoryCatalog;
pub use sessions::InMemorySessionRepository;
pub use stats::InMemoryStatsRepository;
