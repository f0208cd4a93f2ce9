pub mod memory;
pub mod random;
pub mod snapshot;

pub use memory::{InMemoryCatalog, InMemorySessionRepository, InMemoryStatsRepository};
pub use random::{ScriptedRandomSource, SystemRandomSource};
pub use snapshot::{load_snapshot, parse_snapshot};
