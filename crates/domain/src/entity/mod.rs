mod aggregate;
mod category;
mod measurement;
mod name;
mod rank;

pub use aggregate::{Entity, EntityBuilder, Generation};
pub use category::{CategoryTag, CategoryTags};
pub use measurement::Measurement;
pub use name::EntityName;
pub use rank::Rank;
