//! Types shared across the domain subdomains.

mod errors;
mod timestamp;

pub use errors::ValidationError;
pub use timestamp::Timestamp;
