mod aggregate;
mod errors;
mod identifier;
mod status;

pub use aggregate::{GuessEvaluation, Session};
pub use errors::SessionError;
pub use identifier::{PlayerIdentifier, SessionIdentifier};
pub use status::SessionStatus;
