//! Provider layer for dexdle
//!
//! [`GameProvider`] wires the workflows to concrete port implementations and
//! exposes each game operation with raw string inputs. Results come back as
//! serializable DTOs; failures come back as an [`ErrorReport`] carrying a
//! stable code.

pub mod dto;
pub mod errors;
pub mod workflows;

pub use errors::{ErrorReport, FieldError, ProviderResult};
pub use workflows::GameProvider;
