//! Error types for the workflow layer.
//!
//! # Error Categories
//!
//! - [`WorkflowError::EmptyCatalog`]: no entity to start a game with
//! - [`WorkflowError::SessionNotFound`]: unknown or already finished session
//! - [`WorkflowError::EntityNotFound`]: guessed name is not in the catalog
//! - [`WorkflowError::Validation`]: rejected input, with the offending field
//! - [`WorkflowError::TargetMissing`] and [`WorkflowError::Repository`]:
//!   server-side failures
//!
//! # Examples
//!
//! ```
//! use dexdle_workflow::errors::WorkflowError;
//!
//! let error = WorkflowError::entity_not_found("Missingno");
//! assert_eq!(error.code(), "ENTITY_NOT_FOUND");
//! assert!(error.is_client_error());
//!
//! let error = WorkflowError::EmptyCatalog;
//! assert!(!error.is_client_error());
//! ```

use dexdle_domain::common::ValidationError;
use dexdle_domain::session::SessionError;
use thiserror::Error;

// =============================================================================
// RepositoryError
// =============================================================================

/// A storage operation behind a port failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("repository operation '{operation}' failed: {message}")]
pub struct RepositoryError {
    pub operation: String,
    pub message: String,
}

impl RepositoryError {
    #[must_use]
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// WorkflowError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("the catalog holds no entities")]
    EmptyCatalog,

    #[error("no active session '{session_id}'")]
    SessionNotFound { session_id: String },

    #[error("no entity named '{name}'")]
    EntityNotFound { name: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A session points at a rank the catalog no longer has.
    #[error("target entity {rank} is missing from the catalog")]
    TargetMissing { rank: u32 },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl WorkflowError {
    #[must_use]
    pub fn session_not_found(session_id: impl ToString) -> Self {
        Self::SessionNotFound {
            session_id: session_id.to_string(),
        }
    }

    #[must_use]
    pub fn entity_not_found(name: impl Into<String>) -> Self {
        Self::EntityNotFound { name: name.into() }
    }

    /// Stable machine-readable code for the boundary layer.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyCatalog => "EMPTY_CATALOG",
            Self::SessionNotFound { .. } => "SESSION_NOT_FOUND",
            Self::EntityNotFound { .. } => "ENTITY_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::TargetMissing { .. } | Self::Repository(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller can fix the request and try again.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::SessionNotFound { .. } | Self::EntityNotFound { .. } | Self::Validation(_)
        )
    }
}

impl From<SessionError> for WorkflowError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::NotActive { session, .. } => Self::session_not_found(session),
            SessionError::TargetMismatch { expected, .. } => Self::TargetMissing {
                rank: expected.value(),
            },
        }
    }
}
