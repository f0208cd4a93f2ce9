//! Boundary error reporting.
//!
//! Every [`WorkflowError`] becomes an [`ErrorReport`] with a stable code.
//! Client errors keep their message; server errors are logged in full and
//! reported with a generic message so storage details never leak out.

use serde::Serialize;

use dexdle_domain::common::ValidationError;
use dexdle_workflow::errors::WorkflowError;

pub type ProviderResult<T> = Result<T, ErrorReport>;

const INTERNAL_MESSAGE: &str = "an internal error occurred";

// =============================================================================
// FieldError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<&ValidationError> for FieldError {
    fn from(error: &ValidationError) -> Self {
        Self {
            field: error.field().to_string(),
            message: error.to_string(),
        }
    }
}

// =============================================================================
// ErrorReport
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ErrorReport {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Vec<FieldError>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.code.as_str(),
            "SESSION_NOT_FOUND" | "ENTITY_NOT_FOUND" | "VALIDATION_ERROR"
        )
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ErrorReport {}

// =============================================================================
// From<WorkflowError> for ErrorReport
// =============================================================================

impl From<WorkflowError> for ErrorReport {
    fn from(error: WorkflowError) -> Self {
        let code = error.code();
        if !error.is_client_error() {
            tracing::error!(code, error = %error, "request failed");
            let message = if matches!(error, WorkflowError::EmptyCatalog) {
                error.to_string()
            } else {
                INTERNAL_MESSAGE.to_string()
            };
            return Self::new(code, message);
        }

        tracing::warn!(code, error = %error, "request rejected");
        match &error {
            WorkflowError::Validation(validation) => Self::with_details(
                code,
                error.to_string(),
                vec![FieldError::from(validation)],
            ),
            _ => Self::new(code, error.to_string()),
        }
    }
}

impl From<ValidationError> for ErrorReport {
    fn from(error: ValidationError) -> Self {
        WorkflowError::from(error).into()
    }
}
