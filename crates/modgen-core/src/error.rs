//! Unified error handling for modgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for modgen core operations.
#[derive(Debug, Error, Clone)]
pub enum ModgenError {
    /// Errors from the domain layer (rejected requests).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and adapters).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ModgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check .modgen.toml and try again".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in modgen".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether the request was rejected before anything was touched.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ModgenResult<T> = Result<T, ModgenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_categories_carry_over() {
        let err: ModgenError = DomainError::ModuleExists { name: "a".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.is_rejection());
        assert_eq!(err.to_string(), "module 'a' already exists");
    }

    #[test]
    fn corrupted_registry_is_configuration() {
        let err: ModgenError = ApplicationError::RegistryCorrupted {
            path: PathBuf::from("src/lib/modules.json"),
            reason: "expected value".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(!err.is_rejection());
        assert!(!err.suggestions().is_empty());
    }
}
