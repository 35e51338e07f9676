//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateKind;
use crate::error::ErrorCategory;

/// Errors that occur while executing a plan or talking to an adapter.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A registry file exists but cannot be read back.
    #[error("Registry at {path} is corrupted: {reason}")]
    RegistryCorrupted { path: PathBuf, reason: String },

    /// A page template could not be loaded.
    #[error("Template '{kind}' is unavailable: {reason}")]
    TemplateUnavailable { kind: TemplateKind, reason: String },

    /// In-memory store access failed (lock poisoned).
    #[error("Store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Registries are saved last: re-running the command is safe for create and delete"
                    .into(),
            ],
            Self::RegistryCorrupted { path, .. } => vec![
                format!("Fix or remove {}", path.display()),
                "A registry must be a JSON array".into(),
            ],
            Self::TemplateUnavailable { kind, .. } => vec![
                format!("The '{kind}' template could not be read"),
                "Delete the templates directory to have the defaults re-seeded".into(),
            ],
            Self::StoreLockError => vec![
                "An in-memory store is poisoned".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RegistryCorrupted { .. } | Self::TemplateUnavailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
