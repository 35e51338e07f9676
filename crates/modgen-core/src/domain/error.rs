// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can return them from planning and tests can match)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Every variant is raised *before* any filesystem or registry mutation, so a
/// domain error always means "nothing was changed".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("{field} is required (input normalized to an empty name)")]
    EmptyIdentifier { field: &'static str },

    #[error("invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    // ========================================================================
    // Registry Conflicts (409-level equivalent)
    // ========================================================================
    #[error("module '{name}' already exists")]
    ModuleExists { name: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("module '{name}' is not registered")]
    ModuleNotFound { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyIdentifier { field } => vec![
                format!("Provide a {field} containing at least one letter or number"),
                "Names are normalized to kebab-case, e.g. 'User List' -> 'user-list'".into(),
            ],
            Self::InvalidModuleName { reason, .. } => vec![
                format!("Details: {reason}"),
                "Module names are a single segment, e.g. 'inventory' or 'user-admin'".into(),
            ],
            Self::ModuleExists { name } => vec![
                format!("'{name}' is already listed in the module registry"),
                "Choose a different name, or rename the existing module first".into(),
                "Try: modgen list".into(),
            ],
            Self::ModuleNotFound { name } => vec![
                format!("No module named '{name}' in the module registry"),
                "Create it first: modgen create".into(),
                "Try: modgen list".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyIdentifier { .. } | Self::InvalidModuleName { .. } => {
                ErrorCategory::Validation
            }
            Self::ModuleExists { .. } => ErrorCategory::Conflict,
            Self::ModuleNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
}
