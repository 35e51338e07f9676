//! Application layer for modgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ModuleService, PluginService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ApplyReport, ModuleService, PluginService};

pub use ports::{Filesystem, ManifestSource, Registry, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
