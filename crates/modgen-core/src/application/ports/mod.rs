//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `modgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `Registry`: JSON registries of modules and pages
//!   - `TemplateStore`: Editable page templates
//!   - `TemplateRenderer`: Placeholder substitution
//!   - `ManifestSource`: Plugin manifests
//!
//! - **Driving (Input) Ports**: the CLI calls the services directly

pub mod output;

pub use output::{Filesystem, ManifestSource, Registry, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{
    MockFilesystem, MockManifestSource, MockRegistry, MockTemplateRenderer, MockTemplateStore,
};
