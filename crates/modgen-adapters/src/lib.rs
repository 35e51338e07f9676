//! Infrastructure adapters for modgen.
//!
//! This crate implements the ports defined in `modgen_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod manifest;
pub mod registry;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest::DirManifestSource;
pub use registry::{JsonRegistry, MemoryRegistry};
pub use renderer::SimpleRenderer;
pub use template_store::{FsTemplateStore, MemoryTemplateStore};
