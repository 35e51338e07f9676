//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `modgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{PluginManifest, RegistryEntry, RenderContext, TemplateKind};
use crate::error::ModgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modgen_adapters::filesystem::LocalFilesystem` (production)
/// - `modgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ModgenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ModgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Move a file or directory. A missing source or an existing destination
    /// is an error.
    fn rename(&self, from: &Path, to: &Path) -> ModgenResult<()>;

    /// Remove a file or a directory tree. A missing path is not an error.
    fn remove(&self, path: &Path) -> ModgenResult<()>;

    /// Write `content` only if `path` does not exist yet, creating parents.
    ///
    /// Returns whether the file was written.
    fn materialize(&self, path: &Path, content: &str) -> ModgenResult<bool> {
        if self.exists(path) {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.write_file(path, content)?;
        Ok(true)
    }
}

/// Port for a persisted list of entries.
///
/// `load` and `save` are the whole mutation surface: callers read the full
/// sequence, change it, and write it back. Implementations apply
/// [`RegistryEntry::canonicalize`] on save.
///
/// Implemented by:
/// - `modgen_adapters::registry::JsonRegistry` (production)
/// - `modgen_adapters::registry::MemoryRegistry` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Registry<E: RegistryEntry>: Send + Sync {
    /// Current entries; an absent store is empty.
    fn load(&self) -> ModgenResult<Vec<E>>;

    /// Replace the stored entries.
    fn save(&self, entries: &[E]) -> ModgenResult<()>;
}

/// Port for the editable page templates.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Write the built-in default of every missing template. Existing
    /// templates are never overwritten. Returns the kinds that were seeded.
    fn seed_defaults(&self) -> ModgenResult<Vec<TemplateKind>>;

    /// Raw text of a template.
    fn load(&self, kind: TemplateKind) -> ModgenResult<String>;
}

/// Port for template rendering. Rendering never fails: unknown keys render
/// empty.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, context: &RenderContext) -> String;
}

/// Port for plugin manifests.
#[cfg_attr(test, mockall::automock)]
pub trait ManifestSource: Send + Sync {
    /// Every readable manifest. Unreadable ones are skipped by the adapter.
    fn load_all(&self) -> ModgenResult<Vec<PluginManifest>>;
}
