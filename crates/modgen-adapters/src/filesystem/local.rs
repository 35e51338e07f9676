//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use modgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ModgenError, ModgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ModgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ModgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&self, from: &Path, to: &Path) -> ModgenResult<()> {
        if !from.exists() {
            return Err(ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "Failed to rename: source does not exist".into(),
            }
            .into());
        }
        if to.exists() {
            return Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "Failed to rename: destination already exists".into(),
            }
            .into());
        }
        if let Some(parent) = to.parent() {
            self.create_dir_all(parent)?;
        }
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename"))
    }

    fn remove(&self, path: &Path) -> ModgenResult<()> {
        let result = match std::fs::symlink_metadata(path) {
            Ok(meta) if meta.is_dir() => std::fs::remove_dir_all(path),
            Ok(_) => std::fs::remove_file(path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => Err(e),
        };
        result.map_err(|e| map_io_error(path, e, "remove"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ModgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
