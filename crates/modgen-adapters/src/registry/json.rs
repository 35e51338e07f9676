//! JSON file registry.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use modgen_core::{
    application::{ApplicationError, ports::Registry},
    domain::RegistryEntry,
    error::ModgenResult,
};
use tracing::debug;

/// A registry stored as a pretty-printed JSON array.
///
/// A missing file reads as empty. A file that exists but does not parse is
/// reported as [`ApplicationError::RegistryCorrupted`]; it is never replaced
/// silently.
#[derive(Debug, Clone)]
pub struct JsonRegistry<E> {
    path: PathBuf,
    _entry: PhantomData<fn() -> E>,
}

impl<E: RegistryEntry> JsonRegistry<E> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entry: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupted(&self, reason: impl ToString) -> ApplicationError {
        ApplicationError::RegistryCorrupted {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn io_error(&self, operation: &str, e: std::io::Error) -> ApplicationError {
        ApplicationError::FilesystemError {
            path: self.path.clone(),
            reason: format!("Failed to {operation}: {e}"),
        }
    }
}

impl<E: RegistryEntry> Registry<E> for JsonRegistry<E> {
    fn load(&self) -> ModgenResult<Vec<E>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Registry absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error("read registry", e).into()),
        };

        serde_json::from_str(&text).map_err(|e| self.corrupted(e).into())
    }

    fn save(&self, entries: &[E]) -> ModgenResult<()> {
        let entries = E::canonicalize(entries.to_vec());
        let mut text = serde_json::to_string_pretty(&entries).map_err(|e| self.corrupted(e))?;
        text.push('\n');

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error("create directory", e))?;
        }
        std::fs::write(&self.path, text).map_err(|e| self.io_error("write registry", e))?;

        debug!(path = %self.path.display(), count = entries.len(), "Registry saved");
        Ok(())
    }
}
