//! In-memory registry for testing.

use std::sync::{Arc, RwLock};

use modgen_core::{
    application::{ApplicationError, ports::Registry},
    domain::RegistryEntry,
    error::ModgenResult,
};

/// Shared in-memory registry. Clones see the same entries.
#[derive(Debug, Clone)]
pub struct MemoryRegistry<E> {
    inner: Arc<RwLock<Vec<E>>>,
}

impl<E: RegistryEntry> MemoryRegistry<E> {
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    pub fn with_entries(entries: Vec<E>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(entries)),
        }
    }

    /// Snapshot of the stored entries (testing helper).
    pub fn entries(&self) -> Vec<E> {
        self.inner
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl<E: RegistryEntry> Default for MemoryRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RegistryEntry> Registry<E> for MemoryRegistry<E> {
    fn load(&self) -> ModgenResult<Vec<E>> {
        let entries = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(entries.clone())
    }

    fn save(&self, entries: &[E]) -> ModgenResult<()> {
        let mut stored = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *stored = E::canonicalize(entries.to_vec());
        Ok(())
    }
}
