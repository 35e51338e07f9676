//! In-memory template store for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use modgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateKind,
    error::ModgenResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    inner: Arc<RwLock<HashMap<TemplateKind, String>>>,
}

impl MemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a template.
    pub fn insert(&self, kind: TemplateKind, text: impl Into<String>) -> ModgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(kind, text.into());
        Ok(())
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn seed_defaults(&self) -> ModgenResult<Vec<TemplateKind>> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut seeded = Vec::new();
        for kind in TemplateKind::ALL {
            if !inner.contains_key(&kind) {
                inner.insert(kind, builtin_templates::default_text(kind).to_string());
                seeded.push(kind);
            }
        }
        Ok(seeded)
    }

    fn load(&self, kind: TemplateKind) -> ModgenResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.get(&kind).cloned().ok_or_else(|| {
            ApplicationError::TemplateUnavailable {
                kind,
                reason: "not seeded".into(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_keeps_inserted_templates() {
        let store = MemoryTemplateStore::new();
        store.insert(TemplateKind::Server, "mine").unwrap();

        let seeded = store.seed_defaults().unwrap();

        assert_eq!(seeded, vec![TemplateKind::Page, TemplateKind::PageServer]);
        assert_eq!(store.load(TemplateKind::Server).unwrap(), "mine");
    }

    #[test]
    fn unseeded_load_fails() {
        assert!(MemoryTemplateStore::new().load(TemplateKind::Page).is_err());
    }
}
