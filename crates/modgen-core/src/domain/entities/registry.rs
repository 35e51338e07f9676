use serde::{Serialize, de::DeserializeOwned};

use crate::domain::entities::page::PageRecord;
use crate::domain::value_objects::ModuleName;

/// An entry type that can be persisted in a registry.
///
/// The canonical form is applied on every save, by every registry adapter, so
/// the ordering policy belongs to the entry type rather than to the storage.
pub trait RegistryEntry: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Bring a sequence of entries into the form it is persisted in.
    fn canonicalize(entries: Vec<Self>) -> Vec<Self> {
        entries
    }
}

/// Module identity has no meaningful order: sorted and de-duplicated.
impl RegistryEntry for ModuleName {
    fn canonicalize(mut entries: Vec<Self>) -> Vec<Self> {
        entries.sort();
        entries.dedup();
        entries
    }
}

/// Page order is history operators read top to bottom: kept as written.
impl RegistryEntry for PageRecord {}
