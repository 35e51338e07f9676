//! Plugin manifests discovered on disk.
//!
//! A plugin lives in its own directory under the modules library and declares
//! itself with a `manifest.json`:
//!
//! ```text
//! src/lib/modules/
//! ├── inventory/
//! │   └── manifest.json     ← read
//! ├── inventory.ts
//! └── blog/
//!     ├── manifest.json     ← read
//!     └── extra/
//!         └── manifest.json ← ignored (too deep)
//! ```

use std::path::{Path, PathBuf};

use modgen_core::{
    application::ports::ManifestSource, domain::PluginManifest, error::ModgenResult,
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

const MANIFEST_FILE: &str = "manifest.json";

/// Scans `<dir>/*/manifest.json`.
#[derive(Debug, Clone)]
pub struct DirManifestSource {
    dir: PathBuf,
}

impl DirManifestSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read(path: &Path) -> Option<PluginManifest> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable manifest");
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping malformed manifest");
                None
            }
        }
    }
}

impl ManifestSource for DirManifestSource {
    #[instrument(skip_all, fields(dir = %self.dir.display()))]
    fn load_all(&self) -> ModgenResult<Vec<PluginManifest>> {
        if !self.dir.is_dir() {
            debug!("Modules directory absent, no plugins");
            return Ok(Vec::new());
        }

        let manifests = WalkDir::new(&self.dir)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Directory walk error");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && entry.file_name() == MANIFEST_FILE)
            .filter_map(|entry| Self::read(entry.path()))
            .collect();

        Ok(manifests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, text: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
    }

    #[test]
    fn reads_one_level_and_skips_malformed() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "inventory/manifest.json",
            r#"{"name":"inventory","label":"Inventory","routes":[]}"#,
        );
        write(temp.path(), "broken/manifest.json", "{ not json");
        write(
            temp.path(),
            "blog/extra/manifest.json",
            r#"{"name":"deep","label":"Deep"}"#,
        );
        write(temp.path(), "manifest.json", r#"{"name":"top","label":"Top"}"#);

        let manifests = DirManifestSource::new(temp.path()).load_all().unwrap();

        let names: Vec<_> = manifests.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["inventory"]);
    }

    #[test]
    fn missing_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        let source = DirManifestSource::new(temp.path().join("nope"));
        assert!(source.load_all().unwrap().is_empty());
    }
}
