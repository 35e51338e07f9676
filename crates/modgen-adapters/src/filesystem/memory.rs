//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use modgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ModgenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ModgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ModgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn rename(&self, from: &Path, to: &Path) -> ModgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !inner.files.contains_key(from) && !inner.directories.contains(from) {
            return Err(ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "Failed to rename: source does not exist".into(),
            }
            .into());
        }
        if inner.files.contains_key(to) || inner.directories.contains(to) {
            return Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "Failed to rename: destination already exists".into(),
            }
            .into());
        }

        let moved = |p: &Path| -> Option<PathBuf> {
            p.strip_prefix(from).ok().map(|rest| {
                if rest.as_os_str().is_empty() {
                    to.to_path_buf()
                } else {
                    to.join(rest)
                }
            })
        };

        let files = std::mem::take(&mut inner.files);
        inner.files = files
            .into_iter()
            .map(|(p, content)| (moved(&p).unwrap_or(p), content))
            .collect();

        let directories = std::mem::take(&mut inner.directories);
        inner.directories = directories
            .into_iter()
            .map(|p| moved(&p).unwrap_or(p))
            .collect();

        let mut current = PathBuf::new();
        for component in to.parent().into_iter().flat_map(Path::components) {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn remove(&self, path: &Path) -> ModgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), "x").is_err());
        assert!(fs.materialize(Path::new("/a/b.txt"), "x").unwrap());
        assert_eq!(fs.read_file(Path::new("/a/b.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn rename_moves_subtree_only() {
        let fs = MemoryFilesystem::new();
        fs.materialize(Path::new("/r/shop/+page.svelte"), "a").unwrap();
        fs.materialize(Path::new("/r/shop-extra/+page.svelte"), "b")
            .unwrap();

        fs.rename(Path::new("/r/shop"), Path::new("/r/store")).unwrap();

        assert_eq!(
            fs.list_files(),
            vec![
                PathBuf::from("/r/shop-extra/+page.svelte"),
                PathBuf::from("/r/store/+page.svelte"),
            ]
        );
        assert!(!fs.exists(Path::new("/r/shop")));
        assert!(fs.exists(Path::new("/r/store")));
    }

    #[test]
    fn rename_missing_source_fails() {
        let fs = MemoryFilesystem::new();
        assert!(fs.rename(Path::new("/nope"), Path::new("/other")).is_err());
    }

    #[test]
    fn rename_onto_existing_path_fails() {
        let fs = MemoryFilesystem::new();
        fs.materialize(Path::new("/m/widgets.ts"), "w").unwrap();
        fs.materialize(Path::new("/m/gadgets.ts"), "g").unwrap();

        assert!(
            fs.rename(Path::new("/m/widgets.ts"), Path::new("/m/gadgets.ts"))
                .is_err()
        );
        assert_eq!(fs.read_file(Path::new("/m/gadgets.ts")).as_deref(), Some("g"));
        assert_eq!(fs.read_file(Path::new("/m/widgets.ts")).as_deref(), Some("w"));
    }

    #[test]
    fn remove_tolerates_missing_paths() {
        let fs = MemoryFilesystem::new();
        fs.materialize(Path::new("/m/a.ts"), "x").unwrap();

        fs.remove(Path::new("/m/a.ts")).unwrap();
        fs.remove(Path::new("/m/a.ts")).unwrap();

        assert!(fs.list_files().is_empty());
        assert!(fs.exists(Path::new("/m")));
    }
}
