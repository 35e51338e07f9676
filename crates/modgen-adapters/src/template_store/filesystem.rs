//! Templates kept as files in a project directory.

use std::path::{Path, PathBuf};

use modgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateKind,
    error::ModgenResult,
};
use tracing::{debug, instrument};

use crate::builtin_templates;

/// Reads templates from `dir`, seeding missing ones from the built-ins.
#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    dir: PathBuf,
}

impl FsTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, kind: TemplateKind) -> PathBuf {
        self.dir.join(builtin_templates::file_name(kind))
    }
}

impl TemplateStore for FsTemplateStore {
    #[instrument(skip_all, fields(dir = %self.dir.display()))]
    fn seed_defaults(&self) -> ModgenResult<Vec<TemplateKind>> {
        std::fs::create_dir_all(&self.dir).map_err(|e| ApplicationError::FilesystemError {
            path: self.dir.clone(),
            reason: format!("Failed to create directory: {e}"),
        })?;

        let mut seeded = Vec::new();
        for kind in TemplateKind::ALL {
            let path = self.path_of(kind);
            if path.exists() {
                debug!(template = %kind, "Template present, keeping it");
                continue;
            }
            std::fs::write(&path, builtin_templates::default_text(kind)).map_err(|e| {
                ApplicationError::FilesystemError {
                    path: path.clone(),
                    reason: format!("Failed to write template: {e}"),
                }
            })?;
            seeded.push(kind);
        }
        Ok(seeded)
    }

    fn load(&self, kind: TemplateKind) -> ModgenResult<String> {
        let path = self.path_of(kind);
        std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::TemplateUnavailable {
                kind,
                reason: format!("{}: {e}", path.display()),
            }
            .into()
        })
    }
}
