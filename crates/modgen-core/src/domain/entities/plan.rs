use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::{
    layout::ProjectLayout,
    page::{self, PageRecord},
};
use crate::domain::value_objects::{ModuleName, PageSlug};

/// Everything a lifecycle operation intends to do, computed before any I/O.
///
/// Filesystem effects run first, in order; registry updates are persisted
/// afterwards. A plan with neither is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    action: PlanAction,
    effects: Vec<FsEffect>,
    updates: Vec<RegistryUpdate>,
}

/// Which operation produced a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    CreateModule(ModuleName),
    RenameModule { from: ModuleName, to: ModuleName },
    DeleteModule(ModuleName),
    AddPage { module: ModuleName, page: PageSlug },
}

/// A single filesystem effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEffect {
    /// Write `content` unless `path` already exists.
    Materialize { path: PathBuf, content: String },
    /// Move `from` to `to`. When `required` is false a missing source is
    /// skipped instead of failing.
    Rename {
        from: PathBuf,
        to: PathBuf,
        required: bool,
    },
    /// Recursively remove `path`; a missing path is fine.
    Remove { path: PathBuf },
}

/// A change to one of the registries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryUpdate {
    RegisterModule(ModuleName),
    UnregisterModule(ModuleName),
    RenameModule { from: ModuleName, to: ModuleName },
    UpsertPage(PageRecord),
    DropPages(ModuleName),
    RewritePages {
        from: ModuleName,
        to: ModuleName,
        routes_prefix: String,
    },
}

impl Plan {
    pub fn new(action: PlanAction) -> Self {
        Self {
            action,
            effects: Vec::new(),
            updates: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: FsEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_update(mut self, update: RegistryUpdate) -> Self {
        self.updates.push(update);
        self
    }

    pub fn action(&self) -> &PlanAction {
        &self.action
    }

    pub fn effects(&self) -> &[FsEffect] {
        &self.effects
    }

    pub fn updates(&self) -> &[RegistryUpdate] {
        &self.updates
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.updates.is_empty()
    }

    /// One line per filesystem effect, paths relative to the project root.
    pub fn preview_lines(&self, layout: &ProjectLayout) -> Vec<String> {
        self.effects
            .iter()
            .map(|effect| match effect {
                FsEffect::Materialize { path, .. } | FsEffect::Remove { path } => {
                    layout.display(path)
                }
                FsEffect::Rename { from, to, required } => {
                    let line = format!("{} \u{2192} {}", layout.display(from), layout.display(to));
                    if *required {
                        line
                    } else {
                        format!("{line} (if present)")
                    }
                }
            })
            .collect()
    }
}

impl PlanAction {
    /// Completes "Do you want to ...?".
    pub fn confirm_prompt(&self) -> &'static str {
        match self {
            Self::CreateModule(_) | Self::AddPage { .. } => "create these files",
            Self::RenameModule { .. } => "rename these paths",
            Self::DeleteModule(_) => "delete these paths",
        }
    }

    /// Message shown once the plan has been applied.
    pub fn outcome(&self) -> String {
        match self {
            Self::CreateModule(m) => format!("Module '{m}' created"),
            Self::RenameModule { from, to } => format!("Module '{from}' renamed to '{to}'"),
            Self::DeleteModule(m) => format!("Module '{m}' deleted"),
            Self::AddPage { module, page } => format!("Page '{page}' added to module '{module}'"),
        }
    }
}

impl fmt::Display for PlanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateModule(m) => write!(f, "create module '{m}'"),
            Self::RenameModule { from, to } => write!(f, "rename module '{from}' to '{to}'"),
            Self::DeleteModule(m) => write!(f, "delete module '{m}'"),
            Self::AddPage { module, page } => write!(f, "add page '{page}' to module '{module}'"),
        }
    }
}

impl RegistryUpdate {
    /// Whether this update changes the module registry.
    pub fn touches_modules(&self) -> bool {
        matches!(
            self,
            Self::RegisterModule(_) | Self::UnregisterModule(_) | Self::RenameModule { .. }
        )
    }

    /// Whether this update changes the page registry.
    pub fn touches_pages(&self) -> bool {
        !self.touches_modules()
    }

    pub fn apply_to_modules(&self, modules: &mut Vec<ModuleName>) {
        match self {
            Self::RegisterModule(m) => modules.push(m.clone()),
            Self::UnregisterModule(m) => modules.retain(|x| x != m),
            Self::RenameModule { from, to } => {
                modules.retain(|x| x != from);
                modules.push(to.clone());
            }
            _ => {}
        }
    }

    pub fn apply_to_pages(&self, pages: &mut Vec<PageRecord>) {
        match self {
            Self::UpsertPage(record) => page::upsert_page(pages, record.clone()),
            Self::DropPages(m) => page::drop_module_pages(pages, m),
            Self::RewritePages {
                from,
                to,
                routes_prefix,
            } => page::rename_module_pages(pages, routes_prefix, from, to),
            _ => {}
        }
    }
}

impl fmt::Display for RegistryUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegisterModule(m) => write!(f, "modules: + {m}"),
            Self::UnregisterModule(m) => write!(f, "modules: - {m}"),
            Self::RenameModule { from, to } => write!(f, "modules: {from} \u{2192} {to}"),
            Self::UpsertPage(p) => write!(f, "pages: upsert {}/{} ({})", p.module, p.page, p.path),
            Self::DropPages(m) => write!(f, "pages: drop all of {m}"),
            Self::RewritePages { from, to, .. } => write!(f, "pages: move {from} \u{2192} {to}"),
        }
    }
}
