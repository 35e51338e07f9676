//! Module Service - lifecycle orchestrator.
//!
//! Every mutating use case is split in two:
//! 1. `plan_*` loads registry snapshots (and renders templates for pages),
//!    validates the request, and returns a [`Plan`] without touching anything
//! 2. [`ModuleService::apply`] runs the plan's filesystem effects in order and
//!    persists the registries last
//!
//! The caller shows the plan to the operator in between.

use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, Registry, TemplateRenderer, TemplateStore},
    domain::{
        DomainValidator as validator, FsEffect, ModuleName, PageRecord, PageRequest, Plan,
        ProjectLayout, RegistryEntry, RenderedPage, TemplateKind, planning,
    },
    error::ModgenResult,
};

/// What [`ModuleService::apply`] actually did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub written: Vec<PathBuf>,
    pub skipped_existing: Vec<PathBuf>,
    pub renamed: Vec<(PathBuf, PathBuf)>,
    pub skipped_renames: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

impl ApplyReport {
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
            && self.skipped_existing.is_empty()
            && self.renamed.is_empty()
            && self.skipped_renames.is_empty()
            && self.removed.is_empty()
    }
}

/// Creates, renames and deletes modules and adds pages to them.
pub struct ModuleService {
    layout: ProjectLayout,
    filesystem: Box<dyn Filesystem>,
    modules: Box<dyn Registry<ModuleName>>,
    pages: Box<dyn Registry<PageRecord>>,
    templates: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
}

impl ModuleService {
    pub fn new(
        layout: ProjectLayout,
        filesystem: Box<dyn Filesystem>,
        modules: Box<dyn Registry<ModuleName>>,
        pages: Box<dyn Registry<PageRecord>>,
        templates: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            layout,
            filesystem,
            modules,
            pages,
            templates,
            renderer,
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Write any missing page template. Existing ones are left alone.
    pub fn seed_templates(&self) -> ModgenResult<Vec<TemplateKind>> {
        let seeded = self.templates.seed_defaults()?;
        for kind in &seeded {
            info!(template = %kind, "Seeded default template");
        }
        Ok(seeded)
    }

    pub fn list_modules(&self) -> ModgenResult<Vec<ModuleName>> {
        self.modules.load()
    }

    pub fn list_pages(&self) -> ModgenResult<Vec<PageRecord>> {
        self.pages.load()
    }

    // -------------------------------------------------------------------------
    // Planning
    // -------------------------------------------------------------------------

    #[instrument(skip_all, fields(raw = %raw_name))]
    pub fn plan_create_module(&self, raw_name: &str) -> ModgenResult<Plan> {
        let name = ModuleName::parse(raw_name)?;
        let registered = self.modules.load()?;
        Ok(planning::plan_create_module(name, &registered, &self.layout)?)
    }

    #[instrument(skip_all, fields(from = %raw_from, to = %raw_to))]
    pub fn plan_rename_module(&self, raw_from: &str, raw_to: &str) -> ModgenResult<Plan> {
        let from = ModuleName::parse(raw_from)?;
        let to = ModuleName::parse(raw_to)?;
        let registered = self.modules.load()?;
        Ok(planning::plan_rename_module(
            from,
            to,
            &registered,
            &self.layout,
        )?)
    }

    /// An unregistered module gives an empty plan.
    #[instrument(skip_all, fields(raw = %raw_name))]
    pub fn plan_delete_module(&self, raw_name: &str) -> ModgenResult<Plan> {
        let name = ModuleName::parse(raw_name)?;
        let registered = self.modules.load()?;
        let plan = planning::plan_delete_module(name, &registered, &self.layout);
        if plan.is_empty() {
            debug!("Module not registered, nothing to delete");
        }
        Ok(plan)
    }

    /// Render the requested page files and plan them.
    ///
    /// The module is checked before any template is loaded.
    #[instrument(skip_all, fields(module = %request.module, page = %request.page))]
    pub fn plan_add_page(&self, request: &PageRequest) -> ModgenResult<Plan> {
        let registered = self.modules.load()?;
        validator::require_registered(&request.module, &registered)?;

        let context = request.render_context();
        let render = |kind| -> ModgenResult<String> {
            let template = self.templates.load(kind)?;
            Ok(self.renderer.render(&template, &context))
        };

        let rendered = RenderedPage {
            page: render(TemplateKind::Page)?,
            page_server: request
                .with_page_server
                .then(|| render(TemplateKind::PageServer))
                .transpose()?,
            server: request
                .with_server
                .then(|| render(TemplateKind::Server))
                .transpose()?,
        };

        Ok(planning::plan_add_page(
            request,
            rendered,
            &registered,
            &self.layout,
        )?)
    }

    // -------------------------------------------------------------------------
    // Execution
    // -------------------------------------------------------------------------

    /// Execute a confirmed plan.
    ///
    /// Registries the plan touches are loaded first, so a corrupted registry
    /// aborts before any file is changed. Filesystem effects then run in
    /// order; the page registry and then the module registry are saved last.
    /// A failure stops the remaining steps and nothing is rolled back.
    #[instrument(skip_all, fields(action = %plan.action()))]
    pub fn apply(&self, plan: &Plan) -> ModgenResult<ApplyReport> {
        let touches_pages = plan.updates().iter().any(|u| u.touches_pages());
        let touches_modules = plan.updates().iter().any(|u| u.touches_modules());

        let pages = if touches_pages {
            Some(self.pages.load()?)
        } else {
            None
        };
        let modules = if touches_modules {
            Some(self.modules.load()?)
        } else {
            None
        };

        let mut report = ApplyReport::default();
        for effect in plan.effects() {
            self.apply_effect(effect, &mut report)?;
        }

        if let Some(mut pages) = pages {
            for update in plan.updates() {
                update.apply_to_pages(&mut pages);
            }
            self.pages.save(&pages)?;
            debug!(count = pages.len(), "Saved page registry");
        }
        if let Some(mut modules) = modules {
            for update in plan.updates() {
                update.apply_to_modules(&mut modules);
            }
            let modules = ModuleName::canonicalize(modules);
            self.modules.save(&modules)?;
            debug!(count = modules.len(), "Saved module registry");
        }

        info!(
            written = report.written.len(),
            skipped = report.skipped_existing.len(),
            renamed = report.renamed.len(),
            removed = report.removed.len(),
            "Plan applied"
        );
        Ok(report)
    }

    fn apply_effect(&self, effect: &FsEffect, report: &mut ApplyReport) -> ModgenResult<()> {
        match effect {
            FsEffect::Materialize { path, content } => {
                if self.filesystem.materialize(path, content)? {
                    info!(path = %path.display(), "Wrote file");
                    report.written.push(path.clone());
                } else {
                    debug!(path = %path.display(), "File exists, left untouched");
                    report.skipped_existing.push(path.clone());
                }
            }
            FsEffect::Rename { from, to, required } => {
                if !required && !self.filesystem.exists(from) {
                    debug!(path = %from.display(), "Optional rename source missing");
                    report.skipped_renames.push(from.clone());
                } else {
                    self.filesystem.rename(from, to)?;
                    info!(from = %from.display(), to = %to.display(), "Renamed");
                    report.renamed.push((from.clone(), to.clone()));
                }
            }
            FsEffect::Remove { path } => {
                self.filesystem.remove(path)?;
                info!(path = %path.display(), "Removed");
                report.removed.push(path.clone());
            }
        }
        Ok(())
    }
}
