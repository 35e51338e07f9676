//! Command handlers.
//!
//! Handlers translate arguments into service calls and display results. The
//! shared preview / confirm / apply sequence lives in [`confirm_and_apply`].

use std::path::PathBuf;

use tracing::{debug, instrument};

use modgen_adapters::{
    DirManifestSource, FsTemplateStore, JsonRegistry, LocalFilesystem, SimpleRenderer,
};
use modgen_core::application::{ApplyReport, ModuleService, PluginService};
use modgen_core::domain::{ModuleName, PageRecord, Plan};

use crate::{
    cli::ApplyArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    prompt,
};

pub mod add_page;
pub mod completions;
pub mod config;
pub mod create;
pub mod delete;
pub mod init;
pub mod list;
pub mod menu;
pub mod plugins;
pub mod rename;

/// Project root: the working directory.
pub fn project_root() -> CliResult<PathBuf> {
    std::env::current_dir().with_cli_context(|| "Failed to read the working directory")
}

/// Wire the module service to the project on disk and seed any missing
/// page template.
#[instrument(skip_all)]
pub fn module_service(config: &AppConfig) -> CliResult<ModuleService> {
    let root = project_root()?;
    debug!(root = %root.display(), "Opening project");

    let service = ModuleService::new(
        config.layout(&root),
        Box::new(LocalFilesystem::new()),
        Box::new(JsonRegistry::<ModuleName>::new(
            config.modules_registry(&root),
        )),
        Box::new(JsonRegistry::<PageRecord>::new(
            config.pages_registry(&root),
        )),
        Box::new(FsTemplateStore::new(config.templates_dir(&root))),
        Box::new(SimpleRenderer::new()),
    );
    service.seed_templates()?;
    Ok(service)
}

pub fn plugin_service(config: &AppConfig) -> CliResult<PluginService> {
    let root = project_root()?;
    Ok(PluginService::new(Box::new(DirManifestSource::new(
        config.plugins_dir(&root),
    ))))
}

/// Show `plan`, ask for confirmation and apply it.
///
/// `confirm` receives the question and answers it; commands pass
/// [`ask`]. Returns `None` when nothing was applied (dry run or declined).
/// Declining is not an error.
pub fn confirm_and_apply(
    service: &ModuleService,
    plan: &Plan,
    apply: ApplyArgs,
    output: &OutputManager,
    confirm: impl FnOnce(&str) -> CliResult<bool>,
) -> CliResult<Option<ApplyReport>> {
    output.header("Planned changes:")?;
    for line in plan.preview_lines(service.layout()) {
        output.bullet(&line)?;
    }
    for update in plan.updates() {
        debug!(%update, "Planned registry update");
    }

    if apply.dry_run {
        output.info("Dry run: nothing was changed")?;
        return Ok(None);
    }

    if !apply.yes {
        let question = format!("Do you want to {}?", plan.action().confirm_prompt());
        if !confirm(&question)? {
            output.warning("Cancelled, nothing was changed")?;
            return Ok(None);
        }
    }

    let report = service.apply(plan)?;
    report_skips(service, &report, output)?;
    Ok(Some(report))
}

/// Interactive yes/no, defaulting to yes.
pub fn ask(question: &str) -> CliResult<bool> {
    prompt::confirm(question, true)
}

fn report_skips(
    service: &ModuleService,
    report: &ApplyReport,
    output: &OutputManager,
) -> CliResult<()> {
    let layout = service.layout();
    for path in &report.skipped_existing {
        output.info(&format!("Kept existing {}", layout.display(path)))?;
    }
    for path in &report.skipped_renames {
        output.info(&format!("Not present, skipped {}", layout.display(path)))?;
    }
    Ok(())
}

/// Modules to choose from, or a warning when there are none.
pub fn pick_module(
    service: &ModuleService,
    question: &str,
    output: &OutputManager,
) -> CliResult<Option<String>> {
    let modules: Vec<String> = service
        .list_modules()?
        .into_iter()
        .map(|m| m.to_string())
        .collect();
    if modules.is_empty() {
        output.warning("No modules found. Create a module first.")?;
        return Ok(None);
    }
    Ok(Some(prompt::select(question, &modules)?))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use modgen_adapters::{MemoryFilesystem, MemoryRegistry, MemoryTemplateStore};
    use modgen_core::domain::ProjectLayout;

    use super::*;
    use crate::cli::{GlobalArgs, global::OutputFormat};

    struct Project {
        fs: MemoryFilesystem,
        modules: MemoryRegistry<ModuleName>,
        pages: MemoryRegistry<PageRecord>,
        service: ModuleService,
    }

    fn project() -> Project {
        let fs = MemoryFilesystem::new();
        let modules = MemoryRegistry::new();
        let pages = MemoryRegistry::new();
        let service = ModuleService::new(
            ProjectLayout::new("/proj"),
            Box::new(fs.clone()),
            Box::new(modules.clone()),
            Box::new(pages.clone()),
            Box::new(MemoryTemplateStore::new()),
            Box::new(SimpleRenderer::new()),
        );
        service.seed_templates().unwrap();
        Project {
            fs,
            modules,
            pages,
            service,
        }
    }

    fn quiet() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn declining_changes_nothing() {
        let p = project();
        let plan = p.service.plan_create_module("widgets").unwrap();
        let asked = RefCell::new(None);

        let report = confirm_and_apply(&p.service, &plan, ApplyArgs::default(), &quiet(), |q| {
            *asked.borrow_mut() = Some(q.to_string());
            Ok(false)
        })
        .unwrap();

        assert!(report.is_none());
        assert_eq!(
            asked.into_inner().as_deref(),
            Some("Do you want to create these files?")
        );
        assert!(p.fs.list_files().is_empty());
        assert!(p.modules.entries().is_empty());
        assert!(p.pages.entries().is_empty());
    }

    #[test]
    fn accepting_applies_the_plan() {
        let p = project();
        let plan = p.service.plan_create_module("widgets").unwrap();

        let report = confirm_and_apply(&p.service, &plan, ApplyArgs::default(), &quiet(), |_| {
            Ok(true)
        })
        .unwrap()
        .expect("applied");

        assert!(!report.written.is_empty());
        assert_eq!(p.modules.entries().len(), 1);
        assert_eq!(p.pages.entries().len(), 2);
    }

    #[test]
    fn yes_and_dry_run_never_ask() {
        let p = project();
        let plan = p.service.plan_create_module("widgets").unwrap();
        let never = |_: &str| -> CliResult<bool> { panic!("confirmation requested") };

        let dry = ApplyArgs {
            yes: false,
            dry_run: true,
        };
        assert!(
            confirm_and_apply(&p.service, &plan, dry, &quiet(), never)
                .unwrap()
                .is_none()
        );
        assert!(p.fs.list_files().is_empty());

        let yes = ApplyArgs {
            yes: true,
            dry_run: false,
        };
        assert!(
            confirm_and_apply(&p.service, &plan, yes, &quiet(), never)
                .unwrap()
                .is_some()
        );
        assert_eq!(p.modules.entries().len(), 1);
    }
}
