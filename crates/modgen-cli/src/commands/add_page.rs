//! Implementation of the `modgen add-page` command.
//!
//! With `PAGE` on the command line the flags are taken as given. Without it
//! every field is prompted for.

use tracing::{info, instrument};

use modgen_core::application::ModuleService;
use modgen_core::domain::{ModuleName, PageRequest, PageSlug};

use crate::{
    cli::AddPageArgs,
    commands::{ask, confirm_and_apply, module_service, pick_module},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

#[instrument(skip_all)]
pub fn execute(args: AddPageArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = module_service(config)?;

    let Some(request) = build_request(&service, &args, output)? else {
        return Ok(());
    };

    let plan = service.plan_add_page(&request)?;

    if let Some(report) = confirm_and_apply(&service, &plan, args.apply, output, ask)? {
        info!(written = report.written.len(), "Page added");
        output.success(&plan.action().outcome())?;
    }
    Ok(())
}

fn build_request(
    service: &ModuleService,
    args: &AddPageArgs,
    output: &OutputManager,
) -> CliResult<Option<PageRequest>> {
    let module = match &args.module {
        Some(module) => module.clone(),
        None => match pick_module(service, "Module", output)? {
            Some(module) => module,
            None => return Ok(None),
        },
    };
    let module = ModuleName::parse(&module).map_err(|e| CliError::Core(e.into()))?;

    let interactive = args.page.is_none();
    let page = match &args.page {
        Some(page) => page.clone(),
        None => prompt::text("Page route (e.g. index, list, [id], settings/advanced)")?,
    };
    let page = PageSlug::parse(&page).map_err(|e| CliError::Core(e.into()))?;

    let mut request = PageRequest::new(module, page);
    request.description = match &args.description {
        Some(description) => description.clone(),
        None if interactive => prompt::text("Description")?,
        None => String::new(),
    };

    if interactive {
        request.auth = prompt::confirm("Require authentication?", true)?;
        request.with_page_server = prompt::confirm("Create a page server file?", true)?;
        request.with_server = prompt::confirm("Create an endpoint server file?", false)?;
    } else {
        request.auth = args.auth;
        request.with_page_server = args.page_server;
        request.with_server = args.server;
    }

    Ok(Some(request))
}
