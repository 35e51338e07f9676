//! Implementation of the `modgen create` command.

use tracing::{info, instrument};

use crate::{
    cli::CreateArgs,
    commands::{ask, confirm_and_apply, module_service},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt,
};

#[instrument(skip_all)]
pub fn execute(args: CreateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = module_service(config)?;

    let raw = match args.name {
        Some(name) => name,
        None => prompt::text("Module name")?,
    };

    let plan = service.plan_create_module(&raw)?;

    if let Some(report) = confirm_and_apply(&service, &plan, args.apply, output, ask)? {
        info!(written = report.written.len(), "Module created");
        output.success(&plan.action().outcome())?;
    }
    Ok(())
}
