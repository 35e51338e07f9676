//! Implementation of the `modgen rename` command.

use tracing::{info, instrument};

use crate::{
    cli::RenameArgs,
    commands::{ask, confirm_and_apply, module_service, pick_module},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt,
};

#[instrument(skip_all)]
pub fn execute(args: RenameArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = module_service(config)?;

    let old = match args.old {
        Some(old) => old,
        None => match pick_module(&service, "Module to rename", output)? {
            Some(old) => old,
            None => return Ok(()),
        },
    };
    let new = match args.new {
        Some(new) => new,
        None => prompt::text("New module name")?,
    };

    let plan = service.plan_rename_module(&old, &new)?;

    if let Some(report) = confirm_and_apply(&service, &plan, args.apply, output, ask)? {
        info!(renamed = report.renamed.len(), "Module renamed");
        output.success(&plan.action().outcome())?;
    }
    Ok(())
}
