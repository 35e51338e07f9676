//! Implementation of the `modgen delete` command.

use tracing::{info, instrument};

use crate::{
    cli::DeleteArgs,
    commands::{ask, confirm_and_apply, module_service, pick_module},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Deleting an unregistered module reports "nothing to delete" and succeeds.
#[instrument(skip_all)]
pub fn execute(args: DeleteArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = module_service(config)?;

    let name = match args.name {
        Some(name) => name,
        None => match pick_module(&service, "Module to delete", output)? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    let plan = service.plan_delete_module(&name)?;
    if plan.is_empty() {
        output.info(&format!("Module '{name}' is not registered, nothing to delete"))?;
        return Ok(());
    }

    if let Some(report) = confirm_and_apply(&service, &plan, args.apply, output, ask)? {
        info!(removed = report.removed.len(), "Module deleted");
        output.success(&plan.action().outcome())?;
    }
    Ok(())
}
