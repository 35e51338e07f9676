//! Implementation of the `modgen plugins` command.

use crate::{
    commands::plugin_service, config::AppConfig, error::CliResult, output::OutputManager,
};

pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let plugins = plugin_service(config)?.admin_plugins()?;

    if plugins.is_empty() {
        output.info("No plugins expose admin views")?;
        return Ok(());
    }

    output.header("Admin views:")?;
    for plugin in &plugins {
        let manifest = &plugin.manifest;
        let version = if manifest.version.is_empty() {
            String::new()
        } else {
            format!(" v{}", manifest.version)
        };
        output.print(&format!("  {} ({}{version})", manifest.label, manifest.name))?;
        for (path, label) in plugin.admin_links() {
            output.bullet(&format!("  {path}  {label}"))?;
        }
    }
    Ok(())
}
