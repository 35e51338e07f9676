//! Interactive menu shown when `modgen` runs without a subcommand.

use tracing::debug;

use crate::{
    cli::{AddPageArgs, CreateArgs, DeleteArgs, ListArgs, RenameArgs},
    commands::{add_page, create, delete, list, rename},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    List,
    Create,
    Rename,
    Delete,
    AddPage,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::List,
        Action::Create,
        Action::Rename,
        Action::Delete,
        Action::AddPage,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::List => "List modules",
            Action::Create => "Create module",
            Action::Rename => "Rename module",
            Action::Delete => "Delete module",
            Action::AddPage => "Add page to module",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label)
    }
}

/// Ask for one action and run it with every argument prompted.
pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let labels: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
    let choice = prompt::select("What do you want to do?", &labels)?;
    let Some(action) = Action::from_label(&choice) else {
        return Ok(());
    };
    debug!(?action, "Menu choice");

    match action {
        Action::List => list::execute(ListArgs::default(), config, output),
        Action::Create => create::execute(CreateArgs::default(), config, output),
        Action::Rename => rename::execute(RenameArgs::default(), config, output),
        Action::Delete => delete::execute(DeleteArgs::default(), config, output),
        Action::AddPage => add_page::execute(AddPageArgs::default(), config, output),
    }
}
