//! # modgen
//!
//! Module and page scaffolding for route-based web projects.
//!
//! Startup: `.env`, argument parsing, logging, configuration, then one
//! command (or the interactive menu). Every failure ends in [`handle_error`].
//!
//! | Exit | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success, dry run, cancelled, or no-op     |
//! |  1   | Internal or I/O failure                   |
//! |  2   | Rejected input, name conflict, bad args   |
//! |  3   | Module not registered                     |
//! |  4   | Configuration or registry file unreadable |

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too, on stdout.
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("{e}");
        return ExitCode::from(1);
    }
    let verbose = cli.global.verbose > 0;
    debug!(?cli.command, "Arguments parsed");

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            };
            return handle_error(err, verbose);
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    match run(cli, config, output) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (config, output) = (&config, &output);
    let Some(command) = cli.command else {
        return commands::menu::execute(config, output);
    };

    match command {
        Commands::List(args) => commands::list::execute(args, config, output),
        Commands::Create(args) => commands::create::execute(args, config, output),
        Commands::Rename(args) => commands::rename::execute(args, config, output),
        Commands::Delete(args) => commands::delete::execute(args, config, output),
        Commands::AddPage(args) => commands::add_page::execute(args, config, output),
        Commands::Plugins => commands::plugins::execute(config, output),
        Commands::Init(args) => commands::init::execute(args, &cli.global, output),
        Commands::Config(cmd) => commands::config::execute(cmd, &cli.global, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Log `err`, print it with suggestions on stderr and pick the exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let text = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{text}");

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_comes_from_the_package() {
        assert_eq!(
            Cli::command().get_version(),
            Some(env!("CARGO_PKG_VERSION"))
        );
    }
}
