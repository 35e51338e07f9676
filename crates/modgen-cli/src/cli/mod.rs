//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modgen",
    bin_name = "modgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold modules and pages for route-based web projects",
    long_about = "modgen creates, renames and deletes modules and adds pages to them, \
                  keeping the module and page registries in step with the route tree. \
                  Run without a subcommand for an interactive menu.",
    after_help = "EXAMPLES:\n\
        \x20 modgen                         # interactive menu\n\
        \x20 modgen create widgets\n\
        \x20 modgen add-page list -m widgets --auth --page-server\n\
        \x20 modgen rename widgets gadgets --yes\n\
        \x20 modgen list --pages --format json",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; the interactive menu runs when absent.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered modules or pages.
    #[command(
        visible_alias = "ls",
        about = "List modules (or pages)",
        after_help = "EXAMPLES:\n\
            \x20 modgen list\n\
            \x20 modgen list --pages\n\
            \x20 modgen list --format json"
    )]
    List(ListArgs),

    /// Create a module with its default pages and definition file.
    #[command(
        about = "Create a module",
        after_help = "EXAMPLES:\n\
            \x20 modgen create widgets\n\
            \x20 modgen create \"Stock Items\" --yes\n\
            \x20 modgen create widgets --dry-run"
    )]
    Create(CreateArgs),

    /// Rename a module's routes, admin routes and definition file.
    #[command(
        about = "Rename a module",
        after_help = "EXAMPLES:\n\
            \x20 modgen rename widgets gadgets\n\
            \x20 modgen rename            # pick interactively"
    )]
    Rename(RenameArgs),

    /// Delete a module's routes, admin routes and definition file.
    #[command(
        about = "Delete a module",
        after_help = "EXAMPLES:\n\
            \x20 modgen delete widgets\n\
            \x20 modgen delete widgets --yes"
    )]
    Delete(DeleteArgs),

    /// Add a page to a registered module.
    #[command(
        name = "add-page",
        visible_alias = "addpage",
        about = "Add a page to a module",
        after_help = "EXAMPLES:\n\
            \x20 modgen add-page list -m widgets -d \"All widgets\" --auth\n\
            \x20 modgen add-page \"[id]\" -m widgets --page-server\n\
            \x20 modgen add-page          # prompt for every field"
    )]
    AddPage(AddPageArgs),

    /// Show the admin views contributed by plugins.
    #[command(about = "List plugin admin views")]
    Plugins,

    /// Write a default `.modgen.toml`.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 modgen init\n\
            \x20 modgen init --force"
    )]
    Init(InitArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modgen config get layout.routes_dir\n\
            \x20 modgen config list\n\
            \x20 modgen config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modgen completions bash > ~/.local/share/bash-completion/completions/modgen\n\
            \x20 modgen completions zsh  > ~/.zfunc/_modgen\n\
            \x20 modgen completions fish > ~/.config/fish/completions/modgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Flags shared by every command that changes the project.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct ApplyArgs {
    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Apply without asking for confirmation")]
    pub yes: bool,

    /// Preview the plan without touching anything.
    #[arg(long = "dry-run", help = "Show the planned changes and exit")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `modgen list`.
#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// List page records instead of module names.
    #[arg(long = "pages", help = "List pages instead of modules")]
    pub pages: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// One entry per line.
    List,
    /// JSON array.
    Json,
}

// ── create / rename / delete ──────────────────────────────────────────────────

/// Arguments for `modgen create`.
#[derive(Debug, Default, Args)]
pub struct CreateArgs {
    /// Module name; normalized to a lowercase slug.
    #[arg(value_name = "NAME", help = "Module name (prompted if omitted)")]
    pub name: Option<String>,

    #[command(flatten)]
    pub apply: ApplyArgs,
}

/// Arguments for `modgen rename`.
#[derive(Debug, Default, Args)]
pub struct RenameArgs {
    #[arg(value_name = "OLD", help = "Module to rename (selected if omitted)")]
    pub old: Option<String>,

    #[arg(value_name = "NEW", help = "New module name (prompted if omitted)")]
    pub new: Option<String>,

    #[command(flatten)]
    pub apply: ApplyArgs,
}

/// Arguments for `modgen delete`.
#[derive(Debug, Default, Args)]
pub struct DeleteArgs {
    #[arg(value_name = "NAME", help = "Module to delete (selected if omitted)")]
    pub name: Option<String>,

    #[command(flatten)]
    pub apply: ApplyArgs,
}

// ── add-page ──────────────────────────────────────────────────────────────────

/// Arguments for `modgen add-page`.
///
/// Without `PAGE` every field is prompted for.
#[derive(Debug, Default, Args)]
pub struct AddPageArgs {
    /// Page route below the module, e.g. `list`, `[id]`, `settings/advanced`.
    #[arg(value_name = "PAGE", help = "Page route (use 'index' for the module root)")]
    pub page: Option<String>,

    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        help = "Target module (selected if omitted)"
    )]
    pub module: Option<String>,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Page description"
    )]
    pub description: Option<String>,

    #[arg(long = "auth", help = "Require authentication")]
    pub auth: bool,

    #[arg(long = "page-server", help = "Also create +page.server.ts")]
    pub page_server: bool,

    #[arg(long = "server", help = "Also create +server.ts")]
    pub server: bool,

    #[command(flatten)]
    pub apply: ApplyArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `modgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `modgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `modgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `layout.routes_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
