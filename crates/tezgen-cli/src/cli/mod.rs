//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// The single positional argument is always the target name. Maintenance
/// actions are flags so that no word is reserved: `tezgen config` creates a
/// target called `config`.
#[derive(Debug, Parser)]
#[command(
    name    = "tezgen",
    bin_name = "tezgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a new Tez engine target",
    long_about = "tezgen creates the Runtime/Editor directory layout of a new \
                  Tez engine target and writes a starter CMakeLists.txt.",
    after_help = "EXAMPLES:\n\
        \x20 tezgen Renderer             # create ./Renderer\n\
        \x20 tezgen                      # prompt for the name\n\
        \x20 tezgen Audio --dry-run      # show what would be created\n\
        \x20 tezgen --config-get output.format\n\
        \x20 tezgen --completions bash > ~/.local/share/bash-completion/completions/tezgen",
    disable_help_subcommand = true,
)]
pub struct Cli {
    /// Flags available to every action.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Arguments of the default create action.
    #[command(flatten)]
    pub create: CreateArgs,

    /// Maintenance actions that replace the create action.
    #[command(flatten)]
    pub tools: ToolArgs,

    /// Overwrite an existing config file. Outside [`ToolArgs`] so it can
    /// accompany `--config-init`.
    #[arg(
        short = 'f',
        long = "force",
        requires = "config_init",
        help = "Overwrite existing configuration (with --config-init)"
    )]
    pub force: bool,
}

impl Cli {
    /// Split into the global flags and the action to run.
    pub fn into_parts(self) -> (GlobalArgs, Action) {
        let tools = self.tools;
        let action = if let Some(shell) = tools.completions {
            Action::Completions(shell)
        } else if let Some(key) = tools.config_get {
            Action::Config(ConfigAction::Get { key })
        } else if tools.config_list {
            Action::Config(ConfigAction::List)
        } else if tools.config_path {
            Action::Config(ConfigAction::Path)
        } else if tools.config_init {
            Action::Config(ConfigAction::Init { force: self.force })
        } else {
            Action::Create(self.create)
        };
        (self.global, action)
    }
}

// ── create (default action) ──────────────────────────────────────────────────

/// Arguments for `tezgen [NAME]`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Target name, used verbatim as the directory name and CMake project
    /// name.  Prompted for on stdin when omitted.
    #[arg(
        value_name = "NAME",
        help = "Name of the new target (prompted for when omitted)"
    )]
    pub name: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── maintenance flags ─────────────────────────────────────────────────────────

/// Flags for shell completions and configuration management.
///
/// At most one of them may be given, and none together with a target name.
#[derive(Debug, Args)]
#[group(id = "tool", multiple = false, conflicts_with_all = ["name", "dry_run"])]
pub struct ToolArgs {
    /// Print a completion script for the given shell.
    #[arg(
        long = "completions",
        value_enum,
        value_name = "SHELL",
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,

    /// Print the value of a configuration key.
    #[arg(
        long = "config-get",
        value_name = "KEY",
        help = "Print one configuration value, e.g. output.format"
    )]
    pub config_get: Option<String>,

    /// Print all configuration values.
    #[arg(long = "config-list", help = "Print the effective configuration")]
    pub config_list: bool,

    /// Print the path to the default configuration file.
    #[arg(long = "config-path", help = "Print the default config file location")]
    pub config_path: bool,

    /// Write a configuration file holding the defaults.
    #[arg(long = "config-init", help = "Write a default config file")]
    pub config_init: bool,
}

/// What a single invocation does.
#[derive(Debug)]
pub enum Action {
    /// Scaffold a target (the default).
    Create(CreateArgs),
    /// Print a completion script.
    Completions(Shell),
    /// Inspect or create the configuration file.
    Config(ConfigAction),
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Configuration management actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the value of a dotted key, e.g. `output.format`.
    Get { key: String },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
    /// Write a configuration file holding the defaults.
    Init { force: bool },
}

// ── tests ─────────────────────────────────────────────────────────────────────
