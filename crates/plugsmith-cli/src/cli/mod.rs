//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "plugsmith",
    bin_name = "plugsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate PluginCore plugin projects",
    long_about = "plugsmith creates a C++ plugin project (and optionally a companion \
                  model library) inside a PluginCore workspace: CMake build files, \
                  the plugin entry point with its C ABI, and a build script.",
    after_help = "EXAMPLES:\n\
        \x20 plugsmith new\n\
        \x20 plugsmith new --name Audio --yes\n\
        \x20 plugsmith new --name Net --model-name NetState --dry-run\n\
        \x20 plugsmith completions bash > /usr/share/bash-completion/completions/plugsmith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new plugin project.
    #[command(
        visible_alias = "n",
        about = "Create a new plugin project",
        after_help = "Values not given as flags are prompted for; --yes takes the defaults.\n\n\
            EXAMPLES:\n\
            \x20 plugsmith new\n\
            \x20 plugsmith new --name Audio --class AudioPlugin --no-model --yes\n\
            \x20 plugsmith new --name Net --model-name NetState --model-class NetStateModel"
    )]
    New(NewArgs),

    /// Print the workspace a directory belongs to.
    #[command(
        about = "Locate the enclosing workspace",
        after_help = "EXAMPLES:\n\
            \x20 plugsmith locate\n\
            \x20 plugsmith locate PluginsSource/Audio/src"
    )]
    Locate(LocateArgs),

    /// Initialise a plugsmith configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 plugsmith init\n\
            \x20 plugsmith init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 plugsmith completions bash > ~/.local/share/bash-completion/completions/plugsmith\n\
            \x20 plugsmith completions zsh  > ~/.zfunc/_plugsmith\n\
            \x20 plugsmith completions fish > ~/.config/fish/completions/plugsmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the plugsmith configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 plugsmith config get remote.tag\n\
            \x20 plugsmith config list\n\
            \x20 plugsmith config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `plugsmith new`.
#[derive(Debug, Default, Args)]
pub struct NewArgs {
    /// Plugin project name; also the library and directory name.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// C++ class implementing the plugin interface.
    #[arg(long = "class", value_name = "CLASS")]
    pub class: Option<String>,

    /// Generate a companion model library.
    #[arg(long = "model", overrides_with = "no_model")]
    pub model: bool,

    /// Do not generate a model library.
    #[arg(
        long = "no-model",
        overrides_with = "model",
        conflicts_with_all = ["model_name", "model_class"]
    )]
    pub no_model: bool,

    /// Model project name (implies --model).
    #[arg(long = "model-name", value_name = "NAME")]
    pub model_name: Option<String>,

    /// C++ class of the model (implies --model).
    #[arg(long = "model-class", value_name = "CLASS")]
    pub model_class: Option<String>,

    /// Workspace directory, or any directory inside it.
    #[arg(
        short = 'w',
        long = "workspace",
        value_name = "DIR",
        help = "Search for the workspace from DIR instead of the current directory"
    )]
    pub workspace: Option<PathBuf>,

    /// Skip prompts and the confirmation, taking defaults.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Accept defaults and create immediately"
    )]
    pub yes: bool,

    /// Overwrite existing project directories.
    #[arg(long = "force", help = "Overwrite existing project directories")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

impl NewArgs {
    /// Model choice made on the command line, if any.
    pub fn model_choice(&self) -> Option<bool> {
        if self.no_model {
            Some(false)
        } else if self.model || self.model_name.is_some() || self.model_class.is_some() {
            Some(true)
        } else {
            None
        }
    }
}

// ── locate ────────────────────────────────────────────────────────────────────

/// Arguments for `plugsmith locate`.
#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Directory to start from (default: current directory).
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `plugsmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `plugsmith completions`.
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

/// Subcommands for `plugsmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `remote.tag`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
