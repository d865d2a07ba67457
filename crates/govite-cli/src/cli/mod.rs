//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "govite",
    bin_name = "govite",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{26a1} Go + Vite desktop app generator",
    long_about = "Govite scaffolds Go + Vite + React desktop application \
                  projects and manages modules inside them.",
    after_help = "EXAMPLES:\n\
        \x20 govite init my-app -m github.com/acme/my-app\n\
        \x20 govite install github.com/gin-gonic/gin\n\
        \x20 govite install-local ../shared-widgets\n\
        \x20 govite completions bash > /usr/share/bash-completion/completions/govite",
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
    /// Scaffold a new Go + Vite project.
    #[command(
        visible_alias = "i",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 govite init\n\
            \x20 govite init my-app\n\
            \x20 govite init my-app -m github.com/acme/my-app -p 3000 -b 9090"
    )]
    Init(InitArgs),

    /// Install a dependency via the project's package manager.
    #[command(
        about = "Install a module dependency",
        after_help = "EXAMPLES:\n\
            \x20 govite install github.com/gin-gonic/gin   # in a Go project\n\
            \x20 govite install axios                      # in a Node project"
    )]
    Install(InstallArgs),

    /// Remove a dependency via the project's package manager.
    #[command(
        about = "Uninstall a module dependency",
        after_help = "EXAMPLES:\n\
            \x20 govite uninstall github.com/gin-gonic/gin\n\
            \x20 govite uninstall axios"
    )]
    Uninstall(UninstallArgs),

    /// Copy a local module into the project, overwriting on conflict.
    #[command(
        name = "install-local",
        about = "Import a local module (overwrite allowed)",
        after_help = "EXAMPLES:\n\
            \x20 govite install-local ../shared-widgets\n\
            \x20 govite install-local /srv/modules/auth"
    )]
    InstallLocal(InstallLocalArgs),

    /// Copy a local module into the project, refusing to overwrite.
    #[command(
        name = "import-module",
        about = "Import a local module (strict, no overwrite)",
        after_help = "EXAMPLES:\n\
            \x20 govite import-module ../shared-widgets"
    )]
    ImportModule(ImportModuleArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 govite completions bash > ~/.local/share/bash-completion/completions/govite\n\
            \x20 govite completions zsh  > ~/.zfunc/_govite\n\
            \x20 govite completions fish > ~/.config/fish/completions/govite.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `govite init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name; also the directory created under the current directory.
    #[arg(value_name = "NAME", default_value = "my-app", help = "Project name")]
    pub name: String,

    /// Go module path for the generated root go.mod.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        help = "Go module path (defaults to the project name)"
    )]
    pub module: Option<String>,

    /// Project description used in README and package.json.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Project description"
    )]
    pub description: Option<String>,

    /// Author recorded in package.json.
    #[arg(short = 'a', long = "author", value_name = "AUTHOR", help = "Project author")]
    pub author: Option<String>,

    /// Frontend dev-server port.
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        help = "Frontend dev-server port"
    )]
    pub port: Option<u16>,

    /// Backend HTTP port.
    #[arg(
        short = 'b',
        long = "backend-port",
        value_name = "PORT",
        help = "Backend HTTP port"
    )]
    pub backend_port: Option<u16>,
}

// ── install / uninstall ───────────────────────────────────────────────────────

/// Arguments for `govite install`.
#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Module to install (Go module path or npm package name).
    #[arg(value_name = "MODULE", help = "Module to install")]
    pub module: String,
}

/// Arguments for `govite uninstall`.
#[derive(Debug, Args)]
pub struct UninstallArgs {
    /// Module to remove.
    #[arg(value_name = "MODULE", help = "Module to remove")]
    pub module: String,
}

// ── local imports ─────────────────────────────────────────────────────────────

/// Arguments for `govite install-local`.
#[derive(Debug, Args)]
pub struct InstallLocalArgs {
    /// Path to the local module directory.
    #[arg(value_name = "PATH", help = "Path to the local module")]
    pub path: PathBuf,
}

/// Arguments for `govite import-module`.
#[derive(Debug, Args)]
pub struct ImportModuleArgs {
    /// Path to the local module directory.
    #[arg(value_name = "PATH", help = "Path to the local module")]
    pub path: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `govite completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────
