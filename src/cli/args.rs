//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::environment::ExecutionContext;
use crate::lane::BuildTarget;

/// shiplane - Dart defines and release builds for Flutter CI lanes.
#[derive(Debug, Parser)]
#[command(name = "shiplane")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .shiplane/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print --dart-define arguments (default if no command specified)
    Defines(DefinesArgs),

    /// Run a release flutter build with resolved dart defines
    Build(BuildArgs),

    /// Show effective lane configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// How `defines` prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DefinesFormat {
    /// Shell-quoted tokens on one line
    #[default]
    Shell,
    /// One unquoted token per line
    Lines,
    /// JSON object with context and key/value pairs
    Json,
}

/// Arguments for the `defines` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DefinesArgs {
    /// Force the execution context instead of detecting it from CI
    #[arg(long, value_enum, value_name = "CONTEXT")]
    pub context: Option<ExecutionContext>,

    /// Output format
    #[arg(long, value_enum, default_value_t = DefinesFormat::Shell)]
    pub format: DefinesFormat,
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, clap::Args)]
pub struct BuildArgs {
    /// Platform to build
    #[arg(value_enum)]
    pub target: BuildTarget,

    /// Force the execution context instead of detecting it from CI
    #[arg(long, value_enum, value_name = "CONTEXT")]
    pub context: Option<ExecutionContext>,

    /// Print the build command (secrets masked) without running it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
