//! Command-line interface for shiplane.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    BuildArgs, Cli, Commands, CompletionsArgs, ConfigArgs, DefinesArgs, DefinesFormat,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
