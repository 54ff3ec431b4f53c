//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, DefinesArgs};
use crate::config::{load_config, validate, ShiplaneConfig};
use crate::error::{Result, ShiplaneError};
use crate::ui::{OutputMode, UserInterface};

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Load and validate the lane config, applying its default output mode.
///
/// Config problems are reported through `ui` and turned into exit code 2.
pub(crate) fn load_lane_config(
    project_root: &Path,
    config_override: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<std::result::Result<ShiplaneConfig, CommandResult>> {
    let config = match load_config(project_root, config_override).and_then(|c| {
        validate(&c)?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(
            e @ (ShiplaneError::ConfigParseError { .. }
            | ShiplaneError::ConfigValidationError { .. }),
        ) => {
            ui.error(&e.to_string());
            return Ok(Err(CommandResult::failure(2)));
        }
        Err(e) => return Err(e),
    };

    // Apply config default_output when no CLI flag was explicitly set
    if ui.output_mode() == OutputMode::Normal {
        ui.set_output_mode(config.settings.default_output.into());
    }

    Ok(Ok(config))
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_override: None,
        }
    }

    /// Use an explicit config file instead of `.shiplane/config.yml`.
    pub fn with_config_override(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Defines(args)) => {
                let cmd = super::defines::DefinesCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Build(args)) => {
                let cmd = super::build::BuildCommand::new(&self.project_root, args.clone())
                    .with_config_override(self.config_override.clone());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(&self.project_root, args.clone())
                    .with_config_override(self.config_override.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd =
                    super::defines::DefinesCommand::new(&self.project_root, DefinesArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
