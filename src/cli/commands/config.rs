//! Config command implementation.
//!
//! The `shiplane config` command shows the effective lane configuration,
//! defaults included.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::default_config_path;
use crate::error::{Result, ShiplaneError};
use crate::ui::UserInterface;

use super::dispatcher::{load_lane_config, Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: None,
            args,
        }
    }

    /// Use an explicit config file.
    pub fn with_config_override(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    fn source_path(&self) -> PathBuf {
        self.config_override
            .clone()
            .unwrap_or_else(|| default_config_path(&self.project_root))
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config =
            match load_lane_config(&self.project_root, self.config_override.as_deref(), ui)? {
                Ok(config) => config,
                Err(failure) => return Ok(failure),
            };

        let source = self.source_path();
        if source.exists() {
            ui.info(&format!("# {}", source.display()));
        } else {
            ui.info("# defaults (no config file)");
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| ShiplaneError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let yaml =
                serde_yaml::to_string(&config).map_err(|e| ShiplaneError::Other(e.into()))?;
            ui.message(yaml.trim_end());
        }

        Ok(CommandResult::success())
    }
}
