//! Build command implementation.
//!
//! `shiplane build <ios|macos>` resolves dart defines and runs a release
//! `flutter build` with them. Secret values never reach the terminal: the
//! command line and streamed build output are masked.

use std::path::{Path, PathBuf};

use crate::cli::args::BuildArgs;
use crate::environment::DefineResolver;
use crate::error::Result;
use crate::lane::BuildPlan;
use crate::secrets::OutputMasker;
use crate::ui::UserInterface;

use super::dispatcher::{load_lane_config, Command, CommandResult};

/// The build command implementation.
pub struct BuildCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(project_root: &Path, args: BuildArgs) -> Self {
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

    /// Get the command arguments.
    pub fn args(&self) -> &BuildArgs {
        &self.args
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config =
            match load_lane_config(&self.project_root, self.config_override.as_deref(), ui)? {
                Ok(config) => config,
                Err(failure) => return Ok(failure),
            };

        let target = self.args.target;
        ui.show_header(&format!("{} release build", target));

        let defines = DefineResolver::new(&self.project_root)
            .with_context(self.args.context)
            .resolve(ui);

        let plan = BuildPlan::new(target, &config.build, &defines, &self.project_root);
        let masker = OutputMasker::for_defines(&defines);

        if self.args.dry_run {
            ui.info("Running in dry-run mode, build not started");
            ui.message(&plan.display_masked(&masker));
            return Ok(CommandResult::success());
        }

        ui.info(&format!("Running {}", plan.display_masked(&masker)));
        plan.run(&masker)?;
        ui.success(&format!("{} build complete", target));

        Ok(CommandResult::success())
    }
}
