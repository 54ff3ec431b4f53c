//! Defines command implementation.
//!
//! `shiplane defines` prints the resolved `--dart-define` arguments on
//! stdout. Diagnostics go to stderr, so the output can be captured with
//! `$(shiplane defines)`. It never fails: missing sources print a warning
//! and an empty line.

use std::path::{Path, PathBuf};

use crate::cli::args::{DefinesArgs, DefinesFormat};
use crate::defines::DartDefines;
use crate::environment::DefineResolver;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The defines command implementation.
pub struct DefinesCommand {
    project_root: PathBuf,
    args: DefinesArgs,
}

impl DefinesCommand {
    /// Create a new defines command.
    pub fn new(project_root: &Path, args: DefinesArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn print(&self, defines: &DartDefines, ui: &mut dyn UserInterface) -> Result<()> {
        match self.args.format {
            DefinesFormat::Shell => ui.message(&defines.to_shell_string()),
            DefinesFormat::Lines => {
                for token in defines.tokens() {
                    ui.message(&token);
                }
            }
            DefinesFormat::Json => ui.message(&defines.to_json()?),
        }
        Ok(())
    }
}

impl Command for DefinesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let defines = DefineResolver::new(&self.project_root)
            .with_context(self.args.context)
            .resolve(ui);

        self.print(&defines, ui)?;

        Ok(CommandResult::success())
    }
}
