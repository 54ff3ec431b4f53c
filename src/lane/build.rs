//! `flutter build` plans for iOS and macOS.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::BuildConfig;
use crate::defines::{quote_args, DartDefines};
use crate::error::{Result, ShiplaneError};
use crate::secrets::OutputMasker;
use crate::shell::{execute_streaming_args, CommandOptions, OutputCallback, OutputLine};

/// Platforms the lane can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    /// App Store archive (`flutter build ipa`).
    Ios,
    /// macOS application bundle (`flutter build macos`).
    Macos,
}

impl BuildTarget {
    /// `flutter build` subcommand for this target.
    pub fn subcommand(&self) -> &'static str {
        match self {
            Self::Ios => "ipa",
            Self::Macos => "macos",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Macos => "macos",
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved build invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    target: BuildTarget,
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
}

impl BuildPlan {
    /// Assemble the argv for `target`.
    ///
    /// Order: `build <subcommand> --release`, global extra args, target
    /// extra args, then one `--dart-define` token per binding.
    pub fn new(
        target: BuildTarget,
        config: &BuildConfig,
        defines: &DartDefines,
        project_root: &Path,
    ) -> Self {
        let target_config = match target {
            BuildTarget::Ios => &config.targets.ios,
            BuildTarget::Macos => &config.targets.macos,
        };

        let mut args = vec![
            "build".to_string(),
            target.subcommand().to_string(),
            "--release".to_string(),
        ];
        args.extend(config.extra_args.iter().cloned());
        args.extend(target_config.extra_args.iter().cloned());
        args.extend(defines.tokens());

        Self {
            target,
            program: config.flutter.clone(),
            args,
            cwd: project_root.to_path_buf(),
        }
    }

    pub fn target(&self) -> BuildTarget {
        self.target
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Shell-quoted command line with secrets replaced.
    ///
    /// Masks each argument before quoting so escaped quotes inside a value
    /// cannot hide it from the masker.
    pub fn display_masked(&self, masker: &OutputMasker) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().map(|arg| masker.mask(arg)));
        quote_args(&parts)
    }

    /// Run the build, streaming masked output to stderr.
    pub fn run(&self, masker: &OutputMasker) -> Result<()> {
        let options = CommandOptions {
            cwd: Some(self.cwd.clone()),
        };

        let line_masker = masker.clone();
        let callback: OutputCallback = Box::new(move |line| match line {
            OutputLine::Stdout(text) | OutputLine::Stderr(text) => {
                eprintln!("{}", line_masker.mask(&text));
            }
        });

        tracing::debug!("Running {}", self.display_masked(masker));
        let result = execute_streaming_args(&self.program, &self.args, &options, callback)
            .map_err(|e| mask_error(e, masker))?;

        if result.success {
            tracing::debug!("{} build finished in {:?}", self.target, result.duration);
            Ok(())
        } else {
            Err(ShiplaneError::CommandFailed {
                command: self.display_masked(masker),
                code: result.exit_code,
            })
        }
    }
}

fn mask_error(err: ShiplaneError, masker: &OutputMasker) -> ShiplaneError {
    match err {
        ShiplaneError::CommandFailed { command, code } => ShiplaneError::CommandFailed {
            command: masker.mask(&command),
            code,
        },
        other => other,
    }
}
