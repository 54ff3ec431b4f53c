//! Execution context detection.
//!
//! A run is either inside an automated pipeline or on a developer machine.
//! The decision is made once per invocation from a single environment
//! signal and never changes afterwards.

use serde::Serialize;
use std::fmt;

/// Environment variable that marks an automated pipeline run.
///
/// GitHub Actions, GitLab CI, CircleCI and most other hosted runners set it.
pub const PIPELINE_SIGNAL: &str = "CI";

/// Where the current run is happening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionContext {
    /// Automated, non-interactive pipeline. Values come from CI secrets.
    Pipeline,
    /// Developer machine. Values come from the local `.env` file.
    Local,
}

impl ExecutionContext {
    /// Lowercase name used in output and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pipeline => "pipeline",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detects the execution context from an environment signal.
///
/// # Example
///
/// ```
/// use shiplane::environment::{ContextDetector, ExecutionContext};
///
/// let detector = ContextDetector::new();
/// let context = detector.detect_with_env(|_| Err(std::env::VarError::NotPresent));
/// assert_eq!(context, ExecutionContext::Local);
/// ```
#[derive(Debug, Clone)]
pub struct ContextDetector {
    signal: String,
}

impl ContextDetector {
    /// Create a detector for the [`PIPELINE_SIGNAL`] variable.
    pub fn new() -> Self {
        Self::with_signal(PIPELINE_SIGNAL)
    }

    /// Create a detector for a different signal variable.
    pub fn with_signal(signal: impl Into<String>) -> Self {
        Self {
            signal: signal.into(),
        }
    }

    /// Name of the variable this detector checks.
    pub fn signal(&self) -> &str {
        &self.signal
    }

    /// Detect the context of the current process.
    pub fn detect(&self) -> ExecutionContext {
        self.detect_with_env(|key| std::env::var(key))
    }

    /// Detect with a custom env var lookup (for testing).
    ///
    /// The signal counts only when it is present and non-empty, so an
    /// exported-but-blank `CI=` still means a local run. A value that is not
    /// valid unicode is still a present value.
    pub fn detect_with_env<F>(&self, env_fn: F) -> ExecutionContext
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        match env_fn(&self.signal) {
            Ok(value) if !value.is_empty() => ExecutionContext::Pipeline,
            Err(std::env::VarError::NotUnicode(value)) if !value.is_empty() => {
                ExecutionContext::Pipeline
            }
            _ => ExecutionContext::Local,
        }
    }
}

impl Default for ContextDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Check whether the current process runs inside a pipeline.
pub fn is_pipeline() -> bool {
    ContextDetector::new().detect() == ExecutionContext::Pipeline
}
