//! Lane configuration schema.
//!
//! Mirrors `.shiplane/config.yml`. Every field has a default so a project
//! without a config file still gets a working lane.

use serde::{Deserialize, Serialize};

/// Root of `.shiplane/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShiplaneConfig {
    /// Global settings.
    pub settings: Settings,

    /// Flutter build settings.
    pub build: BuildConfig,
}

/// Global settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Output mode used when no `--verbose`/`--quiet` flag is given.
    pub default_output: OutputMode,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

/// Settings for the `flutter build` invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Flutter executable (name on PATH or absolute path).
    pub flutter: String,

    /// Arguments appended after `--release` for every target.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_args: Vec<String>,

    /// Per-target settings.
    pub targets: TargetsConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            flutter: "flutter".to_string(),
            extra_args: Vec::new(),
            targets: TargetsConfig::default(),
        }
    }
}

/// Per-target build settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetsConfig {
    pub ios: TargetConfig,
    pub macos: TargetConfig,
}

/// Settings for a single build target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    /// Arguments appended after the global `extra_args`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_args: Vec<String>,
}
