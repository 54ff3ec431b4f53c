//! Configuration validation rules.
//!
//! This module validates lane configuration for correctness:
//! - The flutter executable must not be empty
//! - Extra args must not carry their own dart defines
//! - Extra args must not switch the build out of release mode

use crate::config::schema::ShiplaneConfig;
use crate::error::{Result, ShiplaneError};
use regex::Regex;
use std::sync::LazyLock;

static DEFINE_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--dart-define(-from-file)?(=|$)").unwrap());

static MODE_ARG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^--(debug|profile)$").unwrap());

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
///
/// Collects every error rather than stopping at the first one.
pub fn validate_config(config: &ShiplaneConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.build.flutter.trim().is_empty() {
        errors.push(ValidationError {
            rule: "empty-executable".to_string(),
            message: "build.flutter must name an executable".to_string(),
        });
    }

    let scopes = [
        ("build.extra_args", &config.build.extra_args),
        ("build.targets.ios.extra_args", &config.build.targets.ios.extra_args),
        (
            "build.targets.macos.extra_args",
            &config.build.targets.macos.extra_args,
        ),
    ];

    for (scope, args) in scopes {
        errors.extend(validate_extra_args(scope, args));
    }

    errors
}

fn validate_extra_args(scope: &str, args: &[String]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for arg in args {
        if DEFINE_ARG.is_match(arg) {
            errors.push(ValidationError {
                rule: "define-in-extra-args".to_string(),
                message: format!(
                    "{} contains '{}'; dart defines are resolved from CI secrets or .env",
                    scope, arg
                ),
            });
        }
        if MODE_ARG.is_match(arg) {
            errors.push(ValidationError {
                rule: "non-release-mode".to_string(),
                message: format!("{} contains '{}'; lane builds always use --release", scope, arg),
            });
        }
    }

    errors
}

/// Validate and return a single error joining every message.
pub fn validate(config: &ShiplaneConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(ShiplaneError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&ShiplaneConfig::default()).is_ok());
    }

    #[test]
    fn rejects_empty_executable() {
        let mut config = ShiplaneConfig::default();
        config.build.flutter = "  ".to_string();

        let errors = validate_config(&config);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "empty-executable");
    }

    #[test]
    fn rejects_dart_define_in_extra_args() {
        let mut config = ShiplaneConfig::default();
        config.build.targets.ios.extra_args = vec!["--dart-define=FOO=bar".to_string()];

        let errors = validate_config(&config);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "define-in-extra-args");
        assert!(errors[0].message.contains("build.targets.ios.extra_args"));
    }

    #[test]
    fn rejects_dart_define_from_file() {
        let mut config = ShiplaneConfig::default();
        config.build.extra_args = vec!["--dart-define-from-file=env.json".to_string()];

        assert_eq!(validate_config(&config)[0].rule, "define-in-extra-args");
    }

    #[test]
    fn allows_flags_that_only_share_a_prefix() {
        let mut config = ShiplaneConfig::default();
        config.build.extra_args = vec!["--dart-defines-file-note".to_string()];

        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn rejects_debug_and_profile_modes() {
        let mut config = ShiplaneConfig::default();
        config.build.extra_args = vec!["--debug".to_string()];
        config.build.targets.macos.extra_args = vec!["--profile".to_string()];

        let errors = validate_config(&config);

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.rule == "non-release-mode"));
    }

    #[test]
    fn validate_joins_messages() {
        let mut config = ShiplaneConfig::default();
        config.build.flutter = String::new();
        config.build.extra_args = vec!["--debug".to_string()];

        let err = validate(&config).unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("build.flutter"));
        assert!(msg.contains("--debug"));
    }
}
