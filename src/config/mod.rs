//! Configuration loading, parsing, and validation.
//!
//! - Lane settings schema in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//! - Local `.env` parsing in [`env_file`]
//!
//! # Example
//!
//! ```
//! use shiplane::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".shiplane")).unwrap();
//! fs::write(temp.path().join(".shiplane/config.yml"), "build:\n  flutter: fvm-flutter\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.build.flutter, "fvm-flutter");
//! ```

pub mod env_file;
pub mod loader;
pub mod schema;
pub mod validator;

pub use env_file::{EnvFileParser, DEFAULT_ENV_FILE};
pub use loader::{default_config_path, load_config, load_config_file, parse_config};
pub use schema::{BuildConfig, OutputMode, Settings, ShiplaneConfig, TargetConfig, TargetsConfig};
pub use validator::{validate, validate_config, ValidationError};
