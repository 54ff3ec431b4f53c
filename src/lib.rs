//! Shiplane - Dart defines and release builds for Flutter CI lanes.
//!
//! Shiplane works out whether it is running inside a CI pipeline or on a
//! developer machine, reads the app's runtime keys from the matching source
//! (`CI_`-prefixed pipeline variables or the project's `.env` file) and turns
//! them into `--dart-define=KEY=VALUE` arguments for `flutter build`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Lane configuration and `.env` parsing
//! - [`defines`] - Dart define bindings and their output forms
//! - [`environment`] - Execution context detection and key resolution
//! - [`error`] - Error types and result aliases
//! - [`lane`] - Release build planning and execution
//! - [`secrets`] - Output masking for secret values
//! - [`shell`] - Process execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use shiplane::environment::{resolve_bindings, ExecutionContext, SourceTable};
//!
//! let mut values = HashMap::new();
//! values.insert("SUPABASE_URL".to_string(), "https://x.test".to_string());
//! values.insert("GEMINI_API_KEY".to_string(), String::new());
//!
//! let table = SourceTable::from_map(ExecutionContext::Local, values);
//! let bindings = resolve_bindings(&table);
//!
//! assert_eq!(bindings.len(), 1);
//! assert_eq!(bindings[0].token(), "--dart-define=SUPABASE_URL=https://x.test");
//! ```

pub mod cli;
pub mod config;
pub mod defines;
pub mod environment;
pub mod error;
pub mod lane;
pub mod secrets;
pub mod shell;
pub mod ui;

pub use error::{Result, ShiplaneError};
