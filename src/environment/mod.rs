//! Execution context detection and dart define resolution.
//!
//! The resolution chain is:
//!
//! 1. Explicit `--context` flag
//! 2. Detection: `CI` set and non-empty means pipeline, anything else local
//! 3. Pipeline reads `CI_<KEY>` variables, local reads `<project>/.env`
//! 4. Recognized keys with non-empty values become bindings, in table order

pub mod detection;
pub mod keys;
pub mod resolver;

pub use detection::{is_pipeline, ContextDetector, ExecutionContext, PIPELINE_SIGNAL};
pub use keys::{RecognizedKey, SourceTemplate, PIPELINE_PREFIX, RECOGNIZED_KEYS};
pub use resolver::{resolve_bindings, DefineResolver, SourceTable};
