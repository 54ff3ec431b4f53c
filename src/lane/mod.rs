//! Build lanes.
//!
//! A lane feeds the resolved dart defines into `flutter build`. Signing,
//! dependency installation and store upload stay with the calling pipeline.

pub mod build;

pub use build::{BuildPlan, BuildTarget};
