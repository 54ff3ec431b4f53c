//! Secret masking.
//!
//! Resolved define values are credentials. Anything shiplane prints about a
//! build (dry-run command lines, streamed build output, errors) goes through
//! an [`OutputMasker`] first.

pub mod mask;

pub use mask::OutputMasker;
