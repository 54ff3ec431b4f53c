//! Dart define bindings and their command-line forms.
//!
//! - [`Binding`] - a resolved `(key, value)` pair
//! - [`DartDefines`] - ordered bindings with argv, shell and JSON renderings
//! - [`quote_arg`] / [`quote_args`] - POSIX quoting used by the shell rendering

pub mod binding;
pub mod quote;

pub use binding::{Binding, DartDefines, DEFINE_FLAG};
pub use quote::{quote_arg, quote_args};
