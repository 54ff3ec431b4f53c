//! Resolved bindings and their build-argument forms.

use serde::Serialize;
use std::fmt;

use crate::environment::ExecutionContext;
use crate::error::{Result, ShiplaneError};

use super::quote::quote_args;

/// Flag Flutter uses for compile-time definitions.
pub const DEFINE_FLAG: &str = "--dart-define";

/// A resolved `(key, value)` pair.
///
/// Only constructible with a non-empty key and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    key: String,
    value: String,
}

impl Binding {
    /// Create a binding, or `None` when either side is empty.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let value = value.into();
        if key.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self { key, value })
    }

    /// Bare key name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolved value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// `--dart-define=KEY=VALUE`, unquoted.
    pub fn token(&self) -> String {
        format!("{}={}={}", DEFINE_FLAG, self.key, self.value)
    }
}

/// The resolver's output: bindings in recognized-key order.
///
/// # Example
///
/// ```
/// use shiplane::defines::{Binding, DartDefines};
/// use shiplane::environment::ExecutionContext;
///
/// let defines = DartDefines::new(
///     ExecutionContext::Local,
///     Binding::new("SUPABASE_URL", "https://x.test").into_iter().collect(),
/// );
/// assert_eq!(defines.to_shell_string(), "--dart-define=SUPABASE_URL=https://x.test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DartDefines {
    context: ExecutionContext,
    #[serde(rename = "defines")]
    bindings: Vec<Binding>,
}

impl DartDefines {
    /// Wrap resolved bindings.
    pub fn new(context: ExecutionContext, bindings: Vec<Binding>) -> Self {
        Self { context, bindings }
    }

    /// An empty result for the given context.
    pub fn empty(context: ExecutionContext) -> Self {
        Self::new(context, Vec::new())
    }

    /// Context the bindings were resolved in.
    pub fn context(&self) -> ExecutionContext {
        self.context
    }

    /// Resolved bindings.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bare key names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(Binding::key)
    }

    /// Resolved values, for registering with an output masker.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(Binding::value)
    }

    /// One unquoted token per binding, ready to pass as argv.
    pub fn tokens(&self) -> Vec<String> {
        self.bindings.iter().map(Binding::token).collect()
    }

    /// Tokens quoted for a POSIX shell and joined with single spaces.
    ///
    /// Empty when there are no bindings.
    pub fn to_shell_string(&self) -> String {
        quote_args(&self.tokens())
    }

    /// Pretty JSON: `{"context": ..., "defines": [{"key": ..., "value": ...}]}`.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ShiplaneError::Other(e.into()))
    }
}

impl fmt::Display for DartDefines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(key: &str, value: &str) -> Binding {
        Binding::new(key, value).unwrap()
    }

    #[test]
    fn empty_value_is_not_a_binding() {
        assert!(Binding::new("SUPABASE_URL", "").is_none());
    }

    #[test]
    fn empty_key_is_not_a_binding() {
        assert!(Binding::new("", "value").is_none());
    }

    #[test]
    fn token_format() {
        assert_eq!(
            binding("SUPABASE_URL", "https://x.test").token(),
            "--dart-define=SUPABASE_URL=https://x.test"
        );
    }

    #[test]
    fn token_keeps_equals_in_value() {
        assert_eq!(
            binding("GEMINI_API_KEY", "abc==").token(),
            "--dart-define=GEMINI_API_KEY=abc=="
        );
    }

    #[test]
    fn empty_defines_render_as_empty_string() {
        let defines = DartDefines::empty(ExecutionContext::Local);
        assert_eq!(defines.to_shell_string(), "");
        assert!(defines.is_empty());
        assert!(defines.tokens().is_empty());
    }

    #[test]
    fn shell_string_joins_with_single_space() {
        let defines = DartDefines::new(
            ExecutionContext::Pipeline,
            vec![binding("SUPABASE_URL", "https://x.test"), binding("SUPABASE_ANON_KEY", "anon")],
        );
        assert_eq!(
            defines.to_shell_string(),
            "--dart-define=SUPABASE_URL=https://x.test --dart-define=SUPABASE_ANON_KEY=anon"
        );
        assert_eq!(defines.to_string(), defines.to_shell_string());
    }

    #[test]
    fn shell_string_quotes_values_with_spaces() {
        let defines = DartDefines::new(
            ExecutionContext::Local,
            vec![binding("GEMINI_API_KEY", "two words")],
        );
        assert_eq!(
            defines.to_shell_string(),
            "'--dart-define=GEMINI_API_KEY=two words'"
        );
    }

    #[test]
    fn tokens_stay_unquoted() {
        let defines = DartDefines::new(
            ExecutionContext::Local,
            vec![binding("GEMINI_API_KEY", "it's")],
        );
        assert_eq!(defines.tokens(), vec!["--dart-define=GEMINI_API_KEY=it's"]);
    }

    #[test]
    fn json_shape() {
        let defines = DartDefines::new(
            ExecutionContext::Pipeline,
            vec![binding("SUPABASE_URL", "https://x.test")],
        );
        let value: serde_json::Value = serde_json::from_str(&defines.to_json().unwrap()).unwrap();

        assert_eq!(value["context"], "pipeline");
        assert_eq!(value["defines"][0]["key"], "SUPABASE_URL");
        assert_eq!(value["defines"][0]["value"], "https://x.test");
    }

    #[test]
    fn keys_and_values_follow_binding_order() {
        let defines = DartDefines::new(
            ExecutionContext::Local,
            vec![binding("A", "1"), binding("B", "2")],
        );
        assert_eq!(defines.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(defines.values().collect::<Vec<_>>(), vec!["1", "2"]);
    }
}
