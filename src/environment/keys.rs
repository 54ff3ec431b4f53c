//! Recognized configuration keys and where to find them.
//!
//! Both tables are plain data: adding a key or changing how a context names
//! its variables is a one-line edit here, not a change to the resolver.

use super::detection::ExecutionContext;

/// A configuration key the resolver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognizedKey {
    /// Bare name, used in the emitted define.
    pub name: &'static str,
    /// Short human description.
    pub description: &'static str,
}

/// Recognized keys in emission order.
pub const RECOGNIZED_KEYS: &[RecognizedKey] = &[
    RecognizedKey {
        name: "SUPABASE_URL",
        description: "Supabase project URL",
    },
    RecognizedKey {
        name: "SUPABASE_ANON_KEY",
        description: "Supabase public anon key",
    },
    RecognizedKey {
        name: "GEMINI_API_KEY",
        description: "Gemini API key",
    },
];

/// How a context names the source variable for a bare key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTemplate {
    /// `prefix + key`.
    Prefixed(&'static str),
    /// The key itself.
    Bare,
}

impl SourceTemplate {
    /// Source variable name for `key`.
    pub fn source_name(&self, key: &str) -> String {
        match self {
            Self::Prefixed(prefix) => format!("{}{}", prefix, key),
            Self::Bare => key.to_string(),
        }
    }
}

/// Prefix for secrets exposed to pipeline runs.
pub const PIPELINE_PREFIX: &str = "CI_";

/// Source naming per context.
pub const SOURCE_TEMPLATES: &[(ExecutionContext, SourceTemplate)] = &[
    (
        ExecutionContext::Pipeline,
        SourceTemplate::Prefixed(PIPELINE_PREFIX),
    ),
    (ExecutionContext::Local, SourceTemplate::Bare),
];

/// Look up the source template for a context.
pub fn template_for(context: ExecutionContext) -> SourceTemplate {
    SOURCE_TEMPLATES
        .iter()
        .find(|(ctx, _)| *ctx == context)
        .map(|(_, template)| *template)
        .unwrap_or(SourceTemplate::Bare)
}
