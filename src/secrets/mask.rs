//! Output masking for resolved secret values.

use crate::defines::DartDefines;

/// Replaces registered secret values in text.
///
/// Longer secrets are replaced first, so a secret that contains another
/// one is never left half-masked.
///
/// # Example
///
/// ```
/// use shiplane::secrets::OutputMasker;
///
/// let mut masker = OutputMasker::new();
/// masker.add_secret("anon-key-123");
///
/// let output = masker.mask("--dart-define=SUPABASE_ANON_KEY=anon-key-123");
/// assert_eq!(output, "--dart-define=SUPABASE_ANON_KEY=[REDACTED]");
/// ```
#[derive(Debug, Clone)]
pub struct OutputMasker {
    /// Registered secrets, longest first.
    secrets: Vec<String>,
    /// The mask string to use.
    mask: String,
}

impl OutputMasker {
    /// Create a new masker with default mask string.
    pub fn new() -> Self {
        Self::with_mask("[REDACTED]")
    }

    /// Create a masker with a custom mask string.
    pub fn with_mask(mask: impl Into<String>) -> Self {
        Self {
            secrets: Vec::new(),
            mask: mask.into(),
        }
    }

    /// Create a masker for every value in a define set.
    pub fn for_defines(defines: &DartDefines) -> Self {
        let mut masker = Self::new();
        masker.add_secrets(defines.values());
        masker
    }

    /// Register a secret value to be masked.
    ///
    /// Empty strings and duplicates are ignored.
    pub fn add_secret(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() || self.secrets.contains(&value) {
            return;
        }
        self.secrets.push(value);
        self.secrets.sort_by_key(|s| std::cmp::Reverse(s.len()));
    }

    /// Register multiple secret values.
    pub fn add_secrets(&mut self, values: impl IntoIterator<Item = impl Into<String>>) {
        for value in values {
            self.add_secret(value);
        }
    }

    /// Mask any secret values in the given string.
    pub fn mask(&self, input: &str) -> String {
        let mut result = input.to_string();
        for secret in &self.secrets {
            result = result.replace(secret.as_str(), &self.mask);
        }
        result
    }

    /// Get the number of registered secrets.
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }
}

impl Default for OutputMasker {
    fn default() -> Self {
        Self::new()
    }
}
