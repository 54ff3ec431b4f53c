//! Local `.env` file parsing.
//!
//! Reads `KEY=VALUE` lines the way the local lane expects them: values are
//! taken literally, with no unquoting or interpolation.

use std::collections::HashMap;

/// Default location of the local env file, relative to the project root.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Parses env files into a map of variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Empty: `KEY=` (kept in the map, callers decide what empty means)
/// - Comments: `# This is a comment`, also after leading whitespace
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// Lines without `=` are skipped. When a key repeats, the last line wins.
///
/// # Example
///
/// ```
/// use shiplane::config::EnvFileParser;
///
/// let content = r#"
/// # Supabase project
/// SUPABASE_URL=https://x.test
/// EMPTY=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("SUPABASE_URL"), Some(&"https://x.test".to_string()));
/// assert_eq!(vars.get("EMPTY"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse an env file content string into a map of variables.
    pub fn parse(content: &str) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        vars
    }

    /// Split a single line on the first `=`.
    fn parse_line(line: &str) -> Option<(String, String)> {
        let (key, value) = line.split_once('=')?;
        Some((key.trim().to_string(), value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_env_file() {
        let content = r#"
SUPABASE_URL=https://x.test
SUPABASE_ANON_KEY=anon
"#;

        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.get("SUPABASE_URL"), Some(&"https://x.test".to_string()));
        assert_eq!(vars.get("SUPABASE_ANON_KEY"), Some(&"anon".to_string()));
    }

    #[test]
    fn skips_comments() {
        let content = r#"
# This is a comment
KEY=value
   # Indented comment
"#;

        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("KEY"), Some(&"value".to_string()));
    }

    #[test]
    fn keeps_quotes_literally() {
        let vars = EnvFileParser::parse(r#"KEY="quoted""#);

        assert_eq!(vars.get("KEY"), Some(&"\"quoted\"".to_string()));
    }

    #[test]
    fn handles_empty_values() {
        let vars = EnvFileParser::parse("EMPTY=");

        assert_eq!(vars.get("EMPTY"), Some(&"".to_string()));
    }

    #[test]
    fn splits_on_first_equals_only() {
        let vars = EnvFileParser::parse("URL=https://example.com?foo=bar");

        assert_eq!(
            vars.get("URL"),
            Some(&"https://example.com?foo=bar".to_string())
        );
    }

    #[test]
    fn trims_key_but_not_inner_value() {
        let vars = EnvFileParser::parse("  KEY =value with spaces  ");

        assert_eq!(vars.get("KEY"), Some(&"value with spaces".to_string()));
    }

    #[test]
    fn skips_lines_without_equals() {
        let content = r#"
KEY1=value1
FOO
KEY2=value2
"#;

        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.len(), 2);
        assert!(!vars.contains_key("FOO"));
    }

    #[test]
    fn last_duplicate_wins() {
        let vars = EnvFileParser::parse("KEY=first\nKEY=second\n");

        assert_eq!(vars.get("KEY"), Some(&"second".to_string()));
    }

    #[test]
    fn parsing_twice_is_identical() {
        let content = "A=1\n# c\n\nB=2=3\nC\n";

        assert_eq!(EnvFileParser::parse(content), EnvFileParser::parse(content));
    }
}
