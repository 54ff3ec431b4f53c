//! POSIX shell quoting for emitted tokens.

/// Characters that force a token into single quotes.
const SHELL_META: &[char] = &[
    ' ', '\t', '\n', '\'', '"', '\\', '$', '`', '!', '*', '?', '[', ']', '(', ')', '{', '}', '<',
    '>', '|', '&', ';', '#', '~',
];

/// Quote a single argument for a POSIX shell.
///
/// - Empty strings become `''`
/// - Strings without shell metacharacters are returned unchanged
/// - Everything else is wrapped in single quotes, with `'` written as `'\''`
///
/// # Example
///
/// ```
/// use shiplane::defines::quote_arg;
///
/// assert_eq!(quote_arg("--dart-define=A=b"), "--dart-define=A=b");
/// assert_eq!(quote_arg("--dart-define=A=b c"), "'--dart-define=A=b c'");
/// ```
pub fn quote_arg(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }

    if !arg.contains(SHELL_META) {
        return arg.to_string();
    }

    format!("'{}'", arg.replace('\'', "'\\''"))
}

/// Quote and join multiple arguments with single spaces.
pub fn quote_args<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|a| quote_arg(a.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
