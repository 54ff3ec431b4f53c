//! Dart define resolution.
//!
//! Resolution is split in two:
//!
//! - A pure core: [`SourceTable`] holds raw values keyed by bare key name and
//!   [`resolve_bindings`] turns it into ordered, non-empty [`Binding`]s.
//! - [`DefineResolver`], which detects the context, reads the pipeline
//!   environment or the local `.env` file, and reports progress.
//!
//! Resolution never fails. A missing source only means fewer bindings.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::{EnvFileParser, DEFAULT_ENV_FILE};
use crate::defines::{Binding, DartDefines};
use crate::ui::UserInterface;

use super::detection::{ContextDetector, ExecutionContext};
use super::keys::{template_for, RECOGNIZED_KEYS};

/// Raw values for one resolution, keyed by bare key name.
///
/// Built fresh per invocation and dropped once the defines are formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    context: ExecutionContext,
    values: HashMap<String, String>,
}

impl SourceTable {
    /// Build a table from an explicit map.
    pub fn from_map(context: ExecutionContext, values: HashMap<String, String>) -> Self {
        Self { context, values }
    }

    /// Build a table by looking up each recognized key's source variable.
    ///
    /// The variable name comes from the context's source template, so in
    /// pipeline context `SUPABASE_URL` is read from `CI_SUPABASE_URL` and
    /// stored under the bare name.
    pub fn from_lookup<F>(context: ExecutionContext, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let template = template_for(context);
        let values = RECOGNIZED_KEYS
            .iter()
            .filter_map(|key| {
                let source = template.source_name(key.name);
                match env_fn(&source) {
                    Ok(value) => Some((key.name.to_string(), value)),
                    Err(_) => {
                        tracing::debug!("{} is not set", source);
                        None
                    }
                }
            })
            .collect();

        Self { context, values }
    }

    /// Build a local table from `.env` file contents.
    pub fn from_env_file(contents: &str) -> Self {
        Self {
            context: ExecutionContext::Local,
            values: EnvFileParser::parse(contents),
        }
    }

    /// An empty table.
    pub fn empty(context: ExecutionContext) -> Self {
        Self::from_map(context, HashMap::new())
    }

    pub fn context(&self) -> ExecutionContext {
        self.context
    }

    /// Raw value for a bare key, empty strings included.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Resolve recognized keys against a source table.
///
/// Bindings follow [`RECOGNIZED_KEYS`] order. Keys that are absent or empty
/// produce nothing. Unrecognized entries in the table are ignored.
pub fn resolve_bindings(table: &SourceTable) -> Vec<Binding> {
    RECOGNIZED_KEYS
        .iter()
        .filter_map(|key| {
            let value = table.get(key.name)?;
            Binding::new(key.name, value)
        })
        .collect()
}

/// Resolves dart defines for a project.
///
/// # Example
///
/// ```
/// use shiplane::environment::DefineResolver;
/// use shiplane::ui::MockUI;
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// std::fs::write(temp.path().join(".env"), "SUPABASE_URL=https://x.test\n").unwrap();
///
/// let mut ui = MockUI::new();
/// let defines = DefineResolver::new(temp.path())
///     .resolve_with_env(|_| Err(std::env::VarError::NotPresent), &mut ui);
///
/// assert_eq!(defines.to_shell_string(), "--dart-define=SUPABASE_URL=https://x.test");
/// ```
#[derive(Debug, Clone)]
pub struct DefineResolver {
    project_root: PathBuf,
    detector: ContextDetector,
    context_override: Option<ExecutionContext>,
}

impl DefineResolver {
    /// Create a resolver rooted at `project_root`.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            detector: ContextDetector::new(),
            context_override: None,
        }
    }

    /// Skip detection and use the given context.
    pub fn with_context(mut self, context: Option<ExecutionContext>) -> Self {
        self.context_override = context;
        self
    }

    /// Location of the local env file.
    pub fn env_file_path(&self) -> PathBuf {
        self.project_root.join(DEFAULT_ENV_FILE)
    }

    /// Resolve against the current process environment.
    pub fn resolve(&self, ui: &mut dyn UserInterface) -> DartDefines {
        self.resolve_with_env(|key| std::env::var(key), ui)
    }

    /// Resolve with a custom env var lookup (for testing).
    pub fn resolve_with_env<F>(&self, env_fn: F, ui: &mut dyn UserInterface) -> DartDefines
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let context = match self.context_override {
            Some(context) => {
                tracing::debug!("Context forced to {}", context);
                context
            }
            None => self.detector.detect_with_env(&env_fn),
        };

        let table = match context {
            ExecutionContext::Pipeline => {
                ui.info(&format!(
                    "Pipeline context ({} is set): reading CI secrets",
                    self.detector.signal()
                ));
                SourceTable::from_lookup(context, &env_fn)
            }
            ExecutionContext::Local => {
                ui.info("Local context: reading .env file");
                self.load_local_table(ui)
            }
        };

        let bindings = resolve_bindings(&table);
        let defines = DartDefines::new(context, bindings);
        report(&defines, ui);
        defines
    }

    fn load_local_table(&self, ui: &mut dyn UserInterface) -> SourceTable {
        let path = self.env_file_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!("Read {}", path.display());
                SourceTable::from_env_file(&contents)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ui.warning(&format!(
                    "No env file at {}; building without dart defines",
                    path.display()
                ));
                SourceTable::empty(ExecutionContext::Local)
            }
            Err(e) => {
                ui.warning(&format!(
                    "Could not read {}: {}; building without dart defines",
                    path.display(),
                    e
                ));
                SourceTable::empty(ExecutionContext::Local)
            }
        }
    }
}

fn report(defines: &DartDefines, ui: &mut dyn UserInterface) {
    let total = RECOGNIZED_KEYS.len();
    if defines.is_empty() {
        ui.warning(&format!("Resolved 0 of {} dart defines", total));
        return;
    }

    let keys: Vec<&str> = defines.keys().collect();
    ui.info(&format!(
        "Resolved {} of {} dart defines: {}",
        defines.len(),
        total,
        keys.join(", ")
    ));

    for key in RECOGNIZED_KEYS {
        if !keys.contains(&key.name) {
            tracing::debug!("{} ({}) not resolved", key.name, key.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn make_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    fn project_with_env_file(contents: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), contents).unwrap();
        temp
    }

    const ALL_PIPELINE_VARS: &[(&str, &str)] = &[
        ("CI", "true"),
        ("CI_SUPABASE_URL", "https://ci.test"),
        ("CI_SUPABASE_ANON_KEY", "anon-ci"),
        ("CI_GEMINI_API_KEY", "gemini-ci"),
    ];

    #[test]
    fn pipeline_emits_one_token_per_key() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let defines =
            DefineResolver::new(temp.path()).resolve_with_env(make_env(ALL_PIPELINE_VARS), &mut ui);

        assert_eq!(defines.context(), ExecutionContext::Pipeline);
        assert_eq!(
            defines.tokens(),
            vec![
                "--dart-define=SUPABASE_URL=https://ci.test",
                "--dart-define=SUPABASE_ANON_KEY=anon-ci",
                "--dart-define=GEMINI_API_KEY=gemini-ci",
            ]
        );
        assert!(ui.has_info("Pipeline context"));
        assert!(ui.has_info("Resolved 3 of 3"));
    }

    #[test]
    fn pipeline_skips_absent_and_empty_vars() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let env = make_env(&[
            ("CI", "true"),
            ("CI_SUPABASE_URL", "https://ci.test"),
            ("CI_SUPABASE_ANON_KEY", ""),
        ]);

        let defines = DefineResolver::new(temp.path()).resolve_with_env(env, &mut ui);

        assert_eq!(
            defines.to_shell_string(),
            "--dart-define=SUPABASE_URL=https://ci.test"
        );
    }

    #[test]
    fn pipeline_ignores_bare_names() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let env = make_env(&[("CI", "true"), ("SUPABASE_URL", "https://bare.test")]);

        let defines = DefineResolver::new(temp.path()).resolve_with_env(env, &mut ui);

        assert!(defines.is_empty());
    }

    #[test]
    fn pipeline_never_falls_back_to_env_file() {
        let temp = project_with_env_file("SUPABASE_URL=https://local.test\n");
        let mut ui = MockUI::new();

        let defines =
            DefineResolver::new(temp.path()).resolve_with_env(make_env(&[("CI", "1")]), &mut ui);

        assert_eq!(defines.to_shell_string(), "");
        assert!(ui.has_warning("Resolved 0 of 3"));
    }

    #[test]
    fn local_without_file_is_empty_with_warning() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let defines = DefineResolver::new(temp.path()).resolve_with_env(make_env(&[]), &mut ui);

        assert_eq!(defines.to_shell_string(), "");
        assert_eq!(defines.context(), ExecutionContext::Local);
        assert!(ui.has_warning("No env file"));
    }

    #[test]
    fn local_skips_comments_and_blank_lines() {
        let temp = project_with_env_file("SUPABASE_URL=https://x.test\n# comment\n\n");
        let mut ui = MockUI::new();

        let defines = DefineResolver::new(temp.path()).resolve_with_env(make_env(&[]), &mut ui);

        assert_eq!(
            defines.to_shell_string(),
            "--dart-define=SUPABASE_URL=https://x.test"
        );
    }

    #[test]
    fn local_line_without_equals_is_ignored() {
        let temp = project_with_env_file("FOO\nSUPABASE_ANON_KEY=anon\n");
        let mut ui = MockUI::new();

        let defines = DefineResolver::new(temp.path()).resolve_with_env(make_env(&[]), &mut ui);

        assert_eq!(defines.tokens(), vec!["--dart-define=SUPABASE_ANON_KEY=anon"]);
    }

    #[test]
    fn local_empty_value_is_skipped() {
        let temp = project_with_env_file("SUPABASE_URL=\n");
        let mut ui = MockUI::new();

        let defines = DefineResolver::new(temp.path()).resolve_with_env(make_env(&[]), &mut ui);

        assert!(defines.is_empty());
    }

    #[test]
    fn local_ignores_process_environment() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let env = make_env(&[("SUPABASE_URL", "https://process.test")]);

        let defines = DefineResolver::new(temp.path()).resolve_with_env(env, &mut ui);

        assert!(defines.is_empty());
    }

    #[test]
    fn empty_ci_signal_means_local() {
        let temp = project_with_env_file("GEMINI_API_KEY=g\n");
        let mut ui = MockUI::new();

        let defines =
            DefineResolver::new(temp.path()).resolve_with_env(make_env(&[("CI", "")]), &mut ui);

        assert_eq!(defines.context(), ExecutionContext::Local);
        assert_eq!(defines.tokens(), vec!["--dart-define=GEMINI_API_KEY=g"]);
    }

    #[test]
    fn output_order_follows_recognized_keys() {
        let temp = project_with_env_file(
            "GEMINI_API_KEY=g\nSUPABASE_ANON_KEY=a\nSUPABASE_URL=https://x.test\n",
        );
        let mut ui = MockUI::new();

        let defines = DefineResolver::new(temp.path()).resolve_with_env(make_env(&[]), &mut ui);

        assert_eq!(
            defines.keys().collect::<Vec<_>>(),
            vec!["SUPABASE_URL", "SUPABASE_ANON_KEY", "GEMINI_API_KEY"]
        );
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let temp = project_with_env_file("SUPABASE_URL=https://old.test\nSUPABASE_URL=https://new.test\n");
        let mut ui = MockUI::new();

        let defines = DefineResolver::new(temp.path()).resolve_with_env(make_env(&[]), &mut ui);

        assert_eq!(
            defines.to_shell_string(),
            "--dart-define=SUPABASE_URL=https://new.test"
        );
    }

    #[test]
    fn forced_context_skips_detection() {
        let temp = project_with_env_file("SUPABASE_URL=https://local.test\n");
        let mut ui = MockUI::new();

        let defines = DefineResolver::new(temp.path())
            .with_context(Some(ExecutionContext::Local))
            .resolve_with_env(make_env(ALL_PIPELINE_VARS), &mut ui);

        assert_eq!(defines.context(), ExecutionContext::Local);
        assert_eq!(
            defines.to_shell_string(),
            "--dart-define=SUPABASE_URL=https://local.test"
        );
    }

    #[test]
    fn diagnostics_never_contain_values() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        DefineResolver::new(temp.path()).resolve_with_env(make_env(ALL_PIPELINE_VARS), &mut ui);

        assert!(ui.all_output().all(|line| !line.contains("anon-ci")));
        assert!(ui.all_output().all(|line| !line.contains("gemini-ci")));
    }

    #[test]
    fn resolving_twice_is_identical() {
        let temp = project_with_env_file("SUPABASE_URL=https://x.test\nFOO\n#c\n");
        let resolver = DefineResolver::new(temp.path());

        let first = resolver.resolve_with_env(make_env(&[]), &mut MockUI::new());
        let second = resolver.resolve_with_env(make_env(&[]), &mut MockUI::new());

        assert_eq!(first, second);
    }

    #[test]
    fn resolve_bindings_is_pure_over_table() {
        let mut values = HashMap::new();
        values.insert("SUPABASE_ANON_KEY".to_string(), "anon".to_string());
        values.insert("UNRELATED".to_string(), "x".to_string());
        let table = SourceTable::from_map(ExecutionContext::Pipeline, values);

        let bindings = resolve_bindings(&table);

        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].key(), "SUPABASE_ANON_KEY");
    }

    #[test]
    fn from_lookup_stores_bare_names() {
        let table = SourceTable::from_lookup(
            ExecutionContext::Pipeline,
            make_env(&[("CI_GEMINI_API_KEY", "g")]),
        );

        assert_eq!(table.get("GEMINI_API_KEY"), Some("g"));
        assert_eq!(table.get("CI_GEMINI_API_KEY"), None);
    }

    #[test]
    fn env_file_path_is_project_relative() {
        let resolver = DefineResolver::new(Path::new("/work/app"));
        assert_eq!(resolver.env_file_path(), PathBuf::from("/work/app/.env"));
    }
}
