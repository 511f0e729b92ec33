//! The filesystem scaffolding engine.
//!
//! `Scaffolder::generate` produces one module directory per invocation;
//! content is fully rendered in memory before the single write, so no
//! partial files are ever left on disk. `generate_all` drives a range and
//! records a per-module outcome without ever aborting the batch.

use std::fs;
use std::io::BufRead;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use courseforge_core::Catalog;

use crate::error::ScaffoldError;
use crate::page;

// ============================================================================
// Overwrite policy and confirmation seam
// ============================================================================

/// How to treat a module whose target directory already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Leave the directory untouched and record a skip.
    #[default]
    Keep,
    /// Ask the confirmation prompt before replacing.
    Ask,
    /// Replace without asking.
    Force,
}

/// Confirmation seam for destructive overwrites, injected so tests can
/// script both decisions deterministically.
pub trait ConfirmPrompt {
    /// Returns `true` if the destructive action should proceed.
    fn confirm(&self, message: &str) -> bool;
}

/// Prompts `y/N` on stderr and reads the answer from stdin. Anything
/// other than `y`/`yes` (including EOF) declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        eprint!("{message} [y/N] ");
        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// Why a module was skipped without writing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The module is the hand-authored template source.
    Template,
    /// The target directory already exists and overwrite is disabled.
    AlreadyExists,
    /// Overwrite was requested but the confirmation was declined.
    OverwriteDeclined,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Template => "template module",
            Self::AlreadyExists => "already exists",
            Self::OverwriteDeclined => "overwrite declined",
        };
        f.write_str(label)
    }
}

/// Outcome of generating a single module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Page written at the given path.
    Created(PathBuf),
    /// Nothing written.
    Skipped(SkipReason),
}

/// Per-module record of a batch run.
#[derive(Debug)]
pub struct ModuleResult {
    /// Module number.
    pub module: u8,
    /// What happened to it.
    pub result: Result<Outcome, ScaffoldError>,
}

/// Collected outcomes of `generate_all`.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Per-module results in ascending module order.
    pub results: Vec<ModuleResult>,
}

impl BatchSummary {
    /// Number of modules whose page was written.
    #[must_use]
    pub fn created(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.result, Ok(Outcome::Created(_))))
            .count()
    }

    /// Number of modules cleanly skipped.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.result, Ok(Outcome::Skipped(_))))
            .count()
    }

    /// Number of modules that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.result.is_err()).count()
    }

    /// Returns `true` if any module failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

// ============================================================================
// Scaffolder
// ============================================================================

/// Deterministically produces one markdown page per module number from
/// the catalog's descriptor tables.
pub struct Scaffolder<'a> {
    catalog: &'a Catalog,
    out_dir: PathBuf,
    template_module: u8,
    policy: OverwritePolicy,
    confirm: &'a dyn ConfirmPrompt,
}

impl<'a> Scaffolder<'a> {
    /// Creates a scaffolder writing below `out_dir`.
    pub fn new(
        catalog: &'a Catalog,
        out_dir: impl Into<PathBuf>,
        confirm: &'a dyn ConfirmPrompt,
    ) -> Self {
        Self {
            catalog,
            out_dir: out_dir.into(),
            template_module: 1,
            policy: OverwritePolicy::Keep,
            confirm,
        }
    }

    /// Sets the module treated as the hand-authored template. It is
    /// always skipped, never generated or overwritten.
    #[must_use]
    pub const fn with_template_module(mut self, module: u8) -> Self {
        self.template_module = module;
        self
    }

    /// Sets the overwrite policy for existing module directories.
    #[must_use]
    pub const fn with_policy(mut self, policy: OverwritePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Target directory for a module.
    #[must_use]
    pub fn module_dir(&self, module: u8) -> PathBuf {
        self.out_dir.join(page::module_dir_name(module))
    }

    /// Generates one module page.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::Catalog` when a descriptor table lacks the
    /// module and `ScaffoldError::Io` on filesystem failures. Both are
    /// fatal to this module only; callers drive the rest of the batch.
    pub fn generate(&self, module: u8) -> Result<Outcome, ScaffoldError> {
        if module == self.template_module {
            return Ok(Outcome::Skipped(SkipReason::Template));
        }

        let descriptor = self.catalog.descriptor(module)?;
        let content = page::render_module_page(&descriptor);

        let target = self.module_dir(module);
        if target.exists() {
            match self.policy {
                OverwritePolicy::Keep => {
                    return Ok(Outcome::Skipped(SkipReason::AlreadyExists));
                }
                OverwritePolicy::Ask => {
                    let question = format!("Replace existing {}?", target.display());
                    if !self.confirm.confirm(&question) {
                        return Ok(Outcome::Skipped(SkipReason::OverwriteDeclined));
                    }
                }
                OverwritePolicy::Force => {}
            }
            fs::remove_dir_all(&target).map_err(|source| io_error(&target, source))?;
        }

        fs::create_dir_all(&target).map_err(|source| io_error(&target, source))?;

        let index = target.join("index.md");
        fs::write(&index, content).map_err(|source| io_error(&index, source))?;

        Ok(Outcome::Created(index))
    }

    /// Generates every module in `range` in ascending order, recording a
    /// per-module outcome. A failing module never aborts the batch.
    #[must_use]
    pub fn generate_all(&self, range: RangeInclusive<u8>) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for module in range {
            let result = self.generate(module);
            summary.results.push(ModuleResult { module, result });
        }
        summary
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courseforge_core::CatalogError;

    /// Scripted confirmation prompt for tests.
    struct FixedConfirm(bool);

    impl ConfirmPrompt for FixedConfirm {
        fn confirm(&self, _message: &str) -> bool {
            self.0
        }
    }

    const YES: FixedConfirm = FixedConfirm(true);
    const NO: FixedConfirm = FixedConfirm(false);

    #[test]
    fn generates_single_module() {
        let catalog = Catalog::builtin();
        let out = tempfile::tempdir().unwrap();
        let scaffolder = Scaffolder::new(&catalog, out.path(), &NO);

        let outcome = scaffolder.generate(6).unwrap();
        let expected = out.path().join("module-06/index.md");
        assert_eq!(outcome, Outcome::Created(expected.clone()));

        let content = fs::read_to_string(expected).unwrap();
        assert!(content.contains("Module 06: API Development with AI"));
    }

    #[test]
    fn template_module_always_skipped() {
        let catalog = Catalog::builtin();
        let out = tempfile::tempdir().unwrap();
        let scaffolder = Scaffolder::new(&catalog, out.path(), &NO);

        assert_eq!(
            scaffolder.generate(1).unwrap(),
            Outcome::Skipped(SkipReason::Template)
        );
        assert!(!out.path().join("module-01").exists());
    }

    #[test]
    fn custom_template_module_skipped() {
        let catalog = Catalog::builtin();
        let out = tempfile::tempdir().unwrap();
        let scaffolder = Scaffolder::new(&catalog, out.path(), &NO).with_template_module(5);

        assert_eq!(
            scaffolder.generate(5).unwrap(),
            Outcome::Skipped(SkipReason::Template)
        );
        assert!(matches!(
            scaffolder.generate(1).unwrap(),
            Outcome::Created(_)
        ));
    }

    #[test]
    fn existing_directory_skipped_without_overwrite() {
        let catalog = Catalog::builtin();
        let out = tempfile::tempdir().unwrap();
        let scaffolder = Scaffolder::new(&catalog, out.path(), &NO);

        scaffolder.generate(7).unwrap();
        let index = out.path().join("module-07/index.md");
        fs::write(&index, "hand edited").unwrap();

        assert_eq!(
            scaffolder.generate(7).unwrap(),
            Outcome::Skipped(SkipReason::AlreadyExists)
        );
        assert_eq!(fs::read_to_string(&index).unwrap(), "hand edited");
    }

    #[test]
    fn declined_confirmation_is_a_skip() {
        let catalog = Catalog::builtin();
        let out = tempfile::tempdir().unwrap();

        Scaffolder::new(&catalog, out.path(), &NO)
            .generate(7)
            .unwrap();
        let index = out.path().join("module-07/index.md");
        fs::write(&index, "hand edited").unwrap();

        let asking = Scaffolder::new(&catalog, out.path(), &NO).with_policy(OverwritePolicy::Ask);
        assert_eq!(
            asking.generate(7).unwrap(),
            Outcome::Skipped(SkipReason::OverwriteDeclined)
        );
        assert_eq!(fs::read_to_string(&index).unwrap(), "hand edited");
    }

    #[test]
    fn confirmed_overwrite_replaces_directory() {
        let catalog = Catalog::builtin();
        let out = tempfile::tempdir().unwrap();

        Scaffolder::new(&catalog, out.path(), &YES)
            .generate(7)
            .unwrap();
        let stray = out.path().join("module-07/notes.txt");
        fs::write(&stray, "scratch").unwrap();

        let asking = Scaffolder::new(&catalog, out.path(), &YES).with_policy(OverwritePolicy::Ask);
        assert!(matches!(asking.generate(7).unwrap(), Outcome::Created(_)));
        assert!(!stray.exists(), "old directory tree should be removed");
    }

    #[test]
    fn force_policy_never_asks() {
        let catalog = Catalog::builtin();
        let out = tempfile::tempdir().unwrap();

        Scaffolder::new(&catalog, out.path(), &NO)
            .generate(7)
            .unwrap();

        // NO would decline if asked; Force must not ask.
        let forcing = Scaffolder::new(&catalog, out.path(), &NO).with_policy(OverwritePolicy::Force);
        assert!(matches!(forcing.generate(7).unwrap(), Outcome::Created(_)));
    }

    #[test]
    fn regeneration_is_byte_identical() {
        let catalog = Catalog::builtin();
        let out = tempfile::tempdir().unwrap();
        let scaffolder =
            Scaffolder::new(&catalog, out.path(), &NO).with_policy(OverwritePolicy::Force);

        scaffolder.generate(9).unwrap();
        let first = fs::read(out.path().join("module-09/index.md")).unwrap();

        scaffolder.generate(9).unwrap();
        let second = fs::read(out.path().join("module-09/index.md")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_descriptor_fails_without_side_effects() {
        let mut catalog = Catalog::builtin();
        catalog.titles.remove(&17);
        let out = tempfile::tempdir().unwrap();
        let scaffolder = Scaffolder::new(&catalog, out.path(), &NO);

        let err = scaffolder.generate(17).unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Catalog(CatalogError::MissingDescriptor { module: 17, .. })
        ));
        assert!(!out.path().join("module-17").exists());
    }

    #[test]
    fn batch_isolates_failures() {
        let mut catalog = Catalog::builtin();
        catalog.titles.remove(&17);
        let out = tempfile::tempdir().unwrap();
        let scaffolder = Scaffolder::new(&catalog, out.path(), &NO);

        let summary = scaffolder.generate_all(2..=30);
        assert_eq!(summary.results.len(), 29);
        assert_eq!(summary.created(), 28);
        assert_eq!(summary.failed(), 1);
        assert!(summary.has_failures());

        let failed: Vec<u8> = summary
            .results
            .iter()
            .filter(|r| r.result.is_err())
            .map(|r| r.module)
            .collect();
        assert_eq!(failed, vec![17]);
    }

    #[test]
    fn batch_full_range_counts_template_skip() {
        let catalog = Catalog::builtin();
        let out = tempfile::tempdir().unwrap();
        let scaffolder = Scaffolder::new(&catalog, out.path(), &NO);

        let summary = scaffolder.generate_all(1..=30);
        assert_eq!(summary.created(), 29);
        assert_eq!(summary.skipped(), 1);
        assert!(!summary.has_failures());
    }

    #[test]
    fn batch_results_are_ascending() {
        let catalog = Catalog::builtin();
        let out = tempfile::tempdir().unwrap();
        let scaffolder = Scaffolder::new(&catalog, out.path(), &NO);

        let summary = scaffolder.generate_all(2..=6);
        let modules: Vec<u8> = summary.results.iter().map(|r| r.module).collect();
        assert_eq!(modules, vec![2, 3, 4, 5, 6]);
    }
}
