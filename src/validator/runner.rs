//! Validation runner
//!
//! Executes the site checks in order and builds the summary.

use tracing::{debug, info, warn};

use super::scan::MarkdownScanner;
use super::tidy::TidyChecker;
use super::{ensure_root, ValidateError};
use crate::config::{AppConfig, ScanConfig, SiteProfile, TidyConfig};
use crate::models::{CheckKind, CheckResult, CheckStatus, SiteLayout, ValidationSummary};
use crate::utils::timer::Timer;

/// Validator for a Docsify site
pub struct SiteValidator {
    layout: SiteLayout,
    profile: String,
    fail_fast: bool,
    tidy: TidyChecker,
    scanner: MarkdownScanner,
}

impl SiteValidator {
    /// Create a validator with default settings
    pub fn new(layout: SiteLayout, profile: impl Into<String>) -> Self {
        Self {
            layout,
            profile: profile.into(),
            fail_fast: true,
            tidy: TidyChecker::new(TidyConfig::default()),
            scanner: MarkdownScanner::default(),
        }
    }

    /// Create a validator from application config and the selected profile
    pub fn from_config(config: &AppConfig, profile: &SiteProfile) -> Self {
        Self::new(profile.layout(&config.root), &profile.name)
            .fail_fast(config.fail_fast)
            .with_tidy(config.tidy.clone())
            .with_scan(config.scan.clone())
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_tidy(mut self, config: TidyConfig) -> Self {
        self.tidy = TidyChecker::new(config);
        self
    }

    pub fn with_scan(mut self, config: ScanConfig) -> Self {
        self.scanner = MarkdownScanner::new(config);
        self
    }

    /// Check that a required file exists
    pub fn check_file(&self, name: &str) -> CheckResult {
        let check = CheckKind::RequiredFile(name.to_string());
        let path = self.layout.path_of(name);

        if path.is_file() {
            CheckResult::pass(check)
        } else if path.exists() {
            CheckResult::fail(check, "expected a file, found a directory")
        } else {
            CheckResult::fail(check, "not found")
        }
    }

    /// Check that a required directory exists
    pub fn check_dir(&self, name: &str) -> CheckResult {
        let check = CheckKind::RequiredDirectory(name.to_string());
        let path = self.layout.path_of(name);

        if path.is_dir() {
            CheckResult::pass(check)
        } else if path.exists() {
            CheckResult::fail(check, "expected a directory, found a file")
        } else {
            CheckResult::fail(check, "not found")
        }
    }

    /// Lint index.html
    pub async fn check_html(&self) -> CheckResult {
        let timer = Timer::start("HTML syntax");
        let result = self.tidy.check(&self.layout.index_html()).await;
        result.with_duration(timer.stop())
    }

    /// Markdown and Mermaid counts as informational results
    pub fn check_content(&self) -> Result<Vec<CheckResult>, ValidateError> {
        let timer = Timer::start("Markdown scan");
        let stats = self.scanner.scan(self.layout.root())?;
        let duration = timer.stop();

        if stats.unreadable > 0 {
            warn!("{} entries could not be read", stats.unreadable);
        }

        Ok(vec![
            CheckResult::info(
                CheckKind::MarkdownFiles,
                format!("{} Markdown files", stats.markdown_files),
            )
            .with_duration(duration),
            CheckResult::info(
                CheckKind::MermaidDiagrams,
                format!(
                    "{} files with Mermaid diagrams ({} diagrams)",
                    stats.mermaid_files, stats.mermaid_blocks
                ),
            ),
        ])
    }

    /// Run all checks
    ///
    /// Required files come first, then required directories. In fail-fast
    /// mode the first missing entry ends the run with `halted` set.
    pub async fn run(&self) -> Result<ValidationSummary, ValidateError> {
        let root = self.layout.root();
        ensure_root(root)?;

        info!(
            "Validating Docsify site at {} (profile: {})",
            root.display(),
            self.profile
        );

        let timer = Timer::start("validation");
        let mut results = Vec::new();

        let required = self
            .layout
            .required_files
            .iter()
            .map(|name| self.check_file(name))
            .chain(
                self.layout
                    .required_dirs
                    .iter()
                    .map(|name| self.check_dir(name)),
            );

        // lazy so fail-fast never touches entries after the first miss
        for result in required {
            debug!("  {}", result);
            let failed = result.status == CheckStatus::Fail && result.check.is_required();
            results.push(result);

            if failed && self.fail_fast {
                info!("Stopping at first missing entry");
                return Ok(self.summarize(results, true, timer.stop()));
            }
        }

        results.push(self.check_html().await);
        results.extend(self.check_content()?);

        Ok(self.summarize(results, false, timer.stop()))
    }

    fn summarize(
        &self,
        results: Vec<CheckResult>,
        halted: bool,
        duration_ms: u64,
    ) -> ValidationSummary {
        let summary = ValidationSummary::new(
            self.layout.root().display().to_string(),
            &self.profile,
            results,
            halted,
        )
        .with_duration(duration_ms);

        info!(
            "Validation finished in {}ms - {} passed, {} failed, {} warnings",
            duration_ms, summary.passed, summary.failed, summary.warnings
        );

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DOCSIFY_REQUIRED_DIRS, DOCSIFY_REQUIRED_FILES};
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::SystemTime;
    use tempfile::{tempdir, TempDir};

    fn no_tidy() -> TidyConfig {
        TidyConfig {
            enabled: false,
            ..Default::default()
        }
    }

    /// Site with every entry of the docsify profile present
    fn complete_site() -> TempDir {
        let dir = tempdir().unwrap();
        for file in DOCSIFY_REQUIRED_FILES {
            fs::write(dir.path().join(file), "").unwrap();
        }
        for sub in DOCSIFY_REQUIRED_DIRS {
            fs::create_dir(dir.path().join(sub)).unwrap();
        }
        fs::write(
            dir.path().join("getting-started/quickstart.md"),
            "```mermaid\ngraph TD\n```\n",
        )
        .unwrap();
        dir
    }

    fn validator(root: &Path) -> SiteValidator {
        SiteValidator::new(SiteLayout::docsify(root), "docsify").with_tidy(no_tidy())
    }

    fn snapshot(root: &Path) -> BTreeMap<PathBuf, (u64, Option<SystemTime>, Vec<u8>)> {
        walkdir::WalkDir::new(root)
            .into_iter()
            .map(|e| e.unwrap())
            .map(|e| {
                let meta = e.metadata().unwrap();
                let content = if meta.is_file() {
                    fs::read(e.path()).unwrap()
                } else {
                    Vec::new()
                };
                (
                    e.path().to_path_buf(),
                    (meta.len(), meta.modified().ok(), content),
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_complete_site_passes() {
        let site = complete_site();
        let summary = validator(site.path()).run().await.unwrap();

        assert!(summary.is_valid());
        assert!(!summary.halted);
        assert_eq!(summary.exit_code(), 0);
        assert_eq!(summary.passed, DOCSIFY_REQUIRED_FILES.len() + DOCSIFY_REQUIRED_DIRS.len());

        let content: Vec<_> = summary
            .results
            .iter()
            .filter(|r| r.status == CheckStatus::Info)
            .collect();
        assert_eq!(content.len(), 2);
        // README.md, _sidebar.md, _navbar.md, _coverpage.md, quickstart.md
        assert_eq!(content[0].message.as_deref(), Some("5 Markdown files"));
        assert_eq!(
            content[1].message.as_deref(),
            Some("1 files with Mermaid diagrams (1 diagrams)")
        );
    }

    #[tokio::test]
    async fn test_each_missing_file_fails() {
        for missing in DOCSIFY_REQUIRED_FILES {
            let site = complete_site();
            fs::remove_file(site.path().join(missing)).unwrap();

            let summary = validator(site.path()).run().await.unwrap();
            assert_eq!(summary.exit_code(), 1, "missing {missing} not detected");
            assert!(summary.halted);

            let last = summary.results.last().unwrap();
            assert_eq!(last.check, CheckKind::RequiredFile(missing.to_string()));
            assert_eq!(last.status, CheckStatus::Fail);
        }
    }

    #[tokio::test]
    async fn test_missing_directory_fails() {
        let site = complete_site();
        fs::remove_dir(site.path().join("reference")).unwrap();

        let summary = validator(site.path()).run().await.unwrap();
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(
            summary.results.last().unwrap().check,
            CheckKind::RequiredDirectory("reference".to_string())
        );
    }

    #[tokio::test]
    async fn test_fail_fast_stops_at_first_missing() {
        let site = complete_site();
        fs::remove_file(site.path().join("_sidebar.md")).unwrap();
        fs::remove_file(site.path().join(".nojekyll")).unwrap();

        let summary = validator(site.path()).run().await.unwrap();
        // index.html, README.md, then the failing _sidebar.md
        assert_eq!(summary.total, 3);
        assert_eq!(summary.failed, 1);
        assert!(summary
            .results
            .iter()
            .all(|r| r.check.is_required()));
    }

    #[tokio::test]
    async fn test_keep_going_reports_every_missing_entry() {
        let site = complete_site();
        fs::remove_file(site.path().join("_sidebar.md")).unwrap();
        fs::remove_file(site.path().join(".nojekyll")).unwrap();
        fs::remove_dir(site.path().join("examples")).unwrap();

        let summary = validator(site.path())
            .fail_fast(false)
            .run()
            .await
            .unwrap();

        assert!(!summary.halted);
        assert_eq!(summary.failed, 3);
        assert_eq!(summary.exit_code(), 1);
        assert!(summary
            .results
            .iter()
            .any(|r| r.check == CheckKind::MarkdownFiles));
    }

    #[tokio::test]
    async fn test_wrong_entry_type_fails() {
        let site = complete_site();
        fs::remove_file(site.path().join("_navbar.md")).unwrap();
        fs::create_dir(site.path().join("_navbar.md")).unwrap();

        let summary = validator(site.path()).run().await.unwrap();
        let last = summary.results.last().unwrap();
        assert_eq!(last.status, CheckStatus::Fail);
        assert_eq!(
            last.message.as_deref(),
            Some("expected a file, found a directory")
        );
    }

    #[tokio::test]
    async fn test_missing_root_is_error() {
        let dir = tempdir().unwrap();
        let result = validator(&dir.path().join("nowhere")).run().await;
        assert!(matches!(result, Err(ValidateError::RootNotFound(_))));
    }

    #[tokio::test]
    async fn test_root_file_is_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("index.html");
        fs::write(&file, "").unwrap();

        let result = validator(&file).run().await;
        assert!(matches!(result, Err(ValidateError::NotADirectory(_))));
    }

    #[tokio::test]
    async fn test_validation_is_read_only() {
        let site = complete_site();
        fs::remove_file(site.path().join("_coverpage.md")).unwrap();

        for fail_fast in [true, false] {
            let before = snapshot(site.path());
            validator(site.path())
                .fail_fast(fail_fast)
                .with_tidy(TidyConfig::default())
                .run()
                .await
                .unwrap();
            assert_eq!(before, snapshot(site.path()));
        }
    }

    #[tokio::test]
    async fn test_minimal_profile() {
        let dir = tempdir().unwrap();
        for file in ["index.html", "README.md", ".nojekyll"] {
            fs::write(dir.path().join(file), "").unwrap();
        }

        let config = AppConfig {
            root: dir.path().display().to_string(),
            tidy: no_tidy(),
            ..Default::default()
        };
        let summary = SiteValidator::from_config(&config, &SiteProfile::minimal())
            .run()
            .await
            .unwrap();

        assert!(summary.is_valid());
        assert_eq!(summary.profile, "minimal");
        assert_eq!(
            summary.results.iter().find(|r| r.check == CheckKind::HtmlSyntax).map(|r| r.status),
            Some(CheckStatus::Skip)
        );
    }
}
