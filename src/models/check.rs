//! Check result models for site validation
//!
//! Defines check kinds, results, and status types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single validation check
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum CheckKind {
    /// A file that must exist in the site root
    RequiredFile(String),
    /// A directory that must exist in the site root
    RequiredDirectory(String),
    /// HTML syntax lint of index.html
    HtmlSyntax,
    /// Markdown file count
    MarkdownFiles,
    /// Markdown files containing Mermaid diagrams
    MermaidDiagrams,
}

impl CheckKind {
    /// Get check name
    pub fn name(&self) -> String {
        match self {
            CheckKind::RequiredFile(name) => name.clone(),
            CheckKind::RequiredDirectory(name) => format!("{name}/"),
            CheckKind::HtmlSyntax => "HTML syntax".to_string(),
            CheckKind::MarkdownFiles => "Markdown files".to_string(),
            CheckKind::MermaidDiagrams => "Mermaid diagrams".to_string(),
        }
    }

    /// Get check category
    pub fn category(&self) -> &'static str {
        match self {
            CheckKind::RequiredFile(_) => "Files",
            CheckKind::RequiredDirectory(_) => "Directories",
            CheckKind::HtmlSyntax => "HTML",
            CheckKind::MarkdownFiles | CheckKind::MermaidDiagrams => "Content",
        }
    }

    /// Whether a failure of this check is fatal
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            CheckKind::RequiredFile(_) | CheckKind::RequiredDirectory(_)
        )
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Check outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warn,
    Info,
    Skip,
}

impl CheckStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "✓",
            CheckStatus::Fail => "✗",
            CheckStatus::Warn => "⚠",
            CheckStatus::Info => "ℹ",
            CheckStatus::Skip => "○",
        }
    }

    /// Anything but `Fail` keeps the site valid
    pub fn is_success(&self) -> bool {
        !matches!(self, CheckStatus::Fail)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
            CheckStatus::Warn => write!(f, "WARN"),
            CheckStatus::Info => write!(f, "INFO"),
            CheckStatus::Skip => write!(f, "SKIP"),
        }
    }
}

/// Result of a single check
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: CheckKind,
    pub status: CheckStatus,
    pub duration_ms: u64,
    pub message: Option<String>,
}

impl CheckResult {
    fn with_status(check: CheckKind, status: CheckStatus, message: Option<String>) -> Self {
        Self {
            check,
            status,
            duration_ms: 0,
            message,
        }
    }

    pub fn pass(check: CheckKind) -> Self {
        Self::with_status(check, CheckStatus::Pass, None)
    }

    pub fn fail(check: CheckKind, message: impl Into<String>) -> Self {
        Self::with_status(check, CheckStatus::Fail, Some(message.into()))
    }

    pub fn warn(check: CheckKind, message: impl Into<String>) -> Self {
        Self::with_status(check, CheckStatus::Warn, Some(message.into()))
    }

    pub fn info(check: CheckKind, message: impl Into<String>) -> Self {
        Self::with_status(check, CheckStatus::Info, Some(message.into()))
    }

    pub fn skip(check: CheckKind, reason: impl Into<String>) -> Self {
        Self::with_status(check, CheckStatus::Skip, Some(reason.into()))
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.symbol(), self.check)?;
        if let Some(msg) = &self.message {
            write!(f, " - {msg}")?;
        }
        Ok(())
    }
}

/// Summary of a validation run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub root: String,
    pub profile: String,
    pub checked_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    pub skipped: usize,
    /// Set when fail-fast stopped the run at the first missing item
    pub halted: bool,
    pub total_duration_ms: u64,
    pub results: Vec<CheckResult>,
}

impl ValidationSummary {
    pub fn new(
        root: impl Into<String>,
        profile: impl Into<String>,
        results: Vec<CheckResult>,
        halted: bool,
    ) -> Self {
        let count = |status: CheckStatus| results.iter().filter(|r| r.status == status).count();

        let total = results.len();
        let passed = count(CheckStatus::Pass);
        let failed = results.iter().filter(|r| !r.status.is_success()).count();
        let warnings = count(CheckStatus::Warn);
        let skipped = count(CheckStatus::Skip);
        let total_duration_ms = results.iter().map(|r| r.duration_ms).sum();

        Self {
            root: root.into(),
            profile: profile.into(),
            checked_at: Utc::now(),
            total,
            passed,
            failed,
            warnings,
            skipped,
            halted,
            total_duration_ms,
            results,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.total_duration_ms = duration_ms;
        self
    }

    pub fn is_valid(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code for this run
    pub fn exit_code(&self) -> i32 {
        if self.is_valid() {
            0
        } else {
            1
        }
    }
}
