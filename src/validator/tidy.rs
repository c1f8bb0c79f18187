//! HTML syntax linting through HTML Tidy
//!
//! Tidy is optional. When it is not installed the check degrades to an
//! informational result, and its findings are never fatal.

use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::config::TidyConfig;
use crate::models::{CheckKind, CheckResult};

/// What a tidy run reported
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TidyOutcome {
    /// Exit code 0
    Clean,
    /// Exit code 1
    Warnings { count: usize, first: Option<String> },
    /// Exit code 2 or any other non-zero code
    Errors { count: usize, first: Option<String> },
    /// Executable not found
    NotInstalled,
    /// Run exceeded the configured timeout
    TimedOut(u64),
    /// Spawn failed for another reason
    Failed(String),
}

/// Runs tidy against a single HTML file
pub struct TidyChecker {
    config: TidyConfig,
}

impl TidyChecker {
    pub fn new(config: TidyConfig) -> Self {
        Self { config }
    }

    /// Run tidy on `file`
    pub async fn lint(&self, file: &Path) -> TidyOutcome {
        debug!(
            "Running {} {} {}",
            self.config.command,
            self.config.args.join(" "),
            file.display()
        );

        let mut command = Command::new(&self.config.command);
        command
            .args(&self.config.args)
            .arg(file)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let limit = Duration::from_secs(self.config.timeout_secs);
        let output = match timeout(limit, command.output()).await {
            Err(_) => return TidyOutcome::TimedOut(self.config.timeout_secs),
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => return TidyOutcome::NotInstalled,
            Ok(Err(e)) => return TidyOutcome::Failed(e.to_string()),
            Ok(Ok(output)) => output,
        };

        // tidy reports on stderr; some builds use stdout with -e
        let mut report = String::from_utf8_lossy(&output.stderr).into_owned();
        report.push_str(&String::from_utf8_lossy(&output.stdout));

        match output.status.code() {
            Some(0) => TidyOutcome::Clean,
            Some(1) => TidyOutcome::Warnings {
                count: count_findings(&report, "Warning:"),
                first: first_finding(&report),
            },
            _ => TidyOutcome::Errors {
                count: count_findings(&report, "Error:"),
                first: first_finding(&report),
            },
        }
    }

    /// Run tidy and map the outcome to a check result
    pub async fn check(&self, file: &Path) -> CheckResult {
        let check = CheckKind::HtmlSyntax;

        if !self.config.enabled {
            return CheckResult::skip(check, "HTML syntax check disabled");
        }
        if !file.is_file() {
            return CheckResult::skip(check, format!("{} not found", file.display()));
        }

        match self.lint(file).await {
            TidyOutcome::Clean => CheckResult::pass(check).with_message("no issues reported by tidy"),
            TidyOutcome::Warnings { count, first } => {
                CheckResult::warn(check, describe(count, "warning", first))
            }
            TidyOutcome::Errors { count, first } => {
                CheckResult::warn(check, describe(count, "error", first))
            }
            TidyOutcome::NotInstalled => {
                info!("{} not found on PATH", self.config.command);
                CheckResult::info(
                    check,
                    format!(
                        "{} not installed, skipping HTML syntax check",
                        self.config.command
                    ),
                )
            }
            TidyOutcome::TimedOut(secs) => {
                CheckResult::warn(check, format!("{} timed out after {secs}s", self.config.command))
            }
            TidyOutcome::Failed(e) => {
                CheckResult::warn(check, format!("could not run {}: {e}", self.config.command))
            }
        }
    }
}

fn count_findings(report: &str, marker: &str) -> usize {
    report.lines().filter(|l| l.contains(marker)).count()
}

fn first_finding(report: &str) -> Option<String> {
    report
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

fn describe(count: usize, kind: &str, first: Option<String>) -> String {
    let plural = if count == 1 { "" } else { "s" };
    match first {
        Some(first) if count > 0 => format!("tidy reported {count} {kind}{plural}: {first}"),
        Some(first) => format!("tidy reported issues: {first}"),
        None => format!("tidy reported {kind}s"),
    }
}
