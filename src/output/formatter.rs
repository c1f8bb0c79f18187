//! Output formatters for validation results
//!
//! Provides Table, JSON, CSV, and summary output formats.

use anyhow::{Context, Result};
use console::style;
use std::io::Write;

use crate::models::{CheckResult, CheckStatus, ValidationSummary};
use crate::validator::ScanStats;

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Csv,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "csv" => Some(OutputFormat::Csv),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }

    pub fn names() -> &'static [&'static str] {
        &["table", "json", "json-pretty", "csv", "summary"]
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    fn paint(&self, text: &str, status: CheckStatus) -> String {
        if !self.colorize {
            return text.to_string();
        }
        let styled = style(text).force_styling(true);
        let styled = match status {
            CheckStatus::Pass => styled.green(),
            CheckStatus::Fail => styled.red(),
            CheckStatus::Warn => styled.yellow(),
            CheckStatus::Info => styled.cyan(),
            CheckStatus::Skip => styled.dim(),
        };
        styled.to_string()
    }

    fn format_result_table(&self, result: &CheckResult) -> String {
        let mut line = format!(
            "{} {}",
            self.paint(result.status.symbol(), result.status),
            result.check
        );
        if let Some(msg) = &result.message {
            line.push_str(&format!(" - {msg}"));
        }
        line
    }

    /// Format a validation summary
    pub fn format_summary(&self, summary: &ValidationSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Csv => csv_rows(&summary.results, true).unwrap_or_default(),
            OutputFormat::Summary => self.format_summary_brief(summary),
        }
    }

    fn format_summary_table(&self, summary: &ValidationSummary) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Validating Docsify site: {} [{}]\n\n",
            summary.root, summary.profile
        ));

        let mut current_category = "";
        for result in &summary.results {
            let category = result.check.category();
            if category != current_category {
                if !current_category.is_empty() {
                    output.push('\n');
                }
                output.push_str(&format!("{category}:\n"));
                current_category = category;
            }
            output.push_str(&format!("  {}\n", self.format_result_table(result)));
        }

        output.push('\n');
        if summary.is_valid() {
            output.push_str(&self.paint(
                "✓ Docsify site validation complete. All required files and directories are present.",
                CheckStatus::Pass,
            ));
        } else {
            let mut message = format!(
                "✗ Docsify site validation failed: {} required entr{} missing",
                summary.failed,
                if summary.failed == 1 { "y" } else { "ies" }
            );
            if summary.halted {
                message.push_str(" (stopped at first failure, use --keep-going to see all)");
            }
            output.push_str(&self.paint(&message, CheckStatus::Fail));
        }
        output.push('\n');

        output
    }

    fn format_summary_brief(&self, summary: &ValidationSummary) -> String {
        let required = summary.results.iter().filter(|r| r.check.is_required());
        let (present, checked) = required.fold((0, 0), |(present, checked), r| {
            (present + usize::from(r.status.is_success()), checked + 1)
        });

        format!(
            "{}: {} ({}/{} required entries present, {} warnings) in {}ms",
            summary.root,
            if summary.is_valid() { "valid" } else { "invalid" },
            present,
            checked,
            summary.warnings,
            summary.total_duration_ms
        )
    }

    /// Format Markdown scan statistics
    pub fn format_stats(&self, root: &str, stats: &ScanStats) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string(stats).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(stats).unwrap_or_default(),
            OutputFormat::Csv => format!(
                "markdown_files,mermaid_files,mermaid_blocks,unreadable\n{},{},{},{}\n",
                stats.markdown_files, stats.mermaid_files, stats.mermaid_blocks, stats.unreadable
            ),
            OutputFormat::Table | OutputFormat::Summary => {
                let mut output = format!(
                    "{root}: {} Markdown files, {} with Mermaid diagrams ({} diagrams)",
                    stats.markdown_files, stats.mermaid_files, stats.mermaid_blocks
                );
                if stats.unreadable > 0 {
                    output.push_str(&format!(", {} unreadable", stats.unreadable));
                }
                output
            }
        }
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

/// Serialize results as CSV rows
fn csv_rows(results: &[CheckResult], header: bool) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    if header {
        writer.write_record(["category", "check", "status", "duration_ms", "message"])?;
    }
    for result in results {
        writer.write_record([
            result.check.category().to_string(),
            result.check.name(),
            result.status.to_string(),
            result.duration_ms.to_string(),
            result.message.clone().unwrap_or_default(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("Failed to flush CSV writer")?;
    Ok(String::from_utf8(bytes)?)
}

/// Write a summary to a file without colour
pub fn write_summary_to_file(
    path: &str,
    summary: &ValidationSummary,
    format: OutputFormat,
) -> Result<()> {
    let formatter = ResultFormatter::new(format).no_color();
    let content = formatter.format_summary(summary);

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {path}"))?;
    file.write_all(content.as_bytes())?;

    Ok(())
}
