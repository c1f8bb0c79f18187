//! Markdown content scanning
//!
//! Counts Markdown files and Mermaid diagrams below a site root. The scan
//! only ever reads.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::ValidateError;
use crate::config::ScanConfig;

/// Counts gathered by a scan
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Markdown files found
    pub markdown_files: usize,
    /// Markdown files with at least one Mermaid block
    pub mermaid_files: usize,
    /// Mermaid blocks across all files
    pub mermaid_blocks: usize,
    /// Entries that could not be read
    pub unreadable: usize,
}

/// Walks a site root collecting [`ScanStats`]
pub struct MarkdownScanner {
    config: ScanConfig,
}

impl MarkdownScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan all Markdown files under `root`
    pub fn scan(&self, root: &Path) -> Result<ScanStats, ValidateError> {
        super::ensure_root(root)?;

        let mut stats = ScanStats::default();
        let walker = WalkDir::new(root)
            .follow_links(self.config.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_excluded(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    stats.unreadable += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() || !is_markdown(entry.path()) {
                continue;
            }
            stats.markdown_files += 1;

            let content = match fs::read(entry.path()) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    warn!("Failed to read {}: {}", entry.path().display(), e);
                    stats.unreadable += 1;
                    continue;
                }
            };

            let blocks = count_mermaid_blocks(&content, &self.config.mermaid_fence);
            if blocks > 0 {
                debug!("{}: {} mermaid block(s)", entry.path().display(), blocks);
                stats.mermaid_files += 1;
                stats.mermaid_blocks += blocks;
            }
        }

        Ok(stats)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map(|name| self.config.exclude_dirs.iter().any(|d| d == name))
                .unwrap_or(false)
    }
}

impl Default for MarkdownScanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

/// `*.md`, extension compared case-insensitively
fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

/// Count lines opening a Mermaid fence
///
/// The fence must be followed by the end of the line or a non-word
/// character, so ```` ```mermaidjs ```` does not count.
pub fn count_mermaid_blocks(content: &str, fence: &str) -> usize {
    content
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix(fence))
        .filter(|rest| {
            rest.chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric() && c != '_' && c != '-')
        })
        .count()
}
