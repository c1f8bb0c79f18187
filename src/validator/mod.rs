//! Site validation module
//!
//! Runs the required-entry checks, the optional HTML lint and the
//! Markdown content scan against a documentation site root.

mod runner;
mod scan;
mod tidy;

pub use runner::SiteValidator;
pub use scan::{MarkdownScanner, ScanStats};

use std::path::PathBuf;
use thiserror::Error;

/// Validation errors that prevent checks from running at all
#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("Site root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Site root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to scan site: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Ensure `root` is an existing directory
pub fn ensure_root(root: &std::path::Path) -> Result<(), ValidateError> {
    if !root.exists() {
        return Err(ValidateError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ValidateError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}
