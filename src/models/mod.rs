//! Data models for Docsify site validation
//!
//! This module contains all data structures used throughout the application.

mod check;
mod site;

pub use check::{CheckKind, CheckResult, CheckStatus, ValidationSummary};
pub use site::{SiteLayout, DOCSIFY_REQUIRED_DIRS, DOCSIFY_REQUIRED_FILES};
