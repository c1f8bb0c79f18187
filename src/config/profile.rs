//! Site profiles
//!
//! Predefined sets of required files and directories.

use serde::{Deserialize, Serialize};

use crate::models::{SiteLayout, DOCSIFY_REQUIRED_DIRS, DOCSIFY_REQUIRED_FILES};

/// Named set of required site entries
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Profile name
    pub name: String,
    /// Profile description
    #[serde(default)]
    pub description: String,
    /// Files that must exist, checked in order
    #[serde(default)]
    pub required_files: Vec<String>,
    /// Directories that must exist, checked in order
    #[serde(default)]
    pub required_dirs: Vec<String>,
}

impl SiteProfile {
    /// Create an empty profile
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            required_files: Vec::new(),
            required_dirs: Vec::new(),
        }
    }

    /// Full Docsify site: config, navigation, cover page and content sections
    pub fn docsify() -> Self {
        Self::new("docsify")
            .with_description("Docsify site with sidebar, navbar, cover page and content sections")
            .with_files(DOCSIFY_REQUIRED_FILES.iter().copied())
            .with_dirs(DOCSIFY_REQUIRED_DIRS.iter().copied())
    }

    /// Bare minimum for a site served from GitHub Pages
    pub fn minimal() -> Self {
        Self::new("minimal")
            .with_description("index.html, README.md and .nojekyll only")
            .with_files(["index.html", "README.md", ".nojekyll"])
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Layout of this profile rooted at `root`
    pub fn layout(&self, root: impl Into<std::path::PathBuf>) -> SiteLayout {
        SiteLayout::docsify(root)
            .with_files(self.required_files.iter().cloned())
            .with_dirs(self.required_dirs.iter().cloned())
    }

    /// Get all predefined profiles
    pub fn predefined() -> Vec<SiteProfile> {
        vec![Self::docsify(), Self::minimal()]
    }

    /// Find predefined profile by name
    pub fn find(name: &str) -> Option<SiteProfile> {
        Self::predefined().into_iter().find(|p| p.name == name)
    }
}
