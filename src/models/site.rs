//! Docsify site layout definitions

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Files every Docsify site root must contain, in check order
pub const DOCSIFY_REQUIRED_FILES: &[&str] = &[
    "index.html",
    "README.md",
    "_sidebar.md",
    "_navbar.md",
    "_coverpage.md",
    ".nojekyll",
];

/// Content sections expected under the site root, in check order
pub const DOCSIFY_REQUIRED_DIRS: &[&str] = &[
    "getting-started",
    "testing-modules",
    "advanced",
    "reference",
    "examples",
    "contributing",
];

/// Entry point linted for HTML syntax
pub const INDEX_HTML: &str = "index.html";

/// Expected layout of a documentation site
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLayout {
    pub root: PathBuf,
    pub required_files: Vec<String>,
    pub required_dirs: Vec<String>,
}

impl SiteLayout {
    /// Standard Docsify layout rooted at `root`
    pub fn docsify(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            required_files: owned_names(DOCSIFY_REQUIRED_FILES),
            required_dirs: owned_names(DOCSIFY_REQUIRED_DIRS),
        }
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

    /// Absolute or root-relative path of an entry
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn index_html(&self) -> PathBuf {
        self.path_of(INDEX_HTML)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docsify_layout() {
        let layout = SiteLayout::docsify("docs");
        assert_eq!(layout.required_files.len(), 6);
        assert_eq!(layout.required_files[0], "index.html");
        assert_eq!(layout.required_files[5], ".nojekyll");
        assert_eq!(layout.index_html(), PathBuf::from("docs/index.html"));
    }

    #[test]
    fn test_layout_overrides() {
        let layout = SiteLayout::docsify(".")
            .with_files(["index.html"])
            .with_dirs(Vec::<String>::new());

        assert_eq!(layout.required_files, vec!["index.html".to_string()]);
        assert!(layout.required_dirs.is_empty());
    }
}
