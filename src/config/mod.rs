//! Configuration module
//!
//! Handles loading and managing configuration.

mod env;
mod file;
mod profile;

pub use env::{print_env_help, EnvConfig};
pub use file::ConfigFile;
pub use profile::SiteProfile;

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Site root to validate
    pub root: String,

    /// Profile selecting the required entries
    pub profile: String,

    /// Output format
    pub format: String,

    /// Stop at the first missing required entry
    pub fail_fast: bool,

    /// HTML lint settings
    pub tidy: TidyConfig,

    /// Markdown scan settings
    pub scan: ScanConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            profile: "docsify".to_string(),
            format: "table".to_string(),
            fail_fast: true,
            tidy: TidyConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl AppConfig {
    /// Apply environment overrides
    pub fn apply_env(&mut self, env: &EnvConfig) {
        if let Some(root) = &env.root {
            self.root = root.clone();
        }
        if let Some(profile) = &env.profile {
            self.profile = profile.clone();
        }
        if let Some(format) = &env.format {
            self.format = format.clone();
        }
        if let Some(true) = env.no_tidy {
            self.tidy.enabled = false;
        }
        if let Some(true) = env.keep_going {
            self.fail_fast = false;
        }
    }
}

/// HTML Tidy configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TidyConfig {
    /// Run tidy when it is installed
    pub enabled: bool,

    /// Executable name or path
    pub command: String,

    /// Arguments placed before the file name
    pub args: Vec<String>,

    /// Timeout in seconds
    pub timeout_secs: u64,
}

impl Default for TidyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "tidy".to_string(),
            args: vec!["-q".to_string(), "-e".to_string()],
            timeout_secs: 30,
        }
    }
}

/// Markdown scan configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory names never descended into
    pub exclude_dirs: Vec<String>,

    /// Fence opening a Mermaid block
    pub mermaid_fence: String,

    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: vec![".git".to_string(), "node_modules".to_string()],
            mermaid_fence: "```mermaid".to_string(),
            follow_links: false,
        }
    }
}
