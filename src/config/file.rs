//! Configuration file management
//!
//! Handles finding, loading, and validating configuration files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use super::profile::SiteProfile;
use super::AppConfig;

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./docsify-validate.yaml",
    "./docsify-validate.yml",
    "./.docsify-validate.yaml",
    "~/.config/docsify-validate/config.yaml",
];

const SUPPORTED_VERSIONS: &[&str] = &["1.0"];

/// Full configuration file structure
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Version of config file format
    #[serde(default = "default_version")]
    pub version: String,

    /// Application settings
    #[serde(default)]
    pub app: AppConfig,

    /// Additional site profiles
    #[serde(default)]
    pub profiles: Vec<SiteProfile>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: default_version(),
            app: AppConfig::default(),
            profiles: Vec::new(),
        }
    }
}

impl ConfigFile {
    /// Find configuration file in standard locations
    pub fn find() -> Option<PathBuf> {
        CONFIG_LOCATIONS
            .iter()
            .map(|location| expand_path(location))
            .find(|path| path.exists())
    }

    /// Load configuration from default location
    pub fn load_default() -> Result<Self> {
        if let Some(path) = Self::find() {
            tracing::debug!("Using config file {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml_file(path) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_VERSIONS.contains(&self.version.as_str()) {
            anyhow::bail!("Unsupported config version: {}", self.version);
        }

        if self.app.scan.mermaid_fence.trim().is_empty() {
            anyhow::bail!("scan.mermaid_fence must not be empty");
        }

        for (i, profile) in self.profiles.iter().enumerate() {
            if profile.name.trim().is_empty() {
                anyhow::bail!("Profile #{} has an empty name", i + 1);
            }
            if self.profiles[..i].iter().any(|p| p.name == profile.name) {
                anyhow::bail!("Duplicate profile '{}'", profile.name);
            }
            for entry in profile.required_files.iter().chain(&profile.required_dirs) {
                if !is_contained(entry) {
                    anyhow::bail!(
                        "Entry '{}' in profile '{}' must be a relative path inside the site root",
                        entry,
                        profile.name
                    );
                }
            }
        }

        if self.profile(&self.app.profile).is_none() {
            anyhow::bail!("Unknown profile: {}", self.app.profile);
        }

        Ok(())
    }

    /// Generate example configuration
    pub fn example() -> Self {
        let mut app = AppConfig::default();
        app.root = "docs".to_string();

        Self {
            version: default_version(),
            app,
            profiles: vec![SiteProfile::new("api-docs")
                .with_description("Docsify site without cover page")
                .with_files(["index.html", "README.md", "_sidebar.md", ".nojekyll"])
                .with_dirs(["api", "guides"])],
        }
    }

    /// Get profile by name; file profiles shadow predefined ones
    pub fn profile(&self, name: &str) -> Option<SiteProfile> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .or_else(|| SiteProfile::find(name))
    }

    /// All profile names, file profiles first
    pub fn profile_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.profiles.iter().map(|p| p.name.clone()).collect();
        for profile in SiteProfile::predefined() {
            if !names.contains(&profile.name) {
                names.push(profile.name);
            }
        }
        names
    }
}

/// Relative, non-empty, and never climbing out of the root
fn is_contained(entry: &str) -> bool {
    let path = Path::new(entry);
    !entry.trim().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Expand ~ to home directory
fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
