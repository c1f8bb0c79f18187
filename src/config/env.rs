//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "DOCSIFY_VALIDATE";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Site root from DOCSIFY_VALIDATE_ROOT
    pub root: Option<String>,
    /// Profile from DOCSIFY_VALIDATE_PROFILE
    pub profile: Option<String>,
    /// Output format from DOCSIFY_VALIDATE_FORMAT
    pub format: Option<String>,
    /// Disable tidy from DOCSIFY_VALIDATE_NO_TIDY
    pub no_tidy: Option<bool>,
    /// Report every missing entry from DOCSIFY_VALIDATE_KEEP_GOING
    pub keep_going: Option<bool>,
    /// Config file from DOCSIFY_VALIDATE_CONFIG
    pub config_file: Option<String>,
    /// Log level from DOCSIFY_VALIDATE_LOG_LEVEL
    pub log_level: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(&format!("{ENV_PREFIX}_{name}"));
        let get_bool = |name: &str| get(name).map(|v| parse_bool(&v));

        Self {
            root: get("ROOT"),
            profile: get("PROFILE"),
            format: get("FORMAT"),
            no_tidy: get_bool("NO_TIDY"),
            keep_going: get_bool("KEEP_GOING"),
            config_file: get("CONFIG"),
            log_level: get("LOG_LEVEL"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.root.is_some()
            || self.profile.is_some()
            || self.format.is_some()
            || self.no_tidy.is_some()
            || self.keep_going.is_some()
            || self.config_file.is_some()
            || self.log_level.is_some()
    }

    /// Print current environment configuration
    pub fn print_summary(&self) {
        println!("Environment Configuration:");
        println!("  {}_ROOT:        {:?}", ENV_PREFIX, self.root);
        println!("  {}_PROFILE:     {:?}", ENV_PREFIX, self.profile);
        println!("  {}_FORMAT:      {:?}", ENV_PREFIX, self.format);
        println!("  {}_NO_TIDY:     {:?}", ENV_PREFIX, self.no_tidy);
        println!("  {}_KEEP_GOING:  {:?}", ENV_PREFIX, self.keep_going);
        println!("  {}_CONFIG:      {:?}", ENV_PREFIX, self.config_file);
        println!("  {}_LOG_LEVEL:   {:?}", ENV_PREFIX, self.log_level);
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enabled"
    )
}

/// Print all DOCSIFY_VALIDATE environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_ROOT         Site root to validate");
    println!("  {ENV_PREFIX}_PROFILE      Site profile (docsify, minimal, or from config)");
    println!("  {ENV_PREFIX}_FORMAT       Output format (table, json, json-pretty, csv, summary)");
    println!("  {ENV_PREFIX}_NO_TIDY      Skip the HTML syntax check (true/false)");
    println!("  {ENV_PREFIX}_KEEP_GOING   Report every missing entry (true/false)");
    println!("  {ENV_PREFIX}_CONFIG       Path to configuration file");
    println!("  {ENV_PREFIX}_LOG_LEVEL    Log level (trace, debug, info, warn, error)");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_ROOT=docs");
    println!("  docsify-validate check");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_env_config_default() {
        let config = EnvConfig::default();
        assert!(config.root.is_none());
        assert!(!config.has_any());
    }

    #[test]
    fn test_from_lookup() {
        let config = EnvConfig::from_lookup(lookup(&[
            ("DOCSIFY_VALIDATE_ROOT", "docs"),
            ("DOCSIFY_VALIDATE_FORMAT", "json"),
            ("DOCSIFY_VALIDATE_NO_TIDY", "yes"),
            ("UNRELATED", "x"),
        ]));

        assert_eq!(config.root.as_deref(), Some("docs"));
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.no_tidy, Some(true));
        assert!(config.keep_going.is_none());
        assert!(config.has_any());
    }

    #[test]
    fn test_env_bool_parsing() {
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("1"));
        assert!(parse_bool("enabled"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("off"));
    }
}
