//! docsify-validate - Docsify documentation site validator
//!
//! A CLI tool that checks a Docsify site for the files and directories it
//! needs to be served, lints its `index.html` with HTML Tidy when available,
//! and reports Markdown and Mermaid diagram counts.
//!
//! ## Features
//!
//! - Required file checks: `index.html`, `README.md`, `_sidebar.md`,
//!   `_navbar.md`, `_coverpage.md`, `.nojekyll`
//! - Required content directory checks
//! - Optional HTML syntax lint through `tidy`
//! - Markdown file and Mermaid diagram counts
//! - Multiple output formats (Table, JSON, CSV, Summary)
//!
//! ## Usage
//!
//! ```bash
//! # Validate the current directory
//! docsify-validate
//!
//! # Validate docs/ and report every missing entry
//! docsify-validate check --root docs --keep-going
//!
//! # Show Markdown statistics as JSON
//! docsify-validate stats --root docs --format json
//!
//! # List the entries a profile requires
//! docsify-validate list --profile minimal
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};

mod cli;
mod config;
mod models;
mod output;
mod utils;
mod validator;

use cli::Args;
use config::{print_env_help, ConfigFile, EnvConfig, SiteProfile};
use output::{OutputFormat, ResultFormatter};
use utils::logger::{init_logger, LogLevel};
use validator::{MarkdownScanner, SiteValidator};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env = EnvConfig::load();

    init_logger(LogLevel::resolve(
        args.log_level.as_deref(),
        args.verbose,
        env.log_level.as_deref(),
    ));

    let config_path = args.config.clone().or_else(|| env.config_file.clone());
    let config = load_config(config_path.as_deref(), &env)?;

    let exit_code = match args.into_command() {
        cli::Command::Check(check_args) => run_check(check_args, &config).await?,
        cli::Command::List(list_args) => {
            list_profiles(list_args, &config)?;
            0
        }
        cli::Command::Stats(stats_args) => {
            show_stats(stats_args, &config)?;
            0
        }
        cli::Command::Config(config_args) => {
            manage_config(config_args, &config, &env)?;
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

/// Load the config file and layer environment overrides on top
fn load_config(path: Option<&str>, env: &EnvConfig) -> Result<ConfigFile> {
    let mut config = match path {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };

    config.app.apply_env(env);
    Ok(config)
}

fn resolve_profile(config: &ConfigFile, name: &str) -> Result<SiteProfile> {
    config.profile(name).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown profile: {} (available: {})",
            name,
            config.profile_names().join(", ")
        )
    })
}

fn resolve_format(name: &str) -> OutputFormat {
    OutputFormat::from_str(name).unwrap_or_else(|| {
        warn!(
            "Unknown output format '{}', using table (available: {})",
            name,
            OutputFormat::names().join(", ")
        );
        OutputFormat::Table
    })
}

async fn run_check(args: cli::CheckArgs, config: &ConfigFile) -> Result<i32> {
    let mut app = config.app.clone();
    if let Some(root) = args.root {
        app.root = root;
    }
    if let Some(profile) = args.profile {
        app.profile = profile;
    }
    if let Some(format) = args.format {
        app.format = format;
    }
    if args.no_tidy {
        app.tidy.enabled = false;
    }
    if args.keep_going {
        app.fail_fast = false;
    }

    let profile = resolve_profile(config, &app.profile)?;
    let format = resolve_format(&app.format);

    let summary = SiteValidator::from_config(&app, &profile)
        .run()
        .await
        .with_context(|| format!("Cannot validate {}", app.root))?;

    let formatter = if args.no_color || !console::colors_enabled() {
        ResultFormatter::new(format).no_color()
    } else {
        ResultFormatter::new(format)
    };
    println!("{}", formatter.format_summary(&summary));

    if let Some(path) = args.output {
        output::write_summary_to_file(&path, &summary, format)?;
        info!("Report written to {}", path);
    }

    Ok(summary.exit_code())
}

fn list_profiles(args: cli::ListArgs, config: &ConfigFile) -> Result<()> {
    if args.all {
        println!("\nAvailable profiles:\n");
        for name in config.profile_names() {
            let profile = resolve_profile(config, &name)?;
            println!("  {:12} {}", profile.name, profile.description);
        }
        println!();
        return Ok(());
    }

    let name = args.profile.unwrap_or_else(|| config.app.profile.clone());
    let profile = resolve_profile(config, &name)?;

    println!("\nProfile: {}", profile.name);
    if !profile.description.is_empty() {
        println!("{}", profile.description);
    }
    println!("──────────────────────────────────────────────────────────────────────");

    println!("\nRequired files:");
    for file in &profile.required_files {
        println!("  - {file}");
    }

    println!("\nRequired directories:");
    if profile.required_dirs.is_empty() {
        println!("  (none)");
    }
    for dir in &profile.required_dirs {
        println!("  - {dir}/");
    }
    println!();

    Ok(())
}

fn show_stats(args: cli::StatsArgs, config: &ConfigFile) -> Result<()> {
    let root = args.root.unwrap_or_else(|| config.app.root.clone());
    let format = resolve_format(args.format.as_deref().unwrap_or(&config.app.format));

    let stats = MarkdownScanner::new(config.app.scan.clone())
        .scan(Path::new(&root))
        .with_context(|| format!("Cannot scan {root}"))?;

    println!("{}", ResultFormatter::new(format).format_stats(&root, &stats));
    Ok(())
}

fn manage_config(args: cli::ConfigArgs, config: &ConfigFile, env: &EnvConfig) -> Result<()> {
    match args.action {
        cli::ConfigAction::Show { format } => {
            let content = match format.to_lowercase().as_str() {
                "json" => serde_json::to_string_pretty(config)?,
                "yaml" | "yml" => serde_yaml::to_string(config)?,
                other => anyhow::bail!("Unknown config format: {other} (use yaml or json)"),
            };
            println!("{content}");
        }

        cli::ConfigAction::Init { path, force } => {
            if Path::new(&path).exists() && !force {
                anyhow::bail!("{path} already exists (use --force to overwrite)");
            }
            ConfigFile::example().save(&path)?;
            println!("✓ Wrote example configuration to {path}");
        }

        cli::ConfigAction::Env => {
            if env.has_any() {
                env.print_summary();
            } else {
                println!("No environment overrides set.");
            }
            println!();
            print_env_help();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DOCSIFY_REQUIRED_DIRS, DOCSIFY_REQUIRED_FILES};
    use std::fs;

    fn site(skip: Option<&str>) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for file in DOCSIFY_REQUIRED_FILES.iter().filter(|f| Some(**f) != skip) {
            fs::write(dir.path().join(file), "").unwrap();
        }
        for sub in DOCSIFY_REQUIRED_DIRS {
            fs::create_dir(dir.path().join(sub)).unwrap();
        }
        dir
    }

    fn check_args(root: &Path) -> cli::CheckArgs {
        cli::CheckArgs {
            root: Some(root.display().to_string()),
            no_tidy: true,
            no_color: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_run_check_valid_site_exits_zero() {
        let dir = site(None);
        let code = run_check(check_args(dir.path()), &ConfigFile::default())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_run_check_missing_file_exits_one() {
        let dir = site(Some("_coverpage.md"));
        let code = run_check(check_args(dir.path()), &ConfigFile::default())
            .await
            .unwrap();
        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_run_check_missing_root_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_check(check_args(&dir.path().join("gone")), &ConfigFile::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_check_unknown_profile_is_error() {
        let dir = site(None);
        let mut args = check_args(dir.path());
        args.profile = Some("nope".to_string());

        let err = run_check(args, &ConfigFile::default()).await.unwrap_err();
        assert!(err.to_string().contains("Unknown profile: nope"));
    }

    #[tokio::test]
    async fn test_run_check_writes_report() {
        let dir = site(None);
        let out = tempfile::tempdir().unwrap();
        let report = out.path().join("report.csv");

        let mut args = check_args(dir.path());
        args.format = Some("csv".to_string());
        args.output = Some(report.display().to_string());

        run_check(args, &ConfigFile::default()).await.unwrap();
        let content = fs::read_to_string(&report).unwrap();
        assert!(content.starts_with("category,check,status"));
        assert!(content.contains("Files,index.html,PASS"));
    }

    #[test]
    fn test_env_overrides_config_file() {
        let env = EnvConfig {
            profile: Some("minimal".to_string()),
            ..Default::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        ConfigFile::example().save(&path).unwrap();

        let config = load_config(path.to_str(), &env).unwrap();
        assert_eq!(config.app.profile, "minimal");
        assert_eq!(config.app.root, "docs");
    }

    #[test]
    fn test_resolve_format_falls_back_to_table() {
        assert_eq!(resolve_format("json"), OutputFormat::Json);
        assert_eq!(resolve_format("xml"), OutputFormat::Table);
    }

    #[test]
    fn test_list_profiles() {
        let config = ConfigFile::example();
        let all = cli::ListArgs {
            profile: None,
            all: true,
        };
        assert!(list_profiles(all, &config).is_ok());

        let named = cli::ListArgs {
            profile: Some("api-docs".to_string()),
            all: false,
        };
        assert!(list_profiles(named, &config).is_ok());
    }

    #[test]
    fn test_list_unknown_profile_is_error() {
        let args = cli::ListArgs {
            profile: Some("nope".to_string()),
            all: false,
        };
        let err = list_profiles(args, &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("Unknown profile: nope"));
    }

    #[test]
    fn test_show_stats() {
        let dir = site(None);
        let args = cli::StatsArgs {
            root: Some(dir.path().display().to_string()),
            format: Some("json".to_string()),
        };
        assert!(show_stats(args, &ConfigFile::default()).is_ok());
    }

    #[test]
    fn test_show_stats_missing_root_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = cli::StatsArgs {
            root: Some(dir.path().join("gone").display().to_string()),
            format: None,
        };
        assert!(show_stats(args, &ConfigFile::default()).is_err());
    }

    fn config_action(action: cli::ConfigAction) -> Result<()> {
        manage_config(
            cli::ConfigArgs { action },
            &ConfigFile::default(),
            &EnvConfig::default(),
        )
    }

    #[test]
    fn test_config_init_writes_example() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/docsify-validate.yaml");

        config_action(cli::ConfigAction::Init {
            path: path.display().to_string(),
            force: false,
        })
        .unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert!(config.profile("api-docs").is_some());
    }

    #[test]
    fn test_config_init_requires_force_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docsify-validate.yaml");
        fs::write(&path, "keep me").unwrap();

        let err = config_action(cli::ConfigAction::Init {
            path: path.display().to_string(),
            force: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

        config_action(cli::ConfigAction::Init {
            path: path.display().to_string(),
            force: true,
        })
        .unwrap();
        assert!(ConfigFile::load(&path).is_ok());
    }

    #[test]
    fn test_config_show_formats() {
        for format in ["yaml", "json"] {
            assert!(config_action(cli::ConfigAction::Show {
                format: format.to_string()
            })
            .is_ok());
        }

        let err = config_action(cli::ConfigAction::Show {
            format: "toml".to_string(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("Unknown config format: toml"));
    }

    #[test]
    fn test_config_env() {
        assert!(config_action(cli::ConfigAction::Env).is_ok());
    }
}
