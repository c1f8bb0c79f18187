//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Docsify documentation site validator
#[derive(Parser, Debug)]
#[command(name = "docsify-validate")]
#[command(version)]
#[command(about = "Validate the layout and content of a Docsify documentation site")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

impl Args {
    /// The subcommand to run; bare invocation validates like `check`
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Check(CheckArgs::default()))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a Docsify site (default)
    Check(CheckArgs),

    /// List required files and directories
    List(ListArgs),

    /// Count Markdown files and Mermaid diagrams
    Stats(StatsArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for check command
#[derive(Parser, Debug, Default)]
pub struct CheckArgs {
    /// Site root directory
    #[arg(short, long)]
    pub root: Option<String>,

    /// Site profile (docsify, minimal, or defined in config)
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Skip the HTML syntax check
    #[arg(long)]
    pub no_tidy: bool,

    /// Report every missing entry instead of stopping at the first
    #[arg(short, long)]
    pub keep_going: bool,

    /// Output format (table, json, json-pretty, csv, summary)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Also write the report to a file
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Profile to list (defaults to the configured profile)
    #[arg(short, long)]
    pub profile: Option<String>,

    /// List every available profile
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for stats command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Site root directory
    #[arg(short, long)]
    pub root: Option<String>,

    /// Output format (table, json, json-pretty, csv, summary)
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for config management
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Write an example configuration file
    Init {
        /// Destination path
        #[arg(default_value = "docsify-validate.yaml")]
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show environment variable overrides
    Env,
}
