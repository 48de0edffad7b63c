//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// envpicker - pick the deployment environment for this process.
#[derive(Debug, Parser)]
#[command(name = "envpicker")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ENVPICKER_CONFIG and .envpicker/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Register an environment rule (repeatable)
    #[arg(long = "env", value_name = "NAME=PATTERN", value_parser = parse_rule, global = true)]
    pub rules: Vec<(String, String)>,

    /// Name of the override variable
    #[arg(long, value_name = "KEY", global = true)]
    pub env_var_key: Option<String>,

    /// Accept any resolved name, registered or not
    #[arg(long, global = true)]
    pub no_strict: bool,

    /// Treat the process as serving a web request
    #[arg(long, global = true)]
    pub web: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the resolved environment (default if no command specified)
    Resolve(ResolveArgs),

    /// Check whether the resolved environment is NAME
    Is(IsArgs),

    /// Print a URL-like string with a scheme added
    Normalize(NormalizeArgs),

    /// Print the URL of the current request
    CurrentUrl,

    /// Show whether this is a command-line or web context
    Context(ContextArgs),

    /// List registered environments
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// URL or host to resolve instead of the current request
    pub url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `is` command.
#[derive(Debug, Clone, clap::Args)]
pub struct IsArgs {
    /// Environment name to check for
    pub name: String,

    /// URL or host to resolve instead of the current request
    pub url: Option<String>,
}

/// Arguments for the `normalize` command.
#[derive(Debug, Clone, clap::Args)]
pub struct NormalizeArgs {
    /// URL-like string, e.g. a bare hostname
    pub raw: String,
}

/// Arguments for the `context` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ContextArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Parse a `NAME=PATTERN` rule. The pattern may itself contain `=`.
fn parse_rule(s: &str) -> Result<(String, String), String> {
    let (name, pattern) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PATTERN, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing environment name in '{}'", s));
    }
    Ok((name.to_string(), pattern.to_string()))
}
