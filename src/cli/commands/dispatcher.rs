//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ResolveArgs};
use crate::config::load_config;
use crate::environment::EnvironmentResolver;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Build the resolver from the config file, the process environment
    /// and the global flags, in that order of precedence (flags last).
    pub fn build_resolver(&self, cli: &Cli) -> Result<EnvironmentResolver> {
        let config = load_config(cli.config.as_deref(), &self.project_root)?;
        let resolver = EnvironmentResolver::from_env(config.into_resolver_config());
        Ok(apply_flags(resolver, cli))
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(Commands::Completions(args)) = &cli.command {
            let cmd = super::completions::CompletionsCommand::new(args.clone());
            return cmd.execute(ui);
        }

        let resolver = self.build_resolver(cli)?;
        dispatch_with(&resolver, cli, ui)
    }
}

/// Layer global flags over a resolver.
pub fn apply_flags(mut resolver: EnvironmentResolver, cli: &Cli) -> EnvironmentResolver {
    resolver.configure(cli.rules.iter().map(|(n, p)| (n.as_str(), p.as_str())));
    if cli.no_strict {
        resolver.set_strict(false);
    }
    if let Some(key) = &cli.env_var_key {
        resolver.set_env_var_key(key);
    }
    if cli.web {
        resolver.set_force_web(true);
    }
    resolver
}

/// Route a parsed command line to its command, using a prepared resolver.
pub fn dispatch_with(
    resolver: &EnvironmentResolver,
    cli: &Cli,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    match &cli.command {
        Some(Commands::Resolve(args)) => {
            super::resolve::ResolveCommand::new(resolver, args.clone()).execute(ui)
        }
        Some(Commands::Is(args)) => super::is::IsCommand::new(resolver, args.clone()).execute(ui),
        Some(Commands::Normalize(args)) => {
            super::normalize::NormalizeCommand::new(resolver, args.clone()).execute(ui)
        }
        Some(Commands::CurrentUrl) => super::current_url::CurrentUrlCommand::new(resolver).execute(ui),
        Some(Commands::Context(args)) => {
            super::context::ContextCommand::new(resolver, args.clone()).execute(ui)
        }
        Some(Commands::List(args)) => {
            super::list::ListCommand::new(resolver, args.clone()).execute(ui)
        }
        Some(Commands::Completions(args)) => {
            super::completions::CompletionsCommand::new(args.clone()).execute(ui)
        }
        None => super::resolve::ResolveCommand::new(resolver, ResolveArgs::default()).execute(ui),
    }
}
