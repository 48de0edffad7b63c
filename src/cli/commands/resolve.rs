//! Resolve command implementation.
//!
//! The `envpicker resolve [URL]` command prints the resolved environment.

use crate::cli::args::ResolveArgs;
use crate::environment::EnvironmentResolver;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand<'a> {
    resolver: &'a EnvironmentResolver,
    args: ResolveArgs,
}

impl<'a> ResolveCommand<'a> {
    /// Create a new resolve command.
    pub fn new(resolver: &'a EnvironmentResolver, args: ResolveArgs) -> Self {
        Self { resolver, args }
    }
}

impl Command for ResolveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = self.resolver.resolve_detailed(self.args.url.as_deref())?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&resolved).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            ui.environment(&resolved.name);
        }

        Ok(CommandResult::success())
    }
}
