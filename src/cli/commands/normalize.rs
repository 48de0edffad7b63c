//! Normalize command implementation.
//!
//! The `envpicker normalize RAW` command prints the URL the resolver would
//! parse for RAW.

use crate::cli::args::NormalizeArgs;
use crate::environment::EnvironmentResolver;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The normalize command implementation.
pub struct NormalizeCommand<'a> {
    resolver: &'a EnvironmentResolver,
    args: NormalizeArgs,
}

impl<'a> NormalizeCommand<'a> {
    /// Create a new normalize command.
    pub fn new(resolver: &'a EnvironmentResolver, args: NormalizeArgs) -> Self {
        Self { resolver, args }
    }
}

impl Command for NormalizeCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&self.resolver.normalize_url(&self.args.raw));
        Ok(CommandResult::success())
    }
}
