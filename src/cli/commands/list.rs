//! List command implementation.
//!
//! The `envpicker list` command shows the registered environments in
//! matching order, along with the resolver settings.

use serde_json::json;

use crate::cli::args::ListArgs;
use crate::environment::EnvironmentResolver;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    resolver: &'a EnvironmentResolver,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(resolver: &'a EnvironmentResolver, args: ListArgs) -> Self {
        Self { resolver, args }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let r = self.resolver;

        if self.args.json {
            let value = json!({
                "default": r.default_environment(),
                "strict": r.strict(),
                "env_var_key": r.env_var_key(),
                "environments": r.environments(),
                "predicates": r.predicate_names(),
            });
            let text = serde_json::to_string_pretty(&value).map_err(anyhow::Error::from)?;
            ui.message(&text);
            return Ok(CommandResult::success());
        }

        ui.field("default", r.default_environment());
        ui.field("strict", &r.strict().to_string());
        ui.field("env_var_key", r.env_var_key());

        if r.environments().is_empty() {
            ui.warning("No environments registered");
        }

        for rule in r.environments() {
            ui.field(rule.name(), rule.pattern());
            if let Err(e) = rule.validate() {
                ui.warning(&e.to_string());
            }
        }

        Ok(CommandResult::success())
    }
}
