//! Context command implementation.
//!
//! The `envpicker context` command shows whether the process counts as
//! command-line or web context.

use serde_json::json;

use crate::cli::args::ContextArgs;
use crate::environment::EnvironmentResolver;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The context command implementation.
pub struct ContextCommand<'a> {
    resolver: &'a EnvironmentResolver,
    args: ContextArgs,
}

impl<'a> ContextCommand<'a> {
    /// Create a new context command.
    pub fn new(resolver: &'a EnvironmentResolver, args: ContextArgs) -> Self {
        Self { resolver, args }
    }
}

impl Command for ContextCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cli = self.resolver.is_cli();
        let web = self.resolver.is_web();
        let current_url = self.resolver.current_url();

        if self.args.json {
            let value = json!({
                "cli": cli,
                "web": web,
                "current_url": current_url,
            });
            let text = serde_json::to_string_pretty(&value).map_err(anyhow::Error::from)?;
            ui.message(&text);
        } else {
            ui.field("cli", &cli.to_string());
            ui.field("web", &web.to_string());
            ui.field("current_url", current_url.as_deref().unwrap_or("-"));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{RequestContext, RuntimeContext};
    use crate::ui::MockUI;

    #[test]
    fn reports_cli_context() {
        let r = EnvironmentResolver::default();
        let mut ui = MockUI::new();
        ContextCommand::new(&r, ContextArgs::default())
            .execute(&mut ui)
            .unwrap();
        assert_eq!(ui.field_value("cli"), Some("true"));
        assert_eq!(ui.field_value("web"), Some("false"));
        assert_eq!(ui.field_value("current_url"), Some("-"));
    }

    #[test]
    fn force_web_flips_context() {
        let mut r = EnvironmentResolver::default()
            .with_request(RequestContext::new().with_server_name("example.com"));
        r.set_force_web(true);
        let mut ui = MockUI::new();
        ContextCommand::new(&r, ContextArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["cli"], false);
        assert_eq!(value["web"], true);
        assert_eq!(value["current_url"], "http://example.com");
    }

    #[test]
    fn web_runtime_reports_web() {
        let r = EnvironmentResolver::default().with_runtime(RuntimeContext::web());
        let mut ui = MockUI::new();
        ContextCommand::new(&r, ContextArgs::default())
            .execute(&mut ui)
            .unwrap();
        assert_eq!(ui.field_value("web"), Some("true"));
    }
}
