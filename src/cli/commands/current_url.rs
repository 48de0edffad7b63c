//! Current URL command implementation.
//!
//! The `envpicker current-url` command prints the URL of the request being
//! served, as read from CGI meta-variables.

use crate::environment::EnvironmentResolver;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The current-url command implementation.
pub struct CurrentUrlCommand<'a> {
    resolver: &'a EnvironmentResolver,
}

impl<'a> CurrentUrlCommand<'a> {
    /// Create a new current-url command.
    pub fn new(resolver: &'a EnvironmentResolver) -> Self {
        Self { resolver }
    }
}

impl Command for CurrentUrlCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.resolver.current_url() {
            Some(url) => {
                ui.message(&url);
                Ok(CommandResult::success())
            }
            None => {
                if self.resolver.is_cli() {
                    ui.warning("No current request: running in command-line context (try --web)");
                } else {
                    ui.warning("No current request: no host available");
                }
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{RequestContext, RuntimeContext};
    use crate::ui::MockUI;

    #[test]
    fn prints_url_in_web_context() {
        let r = EnvironmentResolver::default()
            .with_runtime(RuntimeContext::web())
            .with_request(
                RequestContext::new()
                    .with_protocol("HTTP/1.1")
                    .with_server_name("example.com")
                    .with_port(8080)
                    .with_request_uri("/x?y=1"),
            );
        let mut ui = MockUI::new();
        let result = CurrentUrlCommand::new(&r).execute(&mut ui).unwrap();
        assert!(result.success);
        assert_eq!(ui.messages(), &["http://example.com:8080/x?y=1".to_string()]);
    }

    #[test]
    fn fails_in_cli_context() {
        let r = EnvironmentResolver::default();
        let mut ui = MockUI::new();
        let result = CurrentUrlCommand::new(&r).execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_warning("command-line"));
    }

    #[test]
    fn fails_without_host() {
        let r = EnvironmentResolver::default().with_runtime(RuntimeContext::web());
        let mut ui = MockUI::new();
        let result = CurrentUrlCommand::new(&r).execute(&mut ui).unwrap();
        assert!(!result.success);
        assert!(ui.has_warning("no host"));
    }
}
