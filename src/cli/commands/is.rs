//! Is command implementation.
//!
//! The `envpicker is NAME [URL]` command checks the resolved environment.
//! It prints `true` or `false` and exits non-zero on `false`, so it can be
//! used directly in shell conditionals.

use crate::cli::args::IsArgs;
use crate::environment::EnvironmentResolver;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The is command implementation.
pub struct IsCommand<'a> {
    resolver: &'a EnvironmentResolver,
    args: IsArgs,
}

impl<'a> IsCommand<'a> {
    /// Create a new is command.
    pub fn new(resolver: &'a EnvironmentResolver, args: IsArgs) -> Self {
        Self { resolver, args }
    }
}

impl Command for IsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let matched = self
            .resolver
            .is(&self.args.name, self.args.url.as_deref())?;

        ui.message(if matched { "true" } else { "false" });

        if matched {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::ResolverConfig;
    use crate::ui::MockUI;

    fn resolver() -> EnvironmentResolver {
        let mut resolver = EnvironmentResolver::new(ResolverConfig::new());
        resolver.set_env_var_key("ENVPICKER_TEST_UNSET_OVERRIDE");
        resolver.add("local", r"^localhost$");
        resolver
    }

    fn args(name: &str, url: Option<&str>) -> IsArgs {
        IsArgs {
            name: name.to_string(),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn matching_name_succeeds() {
        let r = resolver();
        let mut ui = MockUI::new();
        let result = IsCommand::new(&r, args("LOCAL", Some("localhost")))
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);
        assert_eq!(ui.messages(), &["true".to_string()]);
    }

    #[test]
    fn other_name_fails_with_exit_one() {
        let r = resolver();
        let mut ui = MockUI::new();
        let result = IsCommand::new(&r, args("production", Some("localhost")))
            .execute(&mut ui)
            .unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.messages(), &["false".to_string()]);
    }

    #[test]
    fn absent_url_checks_default() {
        let r = resolver();
        let mut ui = MockUI::new();
        let result = IsCommand::new(&r, args("production", None))
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);
    }
}
