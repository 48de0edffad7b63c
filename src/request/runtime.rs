//! Command-line vs web context detection.

use std::env::VarError;

/// Variable that forces web context, for exercising request handling
/// without a real server.
pub const FORCE_WEB_VAR: &str = "ENVPICKER_FORCE_WEB";

/// Interface the host runtime reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interface {
    /// Started from a shell or another process.
    #[default]
    CommandLine,
    /// Started by a web server to handle a request.
    Web,
}

/// What the resolver knows about how the process was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuntimeContext {
    /// Interface reported by the runtime.
    pub interface: Interface,
    /// Number of process arguments, including the program name, if known.
    pub arg_count: Option<usize>,
    /// Report web context regardless of the other fields.
    pub force_web: bool,
}

impl RuntimeContext {
    /// A plain command-line context.
    pub fn command_line() -> Self {
        Self::default()
    }

    /// A web context with no argument metadata.
    pub fn web() -> Self {
        Self {
            interface: Interface::Web,
            arg_count: None,
            force_web: false,
        }
    }

    /// Describe the running process.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key), Some(std::env::args_os().count()))
    }

    /// Describe a process through a custom lookup (for testing).
    ///
    /// The interface is web when `GATEWAY_INTERFACE` is set, as it is for
    /// CGI programs.
    pub fn from_env_with<F>(env_fn: F, arg_count: Option<usize>) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let interface = if env_fn("GATEWAY_INTERFACE").is_ok_and(|v| !v.is_empty()) {
            Interface::Web
        } else {
            Interface::CommandLine
        };

        Self {
            interface,
            arg_count,
            force_web: env_fn(FORCE_WEB_VAR).is_ok_and(|v| is_truthy(&v)),
        }
    }

    /// Builder: force web context.
    pub fn with_force_web(mut self, force_web: bool) -> Self {
        self.force_web = force_web;
        self
    }

    /// Whether the process runs outside any request.
    ///
    /// True for a command-line interface, and also whenever argument
    /// metadata shows at least one argument. The argument check is a loose
    /// heuristic kept for compatibility: most processes have a program
    /// name, so it usually reports command line. `force_web` overrides both.
    pub fn is_cli(&self) -> bool {
        if self.force_web {
            return false;
        }
        self.interface == Interface::CommandLine || self.arg_count.is_some_and(|n| n >= 1)
    }

    /// Negation of [`is_cli`](Self::is_cli).
    pub fn is_web(&self) -> bool {
        !self.is_cli()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
