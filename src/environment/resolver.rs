//! Environment resolution.
//!
//! Resolves the active environment using the priority chain:
//! 1. Explicit URL: its host is matched against the registered patterns
//!    (the override variable is not consulted)
//! 2. Override variable (`ENGINE_ENV` by default)
//! 3. Host of the current request, matched against the registered patterns
//! 4. Fallback to "production"
//!
//! In strict mode the result must be the fallback or a registered name.

use std::env::VarError;

use serde::Serialize;

use super::pattern::normalize_name;
use super::registry::PatternRegistry;
use crate::error::{PickerError, Result};
use crate::request::{self, RequestContext, RuntimeContext};

/// Environment used when nothing else matches. Always accepted.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Default name of the override variable.
pub const DEFAULT_ENV_VAR_KEY: &str = "ENGINE_ENV";

/// Resolver configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Registered environment rules.
    pub environments: PatternRegistry,
    /// Reject names that are neither registered nor the default.
    pub strict: bool,
    env_var_key: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            environments: PatternRegistry::new(),
            strict: true,
            env_var_key: DEFAULT_ENV_VAR_KEY.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the override variable.
    pub fn env_var_key(&self) -> &str {
        &self.env_var_key
    }

    /// Change the override variable. Blank values are ignored.
    pub fn set_env_var_key(&mut self, key: &str) {
        let key = key.trim();
        if !key.is_empty() {
            self.env_var_key = key.to_string();
        }
    }
}

/// How the environment was determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnvironmentSource {
    /// Taken from the override variable.
    EnvVar { key: String },
    /// A registered pattern matched this host.
    Pattern { host: String, pattern: String },
    /// Nothing matched.
    Fallback,
}

impl std::fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar { key } => write!(f, "override variable {}", key),
            Self::Pattern { host, pattern } => {
                write!(f, "host {} (pattern {})", host, pattern)
            }
            Self::Fallback => write!(f, "default"),
        }
    }
}

/// A resolved environment with its name and how it was determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEnvironment {
    /// The environment name, lowercase.
    pub name: String,
    /// How this environment was determined.
    pub source: EnvironmentSource,
}

/// Picks the deployment environment for the running process.
///
/// # Example
///
/// ```
/// use envpicker::environment::{EnvironmentResolver, ResolverConfig};
///
/// let mut resolver = EnvironmentResolver::new(ResolverConfig::new());
/// resolver.configure([
///     ("local", r"/^localhost(:\d+)?$/i"),
///     ("staging", r"^demo\.my-website\.com$"),
/// ]);
///
/// assert_eq!(resolver.resolve(Some("http://demo.my-website.com")).unwrap(), "staging");
/// assert_eq!(resolver.resolve(Some("localhost:8080")).unwrap(), "local");
/// assert_eq!(resolver.resolve(Some("unknown.example.com")).unwrap(), "production");
/// assert!(resolver.is("production", Some("my-website.com")).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvironmentResolver {
    config: ResolverConfig,
    request: RequestContext,
    runtime: RuntimeContext,
}

impl EnvironmentResolver {
    /// Create a resolver with no request and a command-line runtime.
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            request: RequestContext::new(),
            runtime: RuntimeContext::command_line(),
        }
    }

    /// Create a resolver that reads request and runtime context from the
    /// current process.
    pub fn from_env(config: ResolverConfig) -> Self {
        Self::new(config)
            .with_request(RequestContext::from_env())
            .with_runtime(RuntimeContext::from_env())
    }

    /// Builder: set the ambient request.
    pub fn with_request(mut self, request: RequestContext) -> Self {
        self.request = request;
        self
    }

    /// Builder: set the runtime context.
    pub fn with_runtime(mut self, runtime: RuntimeContext) -> Self {
        self.runtime = runtime;
        self
    }

    /// Force web context on or off.
    pub fn set_force_web(&mut self, force_web: bool) {
        self.runtime.force_web = force_web;
    }

    /// The active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The ambient request.
    pub fn request(&self) -> &RequestContext {
        &self.request
    }

    /// The runtime context.
    pub fn runtime(&self) -> &RuntimeContext {
        &self.runtime
    }

    /// Register environment rules and return the full registry.
    ///
    /// Names are lowercased; an existing name takes the new pattern.
    /// Patterns are not checked here.
    pub fn configure<I, N, P>(&mut self, entries: I) -> &PatternRegistry
    where
        I: IntoIterator<Item = (N, P)>,
        N: AsRef<str>,
        P: AsRef<str>,
    {
        self.config.environments.extend(entries);
        &self.config.environments
    }

    /// Register a single environment rule and return the full registry.
    pub fn add(&mut self, name: &str, pattern: &str) -> &PatternRegistry {
        self.config.environments.insert(name, pattern);
        &self.config.environments
    }

    /// Registered environment rules.
    pub fn environments(&self) -> &PatternRegistry {
        &self.config.environments
    }

    /// Whether strict mode is on.
    pub fn strict(&self) -> bool {
        self.config.strict
    }

    /// Turn strict mode on or off.
    pub fn set_strict(&mut self, strict: bool) {
        self.config.strict = strict;
    }

    /// Name of the override variable.
    pub fn env_var_key(&self) -> &str {
        self.config.env_var_key()
    }

    /// Change the override variable. Blank values are ignored.
    pub fn set_env_var_key(&mut self, key: &str) {
        self.config.set_env_var_key(key);
    }

    /// The fallback environment name.
    pub fn default_environment(&self) -> &'static str {
        DEFAULT_ENVIRONMENT
    }

    /// Names accepted in strict mode: the default, then registered names.
    pub fn valid_environments(&self) -> Vec<String> {
        std::iter::once(DEFAULT_ENVIRONMENT)
            .chain(
                self.config
                    .environments
                    .names()
                    .filter(|n| *n != DEFAULT_ENVIRONMENT),
            )
            .map(str::to_string)
            .collect()
    }

    /// Lowercased value of the override variable, if set and non-empty.
    pub fn env_var(&self) -> Option<String> {
        self.env_var_with(|key| std::env::var(key))
    }

    fn env_var_with<F>(&self, env_fn: F) -> Option<String>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        env_fn(self.config.env_var_key())
            .ok()
            .map(|v| normalize_name(&v))
            .filter(|v| !v.is_empty())
    }

    /// Normalize a URL-like string against the ambient request.
    pub fn normalize_url(&self, raw: &str) -> String {
        request::normalize_url(raw, &self.request)
    }

    /// URL of the ambient request, if running in web context.
    pub fn current_url(&self) -> Option<String> {
        request::current_url(&self.request, &self.runtime)
    }

    /// Whether the process runs outside any request.
    pub fn is_cli(&self) -> bool {
        self.runtime.is_cli()
    }

    /// Whether the process serves a request.
    pub fn is_web(&self) -> bool {
        self.runtime.is_web()
    }

    /// Resolve the environment name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEnvironment` when strict mode rejects the result and
    /// `InvalidPattern` when a pattern evaluated along the way is invalid.
    pub fn resolve(&self, url: Option<&str>) -> Result<String> {
        self.resolve_detailed(url).map(|resolved| resolved.name)
    }

    /// Resolve the environment name and how it was determined.
    pub fn resolve_detailed(&self, url: Option<&str>) -> Result<ResolvedEnvironment> {
        self.resolve_with_env(url, |key| std::env::var(key))
    }

    /// Resolve with a custom env var lookup (for testing).
    pub fn resolve_with_env<F>(&self, url: Option<&str>, env_fn: F) -> Result<ResolvedEnvironment>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let explicit = url.map(str::trim).filter(|u| !u.is_empty());

        let host = match explicit {
            // 1. Explicit URL
            Some(url) => {
                let host = request::extract_host(&self.normalize_url(url));
                tracing::debug!("Host from explicit URL {:?}: {:?}", url, host);
                host
            }
            None => {
                // 2. Override variable
                if let Some(name) = self.env_var_with(&env_fn) {
                    tracing::debug!(
                        "Environment '{}' from {}",
                        name,
                        self.config.env_var_key()
                    );
                    return self.accept(ResolvedEnvironment {
                        name,
                        source: EnvironmentSource::EnvVar {
                            key: self.config.env_var_key().to_string(),
                        },
                    });
                }

                // 3. Current request
                let host = self.current_url().and_then(|u| request::extract_host(&u));
                tracing::debug!("Host from current request: {:?}", host);
                host
            }
        };

        if let Some(host) = host {
            if let Some(rule) = self.config.environments.find_match(&host)? {
                tracing::debug!("Host {} matched '{}'", host, rule.name());
                return self.accept(ResolvedEnvironment {
                    name: rule.name().to_string(),
                    source: EnvironmentSource::Pattern {
                        host,
                        pattern: rule.pattern().to_string(),
                    },
                });
            }
        }

        // 4. Fallback
        self.accept(ResolvedEnvironment {
            name: DEFAULT_ENVIRONMENT.to_string(),
            source: EnvironmentSource::Fallback,
        })
    }

    /// Check whether the resolved environment is `name` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Propagates resolution errors.
    pub fn is(&self, name: &str, url: Option<&str>) -> Result<bool> {
        Ok(self.resolve(url)? == normalize_name(name))
    }

    /// [`is`](Self::is) with a custom env var lookup (for testing).
    pub fn is_with_env<F>(&self, name: &str, url: Option<&str>, env_fn: F) -> Result<bool>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        Ok(self.resolve_with_env(url, env_fn)?.name == normalize_name(name))
    }

    /// Apply the strictness gate.
    fn accept(&self, resolved: ResolvedEnvironment) -> Result<ResolvedEnvironment> {
        if resolved.name != DEFAULT_ENVIRONMENT
            && self.config.strict
            && !self.config.environments.contains(&resolved.name)
        {
            tracing::warn!("Rejected unknown environment '{}'", resolved.name);
            return Err(PickerError::UnknownEnvironment {
                candidate: resolved.name,
                valid: self.valid_environments(),
            });
        }
        Ok(resolved)
    }
}
