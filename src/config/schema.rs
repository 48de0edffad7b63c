//! Configuration schema definitions.
//!
//! Maps the YAML configuration file format:
//!
//! ```yaml
//! strict: true
//! env_var_key: ENGINE_ENV
//! environments:
//!   local: '/^localhost(:\d+)?$/i'
//!   staging: '^demo\.my-website\.com$'
//! ```

use serde::{Deserialize, Serialize};

use crate::environment::{PatternRegistry, ResolverConfig};
use crate::error::{PickerError, Result};

/// Root configuration structure for `.envpicker/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Strict mode (defaults to on when omitted).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,

    /// Name of the override variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_var_key: Option<String>,

    /// Environment rules, in matching order.
    #[serde(skip_serializing_if = "PatternRegistry::is_empty")]
    pub environments: PatternRegistry,
}

impl PickerConfig {
    /// Check values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` for a blank environment name.
    pub fn validate(&self) -> Result<()> {
        if let Some(rule) = self.environments.iter().find(|r| r.name().trim().is_empty()) {
            return Err(PickerError::ConfigValidationError {
                message: format!("environment with pattern '{}' has no name", rule.pattern()),
            });
        }
        Ok(())
    }

    /// Turn the file contents into a resolver configuration.
    pub fn into_resolver_config(self) -> ResolverConfig {
        let mut config = ResolverConfig::new();
        config.environments = self.environments;
        if let Some(strict) = self.strict {
            config.strict = strict;
        }
        if let Some(key) = &self.env_var_key {
            config.set_env_var_key(key);
        }
        config
    }
}
