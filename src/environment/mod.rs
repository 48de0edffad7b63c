//! Environment registry and resolution.
//!
//! Determines which deployment environment (production, staging, local,
//! etc.) the process belongs to. The priority chain is:
//!
//! 1. Explicit URL, matched against registered host patterns
//! 2. Override variable (`ENGINE_ENV` by default)
//! 3. Current request host, matched against registered host patterns
//! 4. Fallback to "production"

pub mod pattern;
pub mod predicates;
pub mod registry;
pub mod resolver;

pub use pattern::{compile_pattern, normalize_name, PatternRule};
pub use predicates::{predicate_name, Predicate};
pub use registry::PatternRegistry;
pub use resolver::{
    EnvironmentResolver, EnvironmentSource, ResolvedEnvironment, ResolverConfig,
    DEFAULT_ENVIRONMENT, DEFAULT_ENV_VAR_KEY,
};
