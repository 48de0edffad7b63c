//! envpicker - pick the deployment environment for the running process.
//!
//! The environment is taken from an override variable (`ENGINE_ENV` by
//! default) when it is set, and otherwise from the first registered
//! pattern that matches the host of a URL. Without either, the default
//! environment (`production`) applies.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration file discovery and parsing
//! - [`environment`] - Pattern registry and environment resolution
//! - [`error`] - Error types and result aliases
//! - [`request`] - Request and runtime context, URL normalization
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use envpicker::environment::{EnvironmentResolver, ResolverConfig};
//!
//! let mut resolver = EnvironmentResolver::new(ResolverConfig::new());
//! resolver.configure([
//!     ("local", r"^localhost(:\d+)?$"),
//!     ("staging", r"^demo\."),
//! ]);
//!
//! assert_eq!(resolver.resolve(Some("demo.my-website.com")).unwrap(), "staging");
//! assert!(resolver.is("local", Some("http://localhost:3000")).unwrap());
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod request;
pub mod ui;

pub use error::{PickerError, Result};
