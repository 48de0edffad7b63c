//! Configuration loading and parsing.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use envpicker::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".envpicker");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "environments:\n  local: '^localhost$'\n").unwrap();
//!
//! let config = load_config(None, temp.path()).unwrap().into_resolver_config();
//! assert!(config.environments.contains("local"));
//! assert!(config.strict);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_config, load_config, load_config_file, load_config_with_env, parse_config,
    CONFIG_ENV_VAR,
};
pub use schema::PickerConfig;
