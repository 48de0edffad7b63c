//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! configuration once, builds the resolver, and routes the subcommand.

pub mod completions;
pub mod context;
pub mod current_url;
pub mod dispatcher;
pub mod is;
pub mod list;
pub mod normalize;
pub mod resolve;

pub use dispatcher::{apply_flags, dispatch_with, Command, CommandDispatcher, CommandResult};
