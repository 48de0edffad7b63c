//! Ambient request and runtime context.
//!
//! The resolver never performs requests. It reads what the host
//! application tells it about the current request ([`RequestContext`]) and
//! about how the process was started ([`RuntimeContext`]), and turns that
//! into a hostname to match against.

pub mod context;
pub mod host;
pub mod runtime;

pub use context::RequestContext;
pub use host::{current_url, extract_host, normalize_url};
pub use runtime::{Interface, RuntimeContext, FORCE_WEB_VAR};
