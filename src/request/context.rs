//! Ambient request metadata.
//!
//! The resolver only reads these fields. A host application fills them in
//! from its framework's request type; [`RequestContext::from_env`] reads
//! the CGI meta-variables for programs started by a web server.

use std::env::VarError;

/// Request metadata supplied by the host application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// TLS is active for this request.
    pub https: bool,
    /// Declared protocol, e.g. `HTTP/1.1`.
    pub protocol: Option<String>,
    /// Port the server received the request on.
    pub port: Option<u16>,
    /// Host requested by the client (`Host` header).
    pub forwarded_host: Option<String>,
    /// Configured server name.
    pub server_name: Option<String>,
    /// Raw request path including the query string.
    pub request_uri: Option<String>,
}

impl RequestContext {
    /// An empty context, as seen outside any request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the CGI meta-variables of the current process.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key))
    }

    /// Read CGI meta-variables through a custom lookup (for testing).
    pub fn from_env_with<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let var = |key: &str| env_fn(key).ok().filter(|v| !v.trim().is_empty());

        Self {
            https: var("HTTPS").is_some_and(|v| v.eq_ignore_ascii_case("on")),
            protocol: var("SERVER_PROTOCOL"),
            port: var("SERVER_PORT").and_then(|p| p.trim().parse().ok()),
            forwarded_host: var("HTTP_HOST"),
            server_name: var("SERVER_NAME"),
            request_uri: var("REQUEST_URI"),
        }
    }

    /// Builder: set the TLS flag.
    pub fn with_https(mut self, https: bool) -> Self {
        self.https = https;
        self
    }

    /// Builder: set the declared protocol.
    pub fn with_protocol(mut self, protocol: &str) -> Self {
        self.protocol = Some(protocol.to_string());
        self
    }

    /// Builder: set the server port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Builder: set the client-requested host.
    pub fn with_forwarded_host(mut self, host: &str) -> Self {
        self.forwarded_host = Some(host.to_string());
        self
    }

    /// Builder: set the server name.
    pub fn with_server_name(mut self, name: &str) -> Self {
        self.server_name = Some(name.to_string());
        self
    }

    /// Builder: set the raw request URI.
    pub fn with_request_uri(mut self, uri: &str) -> Self {
        self.request_uri = Some(uri.to_string());
        self
    }

    /// URL scheme implied by the declared protocol.
    ///
    /// `HTTP/1.1` becomes `http`, or `https` when TLS is active. Returns
    /// `None` when no protocol was declared.
    pub fn scheme(&self) -> Option<String> {
        let protocol = self.protocol.as_deref()?.trim();
        let name = protocol
            .split_once('/')
            .map_or(protocol, |(name, _)| name)
            .to_lowercase();
        if name.is_empty() {
            return None;
        }

        if self.https && !name.ends_with('s') {
            Some(format!("{}s", name))
        } else {
            Some(name)
        }
    }

    /// Host the request was addressed to, preferring the client's `Host`.
    pub fn host(&self) -> Option<&str> {
        self.forwarded_host
            .as_deref()
            .or(self.server_name.as_deref())
            .filter(|h| !h.is_empty())
    }

    /// Whether `port` is the implicit default for the TLS state.
    pub fn is_default_port(&self, port: u16) -> bool {
        if self.https {
            port == 443
        } else {
            port == 80
        }
    }
}
