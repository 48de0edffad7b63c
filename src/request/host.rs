//! URL normalization and host extraction.

use std::borrow::Cow;

use url::Url;

use super::{RequestContext, RuntimeContext};

/// Make a URL-like string parseable by giving it a scheme.
///
/// Input that already starts with `scheme://` is returned as-is (after
/// trimming). Otherwise the scheme of the ambient request is prefixed, or
/// a schemeless `//` when no request protocol is known.
///
/// # Example
///
/// ```
/// use envpicker::request::{normalize_url, RequestContext};
///
/// let request = RequestContext::new().with_protocol("HTTP/1.1");
/// assert_eq!(normalize_url("demo.my-website.com", &request), "http://demo.my-website.com");
/// assert_eq!(normalize_url("https://x", &request), "https://x");
/// assert_eq!(normalize_url("localhost", &RequestContext::new()), "//localhost");
/// ```
pub fn normalize_url(raw: &str, request: &RequestContext) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || has_scheme(trimmed) {
        return trimmed.to_string();
    }

    match request.scheme() {
        Some(scheme) => format!("{}://{}", scheme, trimmed),
        None => format!("//{}", trimmed),
    }
}

/// Host of a normalized URL, exactly as written, with any port.
///
/// The URL must parse, but the host is sliced from the input rather than
/// taken from the parser, so case, explicit default ports and non-ASCII
/// labels reach the patterns unchanged. Returns `None` for input that does
/// not parse as a URL or has no host. Schemeless `//host` input is read as
/// `http:`.
///
/// # Example
///
/// ```
/// use envpicker::request::extract_host;
///
/// assert_eq!(extract_host("http://DEMO.Site.com/x").as_deref(), Some("DEMO.Site.com"));
/// assert_eq!(extract_host("http://localhost:80/").as_deref(), Some("localhost:80"));
/// assert_eq!(extract_host("http://"), None);
/// ```
pub fn extract_host(normalized: &str) -> Option<String> {
    let candidate = if normalized.starts_with("//") {
        Cow::Owned(format!("http:{}", normalized))
    } else {
        Cow::Borrowed(normalized)
    };

    match Url::parse(&candidate) {
        Ok(parsed) if parsed.has_host() => {}
        // Hosts like `app.10` are fine as names even though the parser
        // insists a numeric last label means IPv4.
        Err(url::ParseError::InvalidIpv4Address) => {}
        _ => return None,
    }

    authority_host(&candidate).map(str::to_string)
}

/// `host[:port]` span of the authority, without userinfo.
fn authority_host(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("//")?;
    let end = rest.find(['/', '?', '#', '\\']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    Some(host).filter(|h| !h.is_empty() && !h.starts_with(':'))
}

/// Full URL of the ambient request.
///
/// Built as `scheme://host[:port]path`. Returns `None` in command-line
/// context or when the request carries no host.
pub fn current_url(request: &RequestContext, runtime: &RuntimeContext) -> Option<String> {
    if runtime.is_cli() {
        return None;
    }

    let host = request.host()?;
    let scheme = request.scheme().unwrap_or_else(|| {
        if request.https {
            "https".to_string()
        } else {
            "http".to_string()
        }
    });
    let port = match request.port {
        Some(port) if !request.is_default_port(port) && !has_port(host) => format!(":{}", port),
        _ => String::new(),
    };
    let path = request.request_uri.as_deref().unwrap_or("");

    Some(format!("{}://{}{}{}", scheme, host, port, path))
}

/// `letters:` followed by `//`, case-insensitive.
fn has_scheme(s: &str) -> bool {
    match s.split_once(':') {
        Some((scheme, rest)) => {
            !scheme.is_empty()
                && scheme.chars().all(|c| c.is_ascii_alphabetic())
                && rest.starts_with("//")
        }
        None => false,
    }
}

/// Whether a `Host` value already carries a port.
fn has_port(host: &str) -> bool {
    host.rsplit_once(':')
        .is_some_and(|(_, port)| port.parse::<u16>().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http11() -> RequestContext {
        RequestContext::new().with_protocol("HTTP/1.1")
    }

    #[test]
    fn normalize_prefixes_request_scheme() {
        assert_eq!(
            normalize_url("demo.my-website.com", &http11()),
            "http://demo.my-website.com"
        );
        assert_eq!(
            normalize_url("demo.my-website.com", &http11().with_https(true)),
            "https://demo.my-website.com"
        );
    }

    #[test]
    fn normalize_keeps_existing_scheme() {
        assert_eq!(normalize_url("https://x", &http11()), "https://x");
        assert_eq!(normalize_url("HTTP://Example.com", &http11()), "HTTP://Example.com");
        assert_eq!(normalize_url("ftp://files", &http11()), "ftp://files");
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize_url("  https://x \n", &http11()), "https://x");
        assert_eq!(normalize_url("  localhost ", &http11()), "http://localhost");
    }

    #[test]
    fn normalize_without_protocol_is_schemeless() {
        assert_eq!(normalize_url("localhost", &RequestContext::new()), "//localhost");
    }

    #[test]
    fn normalize_empty_is_empty() {
        assert_eq!(normalize_url("", &http11()), "");
        assert_eq!(normalize_url("   ", &http11()), "");
    }

    #[test]
    fn host_port_pair_is_not_a_scheme() {
        assert_eq!(normalize_url("localhost:8080", &http11()), "http://localhost:8080");
    }

    #[test]
    fn extract_host_from_full_url() {
        assert_eq!(
            extract_host("http://demo.my-website.com/path?q=1").as_deref(),
            Some("demo.my-website.com")
        );
    }

    #[test]
    fn extract_host_keeps_explicit_port() {
        assert_eq!(
            extract_host("http://localhost:8080/").as_deref(),
            Some("localhost:8080")
        );
    }

    #[test]
    fn extract_host_keeps_case() {
        assert_eq!(
            extract_host("http://DEMO.Site.com/").as_deref(),
            Some("DEMO.Site.com")
        );
    }

    #[test]
    fn extract_host_keeps_explicit_default_port() {
        assert_eq!(
            extract_host("http://localhost:80/").as_deref(),
            Some("localhost:80")
        );
        assert_eq!(
            extract_host("https://example.com:443").as_deref(),
            Some("example.com:443")
        );
    }

    #[test]
    fn extract_host_keeps_unicode_labels() {
        assert_eq!(extract_host("http://bücher.de/").as_deref(), Some("bücher.de"));
    }

    #[test]
    fn extract_host_accepts_numeric_last_label() {
        assert_eq!(extract_host("http://app.10/").as_deref(), Some("app.10"));
    }

    #[test]
    fn extract_host_drops_userinfo_and_query() {
        assert_eq!(
            extract_host("http://user:pw@Example.com:8080?x=1#y").as_deref(),
            Some("Example.com:8080")
        );
    }

    #[test]
    fn extract_host_from_schemeless_url() {
        assert_eq!(extract_host("//localhost").as_deref(), Some("localhost"));
    }

    #[test]
    fn extract_host_rejects_malformed_input() {
        assert_eq!(extract_host(""), None);
        assert_eq!(extract_host("not a url"), None);
        assert_eq!(extract_host("http://"), None);
        assert_eq!(extract_host("http://bad host/"), None);
    }

    #[test]
    fn current_url_absent_in_cli() {
        let request = http11().with_server_name("example.com");
        assert_eq!(current_url(&request, &RuntimeContext::command_line()), None);
    }

    #[test]
    fn current_url_composes_parts() {
        let request = http11()
            .with_forwarded_host("demo.my-website.com")
            .with_server_name("my-website.com")
            .with_port(80)
            .with_request_uri("/a/b?c=d");
        assert_eq!(
            current_url(&request, &RuntimeContext::web()).as_deref(),
            Some("http://demo.my-website.com/a/b?c=d")
        );
    }

    #[test]
    fn current_url_keeps_non_default_port() {
        let request = http11()
            .with_https(true)
            .with_server_name("example.com")
            .with_port(8443)
            .with_request_uri("/");
        assert_eq!(
            current_url(&request, &RuntimeContext::web()).as_deref(),
            Some("https://example.com:8443/")
        );
    }

    #[test]
    fn current_url_drops_tls_default_port() {
        let request = http11()
            .with_https(true)
            .with_server_name("example.com")
            .with_port(443);
        assert_eq!(
            current_url(&request, &RuntimeContext::web()).as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn current_url_does_not_repeat_host_port() {
        let request = http11()
            .with_forwarded_host("localhost:8080")
            .with_port(8080);
        assert_eq!(
            current_url(&request, &RuntimeContext::web()).as_deref(),
            Some("http://localhost:8080")
        );
    }

    #[test]
    fn current_url_needs_a_host() {
        assert_eq!(current_url(&http11(), &RuntimeContext::web()), None);
    }

    #[test]
    fn current_url_respects_force_web() {
        let request = http11().with_server_name("example.com");
        let runtime = RuntimeContext::command_line().with_force_web(true);
        assert_eq!(
            current_url(&request, &runtime).as_deref(),
            Some("http://example.com")
        );
    }
}
