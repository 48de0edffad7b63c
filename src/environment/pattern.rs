//! Host pattern rules.
//!
//! A rule pairs an environment name with a regular expression that is
//! matched against a hostname. Patterns use `regex` syntax, and the
//! delimited form `/body/flags` is accepted as well so configuration
//! written as `/^localhost$/i` keeps working.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PickerError, Result};

/// Flags allowed after the closing delimiter of a delimited pattern.
const DELIMITED_FLAGS: &[char] = &['i', 'm', 's', 'x', 'U'];

/// An environment name bound to a host-matching pattern.
///
/// The pattern is compiled the first time the rule is evaluated, so an
/// invalid pattern is only reported when resolution reaches it.
#[derive(Debug, Clone)]
pub struct PatternRule {
    name: String,
    pattern: String,
    compiled: OnceLock<std::result::Result<Regex, String>>,
}

impl PatternRule {
    /// Create a rule. The name is normalized with [`normalize_name`].
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: normalize_name(name),
            pattern: pattern.to_string(),
            compiled: OnceLock::new(),
        }
    }

    /// The environment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pattern as it was registered.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check whether the pattern compiles.
    pub fn validate(&self) -> Result<()> {
        self.regex().map(|_| ())
    }

    /// Test the pattern against a host.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the pattern does not compile.
    pub fn matches(&self, host: &str) -> Result<bool> {
        Ok(self.regex()?.is_match(host))
    }

    fn regex(&self) -> Result<&Regex> {
        self.compiled
            .get_or_init(|| compile_pattern(&self.pattern))
            .as_ref()
            .map_err(|message| PickerError::InvalidPattern {
                name: self.name.clone(),
                pattern: self.pattern.clone(),
                message: message.clone(),
            })
    }
}

impl PartialEq for PatternRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.pattern == other.pattern
    }
}

impl Eq for PatternRule {}

/// Canonical form of an environment name: trimmed and lowercased.
///
/// Registered names, override values and names passed to `is` all go
/// through this, so they compare equal however they were written.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Compile a host pattern, accepting both bare and delimited forms.
///
/// # Example
///
/// ```
/// use envpicker::environment::compile_pattern;
///
/// let re = compile_pattern(r"/^(www\.)?my-website\.com$/i").unwrap();
/// assert!(re.is_match("WWW.My-Website.com"));
///
/// let re = compile_pattern(r"^localhost(:\d+)?$").unwrap();
/// assert!(re.is_match("localhost:8080"));
/// ```
pub fn compile_pattern(pattern: &str) -> std::result::Result<Regex, String> {
    let source = translate_delimited(pattern)?;
    Regex::new(&source).map_err(|e| e.to_string())
}

/// Strip `/.../flags` delimiters and turn the flags into an inline group.
fn translate_delimited(pattern: &str) -> std::result::Result<Cow<'_, str>, String> {
    let Some(rest) = pattern.strip_prefix('/') else {
        return Ok(Cow::Borrowed(pattern));
    };
    let Some(close) = rest.rfind('/') else {
        // A lone leading slash is an ordinary character.
        return Ok(Cow::Borrowed(pattern));
    };

    let (body, flags) = (&rest[..close], &rest[close + 1..]);
    let mut inline = String::new();
    for flag in flags.chars() {
        if !DELIMITED_FLAGS.contains(&flag) {
            return Err(format!("unsupported pattern flag '{}'", flag));
        }
        if !inline.contains(flag) {
            inline.push(flag);
        }
    }

    if inline.is_empty() {
        Ok(Cow::Owned(body.to_string()))
    } else {
        Ok(Cow::Owned(format!("(?{}){}", inline, body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed_and_lowercased() {
        assert_eq!(normalize_name("  Staging\t"), "staging");
        assert_eq!(PatternRule::new(" Local ", "^x$").name(), "local");
    }

    #[test]
    fn bare_pattern_is_used_verbatim() {
        let re = compile_pattern(r"^demo\.example\.com$").unwrap();
        assert!(re.is_match("demo.example.com"));
        assert!(!re.is_match("DEMO.example.com"));
    }

    #[test]
    fn delimited_pattern_without_flags() {
        let re = compile_pattern(r"/^staging\./").unwrap();
        assert!(re.is_match("staging.example.com"));
        assert!(!re.is_match("www.staging.example.com"));
    }

    #[test]
    fn delimited_pattern_with_case_insensitive_flag() {
        let re = compile_pattern(r"/^(www\.)?my-website\.com$/i").unwrap();
        assert!(re.is_match("my-website.com"));
        assert!(re.is_match("WWW.MY-WEBSITE.COM"));
    }

    #[test]
    fn repeated_flags_are_collapsed() {
        let re = compile_pattern("/^a$/ii").unwrap();
        assert!(re.is_match("A"));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = compile_pattern("/^a$/q").unwrap_err();
        assert!(err.contains("'q'"));
    }

    #[test]
    fn lone_leading_slash_is_literal() {
        let re = compile_pattern("/api").unwrap();
        assert!(re.is_match("/api"));
    }

    #[test]
    fn escaped_slash_inside_body() {
        let re = compile_pattern(r"/^a\/b$/").unwrap();
        assert!(re.is_match("a/b"));
    }

    #[test]
    fn rule_lowercases_name() {
        let rule = PatternRule::new("Staging", "x");
        assert_eq!(rule.name(), "staging");
        assert_eq!(rule.pattern(), "x");
    }

    #[test]
    fn rule_matches_host() {
        let rule = PatternRule::new("local", r"^localhost(:\d+)?$");
        assert!(rule.matches("localhost").unwrap());
        assert!(rule.matches("localhost:3000").unwrap());
        assert!(!rule.matches("example.com").unwrap());
    }

    #[test]
    fn invalid_rule_errors_only_when_evaluated() {
        let rule = PatternRule::new("broken", "(");
        let err = rule.matches("anything").unwrap_err();
        assert!(matches!(
            err,
            PickerError::InvalidPattern { ref name, .. } if name == "broken"
        ));
        assert!(rule.validate().is_err());
    }

    #[test]
    fn rules_compare_by_name_and_pattern() {
        let a = PatternRule::new("local", "x");
        let b = PatternRule::new("LOCAL", "x");
        assert_eq!(a, b);
        assert_ne!(a, PatternRule::new("local", "y"));
    }
}
