//! Name-based convenience predicates.
//!
//! Callers that address environments by method-style names (`isLocal`,
//! `isProduction`) go through [`EnvironmentResolver::call`], which maps
//! the name onto [`EnvironmentResolver::is`]. `isCli` and `isWeb` map onto
//! the runtime checks instead.

use super::resolver::{EnvironmentResolver, DEFAULT_ENVIRONMENT};
use crate::error::Result;

/// A parsed predicate name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `is<Name>`: the resolved environment is `name`.
    Environment(String),
    /// `isCli` / `isCLI`.
    Cli,
    /// `isWeb`.
    Web,
}

impl Predicate {
    /// Parse a method-style name. Anything not shaped `is<Name>` is `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use envpicker::environment::Predicate;
    ///
    /// assert_eq!(Predicate::parse("isStaging"), Some(Predicate::Environment("staging".into())));
    /// assert_eq!(Predicate::parse("isCLI"), Some(Predicate::Cli));
    /// assert_eq!(Predicate::parse("staging"), None);
    /// ```
    pub fn parse(method: &str) -> Option<Self> {
        let rest = method.strip_prefix("is")?;
        if rest.is_empty() {
            return None;
        }

        match rest.to_lowercase().as_str() {
            "cli" => Some(Self::Cli),
            "web" => Some(Self::Web),
            name => Some(Self::Environment(name.to_string())),
        }
    }
}

/// Conventional predicate name for an environment: `staging` → `isStaging`.
pub fn predicate_name(environment: &str) -> String {
    let mut chars = environment.chars();
    match chars.next() {
        Some(first) => format!("is{}{}", first.to_uppercase(), chars.as_str()),
        None => "is".to_string(),
    }
}

impl EnvironmentResolver {
    /// Evaluate a method-style predicate.
    ///
    /// Returns `None` when `method` is not shaped `is<Name>`.
    ///
    /// # Example
    ///
    /// ```
    /// use envpicker::environment::{EnvironmentResolver, ResolverConfig};
    ///
    /// let mut resolver = EnvironmentResolver::new(ResolverConfig::new());
    /// resolver.add("local", r"^localhost$");
    ///
    /// assert_eq!(resolver.call("isLocal", Some("localhost")).unwrap().unwrap(), true);
    /// assert_eq!(resolver.call("isProduction", Some("localhost")).unwrap().unwrap(), false);
    /// assert!(resolver.call("local", None).is_none());
    /// ```
    pub fn call(&self, method: &str, url: Option<&str>) -> Option<Result<bool>> {
        match Predicate::parse(method)? {
            Predicate::Environment(name) => Some(self.is(&name, url)),
            Predicate::Cli => Some(Ok(self.is_cli())),
            Predicate::Web => Some(Ok(self.is_web())),
        }
    }

    /// Predicate names for the default and every registered environment.
    pub fn predicate_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for env in std::iter::once(DEFAULT_ENVIRONMENT).chain(self.environments().names()) {
            let name = predicate_name(env);
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::ResolverConfig;
    use crate::request::RuntimeContext;

    fn resolver() -> EnvironmentResolver {
        let mut resolver = EnvironmentResolver::new(ResolverConfig::new());
        resolver.configure([("local", r"^localhost$"), ("staging", r"^demo\.")]);
        resolver
    }

    #[test]
    fn parse_environment_predicates() {
        assert_eq!(
            Predicate::parse("isProduction"),
            Some(Predicate::Environment("production".into()))
        );
        assert_eq!(
            Predicate::parse("isFoo"),
            Some(Predicate::Environment("foo".into()))
        );
    }

    #[test]
    fn parse_runtime_predicates() {
        assert_eq!(Predicate::parse("isCli"), Some(Predicate::Cli));
        assert_eq!(Predicate::parse("isCLI"), Some(Predicate::Cli));
        assert_eq!(Predicate::parse("isWeb"), Some(Predicate::Web));
    }

    #[test]
    fn parse_rejects_other_shapes() {
        assert_eq!(Predicate::parse("is"), None);
        assert_eq!(Predicate::parse("getStaging"), None);
        assert_eq!(Predicate::parse("IsStaging"), None);
        assert_eq!(Predicate::parse(""), None);
    }

    #[test]
    fn call_matches_is() {
        let r = resolver();
        for url in [Some("localhost"), Some("demo.example.com"), Some("x.com"), None] {
            for env in ["local", "staging", "production"] {
                let via_call = r.call(&predicate_name(env), url).unwrap().unwrap();
                assert_eq!(via_call, r.is(env, url).unwrap(), "{} {:?}", env, url);
            }
        }
    }

    #[test]
    fn call_unknown_environment_is_false() {
        assert!(!resolver().call("isFoo", Some("localhost")).unwrap().unwrap());
    }

    #[test]
    fn call_unrecognized_is_none() {
        assert!(resolver().call("resolve", None).is_none());
    }

    #[test]
    fn call_runtime_predicates() {
        let r = resolver();
        assert!(r.call("isCli", None).unwrap().unwrap());
        assert!(!r.call("isWeb", None).unwrap().unwrap());

        let r = r.with_runtime(RuntimeContext::web());
        assert!(!r.call("isCLI", None).unwrap().unwrap());
        assert!(r.call("isWeb", None).unwrap().unwrap());
    }

    #[test]
    fn predicate_name_capitalizes() {
        assert_eq!(predicate_name("staging"), "isStaging");
        assert_eq!(predicate_name("qa-east"), "isQa-east");
        assert_eq!(predicate_name(""), "is");
    }

    #[test]
    fn predicate_names_cover_default_and_registered() {
        let mut r = resolver();
        r.add("production", r"^www\.");
        assert_eq!(
            r.predicate_names(),
            vec!["isProduction", "isLocal", "isStaging"]
        );
    }
}
