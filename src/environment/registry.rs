//! Ordered registry of environment pattern rules.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::pattern::{normalize_name, PatternRule};
use crate::error::Result;

/// Environment rules in registration order.
///
/// Registering a name that already exists replaces its pattern in place,
/// so the rule keeps its original position. Matching walks the rules in
/// order and the first match wins.
///
/// # Example
///
/// ```
/// use envpicker::environment::PatternRegistry;
///
/// let mut registry = PatternRegistry::new();
/// registry.extend([("Local", r"^localhost$"), ("staging", r"^demo\.")]);
/// registry.insert("local", r"^127\.0\.0\.1$");
///
/// let names: Vec<&str> = registry.names().collect();
/// assert_eq!(names, vec!["local", "staging"]);
/// assert_eq!(registry.get("local").unwrap().pattern(), r"^127\.0\.0\.1$");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternRegistry {
    rules: Vec<PatternRule>,
}

impl PatternRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single rule, overwriting an existing rule of the same name.
    pub fn insert(&mut self, name: &str, pattern: &str) {
        let rule = PatternRule::new(name, pattern);
        match self.rules.iter_mut().find(|r| r.name() == rule.name()) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Register many rules. Later entries win over earlier ones.
    pub fn extend<I, N, P>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (N, P)>,
        N: AsRef<str>,
        P: AsRef<str>,
    {
        for (name, pattern) in entries {
            self.insert(name.as_ref(), pattern.as_ref());
        }
    }

    /// Look up a rule by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&PatternRule> {
        let name = normalize_name(name);
        self.rules.iter().find(|r| r.name() == name)
    }

    /// Check whether a name is registered (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name())
    }

    /// Iterate rules in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PatternRule> {
        self.rules.iter()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the first rule whose pattern matches `host`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` when a rule evaluated before a match has a
    /// pattern that does not compile.
    pub fn find_match(&self, host: &str) -> Result<Option<&PatternRule>> {
        for rule in &self.rules {
            if rule.matches(host)? {
                return Ok(Some(rule));
            }
        }
        Ok(None)
    }
}

impl<'a> IntoIterator for &'a PatternRegistry {
    type Item = &'a PatternRule;
    type IntoIter = std::slice::Iter<'a, PatternRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl<N: AsRef<str>, P: AsRef<str>> FromIterator<(N, P)> for PatternRegistry {
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl Serialize for PatternRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for rule in &self.rules {
            map.serialize_entry(rule.name(), rule.pattern())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PatternRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RegistryVisitor;

        impl<'de> Visitor<'de> for RegistryVisitor {
            type Value = PatternRegistry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of environment names to host patterns")
            }

            fn visit_unit<E: serde::de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(PatternRegistry::new())
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut registry = PatternRegistry::new();
                while let Some((name, pattern)) = access.next_entry::<String, String>()? {
                    registry.insert(&name, &pattern);
                }
                Ok(registry)
            }
        }

        deserializer.deserialize_map(RegistryVisitor)
    }
}
