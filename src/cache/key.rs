//! Operation arguments and the cache keys derived from them.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Returns `true` for values that count as "not supplied".
///
/// `null`, `false`, `0`, `0.0`, `""`, `"0"`, empty arrays and empty objects
/// are all empty. An explicit zero is therefore indistinguishable from an
/// omitted argument.
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// The arguments a caller supplied to one operation call.
///
/// Keys are kept sorted, so two argument sets with the same entries encode to
/// the same canonical JSON no matter in which order they were inserted.
///
/// # Example
///
/// ```rust
/// use strategy_api::cache::Arguments;
///
/// let mut arguments = Arguments::new();
/// arguments.insert("title", "ministry");
/// arguments.insert("level", 0);
///
/// assert_eq!(arguments.len(), 1);
/// assert_eq!(arguments.canonical_json(), r#"{"title":"ministry"}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Arguments(BTreeMap<String, Value>);

impl Arguments {
    /// Creates an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an argument unless its value is empty.
    ///
    /// Returns `true` if the argument was kept.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> bool {
        let value = value.into();
        if is_empty_value(&value) {
            return false;
        }
        self.0.insert(name.into(), value);
        true
    }

    /// Inserts an argument even if its value is empty.
    ///
    /// Used for path identifiers, where `""` and `"0"` address distinct
    /// resources and must not collapse into the empty argument set.
    pub fn insert_verbatim(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Moves the value stored under `from` to `to`.
    ///
    /// Does nothing when `from` is absent.
    pub fn rename(&mut self, from: &str, to: impl Into<String>) {
        if let Some(value) = self.0.remove(from) {
            self.0.insert(to.into(), value);
        }
    }

    /// Returns the value of an argument.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns `true` if an argument with this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no argument was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the arguments in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Encodes the arguments as compact JSON with sorted keys.
    #[must_use]
    pub fn canonical_json(&self) -> String {
        let object: serde_json::Map<String, Value> = self
            .0
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        Value::Object(object).to_string()
    }

    /// Converts the arguments to URL query parameters.
    ///
    /// Strings are sent as-is; every other value is sent as its JSON text.
    #[must_use]
    pub fn to_query(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(name, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.clone(), value)
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut arguments = Self::new();
        for (name, value) in iter {
            arguments.insert(name, value);
        }
        arguments
    }
}

/// A deterministic cache key: `<namespace>-<sha256 of canonical arguments>`.
///
/// # Example
///
/// ```rust
/// use strategy_api::cache::{Arguments, CacheKey};
///
/// let a: Arguments = [("title", "a"), ("type.id", "5")].into_iter().collect();
/// let b: Arguments = [("type.id", "5"), ("title", "a")].into_iter().collect();
///
/// let key = CacheKey::new("search-organization", &a);
/// assert_eq!(key, CacheKey::new("search-organization", &b));
/// assert!(key.as_str().starts_with("search-organization-"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derives the key for `arguments` within `namespace`.
    #[must_use]
    pub fn new(namespace: &str, arguments: &Arguments) -> Self {
        let digest = Sha256::digest(arguments.canonical_json().as_bytes());
        Self(format!("{namespace}-{digest:x}"))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
