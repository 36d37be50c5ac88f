//! HTML attribute maps and their serialization.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keys consumed structurally by the input renderer. They never pass
/// through as plain HTML attributes.
pub const RESERVED_KEYS: [&str; 5] = ["type", "name", "value", "label", "options"];

/// Ordered set of HTML attributes.
///
/// Insertion order is preserved so that rendered markup matches the order in
/// which the caller declared the attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: IndexMap<String, String>,
}

impl Attrs {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, keeping its original position if it already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns whether no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a copy without the reserved structural keys.
    #[must_use]
    pub fn without_reserved(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| !RESERVED_KEYS.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Renders the attributes as `key="value"` pairs joined by spaces.
    pub fn to_html(&self) -> String {
        attrs_to_string(Some(self))
    }

    /// Reads attributes out of a loosely typed JSON value.
    ///
    /// Anything other than an object yields an empty map. Scalar values are
    /// stringified; nulls, arrays and nested objects are skipped.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::new();
        };
        map.iter()
            .filter_map(|(k, v)| scalar_to_string(v).map(|v| (k.clone(), v)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Attrs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Serializes attributes into a space-joined `key="escaped-value"` string.
///
/// `None` and an empty map both give an empty string.
pub fn attrs_to_string(attrs: Option<&Attrs>) -> String {
    let Some(attrs) = attrs else {
        return String::new();
    };
    attrs
        .iter()
        .map(|(k, v)| format!(r#"{k}="{}""#, html_escape(v)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Same as [`attrs_to_string`] but prefixed with a single space when
/// non-empty, ready to splice after a tag name or another attribute.
pub(crate) fn attrs_segment(attrs: &Attrs) -> String {
    if attrs.is_empty() {
        String::new()
    } else {
        format!(" {}", attrs.to_html())
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
