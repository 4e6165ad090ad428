//! crates/logging-sink/src/fields.rs
//! Structured key/value annotations appended to a record.

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt::{self, Write as _};

use crate::value::Value;

/// Unordered set of key/value annotations rendered after the message parts.
///
/// Rendering produces ` [ (key: value) (key: value) ]`; an empty set renders as
/// ` [ ]`. Entries are stored in a [`HashMap`], so the order in which they are
/// rendered is unspecified and may differ between runs. Consumers that parse
/// records must not rely on it.
///
/// # Examples
///
/// ```
/// use logging_sink::Fields;
///
/// let fields = Fields::new().with("x", 1);
/// assert_eq!(fields.to_string(), " [ (x: 1) ]");
/// assert_eq!(Fields::new().to_string(), " [ ]");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fields {
    entries: HashMap<String, Value>,
}

impl Fields {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry and returns the set, for chained construction.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an entry, returning the value previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Appends the bracketed rendering to `out`.
    pub fn render_into(&self, out: &mut String) {
        out.push_str(" [");
        for (key, value) in &self.entries {
            // Writing into a String cannot fail.
            let _ = write!(out, " ({key}: {value})");
        }
        out.push_str(" ]");
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        self.render_into(&mut rendered);
        f.write_str(&rendered)
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        fields.extend(iter);
        fields
    }
}

impl<K, V> Extend<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_renders_brackets_only() {
        assert_eq!(Fields::new().to_string(), " [ ]");
    }

    #[test]
    fn single_entry_renders_exactly() {
        let fields = Fields::new().with("x", 1);
        assert_eq!(fields.to_string(), " [ (x: 1) ]");
    }

    #[test]
    fn every_entry_appears_once_in_any_order() {
        let fields: Fields = [
            ("a", Value::from(1)),
            ("b", Value::from("two")),
            ("c", Value::from(false)),
        ]
        .into_iter()
        .collect();
        let rendered = fields.to_string();

        assert!(rendered.starts_with(" [ ("));
        assert!(rendered.ends_with(") ]"));
        for fragment in [" (a: 1)", " (b: two)", " (c: false)"] {
            assert_eq!(rendered.matches(fragment).count(), 1, "{rendered}");
        }
        assert_eq!(rendered.len(), " [ (a: 1) (b: two) (c: false) ]".len());
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut fields = Fields::new();
        assert_eq!(fields.insert("k", 1), None);
        assert_eq!(fields.insert("k", 2), Some(Value::Int(1)));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("k"), Some(&Value::Int(2)));
    }

    #[test]
    fn render_into_appends() {
        let mut out = String::from("message");
        Fields::new().with("user", "ada").render_into(&mut out);
        assert_eq!(out, "message [ (user: ada) ]");
    }
}
