//! Open attribute sets carried by data contract objects
//!
//! Most data contract objects (info, terms, servers, fields, definitions,
//! service level parts) carry an open set of attributes next to their typed
//! fields. Attributes are kept in insertion order because the order of a
//! document's attributes is preserved in rendered output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered set of open attributes.
///
/// Maps attribute names to arbitrary JSON values. Key presence distinguishes
/// "attribute was set" from "attribute was set to a falsy value": only keys
/// present in the map count as set.
///
/// # Example
///
/// ```rust
/// use datacontract_markdown::models::Attributes;
///
/// let attributes = Attributes::new()
///     .with("description", "Primary customer table")
///     .with("required", true);
///
/// assert_eq!(attributes.description(), Some("Primary customer table"));
/// assert_eq!(attributes.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, serde_json::Value>);

impl Attributes {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no attributes are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of set attributes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up an attribute by name
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    /// Set an attribute, appending it to the order if new
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: serde_json::Value,
    ) -> Option<serde_json::Value> {
        self.0.insert(name.into(), value)
    }

    /// Set an attribute (builder style)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// The `description` attribute, if set to a string
    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(serde_json::Value::as_str)
    }

    /// Iterate attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.0.iter()
    }
}

impl FromIterator<(String, serde_json::Value)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self(IndexMap::from_iter(iter))
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a serde_json::Value);
    type IntoIter = indexmap::map::Iter<'a, String, serde_json::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let attributes = Attributes::new()
            .with("zeta", 1)
            .with("alpha", 2)
            .with("mid", 3);

        let names: Vec<&str> = attributes.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_transparent_deserialization() {
        let attributes: Attributes =
            serde_json::from_str(r#"{"title": "Orders", "version": "1.0.0"}"#).unwrap();
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("title"), Some(&serde_json::json!("Orders")));
    }

    #[test]
    fn test_description_accessor() {
        let attributes = Attributes::new().with("description", "Order data");
        assert_eq!(attributes.description(), Some("Order data"));

        let no_description = Attributes::new().with("title", "Orders");
        assert_eq!(no_description.description(), None);

        let non_string = Attributes::new().with("description", 42);
        assert_eq!(non_string.description(), None);
    }

    #[test]
    fn test_presence_vs_falsy() {
        let attributes = Attributes::new().with("required", false);
        assert!(!attributes.is_empty());
        assert_eq!(attributes.get("required"), Some(&serde_json::json!(false)));
        assert_eq!(attributes.get("unique"), None);
    }
}
