//! Field type for data contract model schemas
//!
//! Fields form the schema tree of a model: a record field nests further
//! fields, an array field describes its elements through `items`, and a map
//! field describes its keys and values through `keys` and `values`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::attributes::Attributes;

/// A named, typed node in a model's schema tree.
///
/// Beyond its type tag, a field carries an open attribute set (constraints,
/// description, classification, ...) and up to four structural children:
/// nested record fields, an array element type, a map key type, and a map
/// value type. Any subset may be populated, including none.
///
/// # Example
///
/// ```rust
/// use datacontract_markdown::models::Field;
///
/// let line_items = Field::new("array")
///     .with_description("Ordered line items")
///     .with_items(Field::new("string"));
///
/// assert_eq!(line_items.children().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Logical type of the field (e.g., "string", "array", "object")
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub field_type: String,
    /// Nested record fields, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, Field>,
    /// Element type for array fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Field>>,
    /// Key type for map fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Box<Field>>,
    /// Value type for map fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Box<Field>>,
    /// Open attributes (required, unique, description, ...)
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Field {
    /// Create a new field with the given type
    pub fn new(field_type: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            ..Default::default()
        }
    }

    /// Set an open attribute
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the description attribute
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with_attribute("description", description.into())
    }

    /// Add a nested record field
    pub fn with_field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Set the array element type
    pub fn with_items(mut self, items: Field) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    /// Set the map key type
    pub fn with_keys(mut self, keys: Field) -> Self {
        self.keys = Some(Box::new(keys));
        self
    }

    /// Set the map value type
    pub fn with_values(mut self, values: Field) -> Self {
        self.values = Some(Box::new(values));
        self
    }

    /// Structural children in render order: nested record fields in
    /// declaration order, then `items`, `keys`, and `values` where present.
    pub fn children(&self) -> Vec<(&str, &Field)> {
        let mut children: Vec<(&str, &Field)> = self
            .fields
            .iter()
            .map(|(name, field)| (name.as_str(), field))
            .collect();
        if let Some(items) = &self.items {
            children.push(("items", items));
        }
        if let Some(keys) = &self.keys {
            children.push(("keys", keys));
        }
        if let Some(values) = &self.values {
            children.push(("values", values));
        }
        children
    }
}
