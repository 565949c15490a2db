//! Model type for data contract documents
//!
//! A model describes one dataset of the contract (a table, a topic, a file)
//! through an ordered set of named fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::field::Field;

/// A named dataset described by the contract.
///
/// Field order follows declaration order and is preserved when the model is
/// rendered, so a model reads the same in the source document and in any
/// generated output.
///
/// # Example
///
/// ```rust
/// use datacontract_markdown::models::{Field, Model};
///
/// let orders = Model::new()
///     .with_description("One row per placed order")
///     .with_field("order_id", Field::new("string"))
///     .with_field("total", Field::new("decimal"));
///
/// assert_eq!(orders.fields.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Human-readable description of the dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Named fields, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, Field>,
}

impl Model {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a field
    pub fn with_field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_preserved() {
        let model: Model = serde_json::from_str(
            r#"{
                "description": "Orders",
                "fields": {
                    "zulu": {"type": "string"},
                    "alpha": {"type": "long"},
                    "mike": {"type": "boolean"}
                }
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = model.fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn test_model_without_description() {
        let model: Model = serde_json::from_str(r#"{"fields": {}}"#).unwrap();
        assert_eq!(model.description, None);
        assert!(model.fields.is_empty());
    }

    #[test]
    fn test_builder_keeps_insertion_order() {
        let model = Model::new()
            .with_field("second", Field::new("string"))
            .with_field("first", Field::new("long"));

        let names: Vec<&str> = model.fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["second", "first"]);
    }
}
