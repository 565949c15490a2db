//! Markdown exporter for data contract documents.
//!
//! Renders a contract as one Markdown document: a title, fixed sections for
//! info, servers, terms, models, definitions and service levels, and one
//! table per model. Nested field structures (records, arrays, maps) are
//! flattened into indented table rows: each nesting level adds an `&numsp;`
//! indent and nested rows carry a `&#x21b3;` descent marker, so the tree
//! shape survives in a flat table.

use indexmap::IndexMap;
use tracing::info;

use crate::export::{ExportError, ExportResult};
use crate::models::{
    Attributes, DataContractSpecification, Definition, Field, Model, Server, ServiceLevel,
};

/// Indentation unit per nesting level inside a table cell.
const NESTED_INDENT: &str = "&numsp;";
/// Marker prefixed to rows that are nested children of the row above.
const DESCENT_MARKER: &str = "&#x21b3;";
/// Placeholder for objects without a description.
const NO_DESCRIPTION: &str = "No description.";

/// Exporter for the Markdown format.
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Create a new Markdown exporter
    pub fn new() -> Self {
        Self
    }

    /// Export a data contract as a Markdown document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use datacontract_markdown::export::markdown::MarkdownExporter;
    /// use datacontract_markdown::models::{DataContractSpecification, Field, Model};
    ///
    /// let contract = DataContractSpecification::new("orders").with_model(
    ///     "Order",
    ///     Model::new().with_field("order_id", Field::new("string")),
    /// );
    ///
    /// let result = MarkdownExporter::new().export(&contract).unwrap();
    /// assert_eq!(result.format, "markdown");
    /// assert!(result.content.starts_with("# orders"));
    /// ```
    pub fn export(
        &self,
        contract: &DataContractSpecification,
    ) -> Result<ExportResult, ExportError> {
        info!("Exporting data contract {} to markdown", contract.id);
        Ok(ExportResult {
            content: to_markdown(contract),
            format: "markdown".to_string(),
        })
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a data contract as a Markdown document.
///
/// Sections appear in fixed order: title, info, servers, terms, models,
/// definitions, service levels. Section headings are always emitted, even
/// when the section body is empty; only the per-part headings inside the
/// service levels section are conditional.
pub fn to_markdown(contract: &DataContractSpecification) -> String {
    let parts = [
        format!("# {}", contract.id),
        "## Info".to_string(),
        attributes_to_markdown(&contract.info),
        String::new(),
        "## Servers".to_string(),
        servers_to_markdown(&contract.servers),
        String::new(),
        "## Terms".to_string(),
        attributes_to_markdown(&contract.terms),
        String::new(),
        "## Models".to_string(),
        models_to_markdown(&contract.models),
        String::new(),
        "## Definitions".to_string(),
        definitions_to_markdown(&contract.definitions),
        String::new(),
        "## Service levels".to_string(),
        service_level_to_markdown(contract.service_levels.as_ref()),
    ];
    parts.join("\n")
}

/// Render an open attribute set as one inline fragment.
///
/// The description is rendered first, emphasized, falling back to
/// "No description." when unset. Every remaining truthy attribute becomes a
/// bullet: boolean `true` as a bare `` `name` `` flag, anything else as
/// `**name:** value`. Falsy attributes are dropped. An empty attribute set
/// renders as the empty string.
fn attributes_to_markdown(attributes: &Attributes) -> String {
    if attributes.is_empty() {
        return String::new();
    }
    let description = description_to_markdown(attributes.description());
    let bullets: Vec<String> = attributes
        .iter()
        .filter(|(name, value)| name.as_str() != "description" && is_truthy(value))
        .map(|(name, value)| {
            if value == &serde_json::Value::Bool(true) {
                format!("• `{name}`")
            } else {
                format!("• **{name}:** {}", value_to_markdown(value))
            }
        })
        .collect();
    if bullets.is_empty() {
        format!("*{description}*")
    } else {
        format!("*{description}*<br>{}", bullets.join("<br>"))
    }
}

/// Render the servers table, one row per server in declaration order.
/// An empty mapping yields no table at all, not a header-only one.
fn servers_to_markdown(servers: &IndexMap<String, Server>) -> String {
    if servers.is_empty() {
        return String::new();
    }
    let mut rows = vec![
        "| Name | Type | Attributes |".to_string(),
        "| ---- | ---- | ---------- |".to_string(),
    ];
    for (name, server) in servers {
        rows.push(format!(
            "| {name} | {} | {} |",
            server.server_type.as_deref().unwrap_or(""),
            attributes_to_markdown(&server.attributes)
        ));
    }
    rows.join("\n")
}

fn models_to_markdown(models: &IndexMap<String, Model>) -> String {
    models
        .iter()
        .map(|(name, model)| model_to_markdown(name, model))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Render one model: heading, description line, table header, field rows.
fn model_to_markdown(name: &str, model: &Model) -> String {
    let parts = [
        format!("### {name}"),
        format!("*{}*", description_to_markdown(model.description.as_deref())),
        String::new(),
        "| Field | Type | Attributes |".to_string(),
        "| ----- | ---- | ---------- |".to_string(),
        fields_to_markdown(&model.fields, 0),
    ];
    parts.join("\n")
}

fn fields_to_markdown(fields: &IndexMap<String, Field>, level: usize) -> String {
    fields
        .iter()
        .map(|(name, field)| field_to_markdown(name, field, level))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Render one field and its descendants as table rows.
///
/// Emits one row for the field itself, indented proportionally to `level`
/// and marked with the descent glyph when nested, then recurses over the
/// structural children ([`Field::children`]) at `level + 1`: nested record
/// fields in declaration order, then the array `items` type and the map
/// `keys` and `values` types. A leaf field emits exactly one row; a field
/// with several structural slots populated emits every applicable subtree
/// in that fixed order.
fn field_to_markdown(name: &str, field: &Field, level: usize) -> String {
    let indent = NESTED_INDENT.repeat(level);
    let marker = if level > 0 { DESCENT_MARKER } else { "" };
    let attributes = attributes_to_markdown(&field.attributes);

    let mut rows = vec![format!(
        "|{indent}{marker} {name} | {} | {attributes} |",
        field.field_type
    )];
    for (child_name, child) in field.children() {
        rows.push(field_to_markdown(child_name, child, level + 1));
    }
    rows.join("\n")
}

/// Render the definitions table, one row per definition in declaration
/// order. An empty mapping yields the empty string.
fn definitions_to_markdown(definitions: &IndexMap<String, Definition>) -> String {
    if definitions.is_empty() {
        return String::new();
    }
    let mut rows = vec![
        "| Name | Type | Domain | Attributes |".to_string(),
        "| ---- | ---- | ------ | ---------- |".to_string(),
    ];
    for (name, definition) in definitions {
        rows.push(format!(
            "| {name} | {} | {} | {} |",
            definition.definition_type.as_deref().unwrap_or(""),
            definition.domain.as_deref().unwrap_or(""),
            attributes_to_markdown(&definition.attributes)
        ));
    }
    rows.join("\n")
}

/// Render the service level sections. Only present parts get a heading;
/// an absent service level object yields the empty string.
fn service_level_to_markdown(service_level: Option<&ServiceLevel>) -> String {
    let Some(service_level) = service_level else {
        return String::new();
    };
    let mut parts = vec![String::new()];
    for (heading, attributes) in service_level.sections() {
        parts.push(format!("### {heading}"));
        parts.push(attributes_to_markdown(attributes));
        parts.push(String::new());
    }
    parts.join("\n")
}

/// Escape a description for use inside a single table cell, falling back to
/// the placeholder when unset or empty.
fn description_to_markdown(description: Option<&str>) -> String {
    match description {
        Some(text) if !text.is_empty() => text.replace('\n', "<br>"),
        _ => NO_DESCRIPTION.to_string(),
    }
}

/// Attribute values that render: false, zero, empty strings, null and empty
/// collections are treated as unset.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(text) => !text.is_empty(),
        serde_json::Value::Array(items) => !items.is_empty(),
        serde_json::Value::Object(entries) => !entries.is_empty(),
    }
}

/// Display form of an attribute value: strings bare, everything else as
/// compact JSON.
fn value_to_markdown(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod attribute_tests {
        use super::*;

        #[test]
        fn test_empty_attributes_render_empty() {
            assert_eq!(attributes_to_markdown(&Attributes::new()), "");
        }

        #[test]
        fn test_description_rendered_first_and_emphasized() {
            let attributes = Attributes::new()
                .with("owner", "checkout-team")
                .with("description", "Order data");
            assert_eq!(
                attributes_to_markdown(&attributes),
                "*Order data*<br>• **owner:** checkout-team"
            );
        }

        #[test]
        fn test_description_fallback_and_newline_escaping() {
            let no_description = Attributes::new().with("owner", "checkout-team");
            assert_eq!(
                attributes_to_markdown(&no_description),
                "*No description.*<br>• **owner:** checkout-team"
            );

            let multiline = Attributes::new().with("description", "a\nb");
            assert_eq!(attributes_to_markdown(&multiline), "*a<br>b*");
        }

        #[test]
        fn test_boolean_true_renders_as_flag_bullet() {
            let attributes = Attributes::new().with("required", true);
            assert_eq!(
                attributes_to_markdown(&attributes),
                "*No description.*<br>• `required`"
            );
        }

        #[test]
        fn test_falsy_attributes_are_dropped() {
            let attributes = Attributes::new()
                .with("required", false)
                .with("minLength", 0)
                .with("pattern", "")
                .with("tags", serde_json::json!([]))
                .with("unique", true);
            assert_eq!(
                attributes_to_markdown(&attributes),
                "*No description.*<br>• `unique`"
            );
        }

        #[test]
        fn test_non_string_values_render_as_json() {
            let attributes = Attributes::new()
                .with("maxLength", 64)
                .with("examples", serde_json::json!(["a", "b"]));
            assert_eq!(
                attributes_to_markdown(&attributes),
                r#"*No description.*<br>• **maxLength:** 64<br>• **examples:** ["a","b"]"#
            );
        }
    }

    mod field_tests {
        use super::*;

        #[test]
        fn test_leaf_field_renders_one_row() {
            let field = Field::new("string")
                .with_attribute("required", true)
                .with_attribute("maxLength", 64);
            let rendered = field_to_markdown("order_id", &field, 0);
            assert_eq!(rendered.lines().count(), 1);
            assert!(rendered.starts_with("| order_id | string |"));
        }

        #[test]
        fn test_depth_zero_has_no_indent_or_marker() {
            let field = Field::new("string");
            assert_eq!(field_to_markdown("order_id", &field, 0), "| order_id | string |  |");
        }

        #[test]
        fn test_nested_rows_carry_depth_markers() {
            let field = Field::new("object").with_field(
                "address",
                Field::new("object").with_field("street", Field::new("string")),
            );
            let rendered = field_to_markdown("customer", &field, 0);
            let rows: Vec<&str> = rendered.lines().collect();

            assert_eq!(rows[0], "| customer | object |  |");
            assert_eq!(rows[1], "|&numsp;&#x21b3; address | object |  |");
            assert_eq!(rows[2], "|&numsp;&numsp;&#x21b3; street | string |  |");
        }

        #[test]
        fn test_map_field_expands_keys_then_values() {
            let field = Field::new("map")
                .with_keys(Field::new("string"))
                .with_values(Field::new("double"));
            let rows: Vec<String> = field_to_markdown("scores", &field, 0)
                .lines()
                .map(String::from)
                .collect();

            assert_eq!(rows.len(), 3);
            assert!(rows[1].contains("&#x21b3; keys | string"));
            assert!(rows[2].contains("&#x21b3; values | double"));
        }

        #[test]
        fn test_multiple_structural_slots_render_in_fixed_order() {
            // Pathological but accepted: items and values on one field.
            let field = Field::new("array")
                .with_values(Field::new("double"))
                .with_items(Field::new("string"));
            let rows: Vec<String> = field_to_markdown("mixed", &field, 0)
                .lines()
                .map(String::from)
                .collect();

            assert_eq!(rows.len(), 3);
            assert!(rows[1].contains("&#x21b3; items | string"));
            assert!(rows[2].contains("&#x21b3; values | double"));
        }

        #[test]
        fn test_sibling_order_follows_declaration_order() {
            let fields: IndexMap<String, Field> = [
                ("zulu".to_string(), Field::new("string")),
                ("alpha".to_string(), Field::new("long")),
            ]
            .into_iter()
            .collect();

            let rendered = fields_to_markdown(&fields, 0);
            let rows: Vec<&str> = rendered.lines().collect();
            assert!(rows[0].contains("zulu"));
            assert!(rows[1].contains("alpha"));
        }
    }

    mod section_tests {
        use super::*;

        #[test]
        fn test_empty_servers_render_empty_not_header_only() {
            assert_eq!(servers_to_markdown(&IndexMap::new()), "");
        }

        #[test]
        fn test_empty_definitions_render_empty_not_header_only() {
            assert_eq!(definitions_to_markdown(&IndexMap::new()), "");
        }

        #[test]
        fn test_server_rows_in_declaration_order() {
            let servers: IndexMap<String, Server> = [
                (
                    "production".to_string(),
                    Server::new("s3").with_attribute("location", "s3://orders/data"),
                ),
                ("staging".to_string(), Server::new("kafka")),
            ]
            .into_iter()
            .collect();

            let rendered = servers_to_markdown(&servers);
            let rows: Vec<&str> = rendered.lines().collect();
            assert_eq!(rows[0], "| Name | Type | Attributes |");
            assert_eq!(
                rows[2],
                "| production | s3 | *No description.*<br>• **location:** s3://orders/data |"
            );
            assert_eq!(rows[3], "| staging | kafka |  |");
        }

        #[test]
        fn test_server_without_type_renders_empty_type_column() {
            let servers: IndexMap<String, Server> =
                [("local".to_string(), Server::default())].into_iter().collect();
            assert!(servers_to_markdown(&servers).contains("| local |  |"));
        }

        #[test]
        fn test_definition_row_shows_type_and_domain() {
            let definitions: IndexMap<String, Definition> = [(
                "order_id".to_string(),
                Definition::new("order_id", "string")
                    .with_domain("checkout")
                    .with_description("Unique order identifier"),
            )]
            .into_iter()
            .collect();

            let rendered = definitions_to_markdown(&definitions);
            assert!(rendered.contains(
                "| order_id | string | checkout | *Unique order identifier* |"
            ));
        }

        #[test]
        fn test_service_level_emits_only_present_parts() {
            let service_level = ServiceLevel::new()
                .with_retention(Attributes::new().with("period", "P1Y"))
                .with_availability(Attributes::new().with("percentage", "99.9%"));

            let rendered = service_level_to_markdown(Some(&service_level));
            assert!(rendered.contains("### Availability"));
            assert!(rendered.contains("### Retention"));
            assert!(!rendered.contains("### Latency"));
            assert!(!rendered.contains("### Backup"));
            // Availability comes first regardless of construction order.
            assert!(
                rendered.find("### Availability").unwrap()
                    < rendered.find("### Retention").unwrap()
            );
        }

        #[test]
        fn test_absent_service_level_renders_empty() {
            assert_eq!(service_level_to_markdown(None), "");
            assert_eq!(service_level_to_markdown(Some(&ServiceLevel::new())), "");
        }

        #[test]
        fn test_model_header_and_description_fallback() {
            let model = Model::new().with_field("order_id", Field::new("string"));
            let rendered = model_to_markdown("Order", &model);
            let rows: Vec<&str> = rendered.lines().collect();

            assert_eq!(rows[0], "### Order");
            assert_eq!(rows[1], "*No description.*");
            assert_eq!(rows[3], "| Field | Type | Attributes |");
            assert_eq!(rows[4], "| ----- | ---- | ---------- |");
            assert_eq!(rows[5], "| order_id | string |  |");
        }
    }
}
