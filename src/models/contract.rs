//! DataContractSpecification type for data contract documents
//!
//! Represents the root document: identity, info and terms attributes,
//! servers, models, reusable definitions, and service levels.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::attributes::Attributes;
use super::model::Model;
use super::supporting::{Definition, Server, ServiceLevel};

/// The root data contract document.
///
/// All name-keyed sections preserve declaration order, which renderers rely
/// on when turning the contract into output. Rendering never mutates the
/// document; a contract can be shared across threads behind a reference.
///
/// # Example
///
/// ```rust
/// use datacontract_markdown::models::{
///     Attributes, DataContractSpecification, Field, Model,
/// };
///
/// let contract = DataContractSpecification::new("orders")
///     .with_info(
///         Attributes::new()
///             .with("title", "Orders")
///             .with("version", "1.0.0"),
///     )
///     .with_model(
///         "Order",
///         Model::new().with_field("order_id", Field::new("string")),
///     );
///
/// assert_eq!(contract.id, "orders");
/// assert_eq!(contract.models.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataContractSpecification {
    /// Unique identifier of the contract
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Contract metadata (title, version, owner, description, ...)
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub info: Attributes,
    /// Usage terms (usage, limitations, billing, ...)
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub terms: Attributes,
    /// Named servers the data is available on, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub servers: IndexMap<String, Server>,
    /// Named models, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub models: IndexMap<String, Model>,
    /// Named reusable definitions, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, Definition>,
    /// Service level agreements
    #[serde(
        default,
        rename = "servicelevels",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_levels: Option<ServiceLevel>,
}

impl DataContractSpecification {
    /// Create a new contract with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the info attributes
    pub fn with_info(mut self, info: Attributes) -> Self {
        self.info = info;
        self
    }

    /// Set the terms attributes
    pub fn with_terms(mut self, terms: Attributes) -> Self {
        self.terms = terms;
        self
    }

    /// Add a server
    pub fn with_server(mut self, name: impl Into<String>, server: Server) -> Self {
        self.servers.insert(name.into(), server);
        self
    }

    /// Add a model
    pub fn with_model(mut self, name: impl Into<String>, model: Model) -> Self {
        self.models.insert(name.into(), model);
        self
    }

    /// Add a reusable definition
    pub fn with_definition(mut self, name: impl Into<String>, definition: Definition) -> Self {
        self.definitions.insert(name.into(), definition);
        self
    }

    /// Set the service levels
    pub fn with_service_levels(mut self, service_levels: ServiceLevel) -> Self {
        self.service_levels = Some(service_levels);
        self
    }
}
