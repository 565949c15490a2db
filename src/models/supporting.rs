//! Supporting types for data contract documents
//!
//! Servers, reusable definitions, and service levels share the same shape:
//! a few typed fields next to an open attribute set.

use serde::{Deserialize, Serialize};

use super::attributes::Attributes;

/// A connection target the contract's data is available on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// Server technology (e.g., "s3", "bigquery", "kafka")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub server_type: Option<String>,
    /// Open attributes (host, port, location, description, ...)
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Server {
    /// Create a new server with the given type
    pub fn new(server_type: impl Into<String>) -> Self {
        Self {
            server_type: Some(server_type.into()),
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
}

/// A reusable field definition the contract's models can refer to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Definition name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Logical type of the defined field
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub definition_type: Option<String>,
    /// Business domain the definition belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Open attributes (description, constraints, examples, ...)
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Definition {
    /// Create a new definition with the given name and type
    pub fn new(name: impl Into<String>, definition_type: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            definition_type: Some(definition_type.into()),
            ..Default::default()
        }
    }

    /// Set the domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
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
}

/// Service level agreements attached to a contract.
///
/// Every part is optional; rendering emits only the parts that are present,
/// in the fixed order returned by [`ServiceLevel::sections`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceLevel {
    /// Uptime guarantees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Attributes>,
    /// How long data is kept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention: Option<Attributes>,
    /// Maximum processing delay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<Attributes>,
    /// Maximum age of the most recent data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshness: Option<Attributes>,
    /// How often data is refreshed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Attributes>,
    /// Support terms (channel, response time)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<Attributes>,
    /// Backup terms (interval, recovery objectives)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup: Option<Attributes>,
}

impl ServiceLevel {
    /// Create an empty service level object
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the availability part
    pub fn with_availability(mut self, availability: Attributes) -> Self {
        self.availability = Some(availability);
        self
    }

    /// Set the retention part
    pub fn with_retention(mut self, retention: Attributes) -> Self {
        self.retention = Some(retention);
        self
    }

    /// Set the latency part
    pub fn with_latency(mut self, latency: Attributes) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Set the freshness part
    pub fn with_freshness(mut self, freshness: Attributes) -> Self {
        self.freshness = Some(freshness);
        self
    }

    /// Set the frequency part
    pub fn with_frequency(mut self, frequency: Attributes) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Set the support part
    pub fn with_support(mut self, support: Attributes) -> Self {
        self.support = Some(support);
        self
    }

    /// Set the backup part
    pub fn with_backup(mut self, backup: Attributes) -> Self {
        self.backup = Some(backup);
        self
    }

    /// Present parts with their display headings, in render order:
    /// availability, retention, latency, freshness, frequency, support,
    /// backup. Absent parts are skipped.
    pub fn sections(&self) -> Vec<(&'static str, &Attributes)> {
        [
            ("Availability", &self.availability),
            ("Retention", &self.retention),
            ("Latency", &self.latency),
            ("Freshness", &self.freshness),
            ("Frequency", &self.frequency),
            ("Support", &self.support),
            ("Backup", &self.backup),
        ]
        .into_iter()
        .filter_map(|(heading, part)| part.as_ref().map(|attributes| (heading, attributes)))
        .collect()
    }
}
