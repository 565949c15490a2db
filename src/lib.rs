//! Markdown renderer for data contract documents
//!
//! Turns an in-memory data contract (info and terms, servers, data models,
//! reusable field definitions and service levels) into a single Markdown
//! report. Arbitrarily nested field structures (records, arrays, maps) are
//! flattened into indented table rows so the schema tree stays readable in a
//! flat table.
//!
//! The crate neither reads nor writes files and does not validate contracts:
//! callers hand it a [`DataContractSpecification`] and receive the rendered
//! document as a string. Rendering never mutates the contract, so a contract
//! may be rendered from several threads concurrently.
//!
//! # Example
//!
//! ```rust
//! use datacontract_markdown::{DataContractSpecification, Field, Model, to_markdown};
//!
//! let contract = DataContractSpecification::new("orders").with_model(
//!     "Order",
//!     Model::new()
//!         .with_description("One row per placed order")
//!         .with_field("order_id", Field::new("string")),
//! );
//!
//! let markdown = to_markdown(&contract);
//! assert!(markdown.contains("### Order"));
//! assert!(markdown.contains("| order_id | string |  |"));
//! ```

pub mod export;
pub mod models;

// Re-export commonly used types
pub use export::{ExportError, ExportResult, MarkdownExporter, to_markdown};
pub use models::{
    Attributes, DataContractSpecification, Definition, Field, Model, Server, ServiceLevel,
};
