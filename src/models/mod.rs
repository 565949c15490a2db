//! Data contract document model
//!
//! Defines the in-memory representation of a data contract: the root
//! document, its servers, the models with their field trees, reusable
//! definitions, and service levels. All name-keyed collections preserve
//! declaration order, which renderers rely on for row order.

pub mod attributes;
pub mod contract;
pub mod field;
pub mod model;
pub mod supporting;

pub use attributes::Attributes;
pub use contract::DataContractSpecification;
pub use field::Field;
pub use model::Model;
pub use supporting::{Definition, Server, ServiceLevel};
