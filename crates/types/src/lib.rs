//! Shared type definitions for the swagmodel workspace.
//!
//! Two families of types live here:
//! - [`model`]: the host design model as it is read from disk (packages,
//!   elements, methods, attributes).
//! - [`descriptor`]: the intermediate API description built from that model
//!   (provider, resources, operations, representations, properties).

pub mod descriptor;
pub mod model;

pub use descriptor::{HttpVerb, Operation, ParseHttpVerbError, Property, Provider, Representation, Resource};
pub use model::{ModelAttribute, ModelElement, ModelMethod, ModelPackage, ModelParameter};
