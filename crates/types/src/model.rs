//! Host design model as persisted by the modeling tool.
//!
//! The model is a tree of packages. Each package owns child packages and
//! elements; elements carry stereotypes, methods and attributes. Every
//! collection defaults to empty so sparse YAML/JSON exports deserialize
//! cleanly.

use serde::{Deserialize, Serialize};

/// A container node in the model tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPackage {
    /// Package name; also the stem of the generated document file.
    pub name: String,
    /// Nested packages, in tree order.
    #[serde(default)]
    pub packages: Vec<ModelPackage>,
    /// Direct child elements, in enumeration order.
    #[serde(default)]
    pub elements: Vec<ModelElement>,
}

impl ModelPackage {
    /// Finds a direct child package by exact name.
    pub fn child_package(&self, name: &str) -> Option<&ModelPackage> {
        self.packages.iter().find(|package| package.name == name)
    }
}

/// A classifier-like element (class, interface, ...) inside a package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelElement {
    pub name: String,
    /// Role markers attached to the element (e.g. "resource").
    #[serde(default)]
    pub stereotypes: Vec<String>,
    #[serde(default)]
    pub methods: Vec<ModelMethod>,
    #[serde(default)]
    pub attributes: Vec<ModelAttribute>,
    /// Nested elements. Kept for fidelity with the host export; generation
    /// never descends into them.
    #[serde(default)]
    pub elements: Vec<ModelElement>,
}

impl ModelElement {
    /// Exact, case-sensitive stereotype check.
    pub fn has_stereotype(&self, marker: &str) -> bool {
        self.stereotypes.iter().any(|stereotype| stereotype == marker)
    }
}

/// A behavior declared on an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMethod {
    pub name: String,
    /// Single stereotype used as the HTTP verb selector.
    #[serde(default)]
    pub stereotype: Option<String>,
    /// Declared return type text; empty when the method returns nothing.
    #[serde(default)]
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<ModelParameter>,
}

/// A declared method parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelParameter {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub r#type: String,
}

/// A field declared on an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAttribute {
    pub name: String,
    #[serde(default, rename = "type")]
    pub r#type: String,
}
