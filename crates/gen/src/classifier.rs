//! Model classification by stereotype.
//!
//! Walks the direct children of a package exactly once, in enumeration order,
//! and sorts them into the provider, resources and representations of a
//! document. Role checks are independent: an element marked both
//! `resource provider` and `resource` contributes to both.

use swagmodel_types::{ModelAttribute, ModelElement, ModelMethod, Provider, Representation, Resource};
use tracing::debug;

use crate::{
    error::GenerateError,
    mapper::{map_operations, map_properties},
};

/// Role an element can play in the generated document.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Role {
    Provider,
    Resource,
    Representation,
}

/// Stereotype text → role.
const ROLE_MARKERS: &[(&str, Role)] = &[
    ("resource provider", Role::Provider),
    ("provider", Role::Provider),
    ("resource", Role::Resource),
    ("representation", Role::Representation),
];

impl Role {
    /// Marker text shown to users when talking about this role.
    pub fn canonical_marker(&self) -> &'static str {
        match self {
            Self::Provider => "resource provider",
            Self::Resource => "resource",
            Self::Representation => "representation",
        }
    }

    /// All stereotype spellings that select this role.
    pub fn markers(self) -> impl Iterator<Item = &'static str> {
        ROLE_MARKERS
            .iter()
            .filter(move |(_, role)| *role == self)
            .map(|(marker, _)| *marker)
    }
}

/// Read access to an element of the host model.
///
/// [`ModelElement`] implements this for models loaded from disk; other hosts
/// can expose their own object graph through it.
pub trait ElementSource {
    fn name(&self) -> &str;
    /// Exact stereotype membership test.
    fn has_stereotype(&self, marker: &str) -> bool;
    fn methods(&self) -> &[ModelMethod];
    fn attributes(&self) -> &[ModelAttribute];

    fn has_role(&self, role: Role) -> bool {
        role.markers().any(|marker| self.has_stereotype(marker))
    }
}

impl ElementSource for ModelElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_stereotype(&self, marker: &str) -> bool {
        ModelElement::has_stereotype(self, marker)
    }

    fn methods(&self) -> &[ModelMethod] {
        &self.methods
    }

    fn attributes(&self) -> &[ModelAttribute] {
        &self.attributes
    }
}

/// Outcome of classifying one package. Owned by the caller; nothing is kept
/// between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub provider: Option<Provider>,
    pub resources: Vec<Resource>,
    pub representations: Vec<Representation>,
}

/// Classifies the given elements.
///
/// # Errors
///
/// Returns [`GenerateError::MultipleProviders`] as soon as a second
/// provider-marked element is seen.
pub fn classify<E: ElementSource>(elements: &[E]) -> Result<Classification, GenerateError> {
    let mut classification = Classification::default();

    for element in elements {
        if element.has_role(Role::Provider) {
            if classification.provider.is_some() {
                return Err(GenerateError::MultipleProviders {
                    marker: Role::Provider.canonical_marker().to_string(),
                });
            }
            debug!(element = element.name(), "classified as provider");
            classification.provider = Some(Provider {
                name: element.name().to_string(),
            });
        }

        if element.has_role(Role::Resource) {
            debug!(element = element.name(), methods = element.methods().len(), "classified as resource");
            classification.resources.push(Resource {
                name: element.name().to_string(),
                operations: map_operations(element.methods()),
            });
        }

        if element.has_role(Role::Representation) {
            debug!(
                element = element.name(),
                attributes = element.attributes().len(),
                "classified as representation"
            );
            classification.representations.push(Representation {
                name: element.name().to_string(),
                properties: map_properties(element.attributes()),
            });
        }
    }

    Ok(classification)
}
