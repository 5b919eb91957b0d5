//! Swagger document generation from stereotyped design models.
//!
//! A generation run classifies the direct children of one package, maps
//! their methods and attributes into an API description and renders that
//! description as a Swagger 2.0 YAML document:
//!
//! ```text
//! package ─▶ classifier ─▶ mapper ─▶ serializer ─▶ GeneratedDocument
//! ```
//!
//! Every call to [`generate`] starts from scratch and hands its result to the
//! caller; no state survives between runs.

pub mod classifier;
pub mod error;
pub mod io;
pub mod mapper;
pub mod selection;
pub mod serializer;

pub use classifier::{Classification, ElementSource, Role, classify};
pub use error::GenerateError;
pub use io::{load_model, parse_model, write_document};
pub use selection::select_package;
pub use serializer::render_document;

use swagmodel_types::ModelPackage;
use tracing::info;

/// A rendered document ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    /// Name of the package the document was generated from.
    pub file_stem: String,
    pub text: String,
    pub resource_count: usize,
    pub representation_count: usize,
}

/// Generates the document for one package.
///
/// # Errors
///
/// - [`GenerateError::MultipleProviders`] when more than one child is marked
///   as provider.
/// - [`GenerateError::MissingProvider`] when none is.
pub fn generate(package: &ModelPackage) -> Result<GeneratedDocument, GenerateError> {
    let classification = classify(&package.elements)?;
    generate_from_classification(&package.name, &classification)
}

/// Renders an already classified package.
pub fn generate_from_classification(
    file_stem: &str,
    classification: &Classification,
) -> Result<GeneratedDocument, GenerateError> {
    let text = render_document(
        classification.provider.as_ref(),
        &classification.resources,
        &classification.representations,
    )?;
    info!(
        package = file_stem,
        resources = classification.resources.len(),
        representations = classification.representations.len(),
        "document generated"
    );
    Ok(GeneratedDocument {
        file_stem: file_stem.to_string(),
        text,
        resource_count: classification.resources.len(),
        representation_count: classification.representations.len(),
    })
}
