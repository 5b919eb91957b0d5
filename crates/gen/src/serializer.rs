//! Swagger 2.0 YAML rendering.
//!
//! The document is written line by line in a fixed order: header, paths,
//! definitions. Output depends only on the inputs, so rendering the same
//! description twice yields identical text.

use swagmodel_types::{Operation, Property, Provider, Representation, Resource};

use crate::error::GenerateError;

pub const SWAGGER_VERSION: &str = "2.0";
pub const DOCUMENT_DESCRIPTION: &str = "auto-generated from Enterprise Architect";
pub const DOCUMENT_VERSION: &str = "1.0.0";
pub const PRODUCED_MEDIA_TYPE: &str = "application/json";

/// Renders a complete document.
///
/// Operations without a verb are skipped without notice. Types are emitted
/// exactly as declared.
///
/// # Errors
///
/// Returns [`GenerateError::MissingProvider`] when `provider` is `None`.
pub fn render_document(
    provider: Option<&Provider>,
    resources: &[Resource],
    representations: &[Representation],
) -> Result<String, GenerateError> {
    let provider = provider.ok_or(GenerateError::MissingProvider)?;

    let mut out = String::new();
    render_header(&mut out, provider);
    render_paths(&mut out, resources);
    render_definitions(&mut out, representations);
    Ok(out)
}

fn render_header(out: &mut String, provider: &Provider) {
    push_line(out, 0, &format!("swagger: '{SWAGGER_VERSION}'"));
    push_line(out, 0, "info:");
    push_line(out, 1, &format!("description: '{DOCUMENT_DESCRIPTION}'"));
    push_line(out, 1, &format!("title: {}", single_quoted(&provider.name)));
    push_line(out, 1, &format!("version: '{DOCUMENT_VERSION}'"));
}

fn render_paths(out: &mut String, resources: &[Resource]) {
    push_line(out, 0, "paths:");
    for resource in resources {
        push_line(out, 1, &format!("/{}:", resource.name));
        for operation in &resource.operations {
            render_operation(out, operation);
        }
    }
}

// TODO: link parameter and return types to entries under `definitions`.
fn render_operation(out: &mut String, operation: &Operation) {
    let Some(verb) = operation.verb else {
        return;
    };
    push_line(out, 2, &format!("{}:", verb.as_keyword()));
    push_line(out, 3, &format!("operationId: {}", operation.name));
    push_line(out, 3, "produces:");
    push_line(out, 3, &format!("- {PRODUCED_MEDIA_TYPE}"));
    push_line(out, 3, "responses:");
    push_line(out, 4, "200:");
    push_line(out, 5, "description: OK");
}

fn render_definitions(out: &mut String, representations: &[Representation]) {
    push_line(out, 0, "definitions:");
    for representation in representations {
        push_line(out, 1, &format!("{}:", representation.name));
        push_line(out, 2, "type: object");
        push_line(out, 2, "properties:");
        for property in &representation.properties {
            render_property(out, property);
        }
    }
}

fn render_property(out: &mut String, property: &Property) {
    push_line(out, 3, &format!("{}:", property.name));
    push_line(out, 4, &format!("type: {}", property.r#type));
    if !property.format.is_empty() {
        push_line(out, 4, &format!("format: {}", property.format));
    }
}

/// Appends one line indented by two spaces per level.
fn push_line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(text);
    out.push('\n');
}

/// Renders text as a YAML single-quoted scalar, doubling embedded quotes.
fn single_quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}
