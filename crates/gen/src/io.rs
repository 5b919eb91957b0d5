//! Model loading and document persistence.

use std::{
    fs,
    path::{Path, PathBuf},
};

use swagmodel_types::ModelPackage;
use tracing::info;

use crate::{GeneratedDocument, error::GenerateError};

/// Default extension for written documents.
pub const DEFAULT_EXTENSION: &str = "yaml";

/// Reads and parses a model export from disk.
pub fn load_model(path: &Path) -> Result<ModelPackage, GenerateError> {
    let contents = fs::read_to_string(path).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_model(&contents)
}

/// Parses model text. JSON is tried first, then YAML; when both fail the
/// error carries both diagnostics.
pub fn parse_model(contents: &str) -> Result<ModelPackage, GenerateError> {
    let json_error = match serde_json::from_str::<ModelPackage>(contents) {
        Ok(package) => return Ok(package),
        Err(error) => error,
    };
    serde_yaml::from_str::<ModelPackage>(contents)
        .map_err(|yaml_error| GenerateError::ModelParse(format!("as JSON: {json_error}; as YAML: {yaml_error}")))
}

/// Writes `document` to `<output_dir>/<file_stem>.<extension>` and returns the
/// path written.
///
/// Missing parent directories are created first.
pub fn write_document(document: &GeneratedDocument, output_dir: &Path, extension: &str) -> Result<PathBuf, GenerateError> {
    let output = output_dir.join(format!("{}.{}", document.file_stem, extension));
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|source| GenerateError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&output, document.text.as_bytes()).map_err(|source| GenerateError::Io {
        path: output.clone(),
        source,
    })?;
    info!(path = %output.display(), bytes = document.text.len(), "document written");
    Ok(output)
}
