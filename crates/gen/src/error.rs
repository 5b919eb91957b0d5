//! Error taxonomy for a generation run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by model loading, classification and rendering.
///
/// Unrecognized verbs and unvalidated type text are deliberately absent:
/// both are tolerated rather than reported.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A second provider-marked element was found in the selected package.
    #[error("there must be only one element with stereotype <{marker}>")]
    MultipleProviders { marker: String },
    /// Rendering was requested without a provider.
    #[error("no element with stereotype <resource provider> found; a provider is required to title the document")]
    MissingProvider,
    /// The selector did not resolve to a package.
    #[error("'{selector}' does not name a package; select a package to generate")]
    InvalidSelection { selector: String },
    /// Model content was neither valid JSON nor valid YAML.
    #[error("model content is not valid JSON or YAML: {0}")]
    ModelParse(String),
    /// Reading the model or writing the document failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
