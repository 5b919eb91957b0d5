//! Package selection within a model tree.

use swagmodel_types::ModelPackage;

use crate::error::GenerateError;

/// Resolves a `/`-separated package path below `root`.
///
/// `None`, an empty string or `/` select the root itself. Every segment must
/// name a child package; naming an element or an unknown package fails.
pub fn select_package<'a>(root: &'a ModelPackage, selector: Option<&str>) -> Result<&'a ModelPackage, GenerateError> {
    let Some(selector) = selector else {
        return Ok(root);
    };

    let mut current = root;
    for segment in selector.split('/').filter(|segment| !segment.is_empty()) {
        current = current
            .child_package(segment)
            .ok_or_else(|| GenerateError::InvalidSelection {
                selector: selector.to_string(),
            })?;
    }
    Ok(current)
}
