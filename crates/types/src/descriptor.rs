//! Intermediate API description derived from a design model.
//!
//! These values are built once per generation run and never mutated after
//! the classifier hands them to the document serializer.

use std::{error::Error, str::FromStr};

/// HTTP verb bound to an operation.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Stereotype text → verb. Matching is exact and case-sensitive.
const VERB_MARKERS: &[(&str, HttpVerb)] = &[
    ("GET", HttpVerb::Get),
    ("DELETE", HttpVerb::Delete),
    ("PATCH", HttpVerb::Patch),
    ("POST", HttpVerb::Post),
    ("PUT", HttpVerb::Put),
];

impl HttpVerb {
    /// Looks up a method stereotype in the verb table.
    pub fn from_marker(marker: &str) -> Option<Self> {
        VERB_MARKERS
            .iter()
            .find(|(text, _)| *text == marker)
            .map(|(_, verb)| *verb)
    }

    /// Lower-case keyword used as the operation key in a path item.
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }
}

impl FromStr for HttpVerb {
    type Err = ParseHttpVerbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_marker(s).ok_or(ParseHttpVerbError)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseHttpVerbError;

impl std::fmt::Display for ParseHttpVerbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("invalid http verb; expected one of GET, POST, PUT, PATCH, DELETE")
    }
}

impl Error for ParseHttpVerbError {}

/// The root entity of a generated document. Supplies the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub name: String,
}

/// An addressable API path and the operations bound to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resource {
    /// Used verbatim as the path segment (`/<name>`).
    pub name: String,
    /// Operations in source enumeration order.
    pub operations: Vec<Operation>,
}

/// One verb binding on a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operation {
    /// `None` when the method stereotype is not a recognized verb. Such
    /// operations are kept in the model but never rendered.
    pub verb: Option<HttpVerb>,
    /// Operation identifier.
    pub name: String,
    /// Declared return type text, possibly empty.
    pub output_type: String,
    /// One entry per declared parameter, in declaration order.
    pub input_types: Vec<String>,
}

/// A named schema object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Representation {
    pub name: String,
    pub properties: Vec<Property>,
}

/// One schema field of a representation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    /// Declared type text, passed through unvalidated.
    pub r#type: String,
    /// Schema format; empty means "not emitted".
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_lookup_is_exact() {
        assert_eq!(HttpVerb::from_marker("GET"), Some(HttpVerb::Get));
        assert_eq!(HttpVerb::from_marker("DELETE"), Some(HttpVerb::Delete));
        assert_eq!(HttpVerb::from_marker("get"), None);
        assert_eq!(HttpVerb::from_marker(" GET"), None);
        assert_eq!(HttpVerb::from_marker("HEAD"), None);
        assert_eq!(HttpVerb::from_marker(""), None);
    }

    #[test]
    fn verb_keywords_are_lower_case() {
        for (marker, verb) in VERB_MARKERS {
            assert_eq!(verb.as_keyword(), marker.to_ascii_lowercase());
        }
    }

    #[test]
    fn from_str_reports_unknown_verbs() {
        assert_eq!("PATCH".parse::<HttpVerb>(), Ok(HttpVerb::Patch));
        assert_eq!("OPTIONS".parse::<HttpVerb>(), Err(ParseHttpVerbError));
    }
}
