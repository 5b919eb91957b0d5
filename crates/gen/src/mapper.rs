//! Element mapping: methods become operations, attributes become properties.
//!
//! Both mappings are total. Unknown verb stereotypes produce an operation with
//! no verb, and type text is copied verbatim.

use swagmodel_types::{HttpVerb, ModelAttribute, ModelMethod, Operation, Property};
use tracing::warn;

/// Schema primitives the document format understands natively.
pub const GENERIC_DATA_TYPES: [&str; 4] = ["integer", "string", "number", "boolean"];

/// Maps each method, in order, to one operation.
pub fn map_operations(methods: &[ModelMethod]) -> Vec<Operation> {
    methods.iter().map(map_operation).collect()
}

fn map_operation(method: &ModelMethod) -> Operation {
    Operation {
        verb: method.stereotype.as_deref().and_then(|marker| marker.parse::<HttpVerb>().ok()),
        name: method.name.clone(),
        output_type: method.return_type.clone(),
        input_types: method.parameters.iter().map(|parameter| parameter.r#type.clone()).collect(),
    }
}

/// Maps each attribute, in order, to one property with an empty format.
pub fn map_properties(attributes: &[ModelAttribute]) -> Vec<Property> {
    attributes
        .iter()
        .map(|attribute| {
            if !is_generic_data_type(&attribute.r#type) {
                warn!(
                    property = %attribute.name,
                    type_name = %attribute.r#type,
                    "property type is not a schema primitive; emitting it verbatim"
                );
            }
            Property {
                name: attribute.name.clone(),
                r#type: attribute.r#type.clone(),
                format: String::new(),
            }
        })
        .collect()
}

/// Returns true for the four primitive schema type names.
pub fn is_generic_data_type(type_name: &str) -> bool {
    GENERIC_DATA_TYPES.contains(&type_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swagmodel_types::ModelParameter;

    fn method(name: &str, stereotype: Option<&str>, return_type: &str, parameter_types: &[&str]) -> ModelMethod {
        ModelMethod {
            name: name.into(),
            stereotype: stereotype.map(str::to_string),
            return_type: return_type.into(),
            parameters: parameter_types
                .iter()
                .enumerate()
                .map(|(index, r#type)| ModelParameter {
                    name: format!("p{index}"),
                    r#type: r#type.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn captures_parameter_types_in_declaration_order() {
        let operations = map_operations(&[method("create", Some("POST"), "Pet", &["T1", "T2", "T3"])]);
        assert_eq!(operations.len(), 1);
        assert_eq!(operations[0].input_types, vec!["T1", "T2", "T3"]);
        assert_eq!(operations[0].output_type, "Pet");
        assert_eq!(operations[0].verb, Some(HttpVerb::Post));
    }

    #[test]
    fn unknown_or_missing_stereotype_leaves_verb_unset() {
        let operations = map_operations(&[
            method("a", Some("get"), "", &[]),
            method("b", None, "", &[]),
            method("c", Some("OPTIONS"), "", &[]),
            method("d", Some("DELETE"), "", &[]),
        ]);
        let verbs: Vec<_> = operations.iter().map(|operation| operation.verb).collect();
        assert_eq!(verbs, vec![None, None, None, Some(HttpVerb::Delete)]);
        let names: Vec<_> = operations.iter().map(|operation| operation.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn every_verb_marker_selects_its_verb() {
        let markers = [
            ("GET", HttpVerb::Get),
            ("POST", HttpVerb::Post),
            ("PUT", HttpVerb::Put),
            ("PATCH", HttpVerb::Patch),
            ("DELETE", HttpVerb::Delete),
        ];
        let methods: Vec<_> = markers.iter().map(|(marker, _)| method(marker, Some(*marker), "", &[])).collect();
        let verbs: Vec<_> = map_operations(&methods).into_iter().map(|operation| operation.verb).collect();
        let expected: Vec<_> = markers.iter().map(|(_, verb)| Some(*verb)).collect();
        assert_eq!(verbs, expected);
    }

    #[test]
    fn properties_keep_order_and_raw_types() {
        let attributes = vec![
            ModelAttribute { name: "street".into(), r#type: "string".into() },
            ModelAttribute { name: "tags".into(), r#type: "List<String>".into() },
            ModelAttribute { name: "zip".into(), r#type: "integer".into() },
        ];
        let properties = map_properties(&attributes);
        let pairs: Vec<_> = properties
            .iter()
            .map(|property| (property.name.as_str(), property.r#type.as_str()))
            .collect();
        assert_eq!(pairs, vec![("street", "string"), ("tags", "List<String>"), ("zip", "integer")]);
        assert!(properties.iter().all(|property| property.format.is_empty()));
    }

    #[test]
    fn generic_types_are_recognized() {
        assert!(is_generic_data_type("boolean"));
        assert!(!is_generic_data_type("String"));
        assert!(!is_generic_data_type("Address"));
    }
}
