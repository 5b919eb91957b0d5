use swagmodel_gen::{GenerateError, classify, generate, parse_model, select_package};
use swagmodel_types::ModelPackage;

fn load_fixture() -> ModelPackage {
    parse_model(include_str!("data/petstore.yaml")).expect("parse fixture model")
}

#[test]
fn renders_single_resource_petstore() {
    let model = load_fixture();
    let package = select_package(&model, Some("PetStore")).expect("PetStore package");
    let document = generate(package).expect("generate");

    let expected = "\
swagger: '2.0'
info:
  description: 'auto-generated from Enterprise Architect'
  title: 'PetStore'
  version: '1.0.0'
paths:
  /Pet:
    get:
      operationId: list
      produces:
      - application/json
      responses:
        200:
          description: OK
definitions:
";
    assert_eq!(document.text, expected);
    assert_eq!(document.file_stem, "PetStore");
    assert_eq!(document.resource_count, 1);
    assert_eq!(document.representation_count, 0);
}

#[test]
fn renders_address_definition_in_order() {
    let model = load_fixture();
    let package = select_package(&model, Some("Shop")).expect("Shop package");
    let document = generate(package).expect("generate");

    let expected_definitions = "\
definitions:
  Address:
    type: object
    properties:
      street:
        type: string
      zip:
        type: integer
";
    assert!(document.text.ends_with(expected_definitions), "document:\n{}", document.text);
    assert!(!document.text.contains("format:"));
}

#[test]
fn drops_unrecognized_verbs_and_keeps_operation_order() {
    let model = load_fixture();
    let package = select_package(&model, Some("Shop")).expect("Shop package");
    let document = generate(package).expect("generate");

    assert!(!document.text.contains("recalculate"));
    let find = document.text.find("operationId: find").expect("find rendered");
    let place = document.text.find("operationId: place").expect("place rendered");
    assert!(find < place);
    assert!(document.text.contains("  /Order:\n    get:\n"));
    assert!(document.text.contains("    post:\n      operationId: place\n"));
    assert!(!document.text.contains("Hidden"), "nested elements must not be visited");
}

#[test]
fn captures_parameter_types_in_declaration_order() {
    let model = load_fixture();
    let package = select_package(&model, Some("Shop")).expect("Shop package");
    let classification = classify(&package.elements).expect("classify");

    let order = classification
        .resources
        .iter()
        .find(|resource| resource.name == "Order")
        .expect("Order resource");
    let place = order
        .operations
        .iter()
        .find(|operation| operation.name == "place")
        .expect("place operation");
    assert_eq!(place.input_types, vec!["Order", "boolean", "string"]);
    assert_eq!(place.output_type, "Order");
    let recalculate = &order.operations[1];
    assert_eq!(recalculate.name, "recalculate");
    assert_eq!(recalculate.verb, None);
}

#[test]
fn package_without_provider_produces_no_document() {
    let model = load_fixture();
    let package = select_package(&model, Some("Headless")).expect("Headless package");
    let error = generate(package).expect_err("provider is required");
    assert!(matches!(error, GenerateError::MissingProvider), "got {error}");
}

#[test]
fn duplicate_providers_abort_generation() {
    let model = load_fixture();
    let package = select_package(&model, Some("Crowded")).expect("Crowded package");
    let error = generate(package).expect_err("two providers");
    assert!(matches!(error, GenerateError::MultipleProviders { .. }), "got {error}");
    assert!(error.to_string().contains("resource provider"), "message: {error}");
}

#[test]
fn selecting_an_element_is_rejected() {
    let model = load_fixture();
    let error = select_package(&model, Some("Shop/Order")).expect_err("elements are not packages");
    assert!(matches!(error, GenerateError::InvalidSelection { .. }), "got {error}");
}

#[test]
fn repeated_runs_do_not_share_state() {
    let model = load_fixture();
    let shop = select_package(&model, Some("Shop")).expect("Shop package");
    let pets = select_package(&model, Some("PetStore")).expect("PetStore package");

    let first = generate(shop).expect("first shop run");
    let between = generate(pets).expect("pet run");
    let second = generate(shop).expect("second shop run");

    assert_eq!(first, second);
    assert!(!between.text.contains("Order"));
    assert!(!between.text.contains("Address"));
}
