use atrius_fhir_support::{ModelConfig, ModelError};

#[test]
fn test_json_config_defaults_missing_keys() {
    let config = ModelConfig::from_json(r#"{ "checkEmptyElements": false }"#).unwrap();
    assert!(config.check_reference_types);
    assert!(config.check_primitive_lexical);
    assert!(!config.check_empty_elements);

    assert_eq!(ModelConfig::from_json("{}").unwrap(), ModelConfig::default());
}

#[test]
fn test_json_config_errors_are_model_errors() {
    let err = ModelConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, ModelError::Config(_)));
    assert!(err.to_string().starts_with("invalid model configuration"));
}

// The only test in this binary that touches the process-wide configuration.
#[test]
fn test_current_configuration_can_be_replaced() {
    let original = ModelConfig::current();
    assert_eq!(*original, ModelConfig::default());

    ModelConfig::set_current(ModelConfig::lenient());
    assert!(!ModelConfig::current().check_reference_types);

    ModelConfig::set_current((*original).clone());
    assert_eq!(*ModelConfig::current(), ModelConfig::default());
}
