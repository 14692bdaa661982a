use std::cmp::Ordering;

use atrius_fhir_lib::r5::{
    Boolean, CodeableConcept, Coding, DateTime, EpisodeOfCare, EpisodeOfCareStatus, Extension,
    ManufacturedItemDefinitionProperty, MedicationDispense, MedicationDispensePerformer,
    MedicationDispenseStatus, PaymentReconciliationAllocation, Period, PositiveInt, Quantity,
    Reference,
};
use atrius_fhir_lib::{
    check_constraints, ConstraintEvaluator, IssueKind, ModelConfig, Validate,
    ValidationSeverity, Visitable,
};

fn date_time(s: &str) -> DateTime {
    s.parse().unwrap()
}

fn episode_for(patient: Reference) -> Result<EpisodeOfCare, atrius_fhir_lib::ValidationError> {
    EpisodeOfCare::builder()
        .status(EpisodeOfCareStatus::Active)
        .patient(patient)
        .build()
}

fn dispense_builder() -> atrius_fhir_lib::r5::MedicationDispenseBuilder {
    MedicationDispense::builder()
        .status(MedicationDispenseStatus::Completed)
        .medication(CodeableConcept::from_text("amoxicillin 500mg"))
        .subject(Reference::to("Patient/p1"))
}

#[test]
fn test_reference_forms_without_a_type_are_accepted() {
    for reference in [
        "#p1",
        "urn:uuid:c757873d-ec9a-4326-a141-556f43239520",
        "http://example.org/fhir/Patient/p1",
        "Patient/p1/_history/2",
    ] {
        assert!(episode_for(Reference::to(reference)).is_ok(), "{reference}");
    }
}

#[test]
fn test_reference_to_wrong_resource_type() {
    let err = episode_for(Reference::to("http://example.org/fhir/Group/g1")).unwrap_err();
    assert!(err.has_kind(IssueKind::ReferenceType));
    assert!(err.has_issue_at("EpisodeOfCare.patient"));
}

#[test]
fn test_declared_type_must_match_literal_reference() {
    let mismatched = Reference::builder()
        .reference("Patient/p1")
        .r#type("Group")
        .build()
        .unwrap();
    let err = dispense_builder().subject(mismatched).build().unwrap_err();
    assert!(err.has_issue_at("MedicationDispense.subject"));

    let unknown = Reference::builder()
        .r#type("Spaceship")
        .display("USS Example")
        .build()
        .unwrap();
    let err = dispense_builder().subject(unknown).build().unwrap_err();
    assert!(err.issues()[0].message.contains("not a valid resource type"));
}

#[test]
fn test_any_resource_reference() {
    let built = dispense_builder()
        .supporting_information(Reference::to("Claim/c1"))
        .supporting_information(Reference::to("Observation/o1"))
        .build();
    assert!(built.is_ok());
}

#[test]
fn test_nested_reference_checked_by_builder() {
    let performer = MedicationDispensePerformer::builder()
        .actor(Reference::to("Location/l1"))
        .build_with(&ModelConfig::lenient())
        .unwrap();

    let err = dispense_builder()
        .performer(performer.clone())
        .build()
        .unwrap_err();
    assert_eq!(err.issues().len(), 1);
    assert_eq!(err.issues()[0].path, "MedicationDispense.performer[0].actor");
    assert_eq!(err.issues()[0].kind, IssueKind::ReferenceType);

    let md = dispense_builder()
        .performer(performer)
        .build_with(&ModelConfig::lenient())
        .unwrap();
    let err = md.validate().unwrap_err();
    assert!(err.has_issue_at("MedicationDispense.performer[0].actor"));
}

#[test]
fn test_shortcut_constructors_are_checked_by_builder() {
    let err = episode_for(Reference::to("")).unwrap_err();
    assert!(err.has_issue_at("EpisodeOfCare.patient.reference"));
    assert!(err.has_kind(IssueKind::InvalidValue));

    let err = dispense_builder()
        .quantity(Quantity::ucum(5, "m  g"))
        .build()
        .unwrap_err();
    assert!(err.has_issue_at("MedicationDispense.quantity.code"));

    let err = dispense_builder()
        .category(CodeableConcept::from_text(" "))
        .build()
        .unwrap_err();
    assert!(err.has_issue_at("MedicationDispense.category[0].text"));

    let err = dispense_builder()
        .medication(CodeableConcept::from(Coding::from_system_code(
            "http://www.nlm.nih.gov/research/umls/rxnorm",
            "313 782 ",
        )))
        .build()
        .unwrap_err();
    assert!(err.has_issue_at("MedicationDispense.medication.concept.coding[0].code"));
}

#[test]
fn test_built_values_pass_validate_under_same_config() {
    let md = dispense_builder()
        .quantity(Quantity::ucum(30, "{tbl}"))
        .performer(
            MedicationDispensePerformer::builder()
                .actor(Reference::to("Practitioner/pr1"))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert!(md.validate().is_ok());
}

#[test]
fn test_choice_reference_target() {
    let err = ManufacturedItemDefinitionProperty::builder()
        .r#type(CodeableConcept::from_text("image"))
        .value(Reference::to("Patient/p1"))
        .build()
        .unwrap_err();
    assert!(err.has_issue_at("ManufacturedItemDefinition.property.value"));
    assert!(err.has_kind(IssueKind::ReferenceType));
}

#[test]
fn test_positive_int_choice_is_checked() {
    let err = PaymentReconciliationAllocation::builder()
        .target_item(PositiveInt::from(0))
        .build()
        .unwrap_err();
    assert!(err.has_issue_at("PaymentReconciliation.allocation.targetItem"));
    assert!(err.has_kind(IssueKind::InvalidValue));

    let lenient = PaymentReconciliationAllocation::builder()
        .target_item(PositiveInt::from(0))
        .build_with(&ModelConfig::lenient());
    assert!(lenient.is_ok());
}

#[test]
fn test_code_lexical_rules() {
    let err = Coding::builder()
        .system("http://loinc.org")
        .code(" 1234-5")
        .build()
        .unwrap_err();
    assert!(err.has_issue_at("Coding.code"));

    let err = Coding::builder()
        .system("http://loinc.org")
        .code("1234-5")
        .display("\u{0}")
        .build()
        .unwrap_err();
    assert!(err.has_issue_at("Coding.display"));
}

#[test]
fn test_period_start_after_end() {
    let err = Period::builder()
        .start(date_time("2024-02-01"))
        .end(date_time("2024-01-01"))
        .build()
        .unwrap_err();
    assert!(err.has_kind(IssueKind::Rule("per-1")));

    // same day at different precisions is not ordered
    let period = Period::builder()
        .start(date_time("2024-01-01T08:00:00Z"))
        .end(date_time("2024-01-01"))
        .build();
    assert!(period.is_ok());
}

#[test]
fn test_lenient_configuration_skips_optional_checks() {
    let config = ModelConfig::lenient();
    let built = EpisodeOfCare::builder()
        .status(EpisodeOfCareStatus::Active)
        .patient(Reference::to("Device/d1"))
        .build_with(&config);
    assert!(built.is_ok());

    // required elements are always enforced
    let err = EpisodeOfCare::builder()
        .status(EpisodeOfCareStatus::Active)
        .build_with(&config)
        .unwrap_err();
    assert!(err.has_issue_at("EpisodeOfCare.patient"));
}

#[test]
fn test_declared_invariants() {
    let invariants = <MedicationDispense as Validate>::invariants();
    let keys: Vec<_> = invariants.iter().map(|i| i.key).collect();
    assert_eq!(keys, vec!["dom-2", "dom-3", "dom-4", "dom-5", "dom-6", "mdd-1"]);
    let dom_6 = invariants.iter().find(|i| i.key == "dom-6").unwrap();
    assert_eq!(dom_6.severity, ValidationSeverity::Warning);
}

struct HandOverEvaluator;

impl ConstraintEvaluator for HandOverEvaluator {
    fn evaluate(&self, focus: &dyn Visitable, expr: &str) -> Result<bool, String> {
        let Some(md) = focus.as_any().downcast_ref::<MedicationDispense>() else {
            return Ok(true);
        };
        if !expr.starts_with("whenHandedOver.empty()") {
            return Ok(true);
        }
        let prepared = md.when_prepared().and_then(|d| d.value.as_ref());
        let handed_over = md.when_handed_over().and_then(|d| d.value.as_ref());
        Ok(match (prepared, handed_over) {
            (Some(p), Some(h)) => h.compare(p) != Some(Ordering::Less),
            _ => true,
        })
    }
}

#[test]
fn test_invariants_evaluated_by_constraint_evaluator() {
    let md = dispense_builder()
        .when_prepared(date_time("2024-03-15T10:00:00Z"))
        .when_handed_over(date_time("2024-03-15T09:00:00Z"))
        .build()
        .unwrap();

    let issues = check_constraints(&md, &HandOverEvaluator);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path, "MedicationDispense");
    assert_eq!(issues[0].kind, IssueKind::Constraint("mdd-1"));
    assert_eq!(issues[0].severity, ValidationSeverity::Error);

    let fixed = md
        .to_builder()
        .when_handed_over(date_time("2024-03-15T11:00:00Z"))
        .build()
        .unwrap();
    assert!(check_constraints(&fixed, &HandOverEvaluator).is_empty());
}

#[test]
fn test_uri_and_string_limits_on_built_elements() {
    let err = Extension::builder()
        .url("http://example.org/fhir/StructureDefinition/has space")
        .value(Boolean::from(true))
        .build()
        .unwrap_err();
    assert!(err.has_issue_at("Extension.url"));
    assert!(err.has_kind(IssueKind::InvalidValue));

    let err = Reference::builder()
        .reference("Patient/p1")
        .r#type("Pa tient")
        .build()
        .unwrap_err();
    assert!(err.has_issue_at("Reference.type"));

    let limit = atrius_fhir_support::validation_support::MAX_STRING_LENGTH;
    let err = CodeableConcept::builder()
        .text("x".repeat(limit + 1).as_str())
        .build()
        .unwrap_err();
    assert!(err.has_issue_at("CodeableConcept.text"));
    assert!(CodeableConcept::builder()
        .text("x".repeat(limit).as_str())
        .build()
        .is_ok());
}
