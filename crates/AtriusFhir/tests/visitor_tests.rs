use atrius_fhir_lib::r5::{
    CodeableConcept, ManufacturedItemDefinition, ManufacturedItemDefinitionProperty,
    ManufacturedItemDefinitionPropertyValue, MedicationDispense, MedicationDispensePerformer,
    MedicationDispenseStatus, PaymentReconciliationAllocation,
    PaymentReconciliationAllocationTargetItem, PublicationStatus, Reference,
};
use atrius_fhir_support::visitor::walk;
use atrius_fhir_lib::{
    ChoiceElement, CollectingVisitor, PathAwareVisitor, PathVisit, PrimitiveValue, TypeInfo,
    Visitable,
};

#[derive(Default)]
struct PathLog {
    nodes: Vec<(String, &'static str)>,
    values: Vec<(String, String)>,
}

impl PathVisit for PathLog {
    fn visit_node(&mut self, path: &str, node: &dyn Visitable) {
        self.nodes.push((path.to_string(), node.type_name()));
    }

    fn visit_value(&mut self, path: &str, value: PrimitiveValue<'_>) {
        if let Some(text) = value.as_str() {
            self.values.push((path.to_string(), text.to_string()));
        }
    }
}

fn item() -> ManufacturedItemDefinition {
    ManufacturedItemDefinition::builder()
        .status(PublicationStatus::Active)
        .manufactured_dose_form(CodeableConcept::from_text("tablet"))
        .property(
            ManufacturedItemDefinitionProperty::builder()
                .r#type(CodeableConcept::from_text("image"))
                .value(Reference::to("Binary/img-1"))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

fn dispense() -> MedicationDispense {
    MedicationDispense::builder()
        .status(MedicationDispenseStatus::Completed)
        .medication(Reference::to("Medication/m1"))
        .subject(Reference::to("Patient/p1"))
        .performer(
            MedicationDispensePerformer::builder()
                .actor(Reference::to("Practitioner/pr1"))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

fn log_paths(root: &dyn Visitable) -> PathLog {
    let mut visitor = PathAwareVisitor::new(PathLog::default());
    walk(root, &mut visitor);
    visitor.into_inner()
}

#[test]
fn test_choice_elements_are_visited_under_base_name() {
    let log = log_paths(&item());
    assert!(log.nodes.contains(&(
        "ManufacturedItemDefinition.property[0].value".to_string(),
        "Reference"
    )));
    assert!(log.values.contains(&(
        "ManufacturedItemDefinition.property[0].value.reference".to_string(),
        "Binary/img-1".to_string()
    )));
}

#[test]
fn test_visit_order_follows_element_order() {
    let log = log_paths(&item());
    let paths: Vec<&str> = log.nodes.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(paths[0], "ManufacturedItemDefinition");
    let status = paths
        .iter()
        .position(|p| *p == "ManufacturedItemDefinition.status")
        .unwrap();
    let dose_form = paths
        .iter()
        .position(|p| *p == "ManufacturedItemDefinition.manufacturedDoseForm")
        .unwrap();
    let property = paths
        .iter()
        .position(|p| *p == "ManufacturedItemDefinition.property[0]")
        .unwrap();
    assert!(status < dose_form && dose_form < property);
    assert!(log.values.contains(&(
        "ManufacturedItemDefinition.status".to_string(),
        "active".to_string()
    )));
}

#[test]
fn test_collect_references() {
    let mut visitor = CollectingVisitor::<Reference>::new();
    walk(&dispense(), &mut visitor);
    let targets: Vec<_> = visitor
        .items()
        .iter()
        .filter_map(|r| r.target_type())
        .collect();
    assert_eq!(targets, vec!["Medication", "Patient", "Practitioner"]);
}

#[test]
fn test_type_info() {
    assert_eq!(<MedicationDispense as TypeInfo>::type_name(), "MedicationDispense");
    assert_eq!(
        <ManufacturedItemDefinitionProperty as TypeInfo>::type_name(),
        "ManufacturedItemDefinition.property"
    );
    assert_eq!(
        <ManufacturedItemDefinitionProperty as TypeInfo>::choice_elements(),
        &["value"]
    );

    let elements = <MedicationDispense as TypeInfo>::element_names();
    assert!(elements.contains(&"whenHandedOver"));
    assert!(elements.contains(&"renderedDosageInstruction"));
    assert!(elements.contains(&"type"));

    let summary = <MedicationDispense as TypeInfo>::summary_elements();
    assert!(summary.contains(&"status"));
    assert!(!summary.contains(&"performer"));
}

#[test]
fn test_choice_field_names() {
    let value = ManufacturedItemDefinitionPropertyValue::from(Reference::to("Binary/b1"));
    assert_eq!(value.field_name(), "valueReference");
    assert_eq!(
        PaymentReconciliationAllocationTargetItem::base_name(),
        "targetItem"
    );
    assert!(
        PaymentReconciliationAllocationTargetItem::possible_field_names()
            .contains(&"targetItemPositiveInt")
    );

    let allocation = PaymentReconciliationAllocation::builder()
        .target_item(atrius_fhir_lib::r5::String::from("INV-1/line-2"))
        .build()
        .unwrap();
    assert_eq!(
        allocation.target_item().map(|t| t.field_name()),
        Some("targetItemString")
    );
}
