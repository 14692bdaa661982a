use atrius_fhir_lib::r5::{
    self, CodeableConcept, CodeableReference, Coding, Date, DateTime, EpisodeOfCare,
    EpisodeOfCareStatus, EpisodeOfCareStatusHistory, FinancialResourceStatus,
    ManufacturedItemDefinition, ManufacturedItemDefinitionComponent,
    ManufacturedItemDefinitionProperty, ManufacturedItemDefinitionPropertyValue,
    MedicationDispense, MedicationDispensePerformer, MedicationDispenseStatus, Money,
    NutritionProduct, NutritionProductCharacteristic, NutritionProductCharacteristicValue,
    NutritionProductStatus, PaymentReconciliation, PaymentReconciliationAllocation,
    PaymentReconciliationAllocationTargetItem, Period, PositiveInt, PublicationStatus, Quantity,
    Reference, Resource, ResourceType,
};
use atrius_fhir_lib::{IssueKind, ModelConfig, Validate};

fn date_time(s: &str) -> DateTime {
    s.parse().unwrap()
}

fn money(amount: &str) -> Money {
    Money::builder()
        .value(amount.parse::<r5::Decimal>().unwrap())
        .currency("USD")
        .build()
        .unwrap()
}

fn dispense() -> MedicationDispense {
    MedicationDispense::builder()
        .id("md-1")
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

#[test]
fn test_episode_of_care_with_status_history() {
    let history = EpisodeOfCareStatusHistory::builder()
        .status(EpisodeOfCareStatus::Planned)
        .period(
            Period::builder()
                .start(date_time("2024-01-01"))
                .end(date_time("2024-01-14"))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    let episode = EpisodeOfCare::builder()
        .status(EpisodeOfCareStatus::Active)
        .status_history(history)
        .patient(Reference::to("Patient/p1"))
        .managing_organization(Reference::to("Organization/hospital"))
        .build()
        .unwrap();

    assert_eq!(episode.status().value, Some(EpisodeOfCareStatus::Active));
    assert_eq!(episode.status_history().len(), 1);
    assert_eq!(episode.patient().target_type(), Some("Patient"));
    assert!(episode.validate().is_ok());
}

#[test]
fn test_medication_dispense_accessors() {
    let md = dispense();
    assert_eq!(md.id().and_then(|id| id.value.as_deref()), Some("md-1"));
    assert_eq!(md.status().value, Some(MedicationDispenseStatus::Completed));
    assert_eq!(md.performer()[0].actor().target_type(), Some("Practitioner"));
    assert!(md.when_prepared().is_none());
}

#[test]
fn test_medication_dispense_reports_all_missing_elements() {
    let err = MedicationDispense::builder()
        .id("md-2")
        .build()
        .unwrap_err();
    for path in [
        "MedicationDispense.status",
        "MedicationDispense.medication",
        "MedicationDispense.subject",
    ] {
        assert!(err.has_issue_at(path), "missing issue at {path}");
    }
    assert_eq!(err.issues().len(), 3);
    assert!(err.has_kind(IssueKind::Required));
}

#[test]
fn test_manufactured_item_definition_with_nested_components() {
    let inner = ManufacturedItemDefinitionComponent::builder()
        .r#type(CodeableConcept::from_text("coating"))
        .amount(Quantity::ucum(5, "mg"))
        .build()
        .unwrap();
    let outer = ManufacturedItemDefinitionComponent::builder()
        .r#type(CodeableConcept::from_text("core"))
        .component(inner)
        .build()
        .unwrap();

    let item = ManufacturedItemDefinition::builder()
        .status(PublicationStatus::Active)
        .manufactured_dose_form(CodeableConcept::from(Coding::from_system_code(
            "http://example.org/dose-forms",
            "tablet",
        )))
        .property(
            ManufacturedItemDefinitionProperty::builder()
                .r#type(CodeableConcept::from_text("image"))
                .value(Reference::to("Binary/img-1"))
                .build()
                .unwrap(),
        )
        .component(outer)
        .build()
        .unwrap();

    assert_eq!(item.component()[0].component()[0].amount().len(), 1);
    assert!(item
        .manufactured_dose_form()
        .has_coding("http://example.org/dose-forms", "tablet"));
    assert!(matches!(
        item.property()[0].value(),
        Some(ManufacturedItemDefinitionPropertyValue::Reference(_))
    ));
    assert!(item.validate().is_ok());
}

#[test]
fn test_nutrition_product_characteristic_requires_value() {
    let characteristic = NutritionProductCharacteristic::builder()
        .r#type(CodeableConcept::from_text("texture"))
        .value(r5::String::from("crunchy"))
        .build()
        .unwrap();
    assert!(matches!(
        characteristic.value(),
        NutritionProductCharacteristicValue::String(_)
    ));

    let err = NutritionProductCharacteristic::builder()
        .r#type(CodeableConcept::from_text("texture"))
        .build()
        .unwrap_err();
    assert!(err.has_issue_at("NutritionProduct.characteristic.value"));

    let product = NutritionProduct::builder()
        .status(NutritionProductStatus::Active)
        .characteristic(characteristic)
        .known_allergen(CodeableReference::from(CodeableConcept::from_text("peanut")))
        .build()
        .unwrap();
    assert_eq!(product.characteristic().len(), 1);
}

#[test]
fn test_payment_reconciliation() {
    let allocation = PaymentReconciliationAllocation::builder()
        .target(Reference::to("Invoice/inv-1"))
        .target_item(PositiveInt::from(2))
        .amount(money("40.00"))
        .build()
        .unwrap();

    let payment = PaymentReconciliation::builder()
        .r#type(CodeableConcept::from_text("payment"))
        .status(FinancialResourceStatus::Active)
        .created(date_time("2024-03-15T10:30:00Z"))
        .date("2024-03-15".parse::<Date>().unwrap())
        .amount(money("40.00"))
        .allocation(allocation)
        .build()
        .unwrap();

    assert_eq!(
        payment.amount().value().map(|v| v.value.as_ref().map(|d| d.original_string())),
        Some(Some("40.00"))
    );
    assert!(matches!(
        payment.allocation()[0].target_item(),
        Some(PaymentReconciliationAllocationTargetItem::PositiveInt(_))
    ));
}

#[test]
fn test_to_builder_copies_every_element() {
    let md = dispense();
    let updated = md
        .to_builder()
        .status(MedicationDispenseStatus::EnteredInError)
        .build()
        .unwrap();
    assert_eq!(updated.subject(), md.subject());
    assert_eq!(updated.performer(), md.performer());
    assert_ne!(updated, md);
    assert_eq!(md.to_builder().build().unwrap(), md);
}

#[test]
fn test_contained_resources() {
    let product = NutritionProduct::builder()
        .id("np1")
        .status(NutritionProductStatus::Active)
        .build()
        .unwrap();

    let episode = EpisodeOfCare::builder()
        .status(EpisodeOfCareStatus::Active)
        .patient(Reference::to("#p1"))
        .contained(product.clone())
        .build()
        .unwrap();

    let contained = &episode.contained()[0];
    assert_eq!(contained.resource_type(), ResourceType::NutritionProduct);
    assert_eq!(contained.id(), Some("np1"));
    assert_eq!(*contained, Resource::from(product));
}

#[test]
fn test_contained_resources_are_validated_in_place() {
    let product = NutritionProduct::builder()
        .id("not a valid id")
        .status(NutritionProductStatus::Active)
        .build_with(&ModelConfig::lenient())
        .unwrap();

    let builder = EpisodeOfCare::builder()
        .status(EpisodeOfCareStatus::Active)
        .patient(Reference::to("Patient/p1"))
        .contained(product);

    let episode = builder.clone().build_with(&ModelConfig::lenient()).unwrap();
    let err = episode.validate().unwrap_err();
    assert!(err.has_issue_at("EpisodeOfCare.contained[0].id"));
    assert!(err.has_kind(IssueKind::InvalidValue));

    assert_eq!(builder.build().unwrap_err(), err);
}

#[test]
fn test_resource_enum_dispatch() {
    let resource = Resource::from(dispense());
    assert_eq!(resource.resource_type(), ResourceType::MedicationDispense);
    assert_eq!(resource.resource_type().to_string(), "MedicationDispense");
    assert_eq!(resource.id(), Some("md-1"));
    assert!(resource.meta().is_none());
    assert!(resource.contained().is_empty());
}
