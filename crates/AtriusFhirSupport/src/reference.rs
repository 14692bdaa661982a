//! Literal reference parsing and the R5 resource type registry.

use once_cell::sync::Lazy;
use regex::Regex;

/// Every resource type defined by FHIR R5, sorted for binary search.
pub const R5_RESOURCE_TYPES: &[&str] = &[
    "Account",
    "ActivityDefinition",
    "ActorDefinition",
    "AdministrableProductDefinition",
    "AdverseEvent",
    "AllergyIntolerance",
    "Appointment",
    "AppointmentResponse",
    "ArtifactAssessment",
    "AuditEvent",
    "Basic",
    "Binary",
    "BiologicallyDerivedProduct",
    "BiologicallyDerivedProductDispense",
    "BodyStructure",
    "Bundle",
    "CapabilityStatement",
    "CarePlan",
    "CareTeam",
    "ChargeItem",
    "ChargeItemDefinition",
    "Citation",
    "Claim",
    "ClaimResponse",
    "ClinicalImpression",
    "ClinicalUseDefinition",
    "CodeSystem",
    "Communication",
    "CommunicationRequest",
    "CompartmentDefinition",
    "Composition",
    "ConceptMap",
    "Condition",
    "ConditionDefinition",
    "Consent",
    "Contract",
    "Coverage",
    "CoverageEligibilityRequest",
    "CoverageEligibilityResponse",
    "DetectedIssue",
    "Device",
    "DeviceAssociation",
    "DeviceDefinition",
    "DeviceDispense",
    "DeviceMetric",
    "DeviceRequest",
    "DeviceUsage",
    "DiagnosticReport",
    "DocumentReference",
    "Encounter",
    "EncounterHistory",
    "Endpoint",
    "EnrollmentRequest",
    "EnrollmentResponse",
    "EpisodeOfCare",
    "EventDefinition",
    "Evidence",
    "EvidenceReport",
    "EvidenceVariable",
    "ExampleScenario",
    "ExplanationOfBenefit",
    "FamilyMemberHistory",
    "Flag",
    "FormularyItem",
    "GenomicStudy",
    "Goal",
    "GraphDefinition",
    "Group",
    "GuidanceResponse",
    "HealthcareService",
    "ImagingSelection",
    "ImagingStudy",
    "Immunization",
    "ImmunizationEvaluation",
    "ImmunizationRecommendation",
    "ImplementationGuide",
    "Ingredient",
    "InsurancePlan",
    "InventoryItem",
    "InventoryReport",
    "Invoice",
    "Library",
    "Linkage",
    "List",
    "Location",
    "ManufacturedItemDefinition",
    "Measure",
    "MeasureReport",
    "Medication",
    "MedicationAdministration",
    "MedicationDispense",
    "MedicationKnowledge",
    "MedicationRequest",
    "MedicationStatement",
    "MedicinalProductDefinition",
    "MessageDefinition",
    "MessageHeader",
    "MolecularSequence",
    "NamingSystem",
    "NutritionIntake",
    "NutritionOrder",
    "NutritionProduct",
    "Observation",
    "ObservationDefinition",
    "OperationDefinition",
    "OperationOutcome",
    "Organization",
    "OrganizationAffiliation",
    "PackagedProductDefinition",
    "Parameters",
    "Patient",
    "PaymentNotice",
    "PaymentReconciliation",
    "Permission",
    "Person",
    "PlanDefinition",
    "Practitioner",
    "PractitionerRole",
    "Procedure",
    "Provenance",
    "Questionnaire",
    "QuestionnaireResponse",
    "RegulatedAuthorization",
    "RelatedPerson",
    "RequestOrchestration",
    "Requirements",
    "ResearchStudy",
    "ResearchSubject",
    "RiskAssessment",
    "Schedule",
    "SearchParameter",
    "ServiceRequest",
    "Slot",
    "Specimen",
    "SpecimenDefinition",
    "StructureDefinition",
    "StructureMap",
    "Subscription",
    "SubscriptionStatus",
    "SubscriptionTopic",
    "Substance",
    "SubstanceDefinition",
    "SubstanceNucleicAcid",
    "SubstancePolymer",
    "SubstanceProtein",
    "SubstanceReferenceInformation",
    "SubstanceSourceMaterial",
    "SupplyDelivery",
    "SupplyRequest",
    "Task",
    "TerminologyCapabilities",
    "TestPlan",
    "TestReport",
    "TestScript",
    "Transport",
    "ValueSet",
    "VerificationResult",
    "VisionPrescription",
];

// [base/]Type/id[/_history/vid]
static LITERAL_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((http|https)://([A-Za-z0-9\-\\.:%$]*/)+)?([A-Z][A-Za-z]+)/[A-Za-z0-9\-.]{1,64}(/_history/[A-Za-z0-9\-.]{1,64})?$",
    )
    .expect("literal reference pattern")
});

/// Returns `true` if `name` is an R5 resource type.
pub fn is_resource_type(name: &str) -> bool {
    R5_RESOURCE_TYPES.binary_search(&name).is_ok()
}

/// A reference value split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralReference<'a> {
    /// `#id` pointing at a contained resource.
    Contained(&'a str),
    /// `urn:uuid:` / `urn:oid:` style identifiers resolved within a bundle.
    Urn(&'a str),
    /// `[base/]Type/id[/_history/vid]` with a known resource type.
    Resource {
        resource_type: &'a str,
        id: &'a str,
        version: Option<&'a str>,
    },
    /// Anything else (logical URLs, unknown types).
    Other(&'a str),
}

/// Classifies a `Reference.reference` value. Conditional references lose their query.
///
/// ```rust
/// use atrius_fhir_support::reference::{parse_literal, LiteralReference};
///
/// assert_eq!(
///     parse_literal("http://example.org/fhir/Patient/123/_history/2"),
///     LiteralReference::Resource { resource_type: "Patient", id: "123", version: Some("2") }
/// );
/// assert_eq!(parse_literal("#med1"), LiteralReference::Contained("med1"));
/// ```
pub fn parse_literal(reference: &str) -> LiteralReference<'_> {
    if let Some(local) = reference.strip_prefix('#') {
        return LiteralReference::Contained(local);
    }
    if reference.starts_with("urn:") {
        return LiteralReference::Urn(reference);
    }
    let path = reference
        .split_once('?')
        .map_or(reference, |(head, _query)| head);

    let Some(captures) = LITERAL_REFERENCE.captures(path) else {
        return LiteralReference::Other(reference);
    };
    let Some(resource_type) = captures.get(4).map(|m| m.as_str()) else {
        return LiteralReference::Other(reference);
    };
    if !is_resource_type(resource_type) {
        return LiteralReference::Other(reference);
    }

    let type_start = captures.get(4).map_or(0, |m| m.start());
    let rest = &path[type_start + resource_type.len() + 1..];
    let (id, version) = match rest.split_once("/_history/") {
        Some((id, version)) => (id, Some(version)),
        None => (rest, None),
    };
    LiteralReference::Resource {
        resource_type,
        id,
        version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_types_are_sorted() {
        assert!(R5_RESOURCE_TYPES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn relative_reference() {
        assert_eq!(
            parse_literal("Organization/org-1"),
            LiteralReference::Resource {
                resource_type: "Organization",
                id: "org-1",
                version: None
            }
        );
    }

    #[test]
    fn conditional_reference_drops_query() {
        assert!(matches!(
            parse_literal("Patient/abc?identifier=http://x|1"),
            LiteralReference::Resource { resource_type: "Patient", id: "abc", .. }
        ));
    }

    #[test]
    fn unknown_type_is_other() {
        assert_eq!(parse_literal("Widget/1"), LiteralReference::Other("Widget/1"));
    }
}
