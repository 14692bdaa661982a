use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Who performed event
///
/// Indicates who or what performed the event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "MedicationDispense.performer")]
pub struct MedicationDispensePerformer {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// Who performed the dispense and what they did
    function: Option<CodeableConcept>,
    /// Individual who was performing
    #[fhir(reference = "Practitioner|PractitionerRole|Organization|Patient|Device|RelatedPerson|CareTeam")]
    actor: Reference,
}

/// Whether a substitution was performed on the dispense
///
/// Indicates whether or not substitution was made as part of the dispense.  In some
/// cases, substitution will be expected but does not happen, in other cases substitution
/// is not expected but does happen.  This block explains what substitution did or did
/// not happen and why.  If nothing is specified, substitution was not done.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "MedicationDispense.substitution")]
pub struct MedicationDispenseSubstitution {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// Whether a substitution was or was not performed on the dispense
    was_substituted: Boolean,
    /// Code signifying whether a different drug was dispensed from what was prescribed
    r#type: Option<CodeableConcept>,
    /// Why was substitution made
    reason: Vec<CodeableConcept>,
    /// Who is responsible for the substitution
    #[fhir(reference = "Practitioner|PractitionerRole|Organization")]
    responsible_party: Option<Reference>,
}

/// Dispensing a medication to a named patient
///
/// Indicates that a medication product is to be or has been dispensed for a named person/patient.  This includes a description of the medication product (supply) provided and the instructions for administering the medication.  The medication dispense is the result of a pharmacy system responding to a medication order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(resource)]
#[fhir_invariant(key = "dom-2", severity = "error", human = "If the resource is contained in another resource, it SHALL NOT contain nested Resources", expr = "contained.contained.empty()", path = "MedicationDispense")]
#[fhir_invariant(key = "dom-3", severity = "error", human = "If the resource is contained in another resource, it SHALL be referred to from elsewhere in the resource or SHALL refer to the containing resource", expr = "contained.where((('#'+id in (%resource.descendants().reference | %resource.descendants().ofType(canonical) | %resource.descendants().ofType(uri) | %resource.descendants().ofType(url))) or descendants().where(reference = '#').exists() or descendants().where(ofType(canonical) = '#').exists() or descendants().where(ofType(canonical) = '#').exists()).not()).trace('unmatched', id).empty()", path = "MedicationDispense")]
#[fhir_invariant(key = "dom-4", severity = "error", human = "If a resource is contained in another resource, it SHALL NOT have a meta.versionId or a meta.lastUpdated", expr = "contained.meta.versionId.empty() and contained.meta.lastUpdated.empty()", path = "MedicationDispense")]
#[fhir_invariant(key = "dom-5", severity = "error", human = "If a resource is contained in another resource, it SHALL NOT have a security label", expr = "contained.meta.security.empty()", path = "MedicationDispense")]
#[fhir_invariant(key = "dom-6", severity = "warning", human = "A resource should have narrative for robust management", expr = "text.`div`.exists()", path = "MedicationDispense")]
#[fhir_invariant(key = "mdd-1", severity = "error", human = "whenHandedOver cannot be before whenPrepared", expr = "whenHandedOver.empty() or whenPrepared.empty() or whenHandedOver >= whenPrepared", path = "MedicationDispense")]
pub struct MedicationDispense {
    /// Logical id of this artifact
    #[fhir(summary)]
    id: Option<Id>,
    /// Metadata about the resource
    #[fhir(summary)]
    meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir(summary)]
    implicit_rules: Option<Uri>,
    /// Language of the resource content
    language: Option<Code>,
    /// Text summary of the resource, for human interpretation
    text: Option<Narrative>,
    /// Contained, inline Resources
    contained: Vec<Resource>,
    /// Additional content defined by implementations
    extension: Vec<Extension>,
    /// Extensions that cannot be ignored
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// External identifier
    #[fhir(summary)]
    identifier: Vec<Identifier>,
    /// Plan that is fulfilled by this dispense
    #[fhir(reference = "CarePlan")]
    based_on: Vec<Reference>,
    /// Event that dispense is part of
    #[fhir(reference = "Procedure|MedicationAdministration")]
    part_of: Vec<Reference>,
    /// preparation | in-progress | cancelled | on-hold | completed | entered-in-error | stopped | declined | unknown
    #[fhir(summary)]
    status: Code<MedicationDispenseStatus>,
    /// Why a dispense was not performed
    #[fhir(reference = "DetectedIssue")]
    not_performed_reason: Option<CodeableReference>,
    /// When the status changed
    status_changed: Option<DateTime>,
    /// Type of medication dispense
    category: Vec<CodeableConcept>,
    /// What medication was supplied
    #[fhir(summary, reference = "Medication")]
    medication: CodeableReference,
    /// Who the dispense is for
    #[fhir(summary, reference = "Patient|Group")]
    subject: Reference,
    /// Encounter associated with event
    #[fhir(reference = "Encounter")]
    encounter: Option<Reference>,
    /// Information that supports the dispensing of the medication
    #[fhir(reference = "Resource")]
    supporting_information: Vec<Reference>,
    /// Who performed event
    performer: Vec<MedicationDispensePerformer>,
    /// Where the dispense occurred
    #[fhir(reference = "Location")]
    location: Option<Reference>,
    /// Medication order that authorizes the dispense
    #[fhir(reference = "MedicationRequest")]
    authorizing_prescription: Vec<Reference>,
    /// Trial fill, partial fill, emergency fill, etc
    r#type: Option<CodeableConcept>,
    /// Amount dispensed
    quantity: Option<SimpleQuantity>,
    /// Amount of medication expressed as a timing amount
    days_supply: Option<SimpleQuantity>,
    /// When the recording of the dispense started
    #[fhir(summary)]
    recorded: Option<DateTime>,
    /// When product was packaged and reviewed
    #[fhir(summary)]
    when_prepared: Option<DateTime>,
    /// When product was given out
    when_handed_over: Option<DateTime>,
    /// Where the medication was/will be sent
    #[fhir(reference = "Location")]
    destination: Option<Reference>,
    /// Who collected the medication or where the medication was delivered
    #[fhir(reference = "Patient|Practitioner|RelatedPerson|Location|PractitionerRole")]
    receiver: Vec<Reference>,
    /// Information about the dispense
    note: Vec<Annotation>,
    /// Full representation of the dosage instructions
    rendered_dosage_instruction: Option<Markdown>,
    /// How the medication is to be used by the patient or administered by the caregiver
    dosage_instruction: Vec<Dosage>,
    /// Whether a substitution was performed on the dispense
    substitution: Option<MedicationDispenseSubstitution>,
    /// A list of relevant lifecycle events
    #[fhir(reference = "Provenance")]
    event_history: Vec<Reference>,
}
