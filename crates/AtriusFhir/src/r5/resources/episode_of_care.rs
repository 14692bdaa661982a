use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Past list of status codes (the current status may be included to cover the start date of the status)
///
/// The history of statuses that the EpisodeOfCare has been through (without requiring
/// processing the history of the resource).
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "EpisodeOfCare.statusHistory")]
pub struct EpisodeOfCareStatusHistory {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// planned | waitlist | active | onhold | finished | cancelled | entered-in-error
    status: Code<EpisodeOfCareStatus>,
    /// Duration the EpisodeOfCare was in the specified status
    period: Period,
}

/// The list of medical reasons that are expected to be addressed during the episode of care
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "EpisodeOfCare.reason")]
pub struct EpisodeOfCareReason {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// What the reason value should be used for/as
    #[fhir(summary)]
    r#use: Option<CodeableConcept>,
    /// Medical reason to be addressed
    #[fhir(summary, reference = "Condition|Procedure|Observation|HealthcareService")]
    value: Vec<CodeableReference>,
}

/// The list of medical conditions that were addressed during the episode of care
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "EpisodeOfCare.diagnosis")]
pub struct EpisodeOfCareDiagnosis {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// The medical condition that was addressed during the episode of care
    #[fhir(summary, reference = "Condition")]
    condition: Vec<CodeableReference>,
    /// Role that this diagnosis has within the episode of care (e.g. admission, billing, discharge …)
    #[fhir(summary)]
    r#use: Option<CodeableConcept>,
}

/// An association of a Patient with an Organization and  Healthcare Provider(s) for a period of time that the Organization assumes some level of responsibility
///
/// An association between a patient and an organization / healthcare provider(s) during
/// which time encounters may occur. The managing organization assumes a level of
/// responsibility for the patient during this time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(resource)]
#[fhir_invariant(key = "dom-2", severity = "error", human = "If the resource is contained in another resource, it SHALL NOT contain nested Resources", expr = "contained.contained.empty()", path = "EpisodeOfCare")]
#[fhir_invariant(key = "dom-3", severity = "error", human = "If the resource is contained in another resource, it SHALL be referred to from elsewhere in the resource or SHALL refer to the containing resource", expr = "contained.where((('#'+id in (%resource.descendants().reference | %resource.descendants().ofType(canonical) | %resource.descendants().ofType(uri) | %resource.descendants().ofType(url))) or descendants().where(reference = '#').exists() or descendants().where(ofType(canonical) = '#').exists() or descendants().where(ofType(canonical) = '#').exists()).not()).trace('unmatched', id).empty()", path = "EpisodeOfCare")]
#[fhir_invariant(key = "dom-4", severity = "error", human = "If a resource is contained in another resource, it SHALL NOT have a meta.versionId or a meta.lastUpdated", expr = "contained.meta.versionId.empty() and contained.meta.lastUpdated.empty()", path = "EpisodeOfCare")]
#[fhir_invariant(key = "dom-5", severity = "error", human = "If a resource is contained in another resource, it SHALL NOT have a security label", expr = "contained.meta.security.empty()", path = "EpisodeOfCare")]
#[fhir_invariant(key = "dom-6", severity = "warning", human = "A resource should have narrative for robust management", expr = "text.`div`.exists()", path = "EpisodeOfCare")]
pub struct EpisodeOfCare {
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
    /// Business Identifier(s) relevant for this EpisodeOfCare
    identifier: Vec<Identifier>,
    /// planned | waitlist | active | onhold | finished | cancelled | entered-in-error
    #[fhir(summary)]
    status: Code<EpisodeOfCareStatus>,
    /// Past list of status codes (the current status may be included to cover the start date of the status)
    status_history: Vec<EpisodeOfCareStatusHistory>,
    /// Type/class  - e.g. specialist referral, disease management
    #[fhir(summary)]
    r#type: Vec<CodeableConcept>,
    /// The list of medical reasons that are expected to be addressed during the episode of care
    #[fhir(summary)]
    reason: Vec<EpisodeOfCareReason>,
    /// The list of medical conditions that were addressed during the episode of care
    #[fhir(summary)]
    diagnosis: Vec<EpisodeOfCareDiagnosis>,
    /// The patient who is the focus of this episode of care
    #[fhir(summary, reference = "Patient")]
    patient: Reference,
    /// Organization that assumes responsibility for care coordination
    #[fhir(summary, reference = "Organization")]
    managing_organization: Option<Reference>,
    /// Interval during responsibility is assumed
    #[fhir(summary)]
    period: Option<Period>,
    /// Originating Referral Request(s)
    #[fhir(reference = "ServiceRequest")]
    referral_request: Vec<Reference>,
    /// Care manager/care coordinator for the patient
    #[fhir(reference = "Practitioner|PractitionerRole")]
    care_manager: Option<Reference>,
    /// Other practitioners facilitating this episode of care
    #[fhir(reference = "CareTeam")]
    care_team: Vec<Reference>,
    /// The set of accounts that may be used for billing for this EpisodeOfCare
    #[fhir(reference = "Account")]
    account: Vec<Reference>,
}
