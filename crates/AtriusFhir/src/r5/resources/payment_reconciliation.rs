use atrius_macros::{FhirBuilder, FhirChoice, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Choice of types for the targetItem\[x\] field in PaymentReconciliationAllocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirChoice)]
#[fhir(choice = "targetItem")]
pub enum PaymentReconciliationAllocationTargetItem {
    /// Variant accepting the String type.
    String(String),
    /// Variant accepting the Identifier type.
    Identifier(Identifier),
    /// Variant accepting the PositiveInt type.
    PositiveInt(PositiveInt),
}

/// Settlement particulars
///
/// Distribution of the payment amount for a previously acknowledged payable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "PaymentReconciliation.allocation")]
pub struct PaymentReconciliationAllocation {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// Business identifier of the payment detail
    identifier: Option<Identifier>,
    /// Business identifier of the prior payment detail
    predecessor: Option<Identifier>,
    /// Subject of the payment
    #[fhir(reference = "Claim|Account|Invoice|ChargeItem|Encounter|Contract")]
    target: Option<Reference>,
    /// Sub-element of the subject
    #[fhir(choice)]
    target_item: Option<PaymentReconciliationAllocationTargetItem>,
    /// Applied-to encounter
    #[fhir(reference = "Encounter")]
    encounter: Option<Reference>,
    /// Applied-to account
    #[fhir(reference = "Account")]
    account: Option<Reference>,
    /// Category of payment
    r#type: Option<CodeableConcept>,
    /// Submitter of the request
    #[fhir(reference = "Practitioner|PractitionerRole|Organization")]
    submitter: Option<Reference>,
    /// Response committing to a payment
    #[fhir(reference = "ClaimResponse")]
    response: Option<Reference>,
    /// Date of commitment to pay
    date: Option<Date>,
    /// Contact for the response
    #[fhir(reference = "PractitionerRole")]
    responsible: Option<Reference>,
    /// Recipient of the payment
    #[fhir(reference = "Practitioner|PractitionerRole|Organization")]
    payee: Option<Reference>,
    /// Amount allocated to this payable
    amount: Option<Money>,
}

/// Note concerning processing
///
/// A note that describes or explains the processing in a human readable form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "PaymentReconciliation.processNote")]
pub struct PaymentReconciliationProcessNote {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// display | print | printoper
    r#type: Option<Code<NoteType>>,
    /// Note explanatory text
    text: Option<String>,
}

/// PaymentReconciliation resource
///
/// This resource provides the details including amount of a payment and allocates the
/// payment items being paid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(resource)]
#[fhir_invariant(key = "dom-2", severity = "error", human = "If the resource is contained in another resource, it SHALL NOT contain nested Resources", expr = "contained.contained.empty()", path = "PaymentReconciliation")]
#[fhir_invariant(key = "dom-3", severity = "error", human = "If the resource is contained in another resource, it SHALL be referred to from elsewhere in the resource or SHALL refer to the containing resource", expr = "contained.where((('#'+id in (%resource.descendants().reference | %resource.descendants().ofType(canonical) | %resource.descendants().ofType(uri) | %resource.descendants().ofType(url))) or descendants().where(reference = '#').exists() or descendants().where(ofType(canonical) = '#').exists() or descendants().where(ofType(canonical) = '#').exists()).not()).trace('unmatched', id).empty()", path = "PaymentReconciliation")]
#[fhir_invariant(key = "dom-4", severity = "error", human = "If a resource is contained in another resource, it SHALL NOT have a meta.versionId or a meta.lastUpdated", expr = "contained.meta.versionId.empty() and contained.meta.lastUpdated.empty()", path = "PaymentReconciliation")]
#[fhir_invariant(key = "dom-5", severity = "error", human = "If a resource is contained in another resource, it SHALL NOT have a security label", expr = "contained.meta.security.empty()", path = "PaymentReconciliation")]
#[fhir_invariant(key = "dom-6", severity = "warning", human = "A resource should have narrative for robust management", expr = "text.`div`.exists()", path = "PaymentReconciliation")]
pub struct PaymentReconciliation {
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
    /// Business Identifier for a payment reconciliation
    #[fhir(summary)]
    identifier: Vec<Identifier>,
    /// Category of payment
    #[fhir(summary)]
    r#type: CodeableConcept,
    /// active | cancelled | draft | entered-in-error
    #[fhir(summary)]
    status: Code<FinancialResourceStatus>,
    /// Workflow originating payment
    #[fhir(summary)]
    kind: Option<CodeableConcept>,
    /// Period covered
    #[fhir(summary)]
    period: Option<Period>,
    /// Creation date
    #[fhir(summary)]
    created: DateTime,
    /// Who entered the payment
    #[fhir(reference = "Practitioner|PractitionerRole|Organization|Patient|RelatedPerson")]
    enterer: Option<Reference>,
    /// Nature of the source
    issuer_type: Option<CodeableConcept>,
    /// Party generating payment
    #[fhir(summary, reference = "Organization|Patient|RelatedPerson")]
    payment_issuer: Option<Reference>,
    /// Reference to requesting resource
    #[fhir(reference = "Task")]
    request: Option<Reference>,
    /// Responsible practitioner
    #[fhir(reference = "Practitioner|PractitionerRole|Organization")]
    requestor: Option<Reference>,
    /// queued | complete | error | partial
    #[fhir(summary)]
    outcome: Option<Code<PaymentOutcome>>,
    /// Disposition message
    disposition: Option<String>,
    /// When payment issued
    #[fhir(summary)]
    date: Date,
    /// Where payment collected
    #[fhir(reference = "Location")]
    location: Option<Reference>,
    /// Payment instrument
    method: Option<CodeableConcept>,
    /// Type of card
    card_brand: Option<String>,
    /// Digits for verification
    account_number: Option<String>,
    /// Expiration year-month
    expiration_date: Option<Date>,
    /// Processor name
    processor: Option<String>,
    /// Check number or payment reference
    reference_number: Option<String>,
    /// Authorization number
    authorization: Option<String>,
    /// Amount offered by the issuer
    tendered_amount: Option<Money>,
    /// Amount returned by the receiver
    returned_amount: Option<Money>,
    /// Total amount of Payment
    #[fhir(summary)]
    amount: Money,
    /// Business identifier for the payment
    #[fhir(summary)]
    payment_identifier: Option<Identifier>,
    /// Settlement particulars
    allocation: Vec<PaymentReconciliationAllocation>,
    /// Printed form identifier
    form_code: Option<CodeableConcept>,
    /// Note concerning processing
    process_note: Vec<PaymentReconciliationProcessNote>,
}
