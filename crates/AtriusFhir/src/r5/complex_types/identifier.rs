use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// An identifier intended for computation
///
/// An identifier - identifies some entity uniquely and unambiguously. Typically this is
/// used for business identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir_invariant(
    key = "ident-1",
    severity = "warning",
    human = "Identifier with no value has limited utility.  If communicating that an identifier value has been suppressed or missing, the value element SHOULD be present with an extension indicating the missing semantic - e.g. data-absent-reason",
    expr = "value.exists()",
    path = "Identifier"
)]
pub struct Identifier {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// usual | official | temp | secondary | old (If known)
    #[fhir(summary)]
    r#use: Option<Code<IdentifierUse>>,
    /// Description of identifier
    #[fhir(summary)]
    r#type: Option<CodeableConcept>,
    /// The namespace for the identifier value
    #[fhir(summary)]
    system: Option<Uri>,
    /// The value that is unique
    #[fhir(summary)]
    value: Option<String>,
    /// Time period when id is/was valid for use
    #[fhir(summary)]
    period: Option<Period>,
    /// Organization that issued id (may be just text)
    #[fhir(summary, reference = "Organization")]
    assigner: Option<Box<Reference>>,
}
