use atrius_fhir_support::validation_support::ReferenceTarget;
use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Reference to a resource or a concept
///
/// A reference to a resource (by instance), or instead, a reference to a concept
/// defined in a terminology or ontology (by class).
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
pub struct CodeableReference {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Reference to a concept (by class)
    #[fhir(summary)]
    concept: Option<CodeableConcept>,
    /// Reference to a resource (by instance)
    #[fhir(summary)]
    reference: Option<Reference>,
}

impl ReferenceTarget for CodeableReference {
    fn literal_reference(&self) -> Option<&str> {
        self.reference.as_ref().and_then(|r| r.literal_reference())
    }

    fn declared_type(&self) -> Option<&str> {
        self.reference.as_ref().and_then(|r| r.declared_type())
    }
}

impl From<CodeableConcept> for CodeableReference {
    fn from(concept: CodeableConcept) -> Self {
        CodeableReference {
            id: None,
            extension: Vec::new(),
            concept: Some(concept),
            reference: None,
        }
    }
}

impl From<Reference> for CodeableReference {
    fn from(reference: Reference) -> Self {
        CodeableReference {
            id: None,
            extension: Vec::new(),
            concept: None,
            reference: Some(reference),
        }
    }
}
