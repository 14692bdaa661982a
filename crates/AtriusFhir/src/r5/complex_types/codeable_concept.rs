use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Concept - reference to a terminology or just  text
///
/// A concept that may be defined by a formal reference to a terminology or ontology or
/// may be provided by text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
pub struct CodeableConcept {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Code defined by a terminology system
    #[fhir(summary)]
    coding: Vec<Coding>,
    /// Plain text representation of the concept
    #[fhir(summary)]
    text: Option<String>,
}

impl CodeableConcept {
    /// A concept carrying a single coding.
    pub fn from_coding(coding: Coding) -> Self {
        CodeableConcept {
            id: None,
            extension: Vec::new(),
            coding: vec![coding],
            text: None,
        }
    }

    /// A text-only concept.
    pub fn from_text(text: &str) -> Self {
        CodeableConcept {
            id: None,
            extension: Vec::new(),
            coding: Vec::new(),
            text: Some(String::from(text)),
        }
    }

    /// Returns `true` if any coding matches `system` and `code`.
    pub fn has_coding(&self, system: &str, code: &str) -> bool {
        self.coding.iter().any(|c| {
            c.system().and_then(|s| s.value.as_deref()) == Some(system)
                && c.code().and_then(|c| c.value.as_deref()) == Some(code)
        })
    }
}

impl From<Coding> for CodeableConcept {
    fn from(coding: Coding) -> Self {
        CodeableConcept::from_coding(coding)
    }
}
