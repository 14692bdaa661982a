use atrius_macros::{FhirBuilder, FhirChoice, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Choice of types for the author\[x\] field in Annotation
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirChoice)]
#[fhir(choice = "author")]
pub enum AnnotationAuthor {
    /// Variant accepting the Reference type.
    #[fhir(reference = "Practitioner|PractitionerRole|Patient|RelatedPerson|Organization")]
    Reference(Reference),
    /// Variant accepting the String type.
    String(String),
}

/// Text node with attribution
///
/// A  text note which also  contains information about who made the statement and when.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
pub struct Annotation {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Individual responsible for the annotation
    #[fhir(summary, choice)]
    author: Option<AnnotationAuthor>,
    /// When the annotation was made
    #[fhir(summary)]
    time: Option<DateTime>,
    /// The annotation  - text content (as markdown)
    #[fhir(summary)]
    text: Markdown,
}
