use atrius_fhir_support::validation_support::ReferenceTarget;
use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// A reference from one resource to another
///
/// The allowed target types are declared by the element holding the reference and
/// checked when the containing value is built:
///
/// ```rust
/// use atrius_fhir_lib::r5::Reference;
///
/// let subject = Reference::builder()
///     .reference("Patient/pat-1")
///     .display("Peter Chalmers")
///     .build()
///     .unwrap();
/// assert_eq!(subject.target_type(), Some("Patient"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir_invariant(
    key = "ref-2",
    severity = "error",
    human = "At least one of reference, identifier and display SHALL be present (unless an extension is provided).",
    expr = "reference.exists() or identifier.exists() or display.exists() or extension.exists()",
    path = "Reference"
)]
pub struct Reference {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Literal reference, Relative, internal or absolute URL
    #[fhir(summary)]
    reference: Option<String>,
    /// Type the reference refers to (e.g. "Patient") - must be a resource in resources
    #[fhir(summary)]
    r#type: Option<Uri>,
    /// Logical reference, when literal reference is not known
    #[fhir(summary)]
    identifier: Option<Identifier>,
    /// Text alternative for the resource
    #[fhir(summary)]
    display: Option<String>,
}

impl Reference {
    /// A reference holding only a literal `reference` value.
    pub fn to(reference: &str) -> Self {
        Reference {
            id: None,
            extension: Vec::new(),
            reference: Some(String::from(reference)),
            r#type: None,
            identifier: None,
            display: None,
        }
    }

    /// The resource type this reference points at, from the literal reference or
    /// `Reference.type`.
    pub fn target_type(&self) -> Option<&str> {
        use atrius_fhir_support::reference::{parse_literal, LiteralReference};

        match self.literal_reference().map(parse_literal) {
            Some(LiteralReference::Resource { resource_type, .. }) => Some(resource_type),
            _ => self.declared_type(),
        }
    }
}

impl ReferenceTarget for Reference {
    fn literal_reference(&self) -> Option<&str> {
        self.reference.as_ref().and_then(|r| r.value.as_deref())
    }

    fn declared_type(&self) -> Option<&str> {
        self.r#type.as_ref().and_then(|t| t.value.as_deref())
    }
}
