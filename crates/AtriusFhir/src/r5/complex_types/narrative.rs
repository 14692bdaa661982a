use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Human-readable summary of the resource (essential clinical and business information)
///
/// ```rust
/// use atrius_fhir_lib::r5::{Narrative, NarrativeStatus};
///
/// let text = Narrative::builder()
///     .status(NarrativeStatus::Generated)
///     .div(r#"<div xmlns="http://www.w3.org/1999/xhtml">Dispensed 30 tablets</div>"#)
///     .build()
///     .unwrap();
/// assert_eq!(text.status().value, Some(NarrativeStatus::Generated));
///
/// assert!(Narrative::builder()
///     .status(NarrativeStatus::Generated)
///     .div("<p>no div</p>")
///     .build()
///     .is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir_invariant(
    key = "txt-1",
    severity = "error",
    human = "The narrative SHALL contain only the basic html formatting elements and attributes described in chapters 7-11 (except section 4 of chapter 9) and 15 of the HTML 4.0 standard, <a> elements (either name or href), images and internally contained style attributes",
    expr = "htmlChecks()",
    path = "Narrative.div"
)]
#[fhir_invariant(
    key = "txt-2",
    severity = "error",
    human = "The narrative SHALL have some non-whitespace content",
    expr = "htmlChecks()",
    path = "Narrative.div"
)]
pub struct Narrative {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// generated | extensions | additional | empty
    status: Code<NarrativeStatus>,
    /// Limited xhtml content
    div: Xhtml,
}
