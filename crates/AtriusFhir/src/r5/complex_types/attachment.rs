use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Content in a format defined elsewhere
///
/// For referring to data content defined in other formats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir_invariant(
    key = "att-1",
    severity = "error",
    human = "If the Attachment has data, it SHALL have a contentType",
    expr = "data.empty() or contentType.exists()",
    path = "Attachment"
)]
pub struct Attachment {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Mime type of the content, with charset etc.
    #[fhir(summary)]
    content_type: Option<Code>,
    /// Human language of the content (BCP-47)
    #[fhir(summary)]
    language: Option<Code>,
    /// Data inline, base64ed
    data: Option<Base64Binary>,
    /// Uri where the data can be found
    #[fhir(summary)]
    url: Option<Url>,
    /// Number of bytes of content (if url provided)
    #[fhir(summary)]
    size: Option<Integer64>,
    /// Hash of the data (sha-1, base64ed)
    #[fhir(summary)]
    hash: Option<Base64Binary>,
    /// Label to display in place of the data
    #[fhir(summary)]
    title: Option<String>,
    /// Date attachment was first created
    #[fhir(summary)]
    creation: Option<DateTime>,
    /// Height of the image in pixels (photo/video)
    height: Option<PositiveInt>,
    /// Width of the image in pixels (photo/video)
    width: Option<PositiveInt>,
    /// Number of frames if > 1 (photo)
    frames: Option<PositiveInt>,
    /// Length in seconds (audio / video)
    duration: Option<Decimal>,
    /// Number of printed pages
    pages: Option<PositiveInt>,
}
