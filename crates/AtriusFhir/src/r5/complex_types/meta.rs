use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Metadata about a resource
///
/// The metadata about a resource. This is content in the resource that is maintained by
/// the infrastructure. Changes to the content might not always be associated with
/// version changes to the resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
pub struct Meta {
    /// Unique id for inter-element referencing
    id: Option<std::string::String>,
    /// Additional content defined by implementations
    extension: Vec<Extension>,
    /// Version specific identifier
    #[fhir(summary)]
    version_id: Option<Id>,
    /// When the resource version last changed
    #[fhir(summary)]
    last_updated: Option<Instant>,
    /// Identifies where the resource comes from
    #[fhir(summary)]
    source: Option<Uri>,
    /// Profiles this resource claims to conform to
    #[fhir(summary)]
    profile: Vec<Canonical>,
    /// Security Labels applied to this resource
    #[fhir(summary)]
    security: Vec<Coding>,
    /// Tags applied to this resource
    #[fhir(summary)]
    tag: Vec<Coding>,
}
