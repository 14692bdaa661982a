use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Set of values bounded by low and high
///
/// A set of ordered Quantities defined by a low and high limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir_invariant(
    key = "rng-2",
    severity = "error",
    human = "If present, low SHALL have a lower value than high",
    expr = "low.empty() or high.empty() or (low <= high)",
    path = "Range"
)]
pub struct Range {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Low limit
    #[fhir(summary)]
    low: Option<SimpleQuantity>,
    /// High limit
    #[fhir(summary)]
    high: Option<SimpleQuantity>,
}
