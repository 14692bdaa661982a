use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// A ratio of two Quantity values - a numerator and a denominator
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir_invariant(
    key = "rat-1",
    severity = "error",
    human = "Numerator and denominator SHALL both be present, or both are absent. If both are absent, there SHALL be some extension present",
    expr = "(numerator.exists() and denominator.exists()) or (numerator.empty() and denominator.empty() and extension.exists())",
    path = "Ratio"
)]
pub struct Ratio {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Numerator value
    #[fhir(summary)]
    numerator: Option<Quantity>,
    /// Denominator value
    #[fhir(summary)]
    denominator: Option<SimpleQuantity>,
}
