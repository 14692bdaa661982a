use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// An amount of economic utility in some recognized currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
pub struct Money {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Numerical value (with implicit precision)
    #[fhir(summary)]
    value: Option<Decimal>,
    /// ISO 4217 Currency Code
    #[fhir(summary)]
    currency: Option<Code>,
}
