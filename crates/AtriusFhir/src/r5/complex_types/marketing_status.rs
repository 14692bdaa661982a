use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// The marketing status describes the date when a medicinal product is actually put on
/// the market or the date as of which it is no longer available.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
pub struct MarketingStatus {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// The country in which the marketing authorization has been granted shall be specified It should be specified using the ISO 3166 ‑ 1 alpha-2 code elements
    #[fhir(summary)]
    country: Option<CodeableConcept>,
    /// Where a Medicines Regulatory Agency has granted a marketing authorization for which specific provisions within a jurisdiction apply, the jurisdiction can be specified using an appropriate controlled terminology The controlled term and the controlled term identifier shall be specified
    #[fhir(summary)]
    jurisdiction: Option<CodeableConcept>,
    /// This attribute provides information on the status of the marketing of the medicinal product See ISO/TS 20443 for more information and examples
    #[fhir(summary)]
    status: CodeableConcept,
    /// The date when the Medicinal Product is placed on the market by the Marketing Authorization Holder (or where applicable, the manufacturer/distributor) in a country and/or jurisdiction shall be provided
    #[fhir(summary)]
    date_range: Option<Period>,
    /// The date when the Medicinal Product is placed on the market by the Marketing Authorization Holder (or where applicable, the manufacturer/distributor) in a country and/or jurisdiction shall be provided
    #[fhir(summary)]
    restore_date: Option<DateTime>,
}
