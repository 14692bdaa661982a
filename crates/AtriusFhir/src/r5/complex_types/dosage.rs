use atrius_macros::{FhirBuilder, FhirChoice, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Choice of types for the dose\[x\] field in DosageDoseAndRate
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirChoice)]
#[fhir(choice = "dose")]
pub enum DosageDoseAndRateDose {
    /// Variant accepting the Range type.
    Range(Range),
    /// Variant accepting the Quantity type.
    Quantity(SimpleQuantity),
}

/// Choice of types for the rate\[x\] field in DosageDoseAndRate
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirChoice)]
#[fhir(choice = "rate")]
pub enum DosageDoseAndRateRate {
    /// Variant accepting the Ratio type.
    Ratio(Ratio),
    /// Variant accepting the Range type.
    Range(Range),
    /// Variant accepting the Quantity type.
    Quantity(SimpleQuantity),
}

/// Amount of medication administered, to be administered or typical amount to be administered
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "Dosage.doseAndRate")]
pub struct DosageDoseAndRate {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// The kind of dose or rate specified
    #[fhir(summary)]
    r#type: Option<CodeableConcept>,
    /// Amount of medication per dose
    #[fhir(summary, choice)]
    dose: Option<DosageDoseAndRateDose>,
    /// Amount of medication per unit of time
    #[fhir(summary, choice)]
    rate: Option<DosageDoseAndRateRate>,
}

/// How the medication is/was taken or should be taken
///
/// Indicates how the medication is/was taken or should be taken by the patient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
pub struct Dosage {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// The order of the dosage instructions
    #[fhir(summary)]
    sequence: Option<Integer>,
    /// Free text dosage instructions e.g. SIG
    #[fhir(summary)]
    text: Option<String>,
    /// Supplemental instruction or warnings to the patient - e.g. "with meals", "may cause drowsiness"
    #[fhir(summary)]
    additional_instruction: Vec<CodeableConcept>,
    /// Patient or consumer oriented instructions
    #[fhir(summary)]
    patient_instruction: Option<String>,
    /// When medication should be administered
    #[fhir(summary)]
    timing: Option<Timing>,
    /// Take "as needed"
    #[fhir(summary)]
    as_needed: Option<Boolean>,
    /// Take "as needed" (for x)
    #[fhir(summary)]
    as_needed_for: Vec<CodeableConcept>,
    /// Body site to administer to
    #[fhir(summary)]
    site: Option<CodeableConcept>,
    /// How drug should enter body
    #[fhir(summary)]
    route: Option<CodeableConcept>,
    /// Technique for administering medication
    #[fhir(summary)]
    method: Option<CodeableConcept>,
    /// Amount of medication administered, to be administered or typical amount to be administered
    #[fhir(summary)]
    dose_and_rate: Vec<DosageDoseAndRate>,
    /// Upper limit on medication per unit of time
    #[fhir(summary)]
    max_dose_per_period: Vec<Ratio>,
    /// Upper limit on medication per administration
    #[fhir(summary)]
    max_dose_per_administration: Option<SimpleQuantity>,
    /// Upper limit on medication per lifetime of the patient
    #[fhir(summary)]
    max_dose_per_lifetime: Option<SimpleQuantity>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrius_fhir_support::ChoiceElement;

    #[test]
    fn dose_choice_uses_quantity_field_name() {
        let dose = DosageDoseAndRateDose::from(Quantity::ucum(1, "{tbl}"));
        assert_eq!(dose.field_name(), "doseQuantity");
    }

    #[test]
    fn dosage_with_dose_and_rate() {
        let dosage = Dosage::builder()
            .text("1 tablet twice daily")
            .dose_and_rate(
                DosageDoseAndRate::builder()
                    .dose(Quantity::ucum(1, "{tbl}"))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(dosage.dose_and_rate().len(), 1);
        assert!(dosage.timing().is_none());
    }
}
