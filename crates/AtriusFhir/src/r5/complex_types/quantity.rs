use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::precise_decimal::PreciseDecimal;
use crate::r5::*;

/// A measured or measurable amount
///
/// A measured amount (or an amount that can potentially be measured). Note that
/// measured amounts include amounts that are not precisely quantified, including
/// amounts involving arbitrary units and floating currencies.
///
/// ```rust
/// use atrius_fhir_lib::r5::Quantity;
///
/// let dose = Quantity::builder()
///     .value("2.50".parse::<atrius_fhir_lib::r5::Decimal>().unwrap())
///     .unit("mg")
///     .system("http://unitsofmeasure.org")
///     .code("mg")
///     .build()
///     .unwrap();
/// assert_eq!(dose.value().and_then(|v| v.value.as_ref()).unwrap().to_string(), "2.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir_invariant(
    key = "qty-3",
    severity = "error",
    human = "If a code for the unit is present, the system SHALL also be present",
    expr = "code.empty() or system.exists()",
    path = "Quantity"
)]
pub struct Quantity {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Numerical value (with implicit precision)
    #[fhir(summary)]
    value: Option<Decimal>,
    /// < | <= | >= | > | ad - how to understand the value
    #[fhir(summary)]
    comparator: Option<Code<QuantityComparator>>,
    /// Unit representation
    #[fhir(summary)]
    unit: Option<String>,
    /// System that defines coded unit form
    #[fhir(summary)]
    system: Option<Uri>,
    /// Coded form of the unit
    #[fhir(summary)]
    code: Option<Code>,
}

/// A fixed quantity (no comparator)
pub type SimpleQuantity = Quantity;

/// A length of time
pub type Duration = Quantity;

/// A duration of time during which an organism (or a process) has existed
pub type Age = Quantity;

impl Quantity {
    /// A UCUM quantity, e.g. `Quantity::ucum(5, "mg")`.
    pub fn ucum(value: impl Into<PreciseDecimal>, code: &str) -> Self {
        Quantity {
            id: None,
            extension: Vec::new(),
            value: Some(Decimal::new(value.into())),
            comparator: None,
            unit: Some(String::from(code)),
            system: Some(Uri::from("http://unitsofmeasure.org")),
            code: Some(Code::from(code)),
        }
    }
}
