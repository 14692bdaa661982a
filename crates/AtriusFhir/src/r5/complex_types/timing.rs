use atrius_macros::{FhirBuilder, FhirChoice, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Choice of types for the bounds\[x\] field in TimingRepeat
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirChoice)]
#[fhir(choice = "bounds")]
pub enum TimingRepeatBounds {
    /// Variant accepting the Duration type.
    Duration(Duration),
    /// Variant accepting the Range type.
    Range(Range),
    /// Variant accepting the Period type.
    Period(Period),
}

/// When the event is to occur
///
/// A set of rules that describe when the event is scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(type_name = "Timing.repeat")]
#[fhir_invariant(key = "tim-1", severity = "error", human = "if there's a duration, there needs to be duration units", expr = "duration.empty() or durationUnit.exists()", path = "Timing.repeat")]
#[fhir_invariant(key = "tim-2", severity = "error", human = "if there's a period, there needs to be period units", expr = "period.empty() or periodUnit.exists()", path = "Timing.repeat")]
#[fhir_invariant(key = "tim-4", severity = "error", human = "duration SHALL be a non-negative value", expr = "duration.exists() implies duration >= 0", path = "Timing.repeat")]
#[fhir_invariant(key = "tim-5", severity = "error", human = "period SHALL be a non-negative value", expr = "period.exists() implies period >= 0", path = "Timing.repeat")]
#[fhir_invariant(key = "tim-6", severity = "error", human = "If there's a periodMax, there must be a period", expr = "periodMax.empty() or period.exists()", path = "Timing.repeat")]
#[fhir_invariant(key = "tim-7", severity = "error", human = "If there's a durationMax, there must be a duration", expr = "durationMax.empty() or duration.exists()", path = "Timing.repeat")]
#[fhir_invariant(key = "tim-8", severity = "error", human = "If there's a countMax, there must be a count", expr = "countMax.empty() or count.exists()", path = "Timing.repeat")]
#[fhir_invariant(key = "tim-9", severity = "error", human = "If there's an offset, there must be a when (and not C, CM, CD, CV)", expr = "offset.empty() or (when.exists() and when.select($this in ('C' | 'CM' | 'CD' | 'CV')).allFalse())", path = "Timing.repeat")]
#[fhir_invariant(key = "tim-10", severity = "error", human = "If there's a timeOfDay, there cannot be a when, or vice versa", expr = "timeOfDay.empty() or when.empty()", path = "Timing.repeat")]
pub struct TimingRepeat {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Length/Range of lengths, or (Start and/or end) limits
    #[fhir(summary, choice)]
    bounds: Option<TimingRepeatBounds>,
    /// Number of times to repeat
    #[fhir(summary)]
    count: Option<PositiveInt>,
    /// Maximum number of times to repeat
    #[fhir(summary)]
    count_max: Option<PositiveInt>,
    /// How long when it happens
    #[fhir(summary)]
    duration: Option<Decimal>,
    /// How long when it happens (Max)
    #[fhir(summary)]
    duration_max: Option<Decimal>,
    /// s | min | h | d | wk | mo | a - unit of time (UCUM)
    #[fhir(summary)]
    duration_unit: Option<Code<UnitsOfTime>>,
    /// Indicates the number of repetitions that should occur within a period. I.e. Event occurs frequency times per period
    #[fhir(summary)]
    frequency: Option<PositiveInt>,
    /// Event occurs up to frequencyMax times per period
    #[fhir(summary)]
    frequency_max: Option<PositiveInt>,
    /// The duration to which the frequency applies. I.e. Event occurs frequency times per period
    #[fhir(summary)]
    period: Option<Decimal>,
    /// Upper limit of period (3-4 hours)
    #[fhir(summary)]
    period_max: Option<Decimal>,
    /// s | min | h | d | wk | mo | a - unit of time (UCUM)
    #[fhir(summary)]
    period_unit: Option<Code<UnitsOfTime>>,
    /// mon | tue | wed | thu | fri | sat | sun
    #[fhir(summary)]
    day_of_week: Vec<Code<DaysOfWeek>>,
    /// Time of day for action
    #[fhir(summary)]
    time_of_day: Vec<Time>,
    /// Code for time period of occurrence
    #[fhir(summary)]
    when: Vec<Code<EventTiming>>,
    /// Minutes from event (before or after)
    #[fhir(summary)]
    offset: Option<UnsignedInt>,
}

/// A timing schedule that specifies an event that may occur multiple times
///
/// Specifies an event that may occur multiple times. Timing schedules are used to record
/// when things are planned, expected or requested to occur.
///
/// ```rust
/// use atrius_fhir_lib::r5::{Timing, TimingRepeat, UnitsOfTime};
///
/// // twice a day
/// let bid = Timing::builder()
///     .repeat(
///         TimingRepeat::builder()
///             .frequency(2)
///             .period(atrius_fhir_lib::PreciseDecimal::from(1))
///             .period_unit(UnitsOfTime::Day)
///             .build()
///             .unwrap(),
///     )
///     .build()
///     .unwrap();
/// assert_eq!(bid.repeat().and_then(|r| r.frequency()).and_then(|f| f.value), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
pub struct Timing {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    /// When the event occurs
    #[fhir(summary)]
    event: Vec<DateTime>,
    /// When the event is to occur
    #[fhir(summary)]
    repeat: Option<TimingRepeat>,
    /// C | BID | TID | QID | AM | PM | QD | QOD | +
    #[fhir(summary)]
    code: Option<CodeableConcept>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrius_fhir_support::IssueKind;

    #[test]
    fn frequency_must_be_positive() {
        let err = TimingRepeat::builder().frequency(0).build().unwrap_err();
        assert!(err.has_kind(IssueKind::InvalidValue));
        assert!(err.has_issue_at("Timing.repeat.frequency"));
    }

    #[test]
    fn offset_may_be_zero() {
        assert!(TimingRepeat::builder().offset(0).build().is_ok());
        assert!(TimingRepeat::builder().offset(-5).build().is_err());
    }

    #[test]
    fn declares_timing_invariants() {
        let keys: Vec<_> = <TimingRepeat as atrius_fhir_support::Validate>::invariants()
            .iter()
            .map(|i| i.key)
            .collect();
        assert!(keys.contains(&"tim-9"));
        assert_eq!(keys.len(), 9);
    }
}
