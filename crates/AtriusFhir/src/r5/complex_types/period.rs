use std::cmp::Ordering;

use atrius_fhir_support::validate::{IssueKind, ValidationContext};
use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Time range defined by start and end date/time
///
/// A time period defined by a start and end date and optionally time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(validate_with = "check_start_before_end")]
#[fhir_invariant(
    key = "per-1",
    severity = "error",
    human = "If present, start SHALL have a lower or equal value than end",
    expr = "start.hasValue().not() or end.hasValue().not() or (start.lowBoundary() <= end.highBoundary())",
    path = "Period"
)]
pub struct Period {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Starting time with inclusive boundary
    #[fhir(summary)]
    start: Option<DateTime>,
    /// End time with inclusive boundary, if not ongoing
    #[fhir(summary)]
    end: Option<DateTime>,
}

// Only comparable values are checked; `2024` vs `2024-03-01` is left alone.
fn check_start_before_end(period: &Period, path: &str, ctx: &mut ValidationContext<'_>) {
    let start = period.start.as_ref().and_then(|s| s.value.as_ref());
    let end = period.end.as_ref().and_then(|e| e.value.as_ref());
    if let (Some(start), Some(end)) = (start, end)
        && start.compare(end) == Some(Ordering::Greater)
    {
        ctx.report(
            IssueKind::Rule("per-1"),
            path,
            format!("period start {} is after end {}", start, end),
        );
    }
}
