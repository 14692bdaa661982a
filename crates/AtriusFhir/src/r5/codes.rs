//! Value sets bound with `required` strength by the R5 model.

fhir_code_enum! {
    /// The status of the episode of care.
    EpisodeOfCareStatus, "http://hl7.org/fhir/ValueSet/episode-of-care-status|5.0.0" {
        /// This episode of care is planned to start at the date specified in the period.start.
        Planned => "planned",
        /// This episode has been placed on a waitlist, pending the episode being made active.
        Waitlist => "waitlist",
        /// This episode of care is current.
        Active => "active",
        /// This episode of care is on hold.
        OnHold => "onhold",
        /// This episode of care is finished and the organization is not expecting to be providing further care.
        Finished => "finished",
        /// The episode of care was cancelled, or withdrawn from service.
        Cancelled => "cancelled",
        /// This instance should not have been part of this patient's medical record.
        EnteredInError => "entered-in-error",
    }
}

fhir_code_enum! {
    /// The lifecycle status of an artifact.
    PublicationStatus, "http://hl7.org/fhir/ValueSet/publication-status|5.0.0" {
        Draft => "draft",
        Active => "active",
        Retired => "retired",
        Unknown => "unknown",
    }
}

fhir_code_enum! {
    /// A coded concept specifying the state of the dispense event.
    MedicationDispenseStatus, "http://hl7.org/fhir/ValueSet/medicationdispense-status|5.0.0" {
        Preparation => "preparation",
        InProgress => "in-progress",
        Cancelled => "cancelled",
        OnHold => "on-hold",
        Completed => "completed",
        EnteredInError => "entered-in-error",
        Stopped => "stopped",
        Declined => "declined",
        Unknown => "unknown",
    }
}

fhir_code_enum! {
    /// Codes identifying the lifecycle stage of a product.
    NutritionProductStatus, "http://hl7.org/fhir/ValueSet/nutritionproduct-status|5.0.0" {
        Active => "active",
        Inactive => "inactive",
        EnteredInError => "entered-in-error",
    }
}

fhir_code_enum! {
    /// This value set includes Status codes.
    FinancialResourceStatus, "http://hl7.org/fhir/ValueSet/fm-status|5.0.0" {
        Active => "active",
        Cancelled => "cancelled",
        Draft => "draft",
        EnteredInError => "entered-in-error",
    }
}

fhir_code_enum! {
    /// The outcome of the processing.
    PaymentOutcome, "http://hl7.org/fhir/ValueSet/payment-outcome|5.0.0" {
        Queued => "queued",
        Complete => "complete",
        Error => "error",
        Partial => "partial",
    }
}

fhir_code_enum! {
    /// The presentation types of notes.
    NoteType, "http://hl7.org/fhir/ValueSet/note-type|5.0.0" {
        Display => "display",
        Print => "print",
        PrintOper => "printoper",
    }
}

fhir_code_enum! {
    /// The status of a resource narrative.
    NarrativeStatus, "http://hl7.org/fhir/ValueSet/narrative-status|5.0.0" {
        /// The contents of the narrative are entirely generated from the core elements in the content.
        Generated => "generated",
        Extensions => "extensions",
        Additional => "additional",
        /// The contents of the narrative are some equivalent of "No human-readable text provided in this case".
        Empty => "empty",
    }
}

fhir_code_enum! {
    /// How the Quantity should be understood and represented.
    QuantityComparator, "http://hl7.org/fhir/ValueSet/quantity-comparator|5.0.0" {
        LessThan => "<",
        LessOrEqual => "<=",
        GreaterOrEqual => ">=",
        GreaterThan => ">",
        /// The actual value is sufficient for the total quantity to equal the given value.
        Sufficient => "ad",
    }
}

fhir_code_enum! {
    /// Identifies the purpose for this identifier, if known.
    IdentifierUse, "http://hl7.org/fhir/ValueSet/identifier-use|5.0.0" {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Secondary => "secondary",
        Old => "old",
    }
}

fhir_code_enum! {
    /// A unit of time (units from UCUM).
    UnitsOfTime, "http://hl7.org/fhir/ValueSet/units-of-time|5.0.0" {
        Second => "s",
        Minute => "min",
        Hour => "h",
        Day => "d",
        Week => "wk",
        Month => "mo",
        Year => "a",
    }
}

fhir_code_enum! {
    /// The days of the week.
    DaysOfWeek, "http://hl7.org/fhir/ValueSet/days-of-week|5.0.0" {
        Mon => "mon",
        Tue => "tue",
        Wed => "wed",
        Thu => "thu",
        Fri => "fri",
        Sat => "sat",
        Sun => "sun",
    }
}

fhir_code_enum! {
    /// Real-world event relating to the schedule.
    EventTiming, "http://hl7.org/fhir/ValueSet/event-timing|5.0.0" {
        Morning => "MORN",
        EarlyMorning => "MORN.early",
        LateMorning => "MORN.late",
        Noon => "NOON",
        Afternoon => "AFT",
        EarlyAfternoon => "AFT.early",
        LateAfternoon => "AFT.late",
        Evening => "EVE",
        EarlyEvening => "EVE.early",
        LateEvening => "EVE.late",
        Night => "NIGHT",
        AfterSleep => "PHS",
        Immediate => "IMD",
        BeforeSleep => "HS",
        Wake => "WAKE",
        Meal => "C",
        Breakfast => "CM",
        Lunch => "CD",
        Dinner => "CV",
        BeforeMeal => "AC",
        BeforeBreakfast => "ACM",
        BeforeLunch => "ACD",
        BeforeDinner => "ACV",
        AfterMeal => "PC",
        AfterBreakfast => "PCM",
        AfterLunch => "PCD",
        AfterDinner => "PCV",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_strings() {
        for status in EpisodeOfCareStatus::ALL {
            assert_eq!(status.as_str().parse::<EpisodeOfCareStatus>().unwrap(), *status);
        }
        assert_eq!(EventTiming::EarlyMorning.to_string(), "MORN.early");
    }

    #[test]
    fn unknown_code_names_value_set() {
        let err = "halted".parse::<MedicationDispenseStatus>().unwrap_err();
        assert!(err.to_string().contains("medicationdispense-status"));
    }

    #[test]
    fn comparator_symbols() {
        assert_eq!("<=".parse::<QuantityComparator>().unwrap(), QuantityComparator::LessOrEqual);
        assert!("=".parse::<QuantityComparator>().is_err());
    }
}
