//! # FHIR R5 Resource Model
//!
//! Immutable Rust types for a slice of the HL7 FHIR R5 specification: the primitive
//! data types, the complex data types they are composed into, and the
//! `EpisodeOfCare`, `ManufacturedItemDefinition`, `MedicationDispense`,
//! `NutritionProduct` and `PaymentReconciliation` resources.
//!
//! Every model type is built through a validating builder and can be walked with a
//! [`Visitor`](atrius_fhir_support::Visitor):
//!
//! ```rust
//! use atrius_fhir_lib::r5::{EpisodeOfCare, EpisodeOfCareStatus, Reference};
//!
//! let episode = EpisodeOfCare::builder()
//!     .status(EpisodeOfCareStatus::Active)
//!     .patient(Reference::builder().reference("Patient/example").build().unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(episode.status().value, Some(EpisodeOfCareStatus::Active));
//! ```
//!
//! Missing required elements, lexical errors in primitives and references to
//! resource types an element does not allow are reported by `build()`:
//!
//! ```rust
//! use atrius_fhir_lib::r5::{EpisodeOfCare, EpisodeOfCareStatus, Reference};
//!
//! let err = EpisodeOfCare::builder()
//!     .status(EpisodeOfCareStatus::Active)
//!     .patient(Reference::builder().reference("Device/d1").build().unwrap())
//!     .build()
//!     .unwrap_err();
//!
//! assert!(err.has_issue_at("EpisodeOfCare.patient"));
//! ```

#[macro_use]
mod macros;

pub mod date_time;
pub mod element;
pub mod precise_decimal;
pub mod r5;

pub use date_time::{
    DatePrecision, DateTimePrecision, PrecisionDate, PrecisionDateTime, PrecisionInstant,
    PrecisionTime, TimePrecision,
};
pub use element::Element;
pub use precise_decimal::PreciseDecimal;

pub use atrius_fhir_support::{
    check_constraints, ChoiceElement, CollectingVisitor, ConstraintEvaluator, IssueKind,
    ModelConfig, ModelError, PathAwareVisitor, PathVisit, PrimitiveValue, TypeInfo, Validate,
    ValidationError, ValidationIssue, ValidationSeverity, Visitable, Visitor,
};
