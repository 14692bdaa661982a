//! # FHIR Macro - Procedural Macros for the FHIR Model
//!
//! This crate provides the derive macros that generate the per-type boilerplate of the
//! FHIR R5 model in `atrius-fhir-lib`. Every generated type follows the same template:
//! private fields, a builder with fluent setters, getters, visitor traversal and
//! structural validation. The macros write that template so the model files only
//! declare fields and their FHIR metadata.
//!
//! ## Overview
//!
//! - **`#[derive(FhirVisit)]`** - `Visitable` traversal in declaration order
//! - **`#[derive(FhirValidate)]`** - `Validate` with required, cardinality, ele-1,
//!   lexical and reference target checks, plus `#[fhir_invariant]` declarations
//! - **`#[derive(FhirBuilder)]`** - `T::builder()`, `to_builder()`, getters and a
//!   validating `TBuilder`
//! - **`#[derive(TypeInfo)]`** - FHIR type name and element metadata
//! - **`#[derive(FhirChoice)]`** - `ChoiceElement` and `From` conversions for `[x]` enums
//!
//! ## Attributes
//!
//! All derives share the `#[fhir(...)]` helper attribute:
//!
//! | Position | Option | Meaning |
//! |---|---|---|
//! | type | `type_name = "EpisodeOfCare.diagnosis"` | FHIR type name (defaults to the ident) |
//! | type | `resource` | resources are exempt from ele-1 |
//! | type | `validate_with = "path::to::fn"` | extra rule check |
//! | enum | `choice = "value"` | base name of a choice element |
//! | field | `rename = "..."` | element name (defaults to camelCase) |
//! | field | `min = 1` | minimum cardinality of a repeating element |
//! | field | `reference = "Patient\|Group"` | allowed reference targets |
//! | field | `summary`, `choice` | metadata reported by `TypeInfo` |
//! | field/variant | `primitive = "code"` | primitive type when it cannot be inferred |
//! | variant | `reference = "Binary"`, `skip_from` | choice variant options |
//!
//! Single-valued fields with a plain type are required (1..1). `Option<T>` and
//! `Option<Box<T>>` are optional, `Vec<T>` repeats.
//!
//! ## Usage
//!
//! ```ignore
//! use atrius_macros::{FhirBuilder, FhirValidate, FhirVisit, TypeInfo};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
//! #[fhir(type_name = "MedicationDispense.performer")]
//! pub struct MedicationDispensePerformer {
//!     id: Option<std::string::String>,
//!     extension: Vec<Extension>,
//!     modifier_extension: Vec<Extension>,
//!     function: Option<CodeableConcept>,
//!     #[fhir(reference = "Practitioner|PractitionerRole|Organization|Patient|Device|RelatedPerson|CareTeam")]
//!     actor: Reference,
//! }
//! ```

extern crate proc_macro;

use proc_macro::TokenStream;

pub(crate) mod attrs;
pub(crate) mod fhir_builder;
pub(crate) mod fhir_choice;
pub(crate) mod fhir_validate;
pub(crate) mod fhir_visit;
pub(crate) mod type_helpers;
pub(crate) mod type_info_impl;

/// Derives `atrius_fhir_support::Visitable`.
///
/// ## For Structs:
/// - `accept` reports the node, then each field under its FHIR element name in
///   declaration order; `Vec` fields are bracketed by `visit_list_start`/`visit_list_end`
/// - `invariants` returns the declarations from `FhirValidate`, which must also be derived
///
/// ## For Enums:
/// - Every variant wraps one value. The enum is transparent: the wrapped value is
///   visited under the element name of the enclosing field, so choice elements appear
///   under their base name.
#[proc_macro_derive(FhirVisit, attributes(fhir))]
pub fn fhir_visit_derive(input: TokenStream) -> TokenStream {
    fhir_visit::derive(input)
}

/// Derives `atrius_fhir_support::Validate`.
///
/// Type-level constraints are declared with
/// `#[fhir_invariant(key = "...", severity = "error", human = "...", expr = "...", path = "...")]`
/// and exposed through `Validate::invariants`. They are evaluated by an external
/// FHIRPath engine through `check_constraints`, never by the generated code.
#[proc_macro_derive(FhirValidate, attributes(fhir, fhir_invariant))]
pub fn derive_fhir_validate(input: TokenStream) -> TokenStream {
    fhir_validate::derive(input)
}

/// Derives an immutable-value API: getters, `builder()`, `to_builder()` and a
/// `<Name>Builder` whose `build()` validates the value.
#[proc_macro_derive(FhirBuilder, attributes(fhir))]
pub fn fhir_builder_derive(input: TokenStream) -> TokenStream {
    fhir_builder::derive(input)
}

/// Derives `atrius_fhir_support::TypeInfo`.
///
/// ```rust,ignore
/// #[derive(TypeInfo)]
/// #[fhir(type_name = "EpisodeOfCare.statusHistory")]
/// pub struct EpisodeOfCareStatusHistory {
///     // fields...
/// }
/// ```
#[proc_macro_derive(TypeInfo, attributes(fhir))]
pub fn type_info_derive(input: TokenStream) -> TokenStream {
    type_info_impl::derive(input)
}

/// Derives `atrius_fhir_support::ChoiceElement` for a `[x]` enum, plus one
/// `From<Variant>` impl per variant not marked `skip_from`.
#[proc_macro_derive(FhirChoice, attributes(fhir))]
pub fn fhir_choice_derive(input: TokenStream) -> TokenStream {
    fhir_choice::derive(input)
}
