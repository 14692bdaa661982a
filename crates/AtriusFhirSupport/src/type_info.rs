//! # FHIR Type Information
//!
//! Static metadata about generated model types: the FHIR type name, the element
//! names in declaration order, which of them are part of the summary view, and which
//! are choice (`[x]`) elements.

/// Trait for types that can describe their FHIR structure.
///
/// Implemented by `#[derive(TypeInfo)]` for every generated struct.
pub trait TypeInfo {
    /// Returns the namespace for this type (e.g., "FHIR", "System").
    fn type_namespace() -> &'static str {
        "FHIR"
    }

    /// Returns the name of this type within its namespace.
    ///
    /// Backbone elements are named by their path, e.g. `EpisodeOfCare.statusHistory`.
    fn type_name() -> &'static str;

    /// Element names in declaration order, using FHIR naming (`statusHistory`).
    fn element_names() -> &'static [&'static str] {
        &[]
    }

    /// Elements flagged as part of the summary view.
    fn summary_elements() -> &'static [&'static str] {
        &[]
    }

    /// Base names (without `[x]`) of the choice elements declared on this type.
    fn choice_elements() -> &'static [&'static str] {
        &[]
    }
}

/// Trait for FHIR choice element types.
///
/// This trait is implemented by generated enum types that represent FHIR choice elements
/// (fields with [x] in the FHIR specification).
///
/// # Example
///
/// For a FHIR field like `Extension.value[x]`, the generated enum implements:
/// ```rust,ignore
/// impl ChoiceElement for ExtensionValue {
///     fn base_name() -> &'static str {
///         "value"
///     }
///
///     fn possible_field_names() -> &'static [&'static str] {
///         &["valueBoolean", "valueCode", "valueString", ...]
///     }
/// }
/// ```
pub trait ChoiceElement {
    /// Returns the base name of the choice element without the [x] suffix.
    fn base_name() -> &'static str;

    /// Returns all field names that this choice element can manifest as.
    fn possible_field_names() -> &'static [&'static str];

    /// The concrete field name of the variant held by this value (`valueQuantity`).
    fn field_name(&self) -> &'static str;
}
