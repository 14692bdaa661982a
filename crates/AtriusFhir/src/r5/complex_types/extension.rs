use atrius_fhir_support::validate::{IssueKind, ValidationContext};
use atrius_macros::{FhirBuilder, FhirChoice, FhirValidate, FhirVisit, TypeInfo};

use crate::r5::*;

/// Choice of types for the value\[x\] field in Extension
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirChoice)]
#[fhir(choice = "value")]
pub enum ExtensionValue {
    /// Variant accepting the Base64Binary type.
    Base64Binary(Base64Binary),
    /// Variant accepting the Boolean type.
    Boolean(Boolean),
    /// Variant accepting the Canonical type.
    #[fhir(skip_from)]
    Canonical(Canonical),
    /// Variant accepting the Code type.
    #[fhir(skip_from)]
    Code(Code),
    /// Variant accepting the Date type.
    Date(Date),
    /// Variant accepting the DateTime type.
    DateTime(DateTime),
    /// Variant accepting the Decimal type.
    Decimal(Decimal),
    /// Variant accepting the Id type.
    #[fhir(skip_from)]
    Id(Id),
    /// Variant accepting the Instant type.
    Instant(Instant),
    /// Variant accepting the Integer type.
    Integer(Integer),
    /// Variant accepting the Integer64 type.
    Integer64(Integer64),
    /// Variant accepting the Markdown type.
    #[fhir(skip_from)]
    Markdown(Markdown),
    /// Variant accepting the Oid type.
    #[fhir(skip_from)]
    Oid(Oid),
    /// Variant accepting the PositiveInt type.
    #[fhir(skip_from)]
    PositiveInt(PositiveInt),
    /// Variant accepting the String type.
    String(String),
    /// Variant accepting the Time type.
    Time(Time),
    /// Variant accepting the UnsignedInt type.
    #[fhir(skip_from)]
    UnsignedInt(UnsignedInt),
    /// Variant accepting the Uri type.
    #[fhir(skip_from)]
    Uri(Uri),
    /// Variant accepting the Url type.
    #[fhir(skip_from)]
    Url(Url),
    /// Variant accepting the Uuid type.
    #[fhir(skip_from)]
    Uuid(Uuid),
    /// Variant accepting the Age type.
    #[fhir(skip_from)]
    Age(Age),
    /// Variant accepting the Annotation type.
    Annotation(Annotation),
    /// Variant accepting the Attachment type.
    Attachment(Attachment),
    /// Variant accepting the CodeableConcept type.
    CodeableConcept(CodeableConcept),
    /// Variant accepting the CodeableReference type.
    CodeableReference(CodeableReference),
    /// Variant accepting the Coding type.
    Coding(Coding),
    /// Variant accepting the Duration type.
    #[fhir(skip_from)]
    Duration(Duration),
    /// Variant accepting the Identifier type.
    Identifier(Identifier),
    /// Variant accepting the Money type.
    Money(Money),
    /// Variant accepting the Period type.
    Period(Period),
    /// Variant accepting the Quantity type.
    Quantity(Quantity),
    /// Variant accepting the Range type.
    Range(Range),
    /// Variant accepting the Ratio type.
    Ratio(Ratio),
    /// Variant accepting the Reference type.
    Reference(Reference),
    /// Variant accepting the Timing type.
    Timing(Timing),
    /// Variant accepting the Dosage type.
    Dosage(Box<Dosage>),
    /// Variant accepting the Meta type.
    Meta(Meta),
}

impl From<Dosage> for ExtensionValue {
    fn from(value: Dosage) -> Self {
        ExtensionValue::Dosage(Box::new(value))
    }
}

/// Optional Extension Element - found in all resources.
///
/// An extension either carries a `value[x]` or nested extensions, never both.
///
/// ```rust
/// use atrius_fhir_lib::r5::{Extension, ExtensionValue, Boolean};
///
/// let ext = Extension::builder()
///     .url("http://example.org/fhir/StructureDefinition/verified")
///     .value(Boolean::from(true))
///     .build()
///     .unwrap();
/// assert!(matches!(ext.value(), Some(ExtensionValue::Boolean(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirVisit, FhirValidate, FhirBuilder, TypeInfo)]
#[fhir(validate_with = "check_value_or_extensions")]
#[fhir_invariant(
    key = "ext-1",
    severity = "error",
    human = "Must have either extensions or value[x], not both",
    expr = "extension.exists() != value.exists()",
    path = "Extension"
)]
pub struct Extension {
    /// Unique id for inter-element referencing
    id: Option<std::string::String>,
    /// Additional content defined by implementations
    extension: Vec<Extension>,
    /// identifies the meaning of the extension
    url: Uri,
    /// Value of extension
    #[fhir(choice)]
    value: Option<ExtensionValue>,
}

fn check_value_or_extensions(ext: &Extension, path: &str, ctx: &mut ValidationContext<'_>) {
    if ext.value.is_some() == !ext.extension.is_empty() {
        ctx.report(
            IssueKind::Rule("ext-1"),
            path,
            "Must have either extensions or value[x], not both",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrius_fhir_support::ChoiceElement;

    #[test]
    fn ext_1_rejects_value_and_extensions() {
        let nested = Extension::builder()
            .url("part")
            .value(String::from("a"))
            .build()
            .unwrap();
        let err = Extension::builder()
            .url("http://example.org/ext")
            .value(String::from("b"))
            .extension(nested)
            .build()
            .unwrap_err();
        assert!(err.has_kind(IssueKind::Rule("ext-1")));
    }

    #[test]
    fn ext_1_rejects_empty_extension() {
        let err = Extension::builder()
            .url("http://example.org/ext")
            .build()
            .unwrap_err();
        assert!(err.has_kind(IssueKind::Rule("ext-1")));
    }

    #[test]
    fn choice_field_names() {
        let value = ExtensionValue::Code(Code::from("active"));
        assert_eq!(value.field_name(), "valueCode");
        assert!(ExtensionValue::possible_field_names().contains(&"valueCodeableReference"));
    }

    #[test]
    fn url_is_required() {
        let err = Extension::builder()
            .value(Boolean::from(false))
            .build()
            .unwrap_err();
        assert!(err.has_issue_at("Extension.url"));
    }
}
