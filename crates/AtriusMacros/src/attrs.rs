use heck::ToLowerCamelCase;
use syn::ext::IdentExt;
use syn::{Attribute, Field, LitInt, LitStr};

/// Options from `#[fhir(...)]` on a struct or enum.
#[derive(Default)]
pub(crate) struct TypeAttrs {
    /// FHIR type name; backbone elements use their path (`EpisodeOfCare.diagnosis`).
    pub type_name: Option<String>,
    /// Resources are not elements, so ele-1 does not apply to them.
    pub resource: bool,
    /// Extra rule check called as `f(&self, path, ctx)` after the generated checks.
    pub validate_with: Option<syn::Path>,
    /// Base name of a choice element enum (`value` for `value[x]`).
    pub choice: Option<String>,
}

/// Options from `#[fhir(...)]` on a struct field.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub rename: Option<String>,
    /// Minimum number of items for a repeating element.
    pub min: usize,
    /// Allowed target resource types of a Reference / CodeableReference element.
    pub reference: Vec<String>,
    pub summary: bool,
    pub choice: bool,
    /// Overrides the FHIR primitive type inferred from the field's type alias.
    pub primitive: Option<String>,
}

/// Options from `#[fhir(...)]` on an enum variant.
#[derive(Default)]
pub(crate) struct VariantAttrs {
    pub rename: Option<String>,
    pub reference: Vec<String>,
    /// Suppresses the generated `From` impl when two variants wrap the same type.
    pub skip_from: bool,
    pub primitive: Option<String>,
}

fn split_targets(lit: &LitStr) -> Vec<String> {
    lit.value()
        .split('|')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn fhir_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|a| a.path().is_ident("fhir"))
}

pub(crate) fn type_attrs(attrs: &[Attribute]) -> syn::Result<TypeAttrs> {
    let mut out = TypeAttrs::default();
    for attr in fhir_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("type_name") {
                out.type_name = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("resource") {
                out.resource = true;
            } else if meta.path.is_ident("validate_with") {
                out.validate_with = Some(meta.value()?.parse::<LitStr>()?.parse()?);
            } else if meta.path.is_ident("choice") {
                out.choice = Some(meta.value()?.parse::<LitStr>()?.value());
            } else {
                return Err(meta.error("unsupported #[fhir] option on a type"));
            }
            Ok(())
        })?;
    }
    Ok(out)
}

pub(crate) fn field_attrs(field: &Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in fhir_attrs(&field.attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                out.rename = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("min") {
                out.min = meta.value()?.parse::<LitInt>()?.base10_parse()?;
            } else if meta.path.is_ident("reference") {
                out.reference = split_targets(&meta.value()?.parse::<LitStr>()?);
            } else if meta.path.is_ident("summary") {
                out.summary = true;
            } else if meta.path.is_ident("choice") {
                out.choice = true;
            } else if meta.path.is_ident("primitive") {
                out.primitive = Some(meta.value()?.parse::<LitStr>()?.value());
            } else {
                return Err(meta.error("unsupported #[fhir] option on a field"));
            }
            Ok(())
        })?;
    }
    Ok(out)
}

pub(crate) fn variant_attrs(attrs: &[Attribute]) -> syn::Result<VariantAttrs> {
    let mut out = VariantAttrs::default();
    for attr in fhir_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                out.rename = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("reference") {
                out.reference = split_targets(&meta.value()?.parse::<LitStr>()?);
            } else if meta.path.is_ident("skip_from") {
                out.skip_from = true;
            } else if meta.path.is_ident("primitive") {
                out.primitive = Some(meta.value()?.parse::<LitStr>()?.value());
            } else {
                return Err(meta.error("unsupported #[fhir] option on a variant"));
            }
            Ok(())
        })?;
    }
    Ok(out)
}

/// Determines the FHIR element name of a field.
///
/// Uses `#[fhir(rename = "...")]` when present, otherwise converts the Rust field
/// name from `snake_case` to `camelCase`:
///
/// ```rust,ignore
/// // pub modifier_extension: Vec<Extension>  -> "modifierExtension"
/// // pub r#type: Option<CodeableConcept>      -> "type"
/// ```
pub(crate) fn element_name(field: &Field, attrs: &FieldAttrs) -> String {
    if let Some(rename) = &attrs.rename {
        return rename.clone();
    }
    field
        .ident
        .as_ref()
        .map(|ident| ident.unraw().to_string().to_lower_camel_case())
        .unwrap_or_default()
}

/// FHIR type name for a struct or enum, defaulting to the Rust identifier.
pub(crate) fn type_name(ident: &syn::Ident, attrs: &TypeAttrs) -> String {
    attrs
        .type_name
        .clone()
        .unwrap_or_else(|| ident.unraw().to_string())
}
