//=============================================================================
// Type Analysis Helper Functions
//=============================================================================

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, Path, PathArguments, Type, TypePath};

fn single_type_argument<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if let Type::Path(TypePath {
        path: Path { segments, .. },
        ..
    }) = ty
        && let Some(segment) = segments.last()
        && segment.ident == wrapper
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner_ty)) = args.args.first()
    {
        return Some(inner_ty);
    }
    None
}

/// Extracts `T` from `Option<T>`.
pub(crate) fn get_option_inner_type(ty: &Type) -> Option<&Type> {
    single_type_argument(ty, "Option")
}

/// Extracts `T` from `Vec<T>`.
pub(crate) fn get_vec_inner_type(ty: &Type) -> Option<&Type> {
    single_type_argument(ty, "Vec")
}

/// Extracts `T` from `Box<T>`. Boxes break cycles in recursive FHIR types.
pub(crate) fn get_box_inner_type(ty: &Type) -> Option<&Type> {
    single_type_argument(ty, "Box")
}

/// How a model field stores its element, and the element type itself.
///
/// ```rust,ignore
/// // Code<EpisodeOfCareStatus>   -> Required
/// // Option<Period>              -> Optional
/// // Option<Box<Reference>>      -> OptionalBox
/// // Vec<Identifier>             -> Repeated
/// ```
#[derive(Clone, Copy)]
pub(crate) enum FieldKind<'a> {
    Required(&'a Type),
    Optional(&'a Type),
    OptionalBox(&'a Type),
    Repeated(&'a Type),
}

impl<'a> FieldKind<'a> {
    pub(crate) fn of(ty: &'a Type) -> Self {
        if let Some(inner) = get_option_inner_type(ty) {
            return match get_box_inner_type(inner) {
                Some(boxed) => FieldKind::OptionalBox(boxed),
                None => FieldKind::Optional(inner),
            };
        }
        if let Some(inner) = get_vec_inner_type(ty) {
            return FieldKind::Repeated(inner);
        }
        FieldKind::Required(ty)
    }

    pub(crate) fn element_type(&self) -> &'a Type {
        match *self {
            FieldKind::Required(ty)
            | FieldKind::Optional(ty)
            | FieldKind::OptionalBox(ty)
            | FieldKind::Repeated(ty) => ty,
        }
    }
}

/// Lexical rule applied to a primitive whose Rust value type cannot express it.
#[derive(Clone, Copy)]
pub(crate) enum PrimitiveRule {
    Code,
    Id,
    Uri,
    Oid,
    Uuid,
    PositiveInt,
    UnsignedInt,
    Xhtml,
}

impl PrimitiveRule {
    fn from_fhir_name(name: &str) -> Option<Self> {
        match name {
            "code" => Some(PrimitiveRule::Code),
            "id" => Some(PrimitiveRule::Id),
            "uri" | "url" | "canonical" => Some(PrimitiveRule::Uri),
            "oid" => Some(PrimitiveRule::Oid),
            "uuid" => Some(PrimitiveRule::Uuid),
            "positiveInt" => Some(PrimitiveRule::PositiveInt),
            "unsignedInt" => Some(PrimitiveRule::UnsignedInt),
            "xhtml" => Some(PrimitiveRule::Xhtml),
            _ => None,
        }
    }

    fn check_fn(self) -> TokenStream {
        match self {
            PrimitiveRule::Code => quote!(::atrius_fhir_support::validation_support::check_code),
            PrimitiveRule::Id => quote!(::atrius_fhir_support::validation_support::check_id),
            PrimitiveRule::Uri => quote!(::atrius_fhir_support::validation_support::check_uri),
            PrimitiveRule::Oid => quote!(::atrius_fhir_support::validation_support::check_oid),
            PrimitiveRule::Uuid => quote!(::atrius_fhir_support::validation_support::check_uuid),
            PrimitiveRule::PositiveInt => {
                quote!(::atrius_fhir_support::validation_support::check_positive_int)
            }
            PrimitiveRule::UnsignedInt => {
                quote!(::atrius_fhir_support::validation_support::check_unsigned_int)
            }
            PrimitiveRule::Xhtml => quote!(::atrius_fhir_support::validation_support::check_xhtml),
        }
    }

    fn is_integer(self) -> bool {
        matches!(self, PrimitiveRule::PositiveInt | PrimitiveRule::UnsignedInt)
    }
}

/// Maps a primitive type alias to its FHIR primitive name.
///
/// Aliases with generic arguments (`Code<EpisodeOfCareStatus>`) carry a typed value
/// and need no lexical rule, so they are not recognised here.
pub(crate) fn extract_fhir_primitive_type_name(ty: &Type) -> Option<&'static str> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if !segment.arguments.is_empty() {
        return None;
    }
    match segment.ident.to_string().as_str() {
        "Uri" => Some("uri"),
        "Code" => Some("code"),
        "Id" => Some("id"),
        "Oid" => Some("oid"),
        "Uuid" => Some("uuid"),
        "Canonical" => Some("canonical"),
        "Url" => Some("url"),
        "Xhtml" => Some("xhtml"),
        "PositiveInt" => Some("positiveInt"),
        "UnsignedInt" => Some("unsignedInt"),
        _ => None,
    }
}

pub(crate) fn primitive_rule(
    ty: &Type,
    explicit: Option<&str>,
    span: proc_macro2::Span,
) -> syn::Result<Option<PrimitiveRule>> {
    match explicit {
        Some(name) => match PrimitiveRule::from_fhir_name(name) {
            Some(rule) => Ok(Some(rule)),
            None if is_known_primitive(name) => Ok(None),
            None => Err(syn::Error::new(
                span,
                format!("unknown FHIR primitive type '{}'", name),
            )),
        },
        None => Ok(extract_fhir_primitive_type_name(ty).and_then(PrimitiveRule::from_fhir_name)),
    }
}

fn is_known_primitive(name: &str) -> bool {
    matches!(
        name,
        "base64Binary"
            | "boolean"
            | "date"
            | "dateTime"
            | "decimal"
            | "instant"
            | "integer"
            | "integer64"
            | "markdown"
            | "string"
            | "time"
    )
}

/// Generates the lexical check for `value` (an `&Element<_, _>` expression).
pub(crate) fn lexical_check(rule: PrimitiveRule, value: &TokenStream, path: &TokenStream) -> TokenStream {
    let check = rule.check_fn();
    if rule.is_integer() {
        quote! {
            if let Some(__n) = (#value).value {
                ctx.lexical(#path, #check(__n));
            }
        }
    } else {
        quote! {
            if let Some(__s) = (#value).value.as_deref() {
                ctx.lexical(#path, #check(__s));
            }
        }
    }
}

/// Generates the reference target check for `value` (an `&impl ReferenceTarget`).
pub(crate) fn reference_check(targets: &[String], value: &TokenStream, path: &TokenStream) -> TokenStream {
    if targets.is_empty() {
        return TokenStream::new();
    }
    quote! {
        ctx.check_reference(#path, #value, &[#(#targets),*]);
    }
}
