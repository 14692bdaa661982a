use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::Parser;
use syn::{
    parse_macro_input, spanned::Spanned, Attribute, Data, DataEnum, DataStruct, DeriveInput,
    Fields, LitStr, Meta, MetaList, MetaNameValue,
};

use crate::attrs;
use crate::type_helpers::{lexical_check, primitive_rule, reference_check, FieldKind};

struct InvariantLit {
    key: LitStr,
    severity: LitStr,
    human: LitStr,
    expr: LitStr,
    path: LitStr,
}

fn parse_fhir_invariant(attr: &Attribute) -> syn::Result<InvariantLit> {
    let Meta::List(MetaList { tokens, .. }) = attr.meta.clone() else {
        return Err(syn::Error::new(attr.span(), "expected #[fhir_invariant(...)]"));
    };

    let parser = syn::punctuated::Punctuated::<MetaNameValue, syn::Token![,]>::parse_terminated;
    let list = parser.parse2(tokens)?;

    let mut key = None;
    let mut severity = None;
    let mut human = None;
    let mut expr = None;
    let mut path = None;

    for nv in list {
        let span = nv.span();
        let ident = nv
            .path
            .get_ident()
            .map(|i| i.to_string())
            .unwrap_or_default();

        let lit = match nv.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(s),
                ..
            }) => s,
            _ => return Err(syn::Error::new(span, "expected string literal")),
        };

        match ident.as_str() {
            "key" => key = Some(lit),
            "severity" => severity = Some(lit),
            "human" => human = Some(lit),
            "expr" => expr = Some(lit),
            "path" => path = Some(lit),
            other => {
                return Err(syn::Error::new(
                    span,
                    format!("unknown fhir_invariant field: {other}"),
                ));
            }
        }
    }

    let missing = |name: &str| {
        syn::Error::new(
            attr.span(),
            format!("missing required fhir_invariant field: {name}"),
        )
    };

    Ok(InvariantLit {
        key: key.ok_or_else(|| missing("key"))?,
        severity: severity.ok_or_else(|| missing("severity"))?,
        human: human.ok_or_else(|| missing("human"))?,
        expr: expr.ok_or_else(|| missing("expr"))?,
        path: path.ok_or_else(|| missing("path"))?,
    })
}

fn invariant_tokens(inv: &InvariantLit) -> syn::Result<TokenStream2> {
    let InvariantLit {
        key,
        severity,
        human,
        expr,
        path,
    } = inv;

    // Map severity string -> enum at macro-expansion time so the generated const is valid
    let sev = match severity.value().as_str() {
        "error" => quote! { ::atrius_fhir_support::validate::ValidationSeverity::Error },
        "warning" => quote! { ::atrius_fhir_support::validate::ValidationSeverity::Warning },
        other => {
            return Err(syn::Error::new(
                severity.span(),
                format!("severity must be \"error\" or \"warning\", found \"{other}\""),
            ));
        }
    };

    Ok(quote! {
        ::atrius_fhir_support::validate::Invariant {
            key: #key,
            severity: #sev,
            human: #human,
            expr: #expr,
            path: #path,
        }
    })
}

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let result = match &input.data {
        Data::Struct(ds) => expand_struct(&input, ds),
        Data::Enum(de) => expand_enum(&input, de),
        Data::Union(_) => Err(syn::Error::new(
            input.span(),
            "FhirValidate does not support unions",
        )),
    };
    match result {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand_struct(input: &DeriveInput, ds: &DataStruct) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let type_attrs = attrs::type_attrs(&input.attrs)?;

    let Fields::Named(fields) = &ds.fields else {
        return Err(syn::Error::new(input.span(), "FhirValidate requires named fields"));
    };

    // Constraints on the type itself (e.g. Period.per-1, Extension.ext-1)
    let mut type_invs = Vec::new();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("fhir_invariant")) {
        type_invs.push(invariant_tokens(&parse_fhir_invariant(attr)?)?);
    }

    let mut has_children = Vec::new();
    let mut field_validate_stmts = Vec::new();

    for f in &fields.named {
        let Some(ident) = &f.ident else { continue };
        let field_attrs = attrs::field_attrs(f)?;
        let element = attrs::element_name(f, &field_attrs);
        let kind = FieldKind::of(&f.ty);

        let value = quote!(__v);
        let path = quote!(&__path);
        let mut checks = Vec::new();
        if let Some(rule) =
            primitive_rule(kind.element_type(), field_attrs.primitive.as_deref(), f.span())?
        {
            checks.push(lexical_check(rule, &value, &path));
        }
        checks.push(reference_check(&field_attrs.reference, &value, &path));

        let validate_value = quote! {
            ::atrius_fhir_support::validate::Validate::validate_into(__v, &__path, ctx);
            #(#checks)*
        };

        // ele-1 counts children other than the element id
        let is_id = element == "id";
        let stmt = match kind {
            FieldKind::Required(_) => quote! {
                {
                    let __path = format!("{}.{}", path, #element);
                    let __v = &self.#ident;
                    #validate_value
                }
            },
            FieldKind::Optional(_) => {
                if !is_id {
                    has_children.push(quote!(self.#ident.is_some()));
                }
                quote! {
                    if let Some(__v) = self.#ident.as_ref() {
                        let __path = format!("{}.{}", path, #element);
                        #validate_value
                    }
                }
            }
            FieldKind::OptionalBox(_) => {
                has_children.push(quote!(self.#ident.is_some()));
                quote! {
                    if let Some(__v) = self.#ident.as_deref() {
                        let __path = format!("{}.{}", path, #element);
                        #validate_value
                    }
                }
            }
            FieldKind::Repeated(_) => {
                has_children.push(quote!(!self.#ident.is_empty()));
                let min = field_attrs.min;
                let min_check = (min > 0).then(|| {
                    quote! {
                        ctx.check_min(&format!("{}.{}", path, #element), &self.#ident, #min);
                    }
                });
                quote! {
                    #min_check
                    for (__i, __v) in self.#ident.iter().enumerate() {
                        let __path = format!("{}.{}[{}]", path, #element, __i);
                        #validate_value
                    }
                }
            }
        };
        if matches!(kind, FieldKind::Required(_)) {
            has_children.push(quote!(true));
        }
        field_validate_stmts.push(stmt);
    }

    let ele_1 = (!type_attrs.resource).then(|| {
        quote! {
            ctx.check_has_children(path, false #(|| #has_children)*);
        }
    });

    let hook = type_attrs
        .validate_with
        .as_ref()
        .map(|f| quote! { #f(self, path, ctx); });

    Ok(quote! {
        impl #impl_generics ::atrius_fhir_support::validate::Validate for #name #ty_generics #where_clause {
            fn validate_into(
                &self,
                path: &str,
                ctx: &mut ::atrius_fhir_support::validate::ValidationContext<'_>,
            ) {
                #ele_1
                #(#field_validate_stmts)*
                #hook
            }

            fn invariants() -> &'static [::atrius_fhir_support::validate::Invariant] {
                const INVARIANTS: &[::atrius_fhir_support::validate::Invariant] = &[
                    #(#type_invs),*
                ];
                INVARIANTS
            }
        }
    })
}

// Choice enums validate the wrapped value in place, then apply the per-variant
// lexical and reference rules that the wrapped type cannot know about.
fn expand_enum(input: &DeriveInput, de: &DataEnum) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut arms = Vec::new();
    for v in &de.variants {
        let Fields::Unnamed(unnamed) = &v.fields else {
            return Err(syn::Error::new(
                v.span(),
                "FhirValidate enums must have single-field tuple variants",
            ));
        };
        let Some(field) = unnamed.unnamed.first() else {
            return Err(syn::Error::new(v.span(), "variant must wrap a value"));
        };
        let variant_attrs = attrs::variant_attrs(&v.attrs)?;
        let ident = &v.ident;

        let value = quote!(__v);
        let path = quote!(path);
        let lexical = primitive_rule(&field.ty, variant_attrs.primitive.as_deref(), v.span())?
            .map(|rule| lexical_check(rule, &value, &path));
        let reference = reference_check(&variant_attrs.reference, &value, &path);

        arms.push(quote! {
            Self::#ident(__v) => {
                ::atrius_fhir_support::validate::Validate::validate_into(__v, path, ctx);
                #lexical
                #reference
            }
        });
    }

    Ok(quote! {
        impl #impl_generics ::atrius_fhir_support::validate::Validate for #name #ty_generics #where_clause {
            fn validate_into(
                &self,
                path: &str,
                ctx: &mut ::atrius_fhir_support::validate::ValidationContext<'_>,
            ) {
                match self {
                    #(#arms)*
                }
            }
        }
    })
}
