use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, Data, DataEnum, DataStruct, DeriveInput, Fields};

use crate::attrs;
use crate::type_helpers::FieldKind;

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    match &input.data {
        Data::Struct(ds) => expand_struct(input, ds),
        Data::Enum(de) => expand_enum(input, de),
        Data::Union(_) => Err(syn::Error::new(
            input.span(),
            "FhirVisit derive macro does not support unions",
        )),
    }
}

fn expand_struct(input: &DeriveInput, ds: &DataStruct) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let type_attrs = attrs::type_attrs(&input.attrs)?;
    let type_name = attrs::type_name(name, &type_attrs);

    let Fields::Named(fields) = &ds.fields else {
        return Err(syn::Error::new(input.span(), "FhirVisit requires named fields"));
    };

    let mut children = Vec::new();
    for f in &fields.named {
        let Some(ident) = &f.ident else { continue };
        let field_attrs = attrs::field_attrs(f)?;
        let element = attrs::element_name(f, &field_attrs);

        children.push(match FieldKind::of(&f.ty) {
            FieldKind::Required(_) => quote! {
                ::atrius_fhir_support::visitor::Visitable::accept(&self.#ident, #element, None, visitor);
            },
            FieldKind::Optional(_) | FieldKind::OptionalBox(_) => quote! {
                if let Some(__v) = &self.#ident {
                    ::atrius_fhir_support::visitor::Visitable::accept(__v, #element, None, visitor);
                }
            },
            FieldKind::Repeated(_) => quote! {
                ::atrius_fhir_support::visitor::accept_list(&self.#ident, #element, visitor);
            },
        });
    }

    Ok(quote! {
        impl #impl_generics ::atrius_fhir_support::visitor::Visitable for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn accept(
                &self,
                element_name: &str,
                element_index: Option<usize>,
                visitor: &mut dyn ::atrius_fhir_support::visitor::Visitor,
            ) {
                if !visitor.pre_visit(self) {
                    return;
                }
                visitor.visit_start(element_name, element_index, self);
                if visitor.visit(element_name, element_index, self) {
                    #(#children)*
                }
                visitor.visit_end(element_name, element_index, self);
                visitor.post_visit(self);
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn invariants(&self) -> &'static [::atrius_fhir_support::validate::Invariant] {
                <Self as ::atrius_fhir_support::validate::Validate>::invariants()
            }
        }
    })
}

// Choice enums and the Resource enum are transparent: the wrapped value is visited
// under the element name of the enclosing field.
fn expand_enum(input: &DeriveInput, de: &DataEnum) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut variants = Vec::new();
    for v in &de.variants {
        match &v.fields {
            Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => variants.push(&v.ident),
            _ => {
                return Err(syn::Error::new(
                    v.span(),
                    "FhirVisit enums must have single-field tuple variants",
                ));
            }
        }
    }

    Ok(quote! {
        impl #impl_generics ::atrius_fhir_support::visitor::Visitable for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                match self {
                    #(Self::#variants(__v) => ::atrius_fhir_support::visitor::Visitable::type_name(__v),)*
                }
            }

            fn accept(
                &self,
                element_name: &str,
                element_index: Option<usize>,
                visitor: &mut dyn ::atrius_fhir_support::visitor::Visitor,
            ) {
                match self {
                    #(Self::#variants(__v) => ::atrius_fhir_support::visitor::Visitable::accept(
                        __v,
                        element_name,
                        element_index,
                        visitor,
                    ),)*
                }
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn invariants(&self) -> &'static [::atrius_fhir_support::validate::Invariant] {
                match self {
                    #(Self::#variants(__v) => ::atrius_fhir_support::visitor::Visitable::invariants(__v),)*
                }
            }
        }
    })
}
