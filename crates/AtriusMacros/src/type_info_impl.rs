use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields};

use crate::attrs;

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let type_attrs = attrs::type_attrs(&input.attrs)?;
    let type_name = attrs::type_name(name, &type_attrs);

    let Data::Struct(ds) = &input.data else {
        return Err(syn::Error::new(input.span(), "TypeInfo only supports structs"));
    };
    let Fields::Named(fields) = &ds.fields else {
        return Err(syn::Error::new(input.span(), "TypeInfo requires named fields"));
    };

    let mut elements = Vec::new();
    let mut summary = Vec::new();
    let mut choices = Vec::new();
    for f in &fields.named {
        let field_attrs = attrs::field_attrs(f)?;
        let element = attrs::element_name(f, &field_attrs);
        if field_attrs.summary {
            summary.push(element.clone());
        }
        if field_attrs.choice {
            choices.push(element.clone());
        }
        elements.push(element);
    }

    Ok(quote! {
        impl #impl_generics ::atrius_fhir_support::type_info::TypeInfo for #name #ty_generics #where_clause {
            fn type_name() -> &'static str {
                #type_name
            }

            fn element_names() -> &'static [&'static str] {
                &[#(#elements),*]
            }

            fn summary_elements() -> &'static [&'static str] {
                &[#(#summary),*]
            }

            fn choice_elements() -> &'static [&'static str] {
                &[#(#choices),*]
            }
        }
    })
}
