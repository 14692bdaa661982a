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
    let Data::Enum(de) = &input.data else {
        return Err(syn::Error::new(input.span(), "FhirChoice only supports enums"));
    };
    let type_attrs = attrs::type_attrs(&input.attrs)?;
    let Some(base_name) = type_attrs.choice else {
        return Err(syn::Error::new(
            input.span(),
            "FhirChoice requires #[fhir(choice = \"<base name>\")]",
        ));
    };

    let mut field_names = Vec::new();
    let mut arms = Vec::new();
    let mut from_impls = Vec::new();
    for v in &de.variants {
        let Fields::Unnamed(unnamed) = &v.fields else {
            return Err(syn::Error::new(v.span(), "choice variants must wrap one value"));
        };
        let Some(field) = unnamed.unnamed.first() else {
            return Err(syn::Error::new(v.span(), "choice variants must wrap one value"));
        };
        let variant_attrs = attrs::variant_attrs(&v.attrs)?;
        let ident = &v.ident;
        let ty = &field.ty;

        // valueQuantity, valueCodeableConcept, targetItemPositiveInt
        let field_name = variant_attrs
            .rename
            .unwrap_or_else(|| format!("{}{}", base_name, ident));
        arms.push(quote!(Self::#ident(_) => #field_name));
        field_names.push(field_name);

        if !variant_attrs.skip_from {
            from_impls.push(quote! {
                impl From<#ty> for #name {
                    fn from(value: #ty) -> Self {
                        Self::#ident(value)
                    }
                }
            });
        }
    }

    Ok(quote! {
        impl ::atrius_fhir_support::type_info::ChoiceElement for #name {
            fn base_name() -> &'static str {
                #base_name
            }

            fn possible_field_names() -> &'static [&'static str] {
                &[#(#field_names),*]
            }

            fn field_name(&self) -> &'static str {
                match self {
                    #(#arms,)*
                }
            }
        }

        #(#from_impls)*
    })
}
