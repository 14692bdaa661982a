use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields, LitStr};

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
    let name = &input.ident;
    let vis = &input.vis;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "FhirBuilder does not support generic types",
        ));
    }
    let Data::Struct(ds) = &input.data else {
        return Err(syn::Error::new(input.span(), "FhirBuilder only supports structs"));
    };
    let Fields::Named(fields) = &ds.fields else {
        return Err(syn::Error::new(input.span(), "FhirBuilder requires named fields"));
    };

    let type_attrs = attrs::type_attrs(&input.attrs)?;
    let type_name = attrs::type_name(name, &type_attrs);
    let builder = format_ident!("{}Builder", name);
    let builder_doc = LitStr::new(
        &format!("Builder for [`{}`]. Created by [`{}::builder`].", name, name),
        name.span(),
    );

    let mut builder_fields = Vec::new();
    let mut to_builder = Vec::new();
    let mut getters = Vec::new();
    let mut setters = Vec::new();
    let mut required_checks = Vec::new();
    let mut required_takes = Vec::new();
    let mut assignments = Vec::new();

    for f in &fields.named {
        let Some(ident) = &f.ident else { continue };
        let field_attrs = attrs::field_attrs(f)?;
        let element = attrs::element_name(f, &field_attrs);
        let plain = ident.unraw();
        let docs: Vec<_> = f.attrs.iter().filter(|a| a.path().is_ident("doc")).collect();

        match FieldKind::of(&f.ty) {
            FieldKind::Required(ty) => {
                let local = format_ident!("__{}", plain);
                builder_fields.push(quote!(#ident: Option<#ty>));
                to_builder.push(quote!(#ident: Some(self.#ident.clone())));
                getters.push(quote! {
                    #(#docs)*
                    pub fn #ident(&self) -> &#ty {
                        &self.#ident
                    }
                });
                setters.push(quote! {
                    pub fn #ident(mut self, value: impl Into<#ty>) -> Self {
                        self.#ident = Some(value.into());
                        self
                    }
                });
                required_checks.push(quote! {
                    if self.#ident.is_none() {
                        ctx.required(&format!("{}.{}", #type_name, #element));
                    }
                });
                required_takes.push(quote! {
                    let Some(#local) = self.#ident else {
                        return Err(ctx.into_error());
                    };
                });
                assignments.push(quote!(#ident: #local));
            }
            FieldKind::Optional(ty) => {
                builder_fields.push(quote!(#ident: Option<#ty>));
                to_builder.push(quote!(#ident: self.#ident.clone()));
                getters.push(quote! {
                    #(#docs)*
                    pub fn #ident(&self) -> Option<&#ty> {
                        self.#ident.as_ref()
                    }
                });
                setters.push(quote! {
                    pub fn #ident(mut self, value: impl Into<#ty>) -> Self {
                        self.#ident = Some(value.into());
                        self
                    }
                });
                assignments.push(quote!(#ident: self.#ident));
            }
            FieldKind::OptionalBox(ty) => {
                builder_fields.push(quote!(#ident: Option<Box<#ty>>));
                to_builder.push(quote!(#ident: self.#ident.clone()));
                getters.push(quote! {
                    #(#docs)*
                    pub fn #ident(&self) -> Option<&#ty> {
                        self.#ident.as_deref()
                    }
                });
                setters.push(quote! {
                    pub fn #ident(mut self, value: impl Into<#ty>) -> Self {
                        self.#ident = Some(Box::new(value.into()));
                        self
                    }
                });
                assignments.push(quote!(#ident: self.#ident));
            }
            FieldKind::Repeated(ty) => {
                let set_all = format_ident!("set_{}", plain);
                builder_fields.push(quote!(#ident: Vec<#ty>));
                to_builder.push(quote!(#ident: self.#ident.clone()));
                getters.push(quote! {
                    #(#docs)*
                    pub fn #ident(&self) -> &[#ty] {
                        &self.#ident
                    }
                });
                setters.push(quote! {
                    /// Appends one item.
                    pub fn #ident(mut self, value: impl Into<#ty>) -> Self {
                        self.#ident.push(value.into());
                        self
                    }

                    /// Replaces all items.
                    pub fn #set_all<I>(mut self, values: I) -> Self
                    where
                        I: IntoIterator,
                        I::Item: Into<#ty>,
                    {
                        self.#ident = values.into_iter().map(Into::into).collect();
                        self
                    }
                });
                assignments.push(quote!(#ident: self.#ident));
            }
        }
    }

    Ok(quote! {
        impl #name {
            pub fn builder() -> #builder {
                #builder::default()
            }

            /// Returns a builder initialised with a copy of this value.
            pub fn to_builder(&self) -> #builder {
                #builder {
                    #(#to_builder,)*
                }
            }

            #(#getters)*
        }

        #[doc = #builder_doc]
        #[derive(Debug, Clone, Default)]
        #vis struct #builder {
            #(#builder_fields,)*
        }

        impl #builder {
            #(#setters)*

            /// Builds the value, validating it with [`ModelConfig::current`](::atrius_fhir_support::ModelConfig::current).
            pub fn build(self) -> Result<#name, ::atrius_fhir_support::validate::ValidationError> {
                let config = ::atrius_fhir_support::ModelConfig::current();
                self.build_with(&config)
            }

            /// Builds the value, validating it with `config`.
            ///
            /// Every missing required element is reported, not just the first.
            pub fn build_with(
                self,
                config: &::atrius_fhir_support::ModelConfig,
            ) -> Result<#name, ::atrius_fhir_support::validate::ValidationError> {
                let mut ctx = ::atrius_fhir_support::validate::ValidationContext::new(config);
                #(#required_checks)*
                #(#required_takes)*
                let built = #name {
                    #(#assignments,)*
                };
                ::atrius_fhir_support::validate::Validate::validate_into(&built, #type_name, &mut ctx);
                ctx.finish(#type_name)?;
                Ok(built)
            }
        }
    })
}
