//! `#[derive(EventKind)]`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Implementation of the `#[derive(EventKind)]` macro.
pub fn derive_event_kind_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(EventKind)] can only be used on enums",
        ));
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(EventKind)] does not support generic enums",
        ));
    }

    let mut idents = Vec::with_capacity(data_enum.variants.len());
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "#[derive(EventKind)] requires fieldless variants",
            ));
        }
        idents.push(&variant.ident);
    }

    let count = idents.len();
    let ordinals: Vec<usize> = (0..count).collect();

    Ok(quote! {
        impl ::ember::EventKind for #enum_name {
            const COUNT: usize = #count;

            #[inline]
            fn ordinal(self) -> usize {
                match self {
                    #(#enum_name::#idents => #ordinals,)*
                }
            }

            fn from_ordinal(ordinal: usize) -> ::core::option::Option<Self> {
                match ordinal {
                    #(#ordinals => ::core::option::Option::Some(#enum_name::#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name(self) -> &'static str {
                match self {
                    #(#enum_name::#idents => ::core::stringify!(#idents),)*
                }
            }
        }
    })
}
