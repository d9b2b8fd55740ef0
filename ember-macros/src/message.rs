//! `#[derive(Message)]`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input, parse_quote};

/// Implementation of the `#[derive(Message)]` macro.
///
/// Every type parameter gets a `Send + 'static` bound, so generic payloads
/// such as `Batch<T>` are messages whenever `T` can cross threads.
pub fn derive_message_impl(input: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&mut input))
}

fn expand(input: &mut DeriveInput) -> proc_macro2::TokenStream {
    let type_params: Vec<_> = input
        .generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let where_clause = input.generics.make_where_clause();
    for ident in type_params {
        where_clause
            .predicates
            .push(parse_quote!(#ident: ::core::marker::Send + 'static));
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    quote! {
        impl #impl_generics ::ember::Message for #name #ty_generics #where_clause {}
    }
}
