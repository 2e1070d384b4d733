// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree

use proc_macro::TokenStream;
use quote::{quote, quote_spanned};
use syn::{parse_quote, spanned::Spanned, Data, DataEnum, DeriveInput, Generics};

use crate::variants::newtype_variants;

pub(crate) fn impl_codegen(ast: &DeriveInput) -> TokenStream {
    match &ast.data {
        Data::Enum(e) => impl_enum(ast, e),
        Data::Struct(s) => quote_spanned! {
            s.struct_token.span() =>
            compile_error!("Codegen can only be derived for enums; write the impl by hand")
        }
        .into(),
        Data::Union(u) => quote_spanned! {
            u.union_token.span() =>
            compile_error!("Union type is not supported")
        }
        .into(),
    }
}

fn impl_enum(ast: &DeriveInput, e: &DataEnum) -> TokenStream {
    let varnames = match newtype_variants(e) {
        Ok(v) => v,
        Err(err) => return err.into(),
    };
    let ident = &ast.ident;
    // The state lifetime comes first, any generics of the node follow it.
    let mut generics: Generics = ast.generics.clone();
    generics.params.insert(0, parse_quote!('__state));
    let (impl_generics, _, _) = generics.split_for_impl();
    let (_, ty_generics, where_clause) = ast.generics.split_for_impl();
    let gen = quote! {
        impl #impl_generics Codegen<'__state> for #ident #ty_generics #where_clause {
            fn codegen(&self, state: &mut CodegenState<'__state>) {
                match self {
                    #(Self::#varnames(x) => x.codegen(state),)*
                }
            }
        }
    };
    gen.into()
}
