// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree

use proc_macro::TokenStream;
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, Attribute, Data, DataEnum, DeriveInput, Ident};

use crate::variants::newtype_variants;

pub(crate) fn impl_precedence(ast: &DeriveInput) -> TokenStream {
    match &ast.data {
        Data::Enum(e) => impl_enum(ast, e),
        Data::Struct(_) => impl_struct(ast),
        Data::Union(u) => quote_spanned! {
            u.union_token.span() =>
            compile_error!("Union type is not supported")
        }
        .into(),
    }
}

fn impl_struct(ast: &DeriveInput) -> TokenStream {
    let level = match level_attr(&ast.attrs) {
        Some(Ok(level)) => level,
        Some(Err(e)) => return e.to_compile_error().into(),
        None => {
            return quote_spanned! {
                ast.ident.span() =>
                compile_error!("missing #[precedence(Level)] attribute")
            }
            .into()
        }
    };
    let ident = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    let gen = quote! {
        impl #impl_generics Precedence for #ident #ty_generics #where_clause {
            fn precedence(&self) -> ExprPrecedence {
                ExprPrecedence::#level
            }
        }
    };
    gen.into()
}

fn impl_enum(ast: &DeriveInput, e: &DataEnum) -> TokenStream {
    if let Some(attr) = ast.attrs.iter().find(|a| a.path().is_ident("precedence")) {
        return quote_spanned! {
            attr.span() =>
            compile_error!("enums take the precedence of their variants")
        }
        .into();
    }
    let varnames = match newtype_variants(e) {
        Ok(v) => v,
        Err(err) => return err.into(),
    };
    let ident = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    let gen = quote! {
        impl #impl_generics Precedence for #ident #ty_generics #where_clause {
            fn precedence(&self) -> ExprPrecedence {
                match self {
                    #(Self::#varnames(x) => x.precedence(),)*
                }
            }
        }
    };
    gen.into()
}

fn level_attr(attrs: &[Attribute]) -> Option<syn::Result<Ident>> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("precedence"))
        .map(|attr| attr.parse_args::<Ident>())
}

#[test]
fn test_level_attr() {
    use syn::parse_quote;

    let attrs: Vec<Attribute> = vec![parse_quote!(#[doc = "x"]), parse_quote!(#[precedence(Call)])];
    let level = level_attr(&attrs).map(|r| r.map(|i| i.to_string()));
    assert_eq!(level.and_then(|r| r.ok()), Some("Call".to_string()));

    let attrs: Vec<Attribute> = vec![parse_quote!(#[precedence(1 + 2)])];
    assert!(matches!(level_attr(&attrs), Some(Err(_))));

    assert!(level_attr(&[]).is_none());
}
