// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree

use proc_macro2::TokenStream;
use quote::quote_spanned;
use syn::{spanned::Spanned, DataEnum, Fields, FieldsUnnamed, Ident};

/// Collects the variant names of an enum made only of single-field tuple variants.
///
/// Any other variant shape is turned into a `compile_error!` pointing at it.
pub(crate) fn newtype_variants(e: &DataEnum) -> Result<Vec<&Ident>, TokenStream> {
    let mut varnames = vec![];
    for var in e.variants.iter() {
        match &var.fields {
            Fields::Named(n) => {
                return Err(quote_spanned! {
                    n.span() =>
                    compile_error!("Named enum fields not supported")
                })
            }
            f @ Fields::Unit => {
                return Err(quote_spanned! {
                    f.span() =>
                    compile_error!("Empty enum variants not supported")
                })
            }
            Fields::Unnamed(FieldsUnnamed { unnamed, .. }) => {
                if unnamed.len() > 1 {
                    return Err(quote_spanned! {
                        unnamed.span() =>
                        compile_error!("Multiple unnamed fields not supported")
                    });
                }
                varnames.push(&var.ident);
            }
        }
    }
    Ok(varnames)
}
