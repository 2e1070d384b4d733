// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree

mod variants;
mod codegen;
use codegen::impl_codegen;
mod precedence;
use precedence::impl_precedence;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `Codegen` for an enum whose variants each wrap exactly one node.
///
/// The generated impl forwards to the wrapped node. `Codegen` and `CodegenState` must be
/// in scope at the derive site.
#[proc_macro_derive(Codegen)]
pub fn codegen_derive(input: TokenStream) -> TokenStream {
    impl_codegen(&parse_macro_input!(input as DeriveInput))
}

/// Derives `Precedence`.
///
/// Enums forward to their wrapped node. Structs must name their level with
/// `#[precedence(Level)]`, where `Level` is a variant of `ExprPrecedence`.
#[proc_macro_derive(Precedence, attributes(precedence))]
pub fn precedence_derive(input: TokenStream) -> TokenStream {
    impl_precedence(&parse_macro_input!(input as DeriveInput))
}

#[test]
fn trybuild() {
    let t = trybuild::TestCases::new();
    t.pass("tests/pass/*.rs");
}
