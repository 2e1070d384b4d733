// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use synt_derive::Precedence;

use crate::{Codegen, CodegenState, ExprPrecedence, Expression, Precedence};

/// `(inner)`
#[derive(Debug, Clone, PartialEq, Eq, Precedence)]
#[precedence(Atom)]
pub struct Wrapped {
    inner: Box<Expression>,
}

impl Wrapped {
    pub fn new(inner: impl Into<Expression>) -> Self {
        Self {
            inner: Box::new(inner.into()),
        }
    }

    pub fn inner(&self) -> &Expression {
        &self.inner
    }
}

impl<'a> Codegen<'a> for Wrapped {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_token("(");
        self.inner.codegen(state);
        state.add_token(")");
    }
}

/// Renders nothing. Stands in for an omitted slice bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Precedence)]
#[precedence(Atom)]
pub struct Empty;

impl<'a> Codegen<'a> for Empty {
    fn codegen(&self, _: &mut CodegenState<'a>) {}
}
